//! Completion suggestions implementation.

use std::sync::Arc;

use crate::base::Position;
use crate::hir::{DocumentSnapshot, Symbol, SymbolKind};

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CompletionKind {
    Class,
    Method,
    Property,
    Field,
    Variable,
    Constant,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Method => 2,    // Method
            CompletionKind::Field => 5,     // Field
            CompletionKind::Variable => 6,  // Variable
            CompletionKind::Class => 7,     // Class
            CompletionKind::Property => 10, // Property
            CompletionKind::Constant => 21, // Constant
        }
    }
}

impl From<SymbolKind> for CompletionKind {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Class => Self::Class,
            SymbolKind::Method => Self::Method,
            SymbolKind::Property => Self::Property,
            SymbolKind::Field => Self::Field,
            SymbolKind::Variable => Self::Variable,
            SymbolKind::Constant => Self::Constant,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            sort_priority: 100,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set the sort priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }

    /// Create from a Symbol.
    pub fn from_symbol(symbol: &Symbol) -> Self {
        let mut item = Self::new(Arc::clone(&symbol.name), symbol.kind.into())
            .with_detail(symbol.kind.display());

        if let Some(signature) = symbol.signature() {
            item = item.with_documentation(signature);
        }

        item
    }
}

/// Get completion suggestions at a position.
///
/// One item per symbol visible from `position`, innermost scope first; the
/// sort priority encodes that order so clients that re-sort keep it.
pub fn completions(snapshot: &DocumentSnapshot, position: Position) -> Vec<CompletionItem> {
    let tree = snapshot.scope_tree();
    tree.resolve_at(position)
        .into_iter()
        .enumerate()
        .map(|(rank, symbol)| CompletionItem::from_symbol(symbol).with_priority(rank as u32))
        .collect()
}

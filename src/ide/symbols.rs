//! Symbol listing for document outlines and workspace search.

use std::sync::Arc;

use crate::base::{DocumentId, Span};
use crate::hir::{DocumentSnapshot, Symbol, SymbolKind};

/// One row of a document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutlineEntry {
    /// `name (args)` for methods and properties, the bare name otherwise.
    pub rendered_name: String,
    pub kind: SymbolKind,
    pub declared_range: Span,
    pub name_range: Span,
    /// Enclosing construct, absent at file scope.
    pub parent_name: Option<Arc<str>>,
}

impl OutlineEntry {
    /// Create from a Symbol.
    pub fn from_symbol(symbol: &Symbol) -> Self {
        Self {
            rendered_name: symbol.rendered_name(),
            kind: symbol.kind,
            declared_range: symbol.declared_range,
            name_range: symbol.name_range,
            parent_name: symbol.parent_name.clone(),
        }
    }
}

/// A symbol for the workspace symbol list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SymbolInfo {
    /// Symbol name.
    pub name: Arc<str>,
    /// Symbol kind.
    pub kind: SymbolKind,
    /// Document containing the symbol.
    pub document: DocumentId,
    /// Enclosing construct (for grouping).
    pub container_name: Option<Arc<str>>,
    /// Where the symbol's name is.
    pub range: Span,
}

impl SymbolInfo {
    pub fn from_symbol(document: &DocumentId, symbol: &Symbol) -> Self {
        Self {
            name: Arc::clone(&symbol.name),
            kind: symbol.kind,
            document: document.clone(),
            container_name: symbol.parent_name.clone(),
            range: symbol.name_range,
        }
    }
}

/// Get the outline of one document, in source order.
pub fn document_symbols(snapshot: &DocumentSnapshot) -> Vec<OutlineEntry> {
    snapshot.symbols.iter().map(OutlineEntry::from_symbol).collect()
}

/// Get all symbols across documents, optionally filtered by a query.
///
/// # Arguments
/// * `snapshots` - The documents to search
/// * `query` - Optional search query (case-insensitive substring match)
///
/// # Returns
/// List of matching symbols, sorted by name.
pub fn workspace_symbols<'a>(
    snapshots: impl IntoIterator<Item = &'a DocumentSnapshot>,
    query: Option<&str>,
) -> Vec<SymbolInfo> {
    let query_lower = query.map(|q| q.to_lowercase());

    let mut results: Vec<SymbolInfo> = snapshots
        .into_iter()
        .flat_map(|snapshot| {
            snapshot
                .symbols
                .iter()
                .map(move |symbol| (&snapshot.document, symbol))
        })
        .filter(|(_, symbol)| match query_lower {
            Some(ref q) => symbol.name.to_lowercase().contains(q),
            None => true,
        })
        .map(|(document, symbol)| SymbolInfo::from_symbol(document, symbol))
        .collect();

    results.sort_by(|a, b| a.name.cmp(&b.name));
    results
}

//! Per-document symbol snapshots.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;

use crate::base::DocumentId;

use super::diagnostics::Diagnostic;
use super::scope::ScopeTree;
use super::symbols::{Symbol, extract_symbols};

/// Symbols and diagnostics of one parse of one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub document: DocumentId,
    pub symbols: Vec<Symbol>,
    pub diagnostics: Vec<Diagnostic>,
}

impl DocumentSnapshot {
    /// Parse `text` into a fresh snapshot.
    pub fn parse(document: DocumentId, text: &str) -> Self {
        let result = extract_symbols(text);
        Self {
            document,
            symbols: result.symbols,
            diagnostics: result.diagnostics,
        }
    }

    /// Scope tree over this snapshot's symbols.
    pub fn scope_tree(&self) -> ScopeTree<'_> {
        ScopeTree::build(&self.symbols)
    }
}

/// Latest snapshot per document.
///
/// Parsing happens outside the lock; a refresh swaps the whole snapshot in,
/// so readers only ever see a complete parse. Concurrent refreshes of the
/// same document race and the last writer wins.
#[derive(Debug, Default)]
pub struct SymbolStore {
    documents: RwLock<IndexMap<DocumentId, Arc<DocumentSnapshot>, FxBuildHasher>>,
}

impl SymbolStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reparse a document and replace its snapshot.
    pub fn refresh(&self, document: DocumentId, text: &str) -> Arc<DocumentSnapshot> {
        let snapshot = Arc::new(DocumentSnapshot::parse(document.clone(), text));
        tracing::debug!(
            %document,
            symbols = snapshot.symbols.len(),
            "refreshed document symbols"
        );
        self.documents
            .write()
            .insert(document, Arc::clone(&snapshot));
        snapshot
    }

    /// Current snapshot of a document, if it has been parsed.
    pub fn get(&self, document: &DocumentId) -> Option<Arc<DocumentSnapshot>> {
        self.documents.read().get(document).cloned()
    }

    /// Forget a document. Returns whether it was known.
    pub fn invalidate(&self, document: &DocumentId) -> bool {
        let removed = self.documents.write().shift_remove(document).is_some();
        if removed {
            tracing::debug!(%document, "invalidated document symbols");
        }
        removed
    }

    /// All snapshots, in first-refresh order.
    pub fn snapshots(&self) -> Vec<Arc<DocumentSnapshot>> {
        self.documents.read().values().cloned().collect()
    }

    pub fn contains(&self, document: &DocumentId) -> bool {
        self.documents.read().contains_key(document)
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

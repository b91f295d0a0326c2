//! AnalysisHost and Analysis — Unified state management for IDE features.
//!
//! The `AnalysisHost` owns document texts and the symbol store, and answers
//! the editor boundary operations directly. For several queries against one
//! consistent view of the workspace, take an `Analysis` snapshot.
//!
//! ## Usage
//!
//! ```
//! use vbs::base::{DocumentId, Position};
//! use vbs::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new();
//! let doc = DocumentId::from("file:///main.vbs");
//!
//! host.on_document_changed(doc.clone(), "Function Add(a, b)\nEnd Function");
//!
//! let outline = host.list_symbols(&doc);
//! assert_eq!(outline[0].rendered_name, "Add (a, b)");
//!
//! let items = host.completions_at(&doc, Position::new(0, 14));
//! assert_eq!(items.len(), 3);
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::base::{DocumentId, Position};
use crate::hir::{Diagnostic, DocumentSnapshot, SymbolStore};

use super::{
    CompletionItem, FoldingRange, OutlineEntry, SymbolInfo, completions, document_symbols,
    folding_ranges, workspace_symbols,
};

/// Owns all mutable state for the IDE layer.
///
/// Every operation takes `&self`; the host is `Send + Sync` and can be
/// shared between request handlers. Work on different documents proceeds
/// in parallel; concurrent changes to the same document resolve as last
/// writer wins.
#[derive(Debug, Default)]
pub struct AnalysisHost {
    /// Latest known text per document.
    texts: RwLock<FxHashMap<DocumentId, Arc<str>>>,
    store: SymbolStore,
}

impl AnalysisHost {
    /// Create a new empty AnalysisHost.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Document lifecycle ====================

    /// Record new text for a document and reparse it.
    pub fn on_document_changed(
        &self,
        document: DocumentId,
        text: impl Into<Arc<str>>,
    ) -> Arc<DocumentSnapshot> {
        let text = text.into();
        self.texts.write().insert(document.clone(), Arc::clone(&text));
        self.store.refresh(document, &text)
    }

    /// Record the text of a newly opened document without parsing it.
    ///
    /// The first query against the document parses it.
    pub fn on_document_opened(&self, document: DocumentId, text: impl Into<Arc<str>>) {
        tracing::trace!(%document, "document opened");
        self.texts.write().insert(document.clone(), text.into());
        self.store.invalidate(&document);
    }

    /// Forget a document entirely.
    pub fn on_document_deleted(&self, document: &DocumentId) {
        self.texts.write().remove(document);
        self.store.invalidate(document);
    }

    /// Check if a document's text is known.
    pub fn has_document(&self, document: &DocumentId) -> bool {
        self.texts.read().contains_key(document)
    }

    /// Get the number of documents known.
    pub fn document_count(&self) -> usize {
        self.texts.read().len()
    }

    /// Access the symbol store.
    pub fn store(&self) -> &SymbolStore {
        &self.store
    }

    /// Current snapshot of a document, parsing it first if its text is
    /// known but has not been parsed yet.
    pub fn snapshot(&self, document: &DocumentId) -> Option<Arc<DocumentSnapshot>> {
        if let Some(snapshot) = self.store.get(document) {
            return Some(snapshot);
        }
        // Hold the text lock across the parse so a deletion cannot land
        // between reading the text and storing its snapshot.
        let texts = self.texts.read();
        let text = texts.get(document)?;
        if let Some(snapshot) = self.store.get(document) {
            return Some(snapshot);
        }
        tracing::debug!(%document, "parsing document on first query");
        Some(self.store.refresh(document.clone(), text))
    }

    // ==================== Queries ====================

    /// Outline of a document; empty for unknown documents.
    pub fn list_symbols(&self, document: &DocumentId) -> Vec<OutlineEntry> {
        self.snapshot(document)
            .map(|snapshot| document_symbols(&snapshot))
            .unwrap_or_default()
    }

    /// Completion candidates at a position; empty for unknown documents.
    pub fn completions_at(&self, document: &DocumentId, position: Position) -> Vec<CompletionItem> {
        self.snapshot(document)
            .map(|snapshot| completions(&snapshot, position))
            .unwrap_or_default()
    }

    /// Structural diagnostics of a document's latest parse.
    pub fn diagnostics(&self, document: &DocumentId) -> Vec<Diagnostic> {
        self.snapshot(document)
            .map(|snapshot| snapshot.diagnostics.clone())
            .unwrap_or_default()
    }

    /// Folding ranges of a document.
    pub fn folding_ranges(&self, document: &DocumentId) -> Vec<FoldingRange> {
        self.snapshot(document)
            .map(|snapshot| folding_ranges(&snapshot))
            .unwrap_or_default()
    }

    /// Search for symbols across every known document.
    pub fn workspace_symbols(&self, query: Option<&str>) -> Vec<SymbolInfo> {
        self.analysis().workspace_symbols(query)
    }

    /// Get a consistent snapshot for querying.
    ///
    /// Documents that were opened but never queried are parsed first.
    pub fn analysis(&self) -> Analysis {
        let documents: Vec<DocumentId> = self.texts.read().keys().cloned().collect();
        let snapshots = documents
            .iter()
            .filter_map(|document| self.snapshot(document))
            .map(|snapshot| (snapshot.document.clone(), snapshot))
            .collect();
        Analysis { snapshots }
    }
}

/// An immutable snapshot of the analysis state.
///
/// Holds the per-document snapshots current when it was taken; later
/// changes to the host do not affect it.
#[derive(Clone, Debug, Default)]
pub struct Analysis {
    snapshots: FxHashMap<DocumentId, Arc<DocumentSnapshot>>,
}

impl Analysis {
    /// Get all symbols in a document.
    pub fn document_symbols(&self, document: &DocumentId) -> Vec<OutlineEntry> {
        self.snapshots
            .get(document)
            .map(|snapshot| document_symbols(snapshot))
            .unwrap_or_default()
    }

    /// Get completions at a position.
    pub fn completions(&self, document: &DocumentId, position: Position) -> Vec<CompletionItem> {
        self.snapshots
            .get(document)
            .map(|snapshot| completions(snapshot, position))
            .unwrap_or_default()
    }

    /// Search for symbols across the workspace.
    pub fn workspace_symbols(&self, query: Option<&str>) -> Vec<SymbolInfo> {
        workspace_symbols(self.snapshots.values().map(|s| s.as_ref()), query)
    }

    /// Get folding ranges for a document.
    pub fn folding_ranges(&self, document: &DocumentId) -> Vec<FoldingRange> {
        self.snapshots
            .get(document)
            .map(|snapshot| folding_ranges(snapshot))
            .unwrap_or_default()
    }

    /// Get the snapshot of one document.
    pub fn snapshot(&self, document: &DocumentId) -> Option<&DocumentSnapshot> {
        self.snapshots.get(document).map(|s| s.as_ref())
    }

    /// Get the number of documents in this snapshot.
    pub fn document_count(&self) -> usize {
        self.snapshots.len()
    }
}

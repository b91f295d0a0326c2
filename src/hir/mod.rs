//! High-level IR (HIR) — symbols, scopes and per-document snapshots.
//!
//! Extraction is a pure function from source text to symbols plus
//! diagnostics. Snapshots of the latest extraction live in the
//! [`SymbolStore`]; scope trees are built from a snapshot on demand.
//!
//! ## Key Types
//!
//! - [`Symbol`] — A declaration extracted from source
//! - [`SymbolStore`] — Latest [`DocumentSnapshot`] per document
//! - [`ScopeTree`] — Position-indexed nesting of one snapshot's symbols
//! - [`Diagnostic`] — Structural problems found during extraction
//!
//! ## Data Flow
//!
//! ```text
//! text(document)             ← INPUT: raw source text
//!     │
//!     ▼
//! extract_symbols(text)      ← statements → recognizer → symbols
//!     │
//!     ▼
//! SymbolStore::refresh       ← snapshot swapped in per document
//!     │
//!     ▼
//! ScopeTree::resolve_at      ← symbols visible at a position
//! ```

mod diagnostics;
mod scope;
mod store;
mod symbols;

pub use diagnostics::{
    Diagnostic, DiagnosticCollector, DiagnosticKind, RelatedInfo, Severity, codes,
};
pub use scope::{ScopeNode, ScopeTree};
pub use store::{DocumentSnapshot, SymbolStore};
pub use symbols::{Accessor, ExtractionResult, Symbol, SymbolKind, Visibility, extract_symbols};

//! # vbs-base
//!
//! Core library for VBScript symbol extraction, scope resolution and
//! editor queries.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Workspace loading from disk
//!   ↓
//! ide       → Editor features (outline, completion, folding, workspace symbols)
//!   ↓
//! hir       → Symbols, diagnostics, per-document snapshots, scope trees
//!   ↓
//! parser    → Logos lexer, line normalizer, statement splitter, position mapper
//!   ↓
//! base      → Primitives (DocumentId, Position, Span, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → hir → ide → project)
// ============================================================================

/// Foundation types: DocumentId, Position, Span
pub mod base;

/// Parser: masking, continuation joining, statement splitting, position mapping
pub mod parser;

/// High-level IR: symbol extraction, symbol store, scope resolution
pub mod hir;

/// IDE features: outline, completion, folding, workspace symbols
pub mod ide;

/// Project management: workspace loading
pub mod project;

// Re-export foundation types
pub use base::{DocumentId, Position, Span, TextRange, TextSize};

// Re-export the boundary
pub use hir::{Symbol, SymbolKind, extract_symbols};
pub use ide::AnalysisHost;

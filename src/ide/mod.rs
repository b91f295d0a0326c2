//! IDE features — High-level APIs for editor request handlers.
//!
//! This module provides the interface between the symbol model (HIR)
//! and an editor host. Each function corresponds to an editor request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take a snapshot in, return data out
//! 2. **No protocol types**: Uses our own types, converted at the host boundary
//! 3. **Composable**: Built on top of HIR snapshots and scope trees
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```
//! use vbs::base::DocumentId;
//! use vbs::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new();
//! let doc = DocumentId::from("test.vbs");
//! host.on_document_changed(doc.clone(), "Class Test\nEnd Class");
//!
//! let symbols = host.list_symbols(&doc);
//! assert_eq!(symbols.len(), 1);
//! ```

mod analysis;
mod completion;
mod folding;
mod symbols;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use folding::{FoldingRange, folding_ranges};
pub use symbols::{OutlineEntry, SymbolInfo, document_symbols, workspace_symbols};

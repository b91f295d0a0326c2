//! Symbol extraction from script source — pure functions that return symbols.
//!
//! Every logical statement from [`crate::parser`] is offered to an ordered
//! table of construct patterns. Openers and closers drive a small state
//! machine (at most one open class, and one open method *or* property inside
//! it); declarations become [`Symbol`] values parented to the nearest open
//! construct.
//!
//! # Module structure
//!
//! - [`types`] — Public type definitions (Symbol, SymbolKind, etc.)
//! - [`context`] — ExtractionContext tracking open constructs during extraction
//! - [`recognize`] — Pattern table and open/close handling
//! - [`extract`] — Field, variable, constant and parameter extractors

mod context;
mod extract;
mod recognize;
mod types;


pub use types::{Accessor, ExtractionResult, Symbol, SymbolKind, Visibility};

use crate::parser::parse_statements;

use context::ExtractionContext;

/// Extract all symbols from one document.
///
/// Never fails: structural problems are reported in
/// [`ExtractionResult::diagnostics`] and the affected constructs are dropped
/// or closed as well as possible.
pub fn extract_symbols(source: &str) -> ExtractionResult {
    let mut ctx = ExtractionContext::new();
    for statement in parse_statements(source) {
        recognize::recognize(&mut ctx, &statement);
    }
    let result = ctx.finish();
    tracing::debug!(
        symbols = result.symbols.len(),
        diagnostics = result.diagnostics.len(),
        "extracted symbols"
    );
    result
}

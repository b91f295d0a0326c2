//! Statement-oriented front end for VBScript source
//!
//! Script source is line-oriented rather than block-structured, so instead
//! of a syntax tree this module produces a flat stream of logical
//! statements, each able to map its offsets back to the original text.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → per-line tokens (strings, comments, separators)
//!     ↓
//! Line Normalizer → LogicalLine (masked, continuation-joined, segments)
//!     ↓
//! Statement Splitter → LogicalStatement (padded, shares segments)
//!     ↓
//! Position Mapper → (line, column) for any statement offset
//!     ↓
//! HIR → Symbols
//! ```

mod error;
mod lexer;
mod mapper;
mod normalize;
mod split;

pub use error::MappingError;
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use mapper::{resolve, resolve_end, resolve_range};
pub use normalize::{
    LogicalLine, LogicalLines, Segment, WideChar, continuation_marker, logical_lines, mask_line,
};
pub use split::{LogicalStatement, split_statements};

/// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};

/// Every logical statement of a document, in source order.
pub fn parse_statements(source: &str) -> impl Iterator<Item = LogicalStatement> + '_ {
    logical_lines(source).flat_map(split_statements)
}

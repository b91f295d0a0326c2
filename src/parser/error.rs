//! Error types for the parser layer.

use text_size::TextSize;
use thiserror::Error;

/// Errors raised when mapping a statement offset back to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The offset lies past the end of the statement.
    #[error("offset {offset:?} is outside the statement (length {len:?})")]
    OffsetOutOfRange { offset: TextSize, len: TextSize },
}

//! Foundation types for the vbs toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`DocumentId`] - Host-supplied document identifiers
//! - [`Position`], [`Span`] - Line/column positions for symbols
//!
//! This module has NO dependencies on other vbs modules.

mod document_id;
mod position;

pub use document_id::DocumentId;
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};

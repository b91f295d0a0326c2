//! Position tracking for symbols
//!
//! Stores the source location (line/column) of extracted symbols for editor
//! features like outline, completion and folding.

/// A span representing a range in source code (0-indexed for LSP compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed, column in bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates
    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// A zero-width span at `position`.
    pub fn empty(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Check if a position falls within this span (both ends inclusive)
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Check if `other` lies entirely within this span
    pub fn contains_span(&self, other: &Span) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }

    /// Whether the span covers more than one line
    pub fn is_multiline(&self) -> bool {
        self.end.line > self.start.line
    }
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

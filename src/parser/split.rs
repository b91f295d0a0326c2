//! Statement splitting on the `:` separator.

use std::sync::Arc;

use text_size::{TextRange, TextSize};

use super::normalize::{LogicalLine, Segment, WideChar};

/// One `:`-delimited statement of a logical line.
///
/// The text is left-padded with spaces up to the offset where the statement
/// begins inside its logical line, so an offset into [`text`](Self::text) is
/// also an offset into the logical line and maps through the shared
/// segments unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalStatement {
    text: String,
    start: TextSize,
    segments: Arc<[Segment]>,
    wide_chars: Arc<[WideChar]>,
}

impl LogicalStatement {
    pub fn new(
        text: String,
        start: TextSize,
        segments: Arc<[Segment]>,
        wide_chars: Arc<[WideChar]>,
    ) -> Self {
        Self {
            text,
            start,
            segments,
            wide_chars,
        }
    }

    /// The padded statement text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Offset of the first real (non-padding) byte.
    pub fn start(&self) -> TextSize {
        self.start
    }

    /// Total length, padding included.
    pub fn len(&self) -> TextSize {
        TextSize::of(self.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the statement holds nothing but padding and blanks.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Range of the statement's content with surrounding blanks trimmed.
    pub fn content_range(&self) -> TextRange {
        let trimmed_start = self.text.len() - self.text.trim_start().len();
        let trimmed_end = self.text.trim_end().len();
        TextRange::new(
            TextSize::from(trimmed_start as u32),
            TextSize::from(trimmed_end.max(trimmed_start) as u32),
        )
    }

    /// The physical-line segments of the logical line this statement is in.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Multi-byte characters of the logical line, in offset order.
    pub fn wide_chars(&self) -> &[WideChar] {
        &self.wide_chars
    }

    /// The physical line the logical line starts on.
    pub fn first_line(&self) -> u32 {
        self.segments.first().map(|s| s.line).unwrap_or(0)
    }
}

/// Split a logical line into its statements.
///
/// String contents are already masked, so every `:` is a real separator.
/// Blank statements (`a = 1 : : b = 2`, trailing `:`) are dropped.
pub fn split_statements(line: LogicalLine) -> Vec<LogicalStatement> {
    let LogicalLine {
        text,
        segments,
        wide_chars,
    } = line;
    let segments: Arc<[Segment]> = segments.into();
    let wide_chars: Arc<[WideChar]> = wide_chars.into();

    let mut statements = Vec::new();
    let mut begin = 0usize;

    for piece in text.split(':') {
        let end = begin + piece.len();
        if !piece.trim().is_empty() {
            let mut padded = String::with_capacity(end);
            padded.extend(std::iter::repeat_n(' ', begin));
            padded.push_str(piece);
            statements.push(LogicalStatement::new(
                padded,
                TextSize::from(begin as u32),
                Arc::clone(&segments),
                Arc::clone(&wide_chars),
            ));
        }
        // skip the separator itself
        begin = end + 1;
    }

    statements
}

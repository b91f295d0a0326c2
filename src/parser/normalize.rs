//! Line normalization: comment stripping, string masking and continuation
//! joining.
//!
//! Every physical line is passed through [`mask_line`], which keeps byte
//! offsets stable (string contents become spaces of the same length, a
//! comment is cut off). Lines ending in the continuation marker ` _` are then
//! joined into one [`LogicalLine`], with a [`Segment`] per physical line so
//! offsets can later be mapped back to the original coordinates.

use std::iter::Enumerate;
use std::str::Lines;

use text_size::TextSize;

use super::lexer::{Lexer, TokenKind};

/// The contribution of one physical line to a logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// 0-indexed physical line number
    pub line: u32,
    /// Offset of the segment's first byte inside the logical line
    pub offset: TextSize,
    /// Byte length of the segment (continuation marker excluded)
    pub len: TextSize,
}

impl Segment {
    /// Offset one past the segment's last byte inside the logical line.
    pub fn end(&self) -> TextSize {
        self.offset + self.len
    }
}

/// A character of a logical line that takes more than one byte.
///
/// Offsets are bytes while positions count characters; these entries are
/// what the mapper subtracts to turn one into the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideChar {
    /// Offset of the character's first byte inside the logical line
    pub offset: TextSize,
    /// UTF-8 length of the character
    pub len: TextSize,
}

impl WideChar {
    /// Bytes beyond the one column the character occupies.
    pub fn extra_bytes(&self) -> u32 {
        u32::from(self.len) - 1
    }
}

/// One or more physical lines joined by continuation markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    pub text: String,
    pub segments: Vec<Segment>,
    /// Multi-byte characters, in offset order
    pub wide_chars: Vec<WideChar>,
}

impl LogicalLine {
    /// The physical line the logical line starts on.
    pub fn first_line(&self) -> u32 {
        self.segments.first().map(|s| s.line).unwrap_or(0)
    }
}

/// Strip the trailing comment and blank out string literals.
///
/// The result has the same byte length as the input up to the point where a
/// comment started.
pub fn mask_line(line: &str) -> String {
    let mut masked = String::with_capacity(line.len());
    let mut at_statement_start = true;

    for token in Lexer::new(line) {
        match token.kind {
            TokenKind::Comment => break,
            TokenKind::Ident if at_statement_start && token.is_rem() => break,
            TokenKind::String => {
                push_spaces(&mut masked, token.text.len());
                at_statement_start = false;
            }
            TokenKind::UnterminatedString => {
                let rest = line.len() - usize::from(token.offset);
                push_spaces(&mut masked, rest);
                break;
            }
            TokenKind::Colon => {
                masked.push(':');
                at_statement_start = true;
            }
            TokenKind::Whitespace => masked.push_str(token.text),
            _ => {
                masked.push_str(token.text);
                at_statement_start = false;
            }
        }
    }

    masked
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}

/// Byte index of a trailing continuation marker, if the masked line has one.
///
/// The marker is a `_` that is the last non-blank character and is either
/// the only character or preceded by a space or tab (so `my_` is an
/// identifier, not a continuation).
pub fn continuation_marker(masked: &str) -> Option<usize> {
    let trimmed = masked.trim_end();
    let idx = trimmed.len().checked_sub(1)?;
    if trimmed.as_bytes()[idx] != b'_' {
        return None;
    }
    if idx == 0 || matches!(trimmed.as_bytes()[idx - 1], b' ' | b'\t') {
        Some(idx)
    } else {
        None
    }
}

/// Iterator over the logical lines of a document.
pub struct LogicalLines<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> LogicalLines<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().enumerate(),
        }
    }
}

impl Iterator for LogicalLines<'_> {
    type Item = LogicalLine;

    fn next(&mut self) -> Option<Self::Item> {
        let (first_no, first) = self.lines.next()?;
        let mut logical = LogicalLine {
            text: String::with_capacity(first.len()),
            segments: Vec::with_capacity(1),
            wide_chars: Vec::new(),
        };

        let mut current = Some((first_no, first));
        while let Some((line_no, raw)) = current.take() {
            let masked = mask_line(raw);
            let (content, continues) = match continuation_marker(&masked) {
                Some(idx) => (&masked[..idx], true),
                None => (masked.as_str(), false),
            };

            let offset = TextSize::of(logical.text.as_str());
            // masking keeps byte offsets, so the raw line locates the
            // multi-byte characters of the content
            logical.wide_chars.extend(
                raw.char_indices()
                    .take_while(|&(i, _)| i < content.len())
                    .filter(|&(_, ch)| ch.len_utf8() > 1)
                    .map(|(i, ch)| WideChar {
                        offset: offset + TextSize::from(i as u32),
                        len: TextSize::of(ch),
                    }),
            );
            logical.segments.push(Segment {
                line: line_no as u32,
                offset,
                len: TextSize::of(content),
            });
            logical.text.push_str(content);

            if continues {
                current = self.lines.next();
                if current.is_none() {
                    tracing::trace!(line = line_no, "continuation marker on last line");
                }
            }
        }

        Some(logical)
    }
}

/// Normalize a whole document into logical lines.
pub fn logical_lines(source: &str) -> LogicalLines<'_> {
    LogicalLines::new(source)
}

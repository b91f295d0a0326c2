//! Mapping statement offsets back to physical (line, column) positions.

use text_size::{TextRange, TextSize};

use super::error::MappingError;
use super::normalize::{Segment, WideChar};
use super::split::LogicalStatement;
use crate::base::{Position, Span};

/// Resolve an offset inside a statement to a source position.
///
/// Segments are walked in order, subtracting each one's length until the
/// owning segment is found. An offset sitting exactly on the boundary
/// between two segments belongs to the start of the next one; an offset
/// equal to the statement length resolves to the end of the last segment.
///
/// Offsets count bytes; the returned column counts characters.
pub fn resolve(statement: &LogicalStatement, offset: TextSize) -> Result<Position, MappingError> {
    let len = statement.len();
    let out_of_range = MappingError::OffsetOutOfRange { offset, len };
    if offset > len {
        return Err(out_of_range);
    }

    let segments = statement.segments();
    let last = segments.len().saturating_sub(1);
    let mut rest = offset;

    for (i, segment) in segments.iter().enumerate() {
        if rest < segment.len || (i == last && rest <= segment.len) {
            let column = char_column(statement.wide_chars(), segment, rest);
            return Ok(Position::new(segment.line, column));
        }
        rest -= segment.len;
    }

    Err(out_of_range)
}

/// Character column of the byte `rest` bytes into `segment`.
fn char_column(wide_chars: &[WideChar], segment: &Segment, rest: TextSize) -> u32 {
    let at = segment.offset + rest;
    let extra: u32 = wide_chars
        .iter()
        .skip_while(|wide| wide.offset < segment.offset)
        .take_while(|wide| wide.offset < at)
        .map(WideChar::extra_bytes)
        .sum();
    u32::from(rest) - extra
}

/// Resolve an exclusive end offset.
///
/// Unlike [`resolve`], a boundary offset stays at the end of the segment it
/// closes, so a range ending right before a line break does not spill onto
/// the next line.
pub fn resolve_end(statement: &LogicalStatement, offset: TextSize) -> Result<Position, MappingError> {
    if offset == TextSize::from(0) {
        return resolve(statement, offset);
    }
    let last_byte = resolve(statement, offset - TextSize::from(1))?;
    Ok(Position::new(last_byte.line, last_byte.column + 1))
}

/// Resolve a whole range.
pub fn resolve_range(statement: &LogicalStatement, range: TextRange) -> Result<Span, MappingError> {
    let start = resolve(statement, range.start())?;
    let end = if range.is_empty() {
        start
    } else {
        resolve_end(statement, range.end())?
    };
    Ok(Span::new(start, end))
}

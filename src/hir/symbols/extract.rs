//! Declaration extractors: fields, `Dim` lists, constants and parameters.

use std::sync::Arc;

use regex::Captures;
use text_size::{TextRange, TextSize};
use tracing::trace;

use crate::parser::LogicalStatement;

use super::context::ExtractionContext;
use super::recognize::{Outcome, is_reserved, range_of};
use super::types::{Symbol, SymbolKind, Visibility};

/// `Public x` / `Private x`.
pub(super) fn extract_field(
    ctx: &mut ExtractionContext,
    statement: &LogicalStatement,
    caps: &Captures<'_>,
) -> Outcome {
    let (Some(vis), Some(name)) = (caps.name("vis"), caps.name("name")) else {
        return Outcome::Rejected;
    };
    if is_reserved(name.as_str()) {
        return Outcome::Rejected;
    }

    let declared = ctx.span(
        statement,
        TextRange::new(range_of(vis).start(), range_of(name).end()),
    );
    let mut symbol = Symbol::new(SymbolKind::Field, name.as_str(), declared);
    symbol.name_range = ctx.name_span(statement, range_of(name), declared);
    symbol.visibility = Visibility::from_keyword(vis.as_str());
    symbol.parent_name = ctx.class_name();
    ctx.emit(symbol);
    Outcome::Consumed
}

/// `Dim a, b(3), c`.
pub(super) fn extract_variables(
    ctx: &mut ExtractionContext,
    statement: &LogicalStatement,
    caps: &Captures<'_>,
) -> Outcome {
    let (Some(kw), Some(list)) = (caps.name("kw"), caps.name("list")) else {
        return Outcome::Rejected;
    };
    let text = statement.text();
    let parent = ctx.variable_parent();
    let mut declared_start = Some(range_of(kw).start());

    for entry in split_top_level(text, range_of(list)) {
        let Some(entry) = trim_range(text, entry) else {
            continue;
        };
        let entry_text = &text[entry];
        let ident = identifier_len(entry_text);
        if ident == 0 || is_reserved(&entry_text[..ident]) {
            trace!(entry = entry_text, "skipping Dim entry without a usable name");
            continue;
        }

        let name_range = TextRange::at(entry.start(), TextSize::from(ident as u32));
        // the first variable owns the `Dim` keyword
        let declared_range = match declared_start.take() {
            Some(start) => TextRange::new(start, entry.end()),
            None => entry,
        };

        let declared = ctx.span(statement, declared_range);
        let mut symbol = Symbol::new(SymbolKind::Variable, &entry_text[..ident], declared);
        symbol.name_range = ctx.name_span(statement, name_range, declared);
        symbol.parent_name = parent.clone();
        ctx.emit(symbol);
    }

    Outcome::Consumed
}

/// `[Public|Private] Const name = value`, outside methods and properties.
pub(super) fn extract_constant(
    ctx: &mut ExtractionContext,
    statement: &LogicalStatement,
    caps: &Captures<'_>,
) -> Outcome {
    if ctx.routine_open() {
        trace!("constant inside a method or property is not a symbol");
        return Outcome::Rejected;
    }
    let Some(name) = caps.name("name") else {
        return Outcome::Rejected;
    };
    if is_reserved(name.as_str()) {
        return Outcome::Rejected;
    }

    let declared = ctx.span(statement, statement.content_range());
    let mut symbol = Symbol::new(SymbolKind::Constant, name.as_str(), declared);
    symbol.name_range = ctx.name_span(statement, range_of(name), declared);
    symbol.visibility = caps
        .name("vis")
        .and_then(|v| Visibility::from_keyword(v.as_str()));
    symbol.parent_name = ctx.class_name();
    ctx.emit(symbol);
    Outcome::Consumed
}

/// Decompose a parameter list into Variable symbols owned by `owner`.
///
/// Each entry is `name`, `name()` or `ByVal|ByRef name`; the modifier is
/// discarded and the identifier prefix of the rest becomes the name.
pub(super) fn extract_parameters(
    ctx: &mut ExtractionContext,
    statement: &LogicalStatement,
    params: TextRange,
    owner: &Arc<str>,
) {
    let text = statement.text();

    for entry in split_top_level(text, params) {
        let Some(entry) = trim_range(text, entry) else {
            continue;
        };
        let entry_text = &text[entry];

        let name_text = if entry_text.split_whitespace().nth(1).is_some() {
            let first_word = entry_text.len() - entry_text.trim_start_matches(|c: char| !c.is_whitespace()).len();
            entry_text[first_word..].trim_start()
        } else {
            entry_text
        };
        let ident = identifier_len(name_text);
        if ident == 0 {
            trace!(entry = entry_text, "skipping parameter without a usable name");
            continue;
        }

        let name_start = entry.start() + TextSize::of(entry_text) - TextSize::of(name_text);
        let name_range = TextRange::at(name_start, TextSize::from(ident as u32));

        let declared = ctx.span(statement, entry);
        let mut symbol = Symbol::new(SymbolKind::Variable, &name_text[..ident], declared);
        symbol.name_range = ctx.name_span(statement, name_range, declared);
        symbol.parent_name = Some(Arc::clone(owner));
        ctx.emit(symbol);
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Split `range` of `text` on commas outside parentheses.
///
/// The pieces are untrimmed and together with the commas cover the range
/// exactly.
pub(super) fn split_top_level(text: &str, range: TextRange) -> Vec<TextRange> {
    let mut pieces = Vec::new();
    let mut depth = 0u32;
    let mut start = range.start();

    for (i, byte) in text[range].bytes().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                let comma = range.start() + TextSize::from(i as u32);
                pieces.push(TextRange::new(start, comma));
                start = comma + TextSize::from(1);
            }
            _ => {}
        }
    }
    pieces.push(TextRange::new(start, range.end()));
    pieces
}

/// Shrink a range to its non-blank content.
pub(super) fn trim_range(text: &str, range: TextRange) -> Option<TextRange> {
    let slice = &text[range];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return None;
    }
    let leading = TextSize::of(slice) - TextSize::of(slice.trim_start());
    Some(TextRange::at(range.start() + leading, TextSize::of(trimmed)))
}

/// Length of the identifier at the start of `text`, 0 if there is none.
pub(super) fn identifier_len(text: &str) -> usize {
    match text.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => text
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(text.len()),
        _ => 0,
    }
}

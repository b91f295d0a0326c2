//! Construct recognition: an ordered table of statement patterns and the
//! open/close state machine they drive.

use std::sync::{Arc, LazyLock};

use regex::{Captures, Match, Regex};
use text_size::{TextRange, TextSize};
use tracing::trace;

use crate::base::Span;
use crate::parser::LogicalStatement;

use super::context::{ExtractionContext, OpenConstruct, RoutineKind};
use super::extract::{extract_constant, extract_field, extract_parameters, extract_variables};
use super::types::{Accessor, Symbol, SymbolKind, Visibility};

/// Statement shapes, in match priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Construct {
    MethodOpen,
    MethodClose,
    PropertyOpen,
    PropertyClose,
    ClassOpen,
    ClassClose,
    Field,
    Variable,
    Constant,
}

/// Whether a matched statement was taken by its handler.
///
/// A rejected statement falls through to the remaining matchers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Outcome {
    Consumed,
    Rejected,
}

struct Matcher {
    construct: Construct,
    pattern: Regex,
}

const IDENT: &str = "[A-Za-z_][A-Za-z0-9_]*";

fn matcher(construct: Construct, pattern: &str) -> Matcher {
    let pattern = format!("(?i)^\\s*{}\\s*$", pattern.replace("IDENT", IDENT));
    Matcher {
        construct,
        pattern: Regex::new(&pattern).expect("recognizer pattern must compile"),
    }
}

static MATCHERS: LazyLock<[Matcher; 9]> = LazyLock::new(|| {
    [
        matcher(
            Construct::MethodOpen,
            r"(?:(?P<vis>public|private)\s+)?(?:(?P<default>default)\s+)?(?P<kw>function|sub)\s+(?P<name>IDENT)(?:\s*\((?P<params>.*)\))?",
        ),
        matcher(Construct::MethodClose, r"(?P<end>end\s+(?P<kw>function|sub))"),
        matcher(
            Construct::PropertyOpen,
            r"(?:(?P<vis>public|private)\s+)?(?:(?P<default>default)\s+)?property\s+(?P<acc>let|set|get)\s+(?P<name>IDENT)(?:\s*\((?P<params>.*)\))?",
        ),
        matcher(Construct::PropertyClose, r"(?P<end>end\s+property)"),
        matcher(Construct::ClassOpen, r"class\s+(?P<name>IDENT)"),
        matcher(Construct::ClassClose, r"(?P<end>end\s+class)"),
        matcher(Construct::Field, r"(?P<vis>public|private)\s+(?P<name>IDENT)"),
        matcher(Construct::Variable, r"(?P<kw>dim)\s+(?P<list>.*\S)"),
        matcher(
            Construct::Constant,
            r"(?:(?P<vis>public|private)\s+)?const\s+(?P<name>IDENT)\s*=.*",
        ),
    ]
});

/// Words that can never name a field or variable.
const RESERVED: &[&str] = &[
    "class", "const", "default", "dim", "end", "function", "get", "let", "private", "property",
    "public", "set", "sub",
];

pub(super) fn is_reserved(word: &str) -> bool {
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(word))
}

/// Byte range of a capture inside the statement text.
pub(super) fn range_of(m: Match<'_>) -> TextRange {
    TextRange::new(TextSize::from(m.start() as u32), TextSize::from(m.end() as u32))
}

/// Feed one statement through the matcher table.
pub(super) fn recognize(ctx: &mut ExtractionContext, statement: &LogicalStatement) {
    for matcher in MATCHERS.iter() {
        let Some(caps) = matcher.pattern.captures(statement.text()) else {
            continue;
        };
        let outcome = match matcher.construct {
            Construct::MethodOpen => open_method(ctx, statement, &caps),
            Construct::MethodClose => close_method(ctx, statement, &caps),
            Construct::PropertyOpen => open_property(ctx, statement, &caps),
            Construct::PropertyClose => close_property(ctx, statement, &caps),
            Construct::ClassOpen => open_class(ctx, statement, &caps),
            Construct::ClassClose => close_class(ctx, statement, &caps),
            Construct::Field => extract_field(ctx, statement, &caps),
            Construct::Variable => extract_variables(ctx, statement, &caps),
            Construct::Constant => extract_constant(ctx, statement, &caps),
        };
        if outcome == Outcome::Consumed {
            return;
        }
        trace!(construct = ?matcher.construct, "statement rejected, trying later patterns");
    }
}

// ============================================================================
// OPENERS
// ============================================================================

/// Header pieces shared by method and property openers.
struct Header {
    name: Arc<str>,
    visibility: Option<Visibility>,
    is_default: bool,
    parameter_text: Arc<str>,
    params: Option<TextRange>,
    declared: Span,
    name_range: Span,
}

fn header(ctx: &mut ExtractionContext, statement: &LogicalStatement, caps: &Captures<'_>) -> Option<Header> {
    let name = caps.name("name")?;
    let declared = ctx.span(statement, statement.content_range());
    let name_range = ctx.name_span(statement, range_of(name), declared);
    let params = caps.name("params");
    Some(Header {
        name: Arc::from(name.as_str()),
        visibility: caps.name("vis").and_then(|v| Visibility::from_keyword(v.as_str())),
        is_default: caps.name("default").is_some(),
        parameter_text: Arc::from(params.map(|p| p.as_str().trim()).unwrap_or("")),
        params: params.map(range_of),
        declared,
        name_range,
    })
}

impl Header {
    fn into_symbol(self, kind: SymbolKind, parent_name: Option<Arc<str>>) -> (Symbol, Option<TextRange>) {
        let symbol = Symbol {
            kind,
            name: self.name,
            visibility: self.visibility,
            declared_type: None,
            is_default: self.is_default,
            parameter_text: self.parameter_text,
            declared_range: self.declared,
            name_range: self.name_range,
            parent_name,
        };
        (symbol, self.params)
    }
}

/// Report an opener that conflicts with an open routine. Returns true if
/// there was one.
fn reject_if_routine_open(ctx: &mut ExtractionContext, statement: &LogicalStatement, opening: &str, name: &str) -> bool {
    let Some(open) = ctx.open_routine() else {
        return false;
    };
    let (opened_at, what, open_name) = (open.opened_at(), open.what(), Arc::clone(&open.symbol.name));
    let span = ctx.span(statement, statement.content_range());
    ctx.diagnostics.structural_mismatch_with_open(
        span,
        format!("cannot open {opening} '{name}' while {what} '{open_name}' is open"),
        opened_at,
        what,
    );
    true
}

fn open_method(ctx: &mut ExtractionContext, statement: &LogicalStatement, caps: &Captures<'_>) -> Outcome {
    let Some(kw) = caps.name("kw") else {
        return Outcome::Rejected;
    };
    let routine = RoutineKind::from_keyword(kw.as_str());
    let name = caps.name("name").map(|m| m.as_str()).unwrap_or_default();
    if reject_if_routine_open(ctx, statement, &routine.keyword().to_ascii_lowercase(), name) {
        return Outcome::Rejected;
    }
    let Some(header) = header(ctx, statement, caps) else {
        return Outcome::Rejected;
    };

    let (symbol, params) = header.into_symbol(SymbolKind::Method, ctx.class_name());
    trace!(name = %symbol.name, "open {}", routine.keyword());
    let owner = Arc::clone(&symbol.name);
    ctx.method = Some(OpenConstruct::new(symbol).with_routine(routine));
    if let Some(params) = params {
        extract_parameters(ctx, statement, params, &owner);
    }
    Outcome::Consumed
}

fn open_property(ctx: &mut ExtractionContext, statement: &LogicalStatement, caps: &Captures<'_>) -> Outcome {
    let name = caps.name("name").map(|m| m.as_str()).unwrap_or_default();
    if reject_if_routine_open(ctx, statement, "property", name) {
        return Outcome::Rejected;
    }
    let Some(header) = header(ctx, statement, caps) else {
        return Outcome::Rejected;
    };

    let (mut symbol, params) = header.into_symbol(SymbolKind::Property, ctx.class_name());
    symbol.declared_type = caps.name("acc").and_then(|a| Accessor::from_keyword(a.as_str()));
    trace!(name = %symbol.name, "open property");
    let owner = Arc::clone(&symbol.name);
    ctx.property = Some(OpenConstruct::new(symbol));
    if let Some(params) = params {
        extract_parameters(ctx, statement, params, &owner);
    }
    Outcome::Consumed
}

fn open_class(ctx: &mut ExtractionContext, statement: &LogicalStatement, caps: &Captures<'_>) -> Outcome {
    let Some(name) = caps.name("name") else {
        return Outcome::Rejected;
    };
    let open = ctx
        .open_routine()
        .or(ctx.class.as_ref())
        .map(|o| (o.opened_at(), o.what(), Arc::clone(&o.symbol.name)));
    let declared = ctx.span(statement, statement.content_range());

    if let Some((opened_at, what, open_name)) = open {
        ctx.diagnostics.structural_mismatch_with_open(
            declared,
            format!("cannot open class '{}' while {what} '{open_name}' is open", name.as_str()),
            opened_at,
            what,
        );
        return Outcome::Rejected;
    }

    let mut symbol = Symbol::new(SymbolKind::Class, name.as_str(), declared);
    symbol.name_range = ctx.name_span(statement, range_of(name), declared);
    trace!(name = %symbol.name, "open class");
    ctx.class = Some(OpenConstruct::new(symbol));
    Outcome::Consumed
}

// ============================================================================
// CLOSERS
// ============================================================================

fn end_span(ctx: &mut ExtractionContext, statement: &LogicalStatement, caps: &Captures<'_>) -> Span {
    let range = caps.name("end").map(range_of).unwrap_or_else(|| statement.content_range());
    ctx.span(statement, range)
}

fn close_method(ctx: &mut ExtractionContext, statement: &LogicalStatement, caps: &Captures<'_>) -> Outcome {
    let closing = caps
        .name("kw")
        .map(|kw| RoutineKind::from_keyword(kw.as_str()))
        .unwrap_or(RoutineKind::Sub);
    let end = end_span(ctx, statement, caps);

    let Some(mut open) = ctx.method.take() else {
        ctx.diagnostics.structural_mismatch(
            end,
            format!("End {} without an open {}", closing.keyword(), closing.keyword().to_ascii_lowercase()),
        );
        return Outcome::Consumed;
    };

    if open.routine != Some(closing) {
        ctx.diagnostics.structural_mismatch_with_open(
            end,
            format!("End {} closes {} '{}'", closing.keyword(), open.what(), open.symbol.name),
            open.opened_at(),
            open.what(),
        );
    }
    open.symbol.declared_range.end = end.end;
    trace!(name = %open.symbol.name, "close method");
    ctx.commit(open);
    Outcome::Consumed
}

fn close_property(ctx: &mut ExtractionContext, statement: &LogicalStatement, caps: &Captures<'_>) -> Outcome {
    let end = end_span(ctx, statement, caps);
    match ctx.property.take() {
        Some(mut open) => {
            open.symbol.declared_range.end = end.end;
            trace!(name = %open.symbol.name, "close property");
            ctx.commit(open);
        }
        None => ctx
            .diagnostics
            .structural_mismatch(end, "End Property without an open property"),
    }
    Outcome::Consumed
}

fn close_class(ctx: &mut ExtractionContext, statement: &LogicalStatement, caps: &Captures<'_>) -> Outcome {
    let end = end_span(ctx, statement, caps);
    let Some(mut class) = ctx.class.take() else {
        ctx.diagnostics
            .structural_mismatch(end, "End Class without an open class");
        return Outcome::Consumed;
    };

    for inner in [ctx.property.take(), ctx.method.take()].into_iter().flatten() {
        ctx.diagnostics.structural_mismatch_with_open(
            end,
            format!("End Class while {} '{}' is open", inner.what(), inner.symbol.name),
            inner.opened_at(),
            inner.what(),
        );
        ctx.drop_dangling(inner);
    }

    class.symbol.declared_range.end = end.end;
    trace!(name = %class.symbol.name, "close class");
    ctx.commit(class);
    Outcome::Consumed
}

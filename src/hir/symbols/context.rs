//! Extraction context — tracks open constructs, pending locals and
//! diagnostics while walking one document's statements.

use std::sync::Arc;

use text_size::TextRange;

use crate::base::{Position, Span};
use crate::hir::diagnostics::DiagnosticCollector;
use crate::parser::{LogicalStatement, resolve, resolve_range};

use super::types::{ExtractionResult, Symbol, SymbolKind};

/// Keyword kind of an open routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum RoutineKind {
    Function,
    Sub,
}

impl RoutineKind {
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword.eq_ignore_ascii_case("function") {
            Self::Function
        } else {
            Self::Sub
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Function => "Function",
            Self::Sub => "Sub",
        }
    }
}

/// A class, method or property whose closing statement has not been seen.
#[derive(Clone, Debug)]
pub(super) struct OpenConstruct {
    /// The symbol under construction; its declared range end is fixed up
    /// when the construct closes.
    pub symbol: Symbol,
    /// `Function`/`Sub` for methods
    pub routine: Option<RoutineKind>,
    /// Locals and parameters, held back until the construct closes.
    pub members: Vec<Symbol>,
}

impl OpenConstruct {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            routine: None,
            members: Vec::new(),
        }
    }

    pub fn with_routine(mut self, routine: RoutineKind) -> Self {
        self.routine = Some(routine);
        self
    }

    /// Human-readable description used in diagnostics.
    pub fn what(&self) -> &'static str {
        match self.routine {
            Some(RoutineKind::Function) => "function",
            Some(RoutineKind::Sub) => "sub",
            None => match self.symbol.kind {
                SymbolKind::Class => "class",
                SymbolKind::Property => "property",
                _ => "construct",
            },
        }
    }

    pub fn opened_at(&self) -> Position {
        self.symbol.declared_range.start
    }
}

/// Extraction state passed through all recognizer and extractor functions.
#[derive(Debug, Default)]
pub(super) struct ExtractionContext {
    pub class: Option<OpenConstruct>,
    pub method: Option<OpenConstruct>,
    pub property: Option<OpenConstruct>,
    /// Finished symbols.
    pub symbols: Vec<Symbol>,
    pub diagnostics: DiagnosticCollector,
}

impl ExtractionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The open method or property, if any.
    pub fn open_routine(&self) -> Option<&OpenConstruct> {
        self.property.as_ref().or(self.method.as_ref())
    }

    pub fn routine_open(&self) -> bool {
        self.open_routine().is_some()
    }

    /// Name of the open class.
    pub fn class_name(&self) -> Option<Arc<str>> {
        self.class.as_ref().map(|c| Arc::clone(&c.symbol.name))
    }

    /// Nearest enclosing construct for a variable: property, then method,
    /// then class.
    pub fn variable_parent(&self) -> Option<Arc<str>> {
        self.open_routine()
            .map(|r| Arc::clone(&r.symbol.name))
            .or_else(|| self.class_name())
    }

    /// Record a symbol, buffering it with the open routine if there is one.
    pub fn emit(&mut self, symbol: Symbol) {
        if let Some(property) = self.property.as_mut() {
            property.members.push(symbol);
        } else if let Some(method) = self.method.as_mut() {
            method.members.push(symbol);
        } else {
            self.symbols.push(symbol);
        }
    }

    /// Commit a closed method or property together with its buffered members.
    pub fn commit(&mut self, construct: OpenConstruct) {
        self.symbols.push(construct.symbol);
        self.symbols.extend(construct.members);
    }

    /// Drop an unclosed construct and its members, reporting it.
    pub fn drop_dangling(&mut self, construct: OpenConstruct) {
        self.diagnostics.dangling_open(
            construct.symbol.declared_range,
            construct.what(),
            &construct.symbol.name,
        );
    }

    /// Map a statement range to a source span.
    ///
    /// Mapping cannot fail for ranges produced from the statement's own
    /// text; if it does anyway, the failure is recorded and a zero-width
    /// span at the statement start is used instead.
    pub fn span(&mut self, statement: &LogicalStatement, range: TextRange) -> Span {
        match resolve_range(statement, range) {
            Ok(span) => span,
            Err(error) => {
                let at = resolve(statement, statement.start())
                    .unwrap_or_else(|_| Position::new(statement.first_line(), 0));
                self.diagnostics.mapping_failure(at, error);
                Span::empty(at)
            }
        }
    }

    /// Map a name range, keeping it inside `declared`.
    pub fn name_span(&mut self, statement: &LogicalStatement, range: TextRange, declared: Span) -> Span {
        let span = self.span(statement, range);
        if declared.contains_span(&span) {
            span
        } else {
            Span::empty(declared.start)
        }
    }

    /// Close out extraction: drop whatever is still open and sort the
    /// committed symbols by declared start.
    pub fn finish(mut self) -> ExtractionResult {
        for construct in [self.property.take(), self.method.take(), self.class.take()]
            .into_iter()
            .flatten()
        {
            self.drop_dangling(construct);
        }

        let mut symbols = self.symbols;
        symbols.sort_by_key(|s| s.declared_range.start);

        ExtractionResult {
            symbols,
            diagnostics: self.diagnostics.finish(),
        }
    }
}

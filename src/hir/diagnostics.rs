//! Diagnostics — structural problems found while extracting symbols.
//!
//! None of these abort extraction. They are collected per parse, logged
//! through `tracing`, and kept on the document snapshot for hosts that want
//! to surface them.

use std::sync::Arc;

use crate::base::{Position, Span};
use crate::parser::MappingError;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Severity {
    Warning,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Warning => 2,
            Severity::Hint => 4,
        }
    }
}

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DiagnosticKind {
    /// An open/close keyword disagreement, or an open attempted while
    /// another construct of the same category is still open.
    StructuralMismatch,
    /// A construct still open at end of document, or still open when its
    /// enclosing class closed. Its symbol is dropped.
    DanglingOpen,
    /// A statement offset could not be mapped back to the source.
    PositionMappingFailure,
}

impl DiagnosticKind {
    /// Stable code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::StructuralMismatch => codes::STRUCTURAL_MISMATCH,
            DiagnosticKind::DanglingOpen => codes::DANGLING_OPEN,
            DiagnosticKind::PositionMappingFailure => codes::POSITION_MAPPING_FAILURE,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::StructuralMismatch => Severity::Warning,
            DiagnosticKind::DanglingOpen => Severity::Warning,
            DiagnosticKind::PositionMappingFailure => Severity::Hint,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Where the problem was detected.
    pub span: Span,
    pub severity: Severity,
    /// Code (e.g., "S0001").
    pub code: &'static str,
    pub message: Arc<str>,
    /// Optional related information.
    pub related: Vec<RelatedInfo>,
}

/// Related information for a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RelatedInfo {
    pub position: Position,
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a diagnostic of the given kind.
    pub fn new(kind: DiagnosticKind, span: Span, message: impl Into<Arc<str>>) -> Self {
        Self {
            kind,
            span,
            severity: kind.severity(),
            code: kind.code(),
            message: message.into(),
            related: Vec::new(),
        }
    }

    /// Add related information.
    pub fn with_related(mut self, position: Position, message: impl Into<Arc<str>>) -> Self {
        self.related.push(RelatedInfo {
            position,
            message: message.into(),
        });
        self
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes for structural problems.
pub mod codes {
    /// Open/close keyword disagreement or conflicting open.
    pub const STRUCTURAL_MISMATCH: &str = "S0001";
    /// Construct never closed.
    pub const DANGLING_OPEN: &str = "S0002";
    /// Offset outside a statement's mapped span.
    pub const POSITION_MAPPING_FAILURE: &str = "S0003";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during one parse.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record a structural mismatch.
    pub fn structural_mismatch(&mut self, span: Span, message: impl Into<Arc<str>>) {
        let message = message.into();
        tracing::warn!(
            line = span.start.line,
            column = span.start.column,
            "structural mismatch: {message}"
        );
        self.add(Diagnostic::new(DiagnosticKind::StructuralMismatch, span, message));
    }

    /// Record a mismatch that points back at the construct it conflicts with.
    pub fn structural_mismatch_with_open(
        &mut self,
        span: Span,
        message: impl Into<Arc<str>>,
        opened_at: Position,
        opened_what: &str,
    ) {
        let message = message.into();
        tracing::warn!(
            line = span.start.line,
            column = span.start.column,
            "structural mismatch: {message}"
        );
        self.add(
            Diagnostic::new(DiagnosticKind::StructuralMismatch, span, message)
                .with_related(opened_at, format!("{opened_what} opened here")),
        );
    }

    /// Record a construct whose symbol is being dropped because it was
    /// never closed.
    pub fn dangling_open(&mut self, span: Span, what: &str, name: &str) {
        tracing::debug!(
            line = span.start.line,
            column = span.start.column,
            "dropping unclosed {what} '{name}'"
        );
        self.add(Diagnostic::new(
            DiagnosticKind::DanglingOpen,
            span,
            format!("{what} '{name}' is never closed"),
        ));
    }

    /// Record a position mapping failure.
    pub fn mapping_failure(&mut self, at: Position, error: MappingError) {
        tracing::warn!(line = at.line, column = at.column, %error, "position mapping failed");
        self.add(Diagnostic::new(
            DiagnosticKind::PositionMappingFailure,
            Span::empty(at),
            error.to_string(),
        ));
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if there are no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the collector, returning its diagnostics.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

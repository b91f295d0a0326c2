//! Folding ranges for block constructs.

use crate::hir::{DocumentSnapshot, SymbolKind};

/// A foldable line range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FoldingRange {
    pub start_line: u32,
    pub end_line: u32,
    /// The construct being folded.
    pub kind: SymbolKind,
}

/// One range per class, method or property that spans more than one line.
pub fn folding_ranges(snapshot: &DocumentSnapshot) -> Vec<FoldingRange> {
    snapshot
        .symbols
        .iter()
        .filter(|s| s.kind.is_block() && s.declared_range.is_multiline())
        .map(|s| FoldingRange {
            start_line: s.declared_range.start.line,
            end_line: s.declared_range.end.line,
            kind: s.kind,
        })
        .collect()
}

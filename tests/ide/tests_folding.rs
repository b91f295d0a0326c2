//! Folding range tests.

use crate::helpers::hir_helpers::*;
use crate::helpers::source_fixtures::*;
use vbs::hir::SymbolKind;

#[test]
fn test_account_folding_ranges() {
    let (host, doc) = analysis_from_source(ACCOUNT_CLASS, "file:///a.vbs");
    let ranges: Vec<_> = host
        .folding_ranges(&doc)
        .into_iter()
        .map(|r| (r.start_line, r.end_line, r.kind))
        .collect();
    assert_eq!(
        ranges,
        vec![
            (5, 29, SymbolKind::Class),
            (9, 11, SymbolKind::Property),
            (13, 15, SymbolKind::Property),
            (17, 24, SymbolKind::Method),
            (26, 28, SymbolKind::Method),
        ]
    );
}

#[test]
fn test_single_line_constructs_do_not_fold() {
    let (host, doc) = analysis_from_source("Class A: End Class\nDim x", "file:///a.vbs");
    assert!(host.folding_ranges(&doc).is_empty());
}

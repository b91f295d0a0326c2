//! Structural diagnostics tests.

use rstest::rstest;
use vbs::base::Position;
use vbs::hir::{DiagnosticKind, Severity, codes, extract_symbols};

fn kinds(source: &str) -> Vec<DiagnosticKind> {
    extract_symbols(source)
        .diagnostics
        .into_iter()
        .map(|d| d.kind)
        .collect()
}

#[rstest]
#[case("Class Foo\nEnd Class")]
#[case("Sub A()\nEnd Sub\nFunction B()\nEnd Function")]
#[case("Class C\n  Property Get P\n  End Property\nEnd Class")]
fn test_clean_sources_have_no_diagnostics(#[case] source: &str) {
    assert!(kinds(source).is_empty());
}

#[rstest]
#[case("Function F()\nEnd Sub", vec![DiagnosticKind::StructuralMismatch])]
#[case("Function F()", vec![DiagnosticKind::DanglingOpen])]
#[case("Class C", vec![DiagnosticKind::DanglingOpen])]
#[case("End Class", vec![DiagnosticKind::StructuralMismatch])]
#[case("Sub A()\nSub B()\nEnd Sub", vec![DiagnosticKind::StructuralMismatch])]
#[case("Class A\nClass B\nEnd Class", vec![DiagnosticKind::StructuralMismatch])]
#[case(
    "Class C\nSub S()\nEnd Class",
    vec![DiagnosticKind::StructuralMismatch, DiagnosticKind::DanglingOpen]
)]
#[case(
    "Class C\nProperty Get P\nFunction F()",
    vec![DiagnosticKind::StructuralMismatch, DiagnosticKind::DanglingOpen, DiagnosticKind::DanglingOpen]
)]
fn test_diagnostic_kinds(#[case] source: &str, #[case] expected: Vec<DiagnosticKind>) {
    assert_eq!(kinds(source), expected);
}

#[test]
fn test_mismatch_points_back_at_opener() {
    let result = extract_symbols("\n  Function F()\n  End Sub");
    let diag = &result.diagnostics[0];
    assert_eq!(diag.code, codes::STRUCTURAL_MISMATCH);
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.span.start, Position::new(2, 2));
    assert_eq!(diag.related[0].position, Position::new(1, 2));
    assert!(diag.message.contains("End Sub"));
}

#[test]
fn test_dangling_open_message_names_construct() {
    let result = extract_symbols("Class Widget\n  Sub Draw()\n");
    let messages: Vec<_> = result.diagnostics.iter().map(|d| d.message.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "sub 'Draw' is never closed".to_string(),
            "class 'Widget' is never closed".to_string(),
        ]
    );
    assert!(result.symbols.is_empty());
}

#[test]
fn test_diagnostics_never_abort_extraction() {
    let source = "End Sub\nClass C\n  Private x\n  Sub S()\n  End Function\nEnd Class\nDim after";
    let result = extract_symbols(source);
    let names: Vec<_> = result.symbols.iter().map(|s| s.name.as_ref()).collect();
    assert_eq!(names, vec!["C", "x", "S", "after"]);
    assert_eq!(result.diagnostics.len(), 2);
}

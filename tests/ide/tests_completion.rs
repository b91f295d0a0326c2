//! Completion tests for the IDE layer.

use crate::helpers::hir_helpers::*;
use crate::helpers::source_fixtures::*;
use rstest::rstest;
use vbs::base::Position;
use vbs::ide::CompletionKind;

fn labels_at(source: &str, line: u32, column: u32) -> Vec<String> {
    let (host, doc) = analysis_from_source(source, "file:///test.vbs");
    host.completions_at(&doc, Position::new(line, column))
        .into_iter()
        .map(|item| item.label.to_string())
        .collect()
}

#[test]
fn test_completion_inside_function() {
    let labels = labels_at(SIMPLE_FUNCTION, 0, 14);
    assert_eq!(labels, vec!["Add", "a", "b"]);
}

#[test]
fn test_completion_at_file_scope_hides_locals() {
    let labels = labels_at(ACCOUNT_CLASS, 1, 0);
    assert_eq!(labels, vec!["MAX_BALANCE", "Account", "acct"]);
}

#[test]
fn test_completion_inside_class_sees_members() {
    let labels = labels_at(ACCOUNT_CLASS, 8, 0);
    assert_eq!(
        labels,
        vec![
            "Account",
            "m_balance",
            "m_owner",
            "Balance",
            "Owner",
            "Deposit",
            "Audit",
            "MAX_BALANCE",
            "acct",
        ]
    );
}

#[test]
fn test_completion_item_details() {
    let (host, doc) = analysis_from_source(ACCOUNT_CLASS, "file:///test.vbs");
    let items = host.completions_at(&doc, Position::new(21, 8));

    let deposit = items.iter().find(|i| i.label.as_ref() == "Deposit").unwrap();
    assert_eq!(deposit.kind, CompletionKind::Method);
    assert_eq!(deposit.detail.as_deref(), Some("Method"));
    assert_eq!(
        deposit.documentation.as_deref(),
        Some("Public Deposit(amount, ByRef log)")
    );
    assert_eq!(deposit.sort_priority, 0);

    let balance = items.iter().find(|i| i.label.as_ref() == "Balance").unwrap();
    assert_eq!(balance.kind, CompletionKind::Property);
    assert_eq!(balance.documentation.as_deref(), Some("Public Get Balance()"));

    let field = items.iter().find(|i| i.label.as_ref() == "m_owner").unwrap();
    assert_eq!(field.kind, CompletionKind::Field);
    assert!(field.documentation.is_none());
}

#[rstest]
#[case(CompletionKind::Class, 7)]
#[case(CompletionKind::Method, 2)]
#[case(CompletionKind::Property, 10)]
#[case(CompletionKind::Field, 5)]
#[case(CompletionKind::Variable, 6)]
#[case(CompletionKind::Constant, 21)]
fn test_completion_kind_lsp_numbers(#[case] kind: CompletionKind, #[case] expected: u32) {
    assert_eq!(kind.to_lsp(), expected);
}

#[test]
fn test_completion_with_unclosed_construct() {
    // the user is still typing the body; the function is not a symbol yet
    let source = "Dim total\nFunction Sum(values)\n  Dim acc\n";
    let labels = labels_at(source, 2, 4);
    assert_eq!(labels, vec!["total"]);
}

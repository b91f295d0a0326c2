//! Scope resolution tests.

use crate::helpers::source_fixtures::ACCOUNT_CLASS;
use rstest::rstest;
use vbs::base::Position;
use vbs::hir::{ScopeTree, extract_symbols};

fn visible(source: &str, line: u32, column: u32) -> Vec<String> {
    let result = extract_symbols(source);
    let tree = ScopeTree::build(&result.symbols);
    tree.resolve_at(Position::new(line, column))
        .into_iter()
        .map(|s| s.name.to_string())
        .collect()
}

#[test]
fn test_inside_method_body() {
    assert_eq!(
        visible(ACCOUNT_CLASS, 21, 8),
        vec![
            "Deposit",
            "amount",
            "log",
            "previous",
            "next_total",
            "Account",
            "m_balance",
            "m_owner",
            "Balance",
            "Owner",
            "Audit",
            "MAX_BALANCE",
            "acct",
        ]
    );
}

#[rstest]
#[case(21, 8)]
#[case(10, 8)]
#[case(7, 0)]
fn test_unrelated_nested_locals_are_hidden(#[case] line: u32, #[case] column: u32) {
    let names = visible(ACCOUNT_CLASS, line, column);
    for hidden in ["entries", "i", "name"] {
        assert!(
            !names.contains(&hidden.to_string()),
            "'{hidden}' should not be visible at {line}:{column}, got {names:?}"
        );
    }
}

#[test]
fn test_outside_any_construct() {
    assert_eq!(
        visible(ACCOUNT_CLASS, 30, 0),
        vec!["MAX_BALANCE", "Account", "acct"]
    );
}

#[test]
fn test_on_parameter_name() {
    // cursor on `amount` itself: the parameter is the innermost scope
    let names = visible(ACCOUNT_CLASS, 17, 30);
    assert_eq!(&names[..3], &["amount", "Deposit", "log"]);
}

#[test]
fn test_tree_shape() {
    let result = extract_symbols(ACCOUNT_CLASS);
    let tree = ScopeTree::build(&result.symbols);
    assert_eq!(tree.len(), result.symbols.len());
    assert_eq!(tree.roots().len(), 3);

    let deposit = tree
        .innermost_at(Position::new(20, 0))
        .and_then(|i| tree.node(i))
        .unwrap();
    assert_eq!(deposit.symbol.name.as_ref(), "Deposit");
    assert_eq!(deposit.children.len(), 4);
}

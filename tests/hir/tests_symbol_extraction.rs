//! Symbol extraction tests over whole documents.

use crate::helpers::hir_helpers::*;
use crate::helpers::source_fixtures::*;
use crate::helpers::symbol_assertions::*;
use rstest::rstest;
use vbs::base::Span;
use vbs::hir::{Accessor, SymbolKind, Visibility, extract_symbols};

#[test]
fn test_account_class_symbols_in_source_order() {
    let symbols = symbols_from_clean_source(ACCOUNT_CLASS);
    assert_eq!(
        names(&symbols),
        vec![
            "MAX_BALANCE",
            "Account",
            "m_balance",
            "m_owner",
            "Balance",
            "Owner",
            "name",
            "Deposit",
            "amount",
            "log",
            "previous",
            "next_total",
            "Audit",
            "entries",
            "i",
            "acct",
        ]
    );
    assert_ranges_nested(&symbols);
}

#[test]
fn test_account_class_kinds_and_parents() {
    let symbols = symbols_from_clean_source(ACCOUNT_CLASS);

    assert_symbol(get_symbol(&symbols, "MAX_BALANCE"), SymbolKind::Constant, None);
    assert_symbol(get_symbol(&symbols, "Account"), SymbolKind::Class, None);
    assert_symbol(get_symbol(&symbols, "m_balance"), SymbolKind::Field, Some("Account"));
    assert_symbol(get_symbol(&symbols, "Balance"), SymbolKind::Property, Some("Account"));
    assert_symbol(get_symbol(&symbols, "name"), SymbolKind::Variable, Some("Owner"));
    assert_symbol(get_symbol(&symbols, "Deposit"), SymbolKind::Method, Some("Account"));
    assert_symbol(get_symbol(&symbols, "log"), SymbolKind::Variable, Some("Deposit"));
    assert_symbol(get_symbol(&symbols, "next_total"), SymbolKind::Variable, Some("Deposit"));
    assert_symbol(get_symbol(&symbols, "entries"), SymbolKind::Variable, Some("Audit"));
    assert_symbol(get_symbol(&symbols, "i"), SymbolKind::Variable, Some("Audit"));
    assert_symbol(get_symbol(&symbols, "acct"), SymbolKind::Variable, None);
}

#[test]
fn test_account_class_ranges() {
    let symbols = symbols_from_clean_source(ACCOUNT_CLASS);

    let account = get_symbol(&symbols, "Account");
    assert_eq!(account.declared_range, Span::from_coords(5, 0, 29, 9));
    assert_name_at(account, 5, 6, 13);

    let deposit = get_symbol(&symbols, "Deposit");
    assert_eq!(deposit.declared_range, Span::from_coords(17, 4, 24, 16));
    assert_name_at(deposit, 17, 20, 27);

    assert_name_at(get_symbol(&symbols, "name"), 13, 36, 40);
    assert_name_at(get_symbol(&symbols, "log"), 17, 42, 45);
    assert_name_at(get_symbol(&symbols, "entries"), 26, 22, 29);
    assert_name_at(get_symbol(&symbols, "i"), 27, 12, 13);
    assert_name_at(get_symbol(&symbols, "acct"), 31, 4, 8);

    let previous = get_symbol(&symbols, "previous");
    assert_eq!(previous.declared_range, Span::from_coords(18, 8, 18, 20));
    assert_name_at(get_symbol(&symbols, "next_total"), 19, 12, 22);
}

#[test]
fn test_account_class_signatures() {
    let symbols = symbols_from_clean_source(ACCOUNT_CLASS);

    let balance = get_symbol(&symbols, "Balance");
    assert_eq!(balance.declared_type, Some(Accessor::Get));
    assert_eq!(balance.visibility, Some(Visibility::Public));
    assert_eq!(balance.rendered_name(), "Balance ()");

    let owner = get_symbol(&symbols, "Owner");
    assert_eq!(owner.signature().as_deref(), Some("Public Let Owner(ByVal name)"));

    let audit = get_symbol(&symbols, "Audit");
    assert_eq!(audit.visibility, Some(Visibility::Private));
    assert_eq!(audit.rendered_name(), "Audit (entries())");
}

#[test]
fn test_crlf_source_matches_lf_source() {
    let lf = extract_symbols(ACCOUNT_CLASS);
    let crlf = extract_symbols(&account_class_crlf());
    assert_eq!(lf, crlf);
}

#[test]
fn test_reparse_yields_identical_symbols() {
    assert_eq!(extract_symbols(ACCOUNT_CLASS), extract_symbols(ACCOUNT_CLASS));
}

#[rstest]
#[case(EMPTY_CLASS, vec!["Foo"])]
#[case(SIMPLE_FUNCTION, vec!["Add", "a", "b"])]
#[case(CONTINUED_DIM, vec!["x", "y"])]
#[case(CLASS_WITH_FIELD, vec!["C", "m_x"])]
#[case("Dim  a ,\tb ,  c", vec!["a", "b", "c"])]
#[case("Private Const A = 1 : Public Const B = \"x:y\"", vec!["A", "B"])]
#[case("Sub Main\nEnd Sub", vec!["Main"])]
fn test_symbol_names(#[case] source: &str, #[case] expected: Vec<&str>) {
    let symbols = symbols_from_clean_source(source);
    assert_eq!(names(&symbols), expected);
}

#[test]
fn test_continued_dim_positions() {
    let symbols = symbols_from_clean_source(CONTINUED_DIM);
    let x = get_symbol(&symbols, "x");
    assert_eq!(x.declared_range, Span::from_coords(0, 0, 0, 5));
    let y = get_symbol(&symbols, "y");
    assert_eq!(y.declared_range, Span::from_coords(1, 4, 1, 5));
}

#[test]
fn test_continued_method_header() {
    let source = "Function Long( _\n    first, _\n    second)\nEnd Function";
    let symbols = symbols_from_clean_source(source);
    assert_eq!(names(&symbols), vec!["Long", "first", "second"]);
    assert_name_at(get_symbol(&symbols, "first"), 1, 4, 9);
    assert_name_at(get_symbol(&symbols, "second"), 2, 4, 10);
    assert_eq!(
        get_symbol(&symbols, "Long").declared_range,
        Span::from_coords(0, 0, 3, 12)
    );
}

#[test]
fn test_unicode_in_strings_and_comments() {
    let source = "x = \"héllo:wörld\" ' ünïcode: Dim fake\nDim real";
    let symbols = symbols_from_clean_source(source);
    assert_eq!(names(&symbols), vec!["real"]);
    assert_name_at(get_symbol(&symbols, "real"), 1, 4, 8);
}

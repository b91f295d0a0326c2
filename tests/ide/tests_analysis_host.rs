//! AnalysisHost lifecycle tests.

use crate::helpers::hir_helpers::*;
use crate::helpers::source_fixtures::*;
use vbs::base::{DocumentId, Position};
use vbs::hir::DiagnosticKind;
use vbs::ide::AnalysisHost;

#[test]
fn test_changed_document_replaces_symbols() {
    let (host, doc) = analysis_from_source(EMPTY_CLASS, "file:///a.vbs");
    assert_eq!(host.list_symbols(&doc).len(), 1);

    host.on_document_changed(doc.clone(), CLASS_WITH_FIELD);
    let outline = host.list_symbols(&doc);
    let rendered: Vec<_> = outline.iter().map(|e| e.rendered_name.as_str()).collect();
    assert_eq!(rendered, vec!["C", "m_x"]);
}

#[test]
fn test_deleted_document_answers_empty() {
    let (host, doc) = analysis_from_source(ACCOUNT_CLASS, "file:///a.vbs");
    host.on_document_deleted(&doc);

    assert!(host.list_symbols(&doc).is_empty());
    assert!(host.completions_at(&doc, Position::new(20, 0)).is_empty());
    assert!(host.diagnostics(&doc).is_empty());
    assert!(host.folding_ranges(&doc).is_empty());
    assert_eq!(host.document_count(), 0);
}

#[test]
fn test_unknown_document_answers_empty() {
    let host = AnalysisHost::new();
    let doc = DocumentId::from("never-seen.vbs");
    assert!(host.list_symbols(&doc).is_empty());
    assert!(host.completions_at(&doc, Position::new(0, 0)).is_empty());
}

#[test]
fn test_opened_document_parses_on_first_query() {
    let host = AnalysisHost::new();
    let doc = DocumentId::from("file:///lazy.vbs");
    host.on_document_opened(doc.clone(), SIMPLE_FUNCTION);

    assert!(host.store().get(&doc).is_none());
    assert_eq!(host.list_symbols(&doc).len(), 3);
    assert!(host.store().get(&doc).is_some());
}

#[test]
fn test_diagnostics_are_exposed() {
    let (host, doc) = analysis_from_source("Function F()\nEnd Sub", "file:///a.vbs");
    let diagnostics = host.diagnostics(&doc);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::StructuralMismatch);
    // the function still closes
    assert_eq!(host.list_symbols(&doc).len(), 1);
}

#[test]
fn test_concurrent_changes_and_queries() {
    let host = AnalysisHost::new();

    std::thread::scope(|scope| {
        for i in 0..6 {
            let host = &host;
            scope.spawn(move || {
                let doc = DocumentId::from(format!("file:///doc{i}.vbs"));
                for round in 0..10 {
                    let source = format!("Class K{i}\n  Private f{round}\nEnd Class");
                    host.on_document_changed(doc.clone(), source);
                    let outline = host.list_symbols(&doc);
                    assert_eq!(outline.len(), 2);
                    let items = host.completions_at(&doc, Position::new(1, 0));
                    assert_eq!(items.len(), 2);
                }
            });
        }
    });

    assert_eq!(host.document_count(), 6);
    assert_eq!(host.workspace_symbols(Some("K")).len(), 6);
}

#[test]
fn test_deletion_racing_first_query_leaves_no_snapshot() {
    let host = AnalysisHost::new();
    let doc = DocumentId::from("file:///racy.vbs");

    for _ in 0..50 {
        host.on_document_opened(doc.clone(), SIMPLE_FUNCTION);
        std::thread::scope(|scope| {
            scope.spawn(|| host.list_symbols(&doc));
            scope.spawn(|| host.on_document_deleted(&doc));
        });

        assert!(host.store().get(&doc).is_none());
        assert!(host.list_symbols(&doc).is_empty());
    }
}

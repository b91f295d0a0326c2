//! Symbol store tests.

use std::sync::Arc;

use vbs::base::DocumentId;
use vbs::hir::SymbolStore;

#[test]
fn test_refresh_and_get() {
    let store = SymbolStore::new();
    let doc = DocumentId::from("file:///a.vbs");
    let snapshot = store.refresh(doc.clone(), "Class A\nEnd Class");

    let fetched = store.get(&doc).unwrap();
    assert!(Arc::ptr_eq(&snapshot, &fetched));
    assert_eq!(fetched.document, doc);
}

#[test]
fn test_refresh_is_idempotent() {
    let store = SymbolStore::new();
    let doc = DocumentId::from("file:///a.vbs");
    let first = store.refresh(doc.clone(), "Dim a, b");
    let second = store.refresh(doc.clone(), "Dim a, b");
    assert_eq!(*first, *second);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_invalidate_unknown_document() {
    let store = SymbolStore::new();
    assert!(!store.invalidate(&DocumentId::from("missing")));
    assert!(store.is_empty());
}

#[test]
fn test_concurrent_refresh_of_distinct_documents() {
    let store = SymbolStore::new();

    std::thread::scope(|scope| {
        for i in 0..8 {
            let store = &store;
            scope.spawn(move || {
                let doc = DocumentId::from(format!("doc{i}.vbs"));
                for round in 0..20 {
                    let source = format!("Dim v{i}_{round}");
                    store.refresh(doc.clone(), &source);
                }
            });
        }
    });

    assert_eq!(store.len(), 8);
    for i in 0..8 {
        let snapshot = store.get(&DocumentId::from(format!("doc{i}.vbs"))).unwrap();
        assert_eq!(snapshot.symbols.len(), 1);
        assert_eq!(snapshot.symbols[0].name.as_ref(), format!("v{i}_19"));
    }
}

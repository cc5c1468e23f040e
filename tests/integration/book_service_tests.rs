//! Book service over the in-memory store

use std::collections::HashSet;
use std::sync::Arc;

use library_catalogue::{
    models::Book,
    repository::{BookStore, InMemoryBookStore},
    services::{books::BookService, Services},
};
use tokio_test::assert_ok;
use uuid::Uuid;

fn setup() -> (InMemoryBookStore, BookService<InMemoryBookStore>) {
    let store = InMemoryBookStore::new();
    let service = BookService::new(Arc::new(store.clone()));
    (store, service)
}

#[tokio::test]
async fn test_clean_code_scenario() {
    let (store, service) = setup();
    let a = Uuid::new_v4();
    let clean_code = Book::with_id(a, "Clean Code", "R. Martin", "1234567890123", 2008);

    assert!(assert_ok!(service.add(clean_code.clone()).await));
    assert_eq!(assert_ok!(service.get_by_id(a).await), Some(clean_code));

    let bad = Book::new("Clean Code", "R. Martin", "123", 2008);
    let bad_id = bad.id;
    assert!(!assert_ok!(service.add(bad).await));
    assert_eq!(assert_ok!(service.get_by_id(bad_id).await), None);
    assert_eq!(store.len(), 1);

    assert!(assert_ok!(service.delete(a).await));
    assert!(!assert_ok!(service.delete(a).await));
}

#[tokio::test]
async fn test_invalid_isbns_are_never_stored() {
    let (store, service) = setup();

    for isbn in ["", "123", "123456789012", "12345678901234", "978-013235088", "1234567890123 ", "\t1234567890123", "abcdefghijklm"] {
        let book = Book::new("T", "A", isbn, 2000);
        let id = book.id;
        assert!(!service.add(book.clone()).await.unwrap(), "add accepted {:?}", isbn);
        assert!(!service.update(book).await.unwrap(), "update accepted {:?}", isbn);
        assert_eq!(service.get_by_id(id).await.unwrap(), None);
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_duplicate_add_reports_success_but_keeps_original() {
    let (_, service) = setup();
    let original = Book::new("Original", "Author", "1234567890123", 2001);
    service.add(original.clone()).await.unwrap();

    let duplicate = Book { title: "Different".to_string(), ..original.clone() };
    assert!(service.add(duplicate).await.unwrap());

    assert_eq!(service.get_by_id(original.id).await.unwrap(), Some(original));
    assert_eq!(service.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_upserts_unknown_id() {
    let (_, service) = setup();
    let book = Book::new("Fresh", "Author", "9876543210987", 2020);

    assert!(service.update(book.clone()).await.unwrap());
    assert_eq!(service.get_by_id(book.id).await.unwrap(), Some(book));
}

#[tokio::test]
async fn test_update_replaces_whole_record() {
    let (_, service) = setup();
    let mut book = Book::new("Draft", "Anon", "1234567890123", 1900);
    service.add(book.clone()).await.unwrap();

    let fetched = service.get_by_id(book.id).await.unwrap().unwrap();
    book = Book {
        title: "Final".to_string(),
        author: "Known".to_string(),
        isbn: "9876543210987".to_string(),
        published_year: 1901,
        ..fetched
    };
    assert!(service.update(book.clone()).await.unwrap());

    assert_eq!(service.get_by_id(book.id).await.unwrap(), Some(book));
}

#[tokio::test]
async fn test_invalid_update_leaves_record_unchanged() {
    let (_, service) = setup();
    let book = Book::new("Stable", "Author", "1234567890123", 2000);
    service.add(book.clone()).await.unwrap();

    let broken = Book { isbn: "12345".to_string(), title: "Changed".to_string(), ..book.clone() };
    assert!(!service.update(broken).await.unwrap());

    assert_eq!(service.get_by_id(book.id).await.unwrap(), Some(book));
}

#[tokio::test]
async fn test_store_holds_records_the_service_would_reject() {
    let (store, service) = setup();
    let raw = Book::new("Imported", "Legacy", "ISBN-LESS", 1850);

    store.add(raw.clone()).await.unwrap();

    assert_eq!(service.get_by_id(raw.id).await.unwrap(), Some(raw));
}

#[tokio::test]
async fn test_list_all_returns_each_added_record() {
    let (_, service) = setup();
    let mut expected = HashSet::new();
    for i in 0..25 {
        let book = Book::new(format!("Book {}", i), "Author", "1234567890123", 2000 + i);
        expected.insert(book.id);
        assert!(service.add(book).await.unwrap());
    }

    let listed: HashSet<Uuid> = service.list_all().await.unwrap().into_iter().map(|b| b.id).collect();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn test_services_container_shares_store() {
    let store = InMemoryBookStore::new();
    let services = Services::new(Arc::new(store.clone()));
    let book = Book::new("Shared", "Author", "1234567890123", 2000);

    assert!(services.books.clone().add(book.clone()).await.unwrap());

    assert_eq!(store.get_by_id(book.id).await.unwrap(), Some(book));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_service_calls() {
    let (store, service) = setup();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                let book = Book::new(format!("Parallel {}", i), "Author", "1234567890123", 2000);
                assert!(service.add(book.clone()).await.unwrap());
                assert_eq!(service.get_by_id(book.id).await.unwrap(), Some(book.clone()));
                if i % 4 == 0 {
                    assert!(service.delete(book.id).await.unwrap());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.len(), 12);
}

//! End-to-end purchase flow through the console-backed collaborators.

use std::sync::Arc;

use bookstore_catalog::{
    Book, BookKind, ConsoleMailService, ConsoleShippingService, NewBook, Notice, RecordingSink,
};
use bookstore_core::{DomainError, FixedClock};
use bookstore_store::Bookstore;

fn new_book(isbn: &str, title: &str, year: i32, price: f64, stock: u32, author: &str) -> NewBook {
    NewBook {
        isbn: isbn.to_string(),
        title: title.to_string(),
        publication_year: year,
        unit_price: price,
        quantity_in_stock: stock,
        author: author.to_string(),
    }
}

fn seeded_store(sink: Arc<RecordingSink>) -> Bookstore {
    let shipping = Arc::new(ConsoleShippingService::new(sink.clone()));
    let mail = Arc::new(ConsoleMailService::new(sink.clone()));
    let mut store = Bookstore::with_clock(&FixedClock(2024), sink);

    store.register_book(
        Book::physical(new_book("P001", "paperbook", 2008, 120.0, 3, "Khaled"), shipping).unwrap(),
    );
    store.register_book(
        Book::digital(new_book("E001", "Ebook", 2023, 150.0, 2, "Mai"), mail).unwrap(),
    );
    store.register_book(Book::showcase(new_book("D001", "Demo", 2020, 0.0, 1, "Unknown")).unwrap());
    store
}

#[test]
fn full_session_emits_notices_in_order() {
    let sink = Arc::new(RecordingSink::new());
    let mut store = seeded_store(sink.clone());

    assert_eq!(
        store.process_purchase("P001", 2, "reader@example.com", "madinaty").unwrap(),
        240.0
    );
    assert_eq!(store.process_purchase("E001", 1, "reader@example.com", "").unwrap(), 150.0);
    assert_eq!(
        store.process_purchase("D001", 1, "reader@example.com", "whatever").unwrap_err(),
        DomainError::not_for_sale("D001")
    );
    assert_eq!(
        store.process_purchase("UNKNOWN", 1, "reader@example.com", "whatever").unwrap_err(),
        DomainError::book_not_found("UNKNOWN")
    );

    let removed: Vec<String> = store
        .clear_old_books(3)
        .iter()
        .map(|b| b.isbn().to_string())
        .collect();
    assert_eq!(removed, vec!["D001", "P001"]);
    assert!(store.get("P001").is_none());
    assert!(store.get("E001").is_some());

    assert_eq!(
        sink.lines(),
        vec![
            "Quantum book store: Shipping 'paperbook' to address: madinaty",
            "Quantum book store: Paid 240 EGP for paper book",
            "Quantum book store: Sending 'Ebook.try' to email: reader@example.com",
            "Quantum book store: Paid 150 EGP for ebook",
            "Quantum book store: Removed outdated book: Demo (2020)",
            "Quantum book store: Removed outdated book: paperbook (2008)",
        ]
    );
}

#[test]
fn fulfillment_notice_precedes_receipt() {
    let sink = Arc::new(RecordingSink::new());
    let mut store = seeded_store(sink.clone());

    store.process_purchase("E001", 2, "reader@example.com", "").unwrap();

    let kinds: Vec<&str> = sink.notices().iter().map(Notice::kind).collect();
    assert_eq!(kinds, vec!["fulfillment.delivered", "purchase.receipt"]);
    match &sink.notices()[1] {
        Notice::Receipt { kind, quantity, total, .. } => {
            assert_eq!(*kind, BookKind::Digital);
            assert_eq!(*quantity, 2);
            assert_eq!(*total, 300.0);
        }
        other => panic!("expected receipt, got {other:?}"),
    }
    assert_eq!(store.get("E001").unwrap().quantity_in_stock(), 0);
}

#[test]
fn stock_runs_out_across_purchases() {
    let sink = Arc::new(RecordingSink::new());
    let mut store = seeded_store(sink);

    store.process_purchase("P001", 2, "a@b.c", "addr").unwrap();
    store.process_purchase("P001", 1, "a@b.c", "addr").unwrap();
    let err = store.process_purchase("P001", 1, "a@b.c", "addr").unwrap_err();

    assert_eq!(err, DomainError::insufficient_stock("P001", 1, 0));
    assert_eq!(store.get("P001").unwrap().quantity_in_stock(), 0);
}

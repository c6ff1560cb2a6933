//! Sample inventory and purchase scenarios.

use std::sync::Arc;

use anyhow::Context;

use bookstore_catalog::{Book, ConsoleMailService, ConsoleShippingService, NewBook, NoticeSink};
use bookstore_core::{DomainError, Isbn};
use bookstore_store::Bookstore;

use crate::config::DemoConfig;

/// One purchase attempt of the demo session.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub label: &'static str,
    pub isbn: &'static str,
    pub quantity: u32,
    pub email: &'static str,
    pub address: &'static str,
}

pub const SCENARIOS: [Scenario; 4] = [
    Scenario {
        label: "buy paper book",
        isbn: "P001",
        quantity: 2,
        email: "habiba@gmail.com",
        address: "madinaty",
    },
    Scenario {
        label: "buy ebook",
        isbn: "E001",
        quantity: 1,
        email: "habiba@gmail.com",
        address: "",
    },
    Scenario {
        label: "buy showcase book",
        isbn: "D001",
        quantity: 1,
        email: "hh@gmail.com",
        address: "whatever",
    },
    Scenario {
        label: "buy unknown isbn",
        isbn: "UNKNOWN",
        quantity: 1,
        email: "hh@gmail.com",
        address: "whatever",
    },
];

/// What happened during a session.
#[derive(Debug, Default)]
pub struct SessionReport {
    pub completed: Vec<(&'static str, f64)>,
    pub failed: Vec<(&'static str, DomainError)>,
    pub removed: Vec<Isbn>,
}

/// The sample books, fulfilled through console collaborators writing to `sink`.
pub fn sample_books(sink: Arc<dyn NoticeSink>) -> anyhow::Result<Vec<Book>> {
    let shipping = Arc::new(ConsoleShippingService::new(sink.clone()));
    let mail = Arc::new(ConsoleMailService::new(sink));

    let books = vec![
        Book::physical(
            NewBook {
                isbn: "P001".to_string(),
                title: "paperbook".to_string(),
                publication_year: 2008,
                unit_price: 120.0,
                quantity_in_stock: 3,
                author: "Khaled".to_string(),
            },
            shipping,
        )
        .context("building sample paper book")?,
        Book::digital(
            NewBook {
                isbn: "E001".to_string(),
                title: "Ebook".to_string(),
                publication_year: 2023,
                unit_price: 150.0,
                quantity_in_stock: 2,
                author: "Mai".to_string(),
            },
            mail,
        )
        .context("building sample ebook")?,
        Book::showcase(NewBook {
            isbn: "D001".to_string(),
            title: "Demo".to_string(),
            publication_year: 2020,
            unit_price: 0.0,
            quantity_in_stock: 1,
            author: "Unknown".to_string(),
        })
        .context("building sample showcase book")?,
    ];
    Ok(books)
}

/// Seed a store, run every scenario, then clear outdated books.
///
/// Scenario failures are logged and recorded; only a broken sample
/// inventory aborts the session.
pub fn run_session(config: &DemoConfig, sink: Arc<dyn NoticeSink>) -> anyhow::Result<SessionReport> {
    let clock = config.clock();
    let mut store = Bookstore::with_clock(clock.as_ref(), sink.clone());

    for book in sample_books(sink)? {
        store.register_book(book);
    }

    let mut report = SessionReport::default();
    for scenario in &SCENARIOS {
        tracing::info!(scenario = scenario.label, "running scenario");
        match store.process_purchase(scenario.isbn, scenario.quantity, scenario.email, scenario.address) {
            Ok(total) => report.completed.push((scenario.label, total)),
            Err(e) => {
                tracing::info!(scenario = scenario.label, error = %e, "scenario failed");
                report.failed.push((scenario.label, e));
            }
        }
    }

    report.removed = store
        .clear_old_books(config.max_book_age)
        .into_iter()
        .map(|book| book.isbn().clone())
        .collect();

    Ok(report)
}

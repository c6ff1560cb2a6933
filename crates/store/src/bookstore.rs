use std::collections::HashMap;
use std::sync::Arc;

use bookstore_catalog::{Book, BookKind, Notice, NoticeSink};
use bookstore_core::{Clock, DomainError, DomainResult, Isbn};

/// In-memory bookstore: one book per ISBN.
pub struct Bookstore {
    inventory: HashMap<Isbn, Book>,
    current_year: i32,
    sink: Arc<dyn NoticeSink>,
}

impl Bookstore {
    /// Create an empty store whose age calculations use `current_year`.
    pub fn new(current_year: i32, sink: Arc<dyn NoticeSink>) -> Self {
        Self {
            inventory: HashMap::new(),
            current_year,
            sink,
        }
    }

    /// Create an empty store, asking `clock` for the year once.
    pub fn with_clock(clock: &dyn Clock, sink: Arc<dyn NoticeSink>) -> Self {
        Self::new(clock.current_year(), sink)
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.inventory.get(isbn)
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.inventory.contains_key(isbn)
    }

    /// Registered books, in no particular order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.inventory.values()
    }

    /// Insert `book`, replacing any book already registered under its ISBN.
    ///
    /// Returns the replaced book, if any.
    pub fn register_book(&mut self, book: Book) -> Option<Book> {
        let isbn = book.isbn().clone();
        tracing::info!(isbn = %isbn, kind = ?book.kind(), stock = book.quantity_in_stock(), "registering book");

        let previous = self.inventory.insert(isbn, book);
        if let Some(previous) = &previous {
            tracing::debug!(isbn = %previous.isbn(), "replaced existing registration");
        }
        previous
    }

    /// Remove every book older than `max_age` years and return them, sorted by ISBN.
    pub fn clear_old_books(&mut self, max_age: i32) -> Vec<Book> {
        let current_year = self.current_year;
        let outdated: Vec<Isbn> = self
            .inventory
            .values()
            .filter(|book| book.is_outdated(max_age, current_year))
            .map(|book| book.isbn().clone())
            .collect();

        let mut removed: Vec<Book> = outdated
            .iter()
            .filter_map(|isbn| self.inventory.remove(isbn))
            .collect();
        removed.sort_by(|a, b| a.isbn().cmp(b.isbn()));

        for book in &removed {
            self.sink.emit(&Notice::Removed {
                isbn: book.isbn().clone(),
                title: book.title().to_string(),
                publication_year: book.publication_year(),
            });
        }

        tracing::info!(
            max_age,
            current_year,
            removed = removed.len(),
            remaining = self.inventory.len(),
            "cleared outdated books"
        );
        removed
    }

    /// Sell `quantity` copies of `isbn` and fulfill the order.
    ///
    /// Stock is decremented before delivery; a failed delivery does not
    /// restore it. Returns the amount paid.
    pub fn process_purchase(
        &mut self,
        isbn: &str,
        quantity: u32,
        email: &str,
        address: &str,
    ) -> DomainResult<f64> {
        let result = self.try_purchase(isbn, quantity, email, address);
        match &result {
            Ok(total) => tracing::info!(isbn, quantity, total, "purchase completed"),
            Err(e) => tracing::warn!(isbn, quantity, error = e.kind(), "purchase rejected: {e}"),
        }
        result
    }

    fn try_purchase(
        &mut self,
        isbn: &str,
        quantity: u32,
        email: &str,
        address: &str,
    ) -> DomainResult<f64> {
        let book = self
            .inventory
            .get_mut(isbn)
            .ok_or_else(|| DomainError::book_not_found(isbn))?;

        if book.kind() == BookKind::Showcase {
            return Err(DomainError::not_for_sale(isbn));
        }

        book.decrease_stock(quantity)?;
        let total = f64::from(quantity) * book.unit_price();

        // Delivery sees the book with its stock already decremented.
        book.fulfill_delivery(email, address)?;

        self.sink.emit(&Notice::Receipt {
            isbn: book.isbn().clone(),
            kind: book.kind(),
            quantity,
            total,
        });
        Ok(total)
    }
}

impl core::fmt::Debug for Bookstore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bookstore")
            .field("current_year", &self.current_year)
            .field("books", &self.inventory.len())
            .finish()
    }
}

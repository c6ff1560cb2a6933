//! Domain error model.

use thiserror::Error;

/// Result type used across the bookstore domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a synchronous business failure surfaced to the immediate
/// caller. Nothing inside the catalog or the store recovers from these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Book construction rejected a field (blank text, negative price, ...).
    #[error("invalid book data: {field} {reason}")]
    InvalidBookData {
        field: &'static str,
        reason: &'static str,
    },

    /// A stock decrease asked for more copies than are available.
    #[error("not enough quantity in stock for {isbn} (requested: {requested}, available: {available})")]
    InsufficientStock {
        isbn: String,
        requested: u32,
        available: u32,
    },

    /// The book is a showcase copy and cannot be purchased or delivered.
    #[error("book {isbn} is not for sale")]
    NotForSale { isbn: String },

    /// No book is registered under the ISBN.
    #[error("book {isbn} not found in inventory")]
    BookNotFound { isbn: String },
}

impl DomainError {
    pub fn invalid_book_data(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidBookData { field, reason }
    }

    pub fn insufficient_stock(isbn: impl Into<String>, requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            isbn: isbn.into(),
            requested,
            available,
        }
    }

    pub fn not_for_sale(isbn: impl Into<String>) -> Self {
        Self::NotForSale { isbn: isbn.into() }
    }

    pub fn book_not_found(isbn: impl Into<String>) -> Self {
        Self::BookNotFound { isbn: isbn.into() }
    }

    /// Stable machine-readable code, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::InvalidBookData { .. } => "invalid_book_data",
            DomainError::InsufficientStock { .. } => "insufficient_stock",
            DomainError::NotForSale { .. } => "not_for_sale",
            DomainError::BookNotFound { .. } => "book_not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_book_data_names_the_field() {
        let err = DomainError::invalid_book_data("title", "cannot be blank");
        assert_eq!(err.to_string(), "invalid book data: title cannot be blank");
        assert_eq!(err.kind(), "invalid_book_data");
    }

    #[test]
    fn insufficient_stock_reports_requested_and_available() {
        let err = DomainError::insufficient_stock("P001", 5, 3);
        assert_eq!(
            err.to_string(),
            "not enough quantity in stock for P001 (requested: 5, available: 3)"
        );
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            DomainError::invalid_book_data("isbn", "cannot be blank").kind(),
            DomainError::insufficient_stock("X", 1, 0).kind(),
            DomainError::not_for_sale("X").kind(),
            DomainError::book_not_found("X").kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

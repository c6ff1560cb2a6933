//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// ISBN of a book: the inventory key.
///
/// Only blankness is checked; the value is otherwise opaque (no checksum
/// validation, catalog codes such as `P001` are accepted).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_book_data("isbn", "cannot be blank"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Isbn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Isbn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Isbn {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Isbn> for String {
    fn from(value: Isbn) -> Self {
        value.0
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<Isbn, _>` be queried with a plain `&str`.
impl Borrow<str> for Isbn {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_isbn_is_rejected() {
        for raw in ["", "   ", "\t\n"] {
            let err = Isbn::parse(raw).unwrap_err();
            assert_eq!(err, DomainError::invalid_book_data("isbn", "cannot be blank"));
        }
    }

    #[test]
    fn parse_keeps_value_verbatim() {
        let isbn: Isbn = "978-0-13-110362-7".parse().unwrap();
        assert_eq!(isbn.as_str(), "978-0-13-110362-7");
        assert_eq!(isbn.to_string(), "978-0-13-110362-7");
    }

    #[test]
    fn serde_is_transparent_and_validating() {
        let isbn = Isbn::parse("P001").unwrap();
        assert_eq!(serde_json::to_string(&isbn).unwrap(), "\"P001\"");

        let back: Isbn = serde_json::from_str("\"P001\"").unwrap();
        assert_eq!(back, isbn);

        assert!(serde_json::from_str::<Isbn>("\" \"").is_err());
    }
}

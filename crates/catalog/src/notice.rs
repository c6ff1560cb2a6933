//! Human-readable notices emitted to the output sink.

use serde::{Deserialize, Serialize};

use bookstore_core::Isbn;

use crate::book::BookKind;

/// Name printed in front of every notice line.
pub const STORE_NAME: &str = "Quantum book store";

/// Currency printed on receipts.
pub const CURRENCY: &str = "EGP";

/// Something the store tells the outside world.
///
/// Wording of the `Display` rendering is illustrative, not a compatibility
/// contract. Consumers that need structure should use the serde form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    /// A physical book was handed to the shipping collaborator.
    Shipped {
        isbn: Isbn,
        title: String,
        address: String,
    },
    /// A digital book was mailed.
    Delivered {
        isbn: Isbn,
        title: String,
        email: String,
    },
    /// A purchase completed.
    Receipt {
        isbn: Isbn,
        kind: BookKind,
        quantity: u32,
        total: f64,
    },
    /// An outdated book left the inventory.
    Removed {
        isbn: Isbn,
        title: String,
        publication_year: i32,
    },
}

impl Notice {
    /// Stable notice name (e.g. "fulfillment.shipped").
    pub fn kind(&self) -> &'static str {
        match self {
            Notice::Shipped { .. } => "fulfillment.shipped",
            Notice::Delivered { .. } => "fulfillment.delivered",
            Notice::Receipt { .. } => "purchase.receipt",
            Notice::Removed { .. } => "inventory.removed",
        }
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Notice::Shipped { title, address, .. } => write!(
                f,
                "{STORE_NAME}: Shipping '{}' to address: {address}",
                title.to_lowercase()
            ),
            Notice::Delivered { title, email, .. } => {
                write!(f, "{STORE_NAME}: Sending '{title}.try' to email: {email}")
            }
            Notice::Receipt { kind, total, .. } => write!(
                f,
                "{STORE_NAME}: Paid {total:.0} {CURRENCY} for {}",
                kind.receipt_label()
            ),
            Notice::Removed {
                title,
                publication_year,
                ..
            } => write!(
                f,
                "{STORE_NAME}: Removed outdated book: {title} ({publication_year})"
            ),
        }
    }
}

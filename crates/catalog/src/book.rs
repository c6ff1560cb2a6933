use std::sync::Arc;

use serde::{Deserialize, Serialize};

use bookstore_core::{DomainError, DomainResult, Entity, Isbn};

use crate::fulfillment::{MailService, ShippingService};

/// Which fulfillment a book uses.
///
/// This is the only discriminant business logic looks at; nothing inspects
/// the collaborator behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookKind {
    Physical,
    Digital,
    Showcase,
}

impl BookKind {
    /// Label printed on receipts.
    pub fn receipt_label(self) -> &'static str {
        match self {
            BookKind::Digital => "ebook",
            BookKind::Physical | BookKind::Showcase => "paper book",
        }
    }
}

/// Highest accepted unit price. Any `u32` quantity times this stays finite.
pub const MAX_UNIT_PRICE: f64 = 1.0e12;

/// Raw input for constructing a [`Book`]. Validated by the constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub isbn: String,
    pub title: String,
    pub publication_year: i32,
    pub unit_price: f64,
    pub quantity_in_stock: u32,
    pub author: String,
}

#[derive(Clone)]
enum Delivery {
    Shipping(Arc<dyn ShippingService>),
    Mail(Arc<dyn MailService>),
    Showcase,
}

impl Delivery {
    fn kind(&self) -> BookKind {
        match self {
            Delivery::Shipping(_) => BookKind::Physical,
            Delivery::Mail(_) => BookKind::Digital,
            Delivery::Showcase => BookKind::Showcase,
        }
    }
}

/// Entity: Book.
///
/// Identity and pricing are fixed at construction; only the stock count
/// changes afterwards.
#[derive(Clone)]
pub struct Book {
    isbn: Isbn,
    title: String,
    publication_year: i32,
    unit_price: f64,
    quantity_in_stock: u32,
    author: String,
    delivery: Delivery,
}

impl Book {
    /// A paper copy, fulfilled through `shipping`.
    pub fn physical(new: NewBook, shipping: Arc<dyn ShippingService>) -> DomainResult<Self> {
        Self::from_parts(new, Delivery::Shipping(shipping))
    }

    /// An ebook, fulfilled through `mail`.
    pub fn digital(new: NewBook, mail: Arc<dyn MailService>) -> DomainResult<Self> {
        Self::from_parts(new, Delivery::Mail(mail))
    }

    /// A display copy. Never purchasable.
    pub fn showcase(new: NewBook) -> DomainResult<Self> {
        Self::from_parts(new, Delivery::Showcase)
    }

    fn from_parts(new: NewBook, delivery: Delivery) -> DomainResult<Self> {
        let isbn = Isbn::parse(new.isbn)?;
        ensure_not_blank("title", &new.title)?;
        ensure_not_blank("author", &new.author)?;
        if !new.unit_price.is_finite() || new.unit_price < 0.0 {
            return Err(DomainError::invalid_book_data(
                "unit_price",
                "must be a non-negative number",
            ));
        }
        if new.unit_price > MAX_UNIT_PRICE {
            return Err(DomainError::invalid_book_data(
                "unit_price",
                "exceeds the maximum unit price",
            ));
        }

        Ok(Self {
            isbn,
            title: new.title,
            publication_year: new.publication_year,
            unit_price: new.unit_price,
            quantity_in_stock: new.quantity_in_stock,
            author: new.author,
            delivery,
        })
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn quantity_in_stock(&self) -> u32 {
        self.quantity_in_stock
    }

    pub fn kind(&self) -> BookKind {
        self.delivery.kind()
    }

    pub fn is_for_sale(&self) -> bool {
        self.kind() != BookKind::Showcase
    }

    /// Remove `quantity` copies from stock. Stock is untouched on failure.
    pub fn decrease_stock(&mut self, quantity: u32) -> DomainResult<()> {
        let Some(remaining) = self.quantity_in_stock.checked_sub(quantity) else {
            return Err(DomainError::insufficient_stock(
                self.isbn.as_str(),
                quantity,
                self.quantity_in_stock,
            ));
        };
        self.quantity_in_stock = remaining;
        Ok(())
    }

    /// True iff the book is strictly older than `max_age` years at `current_year`.
    pub fn is_outdated(&self, max_age: i32, current_year: i32) -> bool {
        i64::from(current_year) - i64::from(self.publication_year) > i64::from(max_age)
    }

    /// Hand the book to its fulfillment collaborator.
    ///
    /// Physical books ignore `email`, digital books ignore `address`.
    /// Showcase books always fail with `NotForSale`.
    pub fn fulfill_delivery(&self, email: &str, address: &str) -> DomainResult<()> {
        match &self.delivery {
            Delivery::Shipping(shipping) => {
                shipping.dispatch_to(self, address);
                Ok(())
            }
            Delivery::Mail(mail) => {
                mail.send_to_mail(self, email);
                Ok(())
            }
            Delivery::Showcase => Err(DomainError::not_for_sale(self.isbn.as_str())),
        }
    }
}

fn ensure_not_blank(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_book_data(field, "cannot be blank"));
    }
    Ok(())
}

impl Entity for Book {
    type Id = Isbn;

    fn id(&self) -> &Self::Id {
        &self.isbn
    }
}

impl core::fmt::Debug for Book {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Book")
            .field("isbn", &self.isbn)
            .field("title", &self.title)
            .field("publication_year", &self.publication_year)
            .field("unit_price", &self.unit_price)
            .field("quantity_in_stock", &self.quantity_in_stock)
            .field("author", &self.author)
            .field("kind", &self.kind())
            .finish()
    }
}

//! Fulfillment collaborators.
//!
//! Two independent capabilities: shipping to a postal address and mailing
//! to an email address. Both are assumed to succeed; there is no retry or
//! failure modeling at this seam.

use std::sync::Arc;

use crate::book::Book;
use crate::notice::Notice;
use crate::sink::NoticeSink;

/// Can ship a physical copy to an address.
pub trait ShippingService: Send + Sync {
    fn dispatch_to(&self, book: &Book, address: &str);
}

/// Can deliver a digital copy to an email address.
pub trait MailService: Send + Sync {
    fn send_to_mail(&self, book: &Book, email: &str);
}

/// Shipping backed by an injected notice sink.
#[derive(Clone)]
pub struct ConsoleShippingService {
    sink: Arc<dyn NoticeSink>,
}

impl ConsoleShippingService {
    pub fn new(sink: Arc<dyn NoticeSink>) -> Self {
        Self { sink }
    }
}

impl ShippingService for ConsoleShippingService {
    fn dispatch_to(&self, book: &Book, address: &str) {
        tracing::info!(isbn = %book.isbn(), address, "dispatching book");
        self.sink.emit(&Notice::Shipped {
            isbn: book.isbn().clone(),
            title: book.title().to_string(),
            address: address.to_string(),
        });
    }
}

/// Mail delivery backed by an injected notice sink.
#[derive(Clone)]
pub struct ConsoleMailService {
    sink: Arc<dyn NoticeSink>,
}

impl ConsoleMailService {
    pub fn new(sink: Arc<dyn NoticeSink>) -> Self {
        Self { sink }
    }
}

impl MailService for ConsoleMailService {
    fn send_to_mail(&self, book: &Book, email: &str) {
        tracing::info!(isbn = %book.isbn(), email, "mailing book");
        self.sink.emit(&Notice::Delivered {
            isbn: book.isbn().clone(),
            title: book.title().to_string(),
            email: email.to_string(),
        });
    }
}

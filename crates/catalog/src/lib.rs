//! Book catalog: the `Book` entity, its fulfillment variants, and the
//! notice boundary through which fulfillment becomes visible.
//!
//! No storage lives here; see `bookstore-store` for the inventory.

pub mod book;
pub mod fulfillment;
pub mod notice;
pub mod sink;

pub use book::{Book, BookKind, MAX_UNIT_PRICE, NewBook};
pub use fulfillment::{ConsoleMailService, ConsoleShippingService, MailService, ShippingService};
pub use notice::Notice;
pub use sink::{ConsoleSink, NoticeFormat, NoticeSink, RecordingSink};

//! Bookstore inventory service.
//!
//! Owns the ISBN-keyed inventory and orchestrates purchases and cleanup.
//! Single-threaded: callers that share a store across threads must make
//! registration, purchase and cleanup on one ISBN mutually exclusive.

pub mod bookstore;

pub use bookstore::Bookstore;

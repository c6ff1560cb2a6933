//! Demo driver: seeds a store with sample books and walks through the
//! purchase scenarios, logging failures and moving on.

pub mod config;
pub mod session;

pub use config::DemoConfig;
pub use session::{SessionReport, run_session};

//! Clock collaborator: supplies the reference "current year".

use chrono::{Datelike, Utc};

/// Source of the current calendar year.
///
/// The store asks once, at construction, and keeps the answer.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Wall clock (UTC).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Utc::now().year()
    }
}

/// A clock frozen at a given year. Prefer this in tests for determinism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

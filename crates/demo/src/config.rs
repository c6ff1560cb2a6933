//! Demo configuration, read from the environment.

use bookstore_catalog::NoticeFormat;
use bookstore_core::{Clock, FixedClock, SystemClock};

pub const CURRENT_YEAR_ENV: &str = "BOOKSTORE_CURRENT_YEAR";
pub const MAX_BOOK_AGE_ENV: &str = "BOOKSTORE_MAX_BOOK_AGE";
pub const NOTICE_FORMAT_ENV: &str = "BOOKSTORE_NOTICE_FORMAT";

pub const DEFAULT_MAX_BOOK_AGE: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Overrides the system clock when set.
    pub current_year: Option<i32>,
    pub max_book_age: i32,
    pub notice_format: NoticeFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            current_year: None,
            max_book_age: DEFAULT_MAX_BOOK_AGE,
            notice_format: NoticeFormat::Text,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Malformed values are logged and
    /// replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let current_year = lookup(CURRENT_YEAR_ENV).and_then(|raw| match raw.trim().parse::<i32>() {
            Ok(year) => Some(year),
            Err(e) => {
                tracing::warn!(value = %raw, error = %e, "{CURRENT_YEAR_ENV} is not a year; using the system clock");
                None
            }
        });

        let max_book_age = lookup(MAX_BOOK_AGE_ENV)
            .and_then(|raw| match raw.trim().parse::<i32>() {
                Ok(age) if age >= 0 => Some(age),
                _ => {
                    tracing::warn!(value = %raw, "{MAX_BOOK_AGE_ENV} must be a non-negative integer; using default");
                    None
                }
            })
            .unwrap_or(defaults.max_book_age);

        let notice_format = lookup(NOTICE_FORMAT_ENV)
            .and_then(|raw| match raw.parse::<NoticeFormat>() {
                Ok(format) => Some(format),
                Err(e) => {
                    tracing::warn!(error = %e, "invalid {NOTICE_FORMAT_ENV}; using text");
                    None
                }
            })
            .unwrap_or(defaults.notice_format);

        Self {
            current_year,
            max_book_age,
            notice_format,
        }
    }

    /// A clock frozen at the configured year, or the system clock.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.current_year {
            Some(year) => Box::new(FixedClock(year)),
            None => Box::new(SystemClock),
        }
    }
}

//! Tracing/logging setup shared by binaries.

/// Initialize process-wide tracing with the format named by `BOOKSTORE_LOG_FORMAT`.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, layers).
pub mod tracing;

use std::sync::Arc;

use bookstore_catalog::ConsoleSink;
use bookstore_demo::{DemoConfig, run_session};

fn main() -> anyhow::Result<()> {
    bookstore_observability::init();

    let config = DemoConfig::from_env();
    let sink = Arc::new(ConsoleSink::new(config.notice_format));

    let report = run_session(&config, sink)?;

    tracing::info!(
        completed = report.completed.len(),
        failed = report.failed.len(),
        removed = report.removed.len(),
        "session finished"
    );
    Ok(())
}

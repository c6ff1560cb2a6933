//! Output sink: where notices end up.

use core::str::FromStr;
use std::sync::Mutex;

use crate::notice::Notice;

/// Receives every notice the catalog and the store emit.
pub trait NoticeSink: Send + Sync {
    fn emit(&self, notice: &Notice);
}

/// Rendering used by [`ConsoleSink`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeFormat {
    /// One human-readable line per notice.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for NoticeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(NoticeFormat::Text),
            "json" => Ok(NoticeFormat::Json),
            other => Err(format!("unknown notice format '{other}' (expected: text, json)")),
        }
    }
}

/// Writes notices to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    format: NoticeFormat,
}

impl ConsoleSink {
    pub fn new(format: NoticeFormat) -> Self {
        Self { format }
    }

    /// The line printed for `notice`. Falls back to the text form if JSON
    /// encoding fails.
    pub fn render(&self, notice: &Notice) -> String {
        match self.format {
            NoticeFormat::Text => notice.to_string(),
            NoticeFormat::Json => serde_json::to_string(notice).unwrap_or_else(|e| {
                tracing::error!(notice = notice.kind(), error = %e, "failed to encode notice");
                notice.to_string()
            }),
        }
    }
}

impl NoticeSink for ConsoleSink {
    fn emit(&self, notice: &Notice) {
        println!("{}", self.render(notice));
    }
}

/// In-memory sink; keeps every notice in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Rendered lines, as a console sink in text mode would print them.
    pub fn lines(&self) -> Vec<String> {
        self.notices().iter().map(ToString::to_string).collect()
    }
}

impl NoticeSink for RecordingSink {
    fn emit(&self, notice: &Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notice.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::BookKind;
    use bookstore_core::Isbn;

    #[test]
    fn notice_format_parses_case_insensitively() {
        assert_eq!("TEXT".parse::<NoticeFormat>().unwrap(), NoticeFormat::Text);
        assert_eq!(" json ".parse::<NoticeFormat>().unwrap(), NoticeFormat::Json);
        assert!("xml".parse::<NoticeFormat>().is_err());
    }

    fn receipt() -> Notice {
        Notice::Receipt {
            isbn: Isbn::parse("P001").unwrap(),
            kind: BookKind::Physical,
            quantity: 2,
            total: 240.0,
        }
    }

    #[test]
    fn console_sink_renders_text_by_default() {
        let sink = ConsoleSink::default();
        assert_eq!(
            sink.render(&receipt()),
            "Quantum book store: Paid 240 EGP for paper book"
        );
    }

    #[test]
    fn console_sink_renders_one_json_object_per_notice() {
        let sink = ConsoleSink::new(NoticeFormat::Json);

        let line = sink.render(&receipt());

        assert!(!line.contains('\n'));
        let json: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(json["type"], "receipt");
        assert_eq!(json["isbn"], "P001");
        assert_eq!(json["kind"], "physical");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["total"], 240.0);
    }

    #[test]
    fn recording_sink_keeps_emission_order() {
        let sink = RecordingSink::new();
        for year in [2001, 2002, 2003] {
            sink.emit(&Notice::Removed {
                isbn: Isbn::parse(format!("B{year}")).unwrap(),
                title: "Old".to_string(),
                publication_year: year,
            });
        }

        let years: Vec<i32> = sink
            .notices()
            .into_iter()
            .map(|n| match n {
                Notice::Removed { publication_year, .. } => publication_year,
                other => panic!("unexpected notice: {other:?}"),
            })
            .collect();
        assert_eq!(years, vec![2001, 2002, 2003]);
    }
}

use chrono::NaiveDate;
use console::{Alignment, pad_str};

use crate::api::{HistoryEntry, MetricKind, fixtures};
use crate::ui::{self, style};

const DATE_WIDTH: usize = 12;
const VALUE_WIDTH: usize = 16;

/// Per-metric history page: a table of daily readings, each editable.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryTable {
    kind: MetricKind,
    entries: Vec<HistoryEntry>,
}

impl HistoryTable {
    pub fn new(kind: MetricKind, entries: Vec<HistoryEntry>) -> Self {
        Self { kind, entries }
    }

    /// The canned week of readings for `kind`.
    pub fn for_kind(kind: MetricKind) -> Self {
        Self::new(kind, fixtures::history(kind))
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn find(&self, date: NaiveDate) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.date == date)
    }

    pub fn render(&self) -> String {
        let label = self.kind.label();
        let mut lines = vec![
            style::header(format!("{label} {}", t!("health_stats.history"))),
            style::dim(t!("dashboard.subtitle")),
            String::new(),
            style::accent(format!("{label} {}", t!("health_stats.entries"))),
            format!(
                "  {}{}{}",
                pad_str(&t!("common.date"), DATE_WIDTH, Alignment::Left, None),
                pad_str(&t!("add_entry.value"), VALUE_WIDTH, Alignment::Left, None),
                t!("common.actions")
            ),
        ];
        let unit = self.kind.unit();
        let edit = format!("[{}]", t!("common.edit"));
        lines.extend(self.entries.iter().map(|entry| {
            let date = entry.date.to_string();
            let value = ui::format_value(entry.value, unit);
            format!(
                "  {}{}{}",
                pad_str(&date, DATE_WIDTH, Alignment::Left, None),
                style::value(pad_str(&value, VALUE_WIDTH, Alignment::Left, None)),
                style::cyan(&edit)
            )
        }));
        lines.join("\n")
    }
}

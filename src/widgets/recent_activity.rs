use chrono::{DateTime, Utc};

use super::{LoadState, render_error, render_loading};
use crate::api::{ActivityRecord, HealthApi, MetricKind};
use crate::ui::{self, style};

/// Relative age of an entry: hours under a day, then "Yesterday", then the date.
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - timestamp).num_hours().max(0);
    match hours {
        0..24 => t!("health_stats.hours_ago", count = hours).to_string(),
        24..48 => t!("health_stats.yesterday").to_string(),
        _ => timestamp.format("%Y-%m-%d").to_string(),
    }
}

fn describe(record: &ActivityRecord) -> String {
    let value = ui::format_value(record.value, &record.unit);
    match record.kind {
        MetricKind::Weight => format!(
            "{} {}: {value}",
            t!("health_stats.weight"),
            t!("health_stats.logged")
        ),
        MetricKind::HeartRate => format!("{}: {value}", t!("health_stats.heart_rate")),
        MetricKind::Sleep => format!(
            "{} {}: {value}",
            t!("health_stats.sleep"),
            t!("health_stats.logged")
        ),
        MetricKind::Steps => format!("{}: {value}", t!("health_stats.steps")),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentActivityWidget {
    state: LoadState<Vec<ActivityRecord>>,
}

impl RecentActivityWidget {
    pub fn loading() -> Self {
        Self {
            state: LoadState::Loading,
        }
    }

    pub async fn load(api: &dyn HealthApi) -> Self {
        let result = api.fetch_recent_activity().await;
        match &result {
            Ok(records) => tracing::debug!(count = records.len(), "recent activity loaded"),
            Err(err) => tracing::warn!(kind = err.kind(), "recent activity unavailable"),
        }
        Self {
            state: LoadState::from_result(result),
        }
    }

    pub fn state(&self) -> &LoadState<Vec<ActivityRecord>> {
        &self.state
    }

    pub fn render(&self) -> String {
        self.render_at(Utc::now())
    }

    pub fn render_at(&self, now: DateTime<Utc>) -> String {
        let mut lines = vec![style::header(t!("dashboard.recent_activity"))];
        match &self.state {
            LoadState::Loading => lines.push(render_loading()),
            LoadState::Failed(message) => lines.push(render_error(message)),
            LoadState::Ready(records) if records.is_empty() => {
                lines.push(style::dim(t!("dashboard.no_activity")));
            }
            LoadState::Ready(records) => {
                lines.extend(records.iter().map(|record| {
                    format!(
                        "  {} {}  {}",
                        style::accent("•"),
                        describe(record),
                        style::dim(time_ago(record.timestamp, now))
                    )
                }));
            }
        }
        lines.join("\n")
    }
}

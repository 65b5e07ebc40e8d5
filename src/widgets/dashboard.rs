use chrono::{DateTime, Utc};
use serde_json::json;

use super::{HealthStatsWidget, LoadState, RecentActivityWidget};
use crate::api::HealthApi;
use crate::ui::style;

/// Dashboard page: stat cards above the activity list.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub stats: HealthStatsWidget,
    pub activity: RecentActivityWidget,
}

impl Dashboard {
    /// Load both widgets concurrently. Either may fail independently.
    pub async fn load(api: &dyn HealthApi) -> Self {
        let (stats, activity) = tokio::join!(
            HealthStatsWidget::load(api),
            RecentActivityWidget::load(api)
        );
        Self { stats, activity }
    }

    pub fn render(&self) -> String {
        self.render_at(Utc::now())
    }

    pub fn render_at(&self, now: DateTime<Utc>) -> String {
        [
            style::header(t!("dashboard.title")),
            style::dim(t!("dashboard.subtitle")),
            String::new(),
            self.stats.render(),
            String::new(),
            self.activity.render_at(now),
        ]
        .join("\n")
    }

    /// Machine-readable snapshot: data on success, localized message on failure.
    pub fn to_json(&self) -> serde_json::Value {
        fn section<T: serde::Serialize>(state: &LoadState<T>) -> serde_json::Value {
            match state {
                LoadState::Loading => json!({ "status": "loading" }),
                LoadState::Failed(message) => json!({ "status": "error", "error": message }),
                LoadState::Ready(data) => json!({ "status": "ok", "data": data }),
            }
        }

        json!({
            "healthStats": section(self.stats.state()),
            "recentActivity": section(self.activity.state()),
        })
    }
}

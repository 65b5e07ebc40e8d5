//! Dashboard widgets: each loads through [`HealthApi`](crate::api::HealthApi)
//! and renders one of loading, inline error or data.

mod dashboard;
mod health_stats;
mod history;
mod recent_activity;

pub use dashboard::Dashboard;
pub use health_stats::HealthStatsWidget;
pub use history::HistoryTable;
pub use recent_activity::{RecentActivityWidget, time_ago};

use crate::error::localized_message;
use crate::ui::style;

/// Load state of a widget. A widget renders exactly one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    /// Known data-service errors become their localized message; anything
    /// else passes its own text through.
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Into<anyhow::Error>,
    {
        match result {
            Ok(data) => Self::Ready(data),
            Err(err) => Self::Failed(localized_message(&err.into())),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// `"Error: <message>"`, shown in place of the widget body.
pub(crate) fn render_error(message: &str) -> String {
    style::error(format!("{}: {message}", t!("common.error")))
}

pub(crate) fn render_loading() -> String {
    style::dim(t!("common.loading"))
}

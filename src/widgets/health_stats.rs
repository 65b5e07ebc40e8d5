use console::{Alignment, pad_str};

use super::{LoadState, render_error, render_loading};
use crate::api::{HealthApi, HealthStats, MetricKind};
use crate::ui::{self, style};

/// Four metric cards: weight, heart rate, sleep, steps.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthStatsWidget {
    state: LoadState<HealthStats>,
}

impl HealthStatsWidget {
    pub fn loading() -> Self {
        Self {
            state: LoadState::Loading,
        }
    }

    pub async fn load(api: &dyn HealthApi) -> Self {
        let result = api.fetch_health_stats().await;
        if let Err(err) = &result {
            tracing::warn!(kind = err.kind(), "health stats unavailable");
        }
        Self {
            state: LoadState::from_result(result),
        }
    }

    pub fn state(&self) -> &LoadState<HealthStats> {
        &self.state
    }

    pub fn render(&self) -> String {
        match &self.state {
            LoadState::Loading => MetricKind::ALL
                .iter()
                .map(|kind| format!("{} {}", style::accent(kind.label()), render_loading()))
                .collect::<Vec<_>>()
                .join("\n"),
            LoadState::Failed(message) => render_error(message),
            LoadState::Ready(stats) => MetricKind::ALL
                .iter()
                .map(|&kind| render_card(stats, kind))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn card_label_key(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::Weight => "health_stats.weight",
        MetricKind::HeartRate => "health_stats.heart_rate",
        MetricKind::Sleep => "health_stats.sleep",
        MetricKind::Steps => "health_stats.steps",
    }
}

fn render_card(stats: &HealthStats, kind: MetricKind) -> String {
    let stat = stats.get(kind);
    let label = style::accent(t!(card_label_key(kind)));
    let value = style::value(ui::format_value(stat.value, &stat.unit));
    format!(
        "{} {} {}",
        pad_str(&label, 20, Alignment::Left, None),
        pad_str(&value, 14, Alignment::Left, None),
        style::dim(stat.last_updated.format("%Y-%m-%d %H:%M")),
    )
}

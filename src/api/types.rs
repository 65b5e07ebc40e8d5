use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One of the four tracked health metrics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MetricKind {
    Weight,
    HeartRate,
    Sleep,
    Steps,
}

impl MetricKind {
    pub const ALL: [Self; 4] = [Self::Weight, Self::HeartRate, Self::Sleep, Self::Steps];

    /// Canonical unit tag recorded with values of this kind.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::HeartRate => "bpm",
            Self::Sleep => "hours",
            Self::Steps => "steps",
        }
    }

    /// Translation key of the display label.
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Weight => "stat_types.weight",
            Self::HeartRate => "stat_types.heart_rate",
            Self::Sleep => "stat_types.sleep",
            Self::Steps => "stat_types.steps",
        }
    }

    pub fn label(self) -> String {
        t!(self.label_key()).to_string()
    }
}

/// Latest reading of a single metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStat {
    pub value: f64,
    pub unit: String,
    pub last_updated: DateTime<Utc>,
}

/// Aggregate of the four metrics shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStats {
    pub weight: HealthStat,
    pub heart_rate: HealthStat,
    pub sleep: HealthStat,
    pub steps: HealthStat,
}

impl HealthStats {
    pub fn get(&self, kind: MetricKind) -> &HealthStat {
        match kind {
            MetricKind::Weight => &self.weight,
            MetricKind::HeartRate => &self.heart_rate,
            MetricKind::Sleep => &self.sleep,
            MetricKind::Steps => &self.steps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MetricKind,
    pub value: f64,
    pub unit: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

/// One day's reading on a metric's history page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub value: f64,
}

/// User-submitted entry not yet accepted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    #[serde(rename = "type")]
    pub kind: MetricKind,
    pub value: f64,
}

impl EntryDraft {
    pub const fn new(kind: MetricKind, value: f64) -> Self {
        Self { kind, value }
    }
}

//! Canned payloads served by the simulated backend.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::types::{ActivityRecord, HealthStat, HealthStats, HistoryEntry, MetricKind};

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .unwrap_or_default()
}

fn stat(value: f64, kind: MetricKind, last_updated: DateTime<Utc>) -> HealthStat {
    HealthStat {
        value,
        unit: kind.unit().to_string(),
        last_updated,
    }
}

pub fn health_stats() -> HealthStats {
    HealthStats {
        weight: stat(75.2, MetricKind::Weight, at(2024, 1, 15, 10, 30, 0)),
        heart_rate: stat(72.0, MetricKind::HeartRate, at(2024, 1, 15, 14, 45, 0)),
        sleep: stat(7.5, MetricKind::Sleep, at(2024, 1, 15, 6, 0, 0)),
        steps: stat(8432.0, MetricKind::Steps, at(2024, 1, 15, 23, 59, 59)),
    }
}

fn record(
    id: &str,
    kind: MetricKind,
    value: f64,
    timestamp: DateTime<Utc>,
    description: &str,
) -> ActivityRecord {
    ActivityRecord {
        id: id.to_string(),
        kind,
        value,
        unit: kind.unit().to_string(),
        timestamp,
        description: description.to_string(),
    }
}

/// In id order.
pub fn recent_activity() -> Vec<ActivityRecord> {
    vec![
        record(
            "1",
            MetricKind::Weight,
            75.2,
            at(2024, 1, 15, 10, 30, 0),
            "Weight logged: 75.2 kg",
        ),
        record(
            "2",
            MetricKind::HeartRate,
            72.0,
            at(2024, 1, 15, 14, 45, 0),
            "Heart rate: 72 bpm",
        ),
        record(
            "3",
            MetricKind::Sleep,
            7.5,
            at(2024, 1, 14, 6, 0, 0),
            "Sleep logged: 7.5 hours",
        ),
    ]
}

/// Seven daily readings, 2024-01-01 through 2024-01-07.
pub fn history(kind: MetricKind) -> Vec<HistoryEntry> {
    let values: [f64; 7] = match kind {
        MetricKind::Weight => [75.2, 75.0, 74.8, 74.5, 74.3, 74.1, 73.9],
        MetricKind::HeartRate => [72.0, 75.0, 68.0, 80.0, 73.0, 77.0, 71.0],
        MetricKind::Sleep => [7.5, 8.0, 6.5, 7.8, 8.2, 9.0, 7.0],
        MetricKind::Steps => [8500.0, 10200.0, 7800.0, 11500.0, 9200.0, 12800.0, 8900.0],
    };
    (1..)
        .zip(values)
        .filter_map(|(day, value)| {
            NaiveDate::from_ymd_opt(2024, 1, day).map(|date| HistoryEntry { date, value })
        })
        .collect()
}

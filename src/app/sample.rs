use std::fmt;

use serde::Serialize;

use crate::api::{EntryDraft, HealthApi, MetricKind, fixtures};

/// Data-service operation exercised by `vitaldash sample`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Operation {
    HealthStats,
    RecentActivity,
    AddEntry,
}

/// Outcome counts of repeated calls to one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleReport {
    pub operation: Operation,
    pub runs: u32,
    pub failures: u32,
    /// Successful reads whose payload differed from the canned snapshot.
    pub mismatches: u32,
}

impl SampleReport {
    pub fn successes(&self) -> u32 {
        self.runs - self.failures
    }

    /// Observed failure rate; zero for an empty sample.
    pub fn rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            f64::from(self.failures) / f64::from(self.runs)
        }
    }
}

impl fmt::Display for SampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} failed ({:.2}%)",
            self.operation,
            self.failures,
            self.runs,
            self.rate() * 100.0
        )
    }
}

/// Call `operation` `runs` times in sequence and count failures.
pub async fn sample_failure_rate(
    api: &dyn HealthApi,
    operation: Operation,
    runs: u32,
) -> SampleReport {
    let mut report = SampleReport {
        operation,
        runs,
        failures: 0,
        mismatches: 0,
    };
    let stats = fixtures::health_stats();
    let activity = fixtures::recent_activity();

    for _ in 0..runs {
        let matched = match operation {
            Operation::HealthStats => api.fetch_health_stats().await.map(|got| got == stats),
            Operation::RecentActivity => {
                api.fetch_recent_activity().await.map(|got| got == activity)
            }
            Operation::AddEntry => api
                .add_health_entry(EntryDraft::new(MetricKind::Steps, 1.0))
                .await
                .map(|()| true),
        };
        match matched {
            Ok(true) => {}
            Ok(false) => report.mismatches += 1,
            Err(_) => report.failures += 1,
        }
    }

    tracing::info!(
        operation = %operation,
        runs,
        failures = report.failures,
        "sampling finished"
    );
    report
}

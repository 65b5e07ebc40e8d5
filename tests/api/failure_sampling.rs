use super::dashboard_harness::instant_mock;
use vitaldash::app::sample::{Operation, sample_failure_rate};

const RUNS: u32 = 10_000;

async fn assert_rate_near(operation: Operation, expected: f64) {
    let api = instant_mock();
    let report = sample_failure_rate(&api, operation, RUNS).await;

    assert_eq!(report.runs, RUNS);
    assert_eq!(report.mismatches, 0, "successful payloads must match the fixtures");
    assert!(
        (report.rate() - expected).abs() <= 0.02,
        "{operation}: observed {:.4}, expected {expected}",
        report.rate()
    );
}

#[tokio::test(start_paused = true)]
async fn health_stats_fails_about_ten_percent() {
    assert_rate_near(Operation::HealthStats, 0.10).await;
}

#[tokio::test(start_paused = true)]
async fn recent_activity_fails_about_five_percent() {
    assert_rate_near(Operation::RecentActivity, 0.05).await;
}

#[tokio::test(start_paused = true)]
async fn add_entry_fails_about_fifteen_percent() {
    let api = instant_mock();
    let report = sample_failure_rate(&api, Operation::AddEntry, RUNS).await;

    assert!((report.rate() - 0.15).abs() <= 0.02, "observed {}", report.rate());
    // every success was recorded exactly once
    assert_eq!(
        u32::try_from(api.recorded_entries().len()).unwrap(),
        report.successes()
    );
}

#[tokio::test(start_paused = true)]
async fn seeded_runs_are_reproducible() {
    let first = sample_failure_rate(&instant_mock(), Operation::HealthStats, 500).await;
    let second = sample_failure_rate(&instant_mock(), Operation::HealthStats, 500).await;
    assert_eq!(first, second);
}

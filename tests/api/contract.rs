use std::time::Duration;

use super::dashboard_harness::mock;
use vitaldash::api::{EntryDraft, HealthApi, MetricKind, fixtures};
use vitaldash::error::{ApiError, localized_message};
use vitaldash::widgets::Dashboard;

#[tokio::test(start_paused = true)]
async fn recent_activity_has_fixed_ids() {
    let api = mock(0.0);
    let records = api.fetch_recent_activity().await.unwrap();
    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[tokio::test(start_paused = true)]
async fn health_stats_snapshot_is_exact() {
    let stats = mock(0.0).fetch_health_stats().await.unwrap();
    assert!((stats.weight.value - 75.2).abs() < f64::EPSILON);
    assert_eq!(stats.weight.unit, "kg");
    assert!((stats.heart_rate.value - 72.0).abs() < f64::EPSILON);
    assert_eq!(stats.heart_rate.unit, "bpm");
    assert!((stats.sleep.value - 7.5).abs() < f64::EPSILON);
    assert_eq!(stats.sleep.unit, "hours");
    assert!((stats.steps.value - 8432.0).abs() < f64::EPSILON);
    assert_eq!(stats.steps.unit, "steps");
    assert_eq!(stats, fixtures::health_stats());
}

#[tokio::test(start_paused = true)]
async fn add_entry_records_only_on_success() {
    let ok = mock(0.0);
    let draft = EntryDraft::new(MetricKind::Weight, 80.0);
    ok.add_health_entry(draft).await.unwrap();
    assert_eq!(ok.recorded_entries(), vec![draft]);

    let failing = mock(1.0);
    let err = failing.add_health_entry(draft).await.unwrap_err();
    assert_eq!(err, ApiError::AddEntryFailed);
    assert_eq!(err.kind(), "ADD_ENTRY_FAILED");
    assert!(failing.recorded_entries().is_empty());
}

#[tokio::test(start_paused = true)]
async fn failures_map_to_localized_messages() {
    let api = mock(1.0);
    let stats = api.fetch_health_stats().await.unwrap_err();
    let activity = api.fetch_recent_activity().await.unwrap_err();

    assert_eq!(stats.kind(), "HEALTH_STATS_FAILED");
    assert_eq!(activity.kind(), "RECENT_ACTIVITY_FAILED");
    assert_eq!(
        localized_message(&stats.into()),
        "Failed to load health stats"
    );
    assert_eq!(
        localized_message(&anyhow::Error::from(activity).context("dashboard")),
        "Failed to load recent activity"
    );
}

#[tokio::test(start_paused = true)]
async fn completions_are_unordered_across_operations() {
    let api = mock(0.0);
    let started = tokio::time::Instant::now();

    // activity (300 ms) resolves before stats (500 ms) even though it was issued second
    let stats = api.fetch_health_stats();
    let activity = async {
        let records = api.fetch_recent_activity().await;
        (records, started.elapsed())
    };
    let (stats, (records, activity_done)) = tokio::join!(stats, activity);

    assert!(stats.is_ok() && records.is_ok());
    assert!(activity_done < Duration::from_millis(500));
    assert!(started.elapsed() >= Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn dashboard_loads_both_widgets() {
    let dashboard = Dashboard::load(mock(0.0).as_ref()).await;
    assert_eq!(dashboard.to_json()["recentActivity"]["data"][2]["id"], "3");
    assert_eq!(dashboard.to_json()["healthStats"]["data"]["steps"]["unit"], "steps");
}

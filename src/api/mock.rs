use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

use super::fixtures;
use super::traits::{ApiFuture, HealthApi};
use super::types::{ActivityRecord, EntryDraft, HealthStats};
use crate::config::{ApiConfig, EndpointConfig};
use crate::error::ApiError;

/// In-memory stand-in for the health backend.
///
/// Each call sleeps for the configured latency, then fails with the
/// configured probability. Successful reads return the fixed payloads in
/// [`fixtures`]; successful writes are recorded and logged, nothing else.
pub struct MockHealthApi {
    config: ApiConfig,
    rng: Mutex<StdRng>,
    recorded: Mutex<Vec<EntryDraft>>,
}

impl MockHealthApi {
    pub fn new(config: ApiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            config,
            rng: Mutex::new(rng),
            recorded: Mutex::new(Vec::new()),
        }
    }

    /// Drafts accepted so far, in submission order.
    pub fn recorded_entries(&self) -> Vec<EntryDraft> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn roll_failure(&self, rate: f64) -> bool {
        if rate.is_nan() || rate <= 0.0 {
            return false;
        }
        if rate >= 1.0 {
            return true;
        }
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_bool(rate)
    }

    /// Wait out the latency, then decide this call's outcome.
    async fn simulate(&self, operation: &'static str, endpoint: EndpointConfig) -> bool {
        let latency = endpoint.latency();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        let failed = self.roll_failure(endpoint.failure_rate);
        tracing::debug!(
            operation,
            latency_ms = endpoint.latency_ms,
            failed,
            "simulated call resolved"
        );
        failed
    }
}

impl std::fmt::Debug for MockHealthApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHealthApi")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HealthApi for MockHealthApi {
    fn name(&self) -> &str {
        "mock"
    }

    fn fetch_health_stats(&self) -> ApiFuture<'_, HealthStats> {
        Box::pin(async move {
            if self
                .simulate("fetch_health_stats", self.config.health_stats)
                .await
            {
                return Err(ApiError::HealthStatsFailed);
            }
            Ok(fixtures::health_stats())
        })
    }

    fn fetch_recent_activity(&self) -> ApiFuture<'_, Vec<ActivityRecord>> {
        Box::pin(async move {
            if self
                .simulate("fetch_recent_activity", self.config.recent_activity)
                .await
            {
                return Err(ApiError::RecentActivityFailed);
            }
            Ok(fixtures::recent_activity())
        })
    }

    fn add_health_entry(&self, draft: EntryDraft) -> ApiFuture<'_, ()> {
        Box::pin(async move {
            if self.simulate("add_health_entry", self.config.add_entry).await {
                return Err(ApiError::AddEntryFailed);
            }
            self.recorded
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(draft);
            tracing::info!(kind = %draft.kind, value = draft.value, "health entry added");
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MetricKind;
    use std::time::Duration;
    use tokio::time::Instant;

    fn reliable() -> MockHealthApi {
        MockHealthApi::new(ApiConfig::default().with_failure_rate(0.0))
    }

    fn broken() -> MockHealthApi {
        MockHealthApi::new(ApiConfig::default().with_failure_rate(1.0))
    }

    #[tokio::test(start_paused = true)]
    async fn health_stats_waits_configured_latency() {
        let api = reliable();
        let start = Instant::now();
        api.fetch_health_stats().await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(510), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn each_operation_has_its_own_latency() {
        let api = reliable();

        let start = Instant::now();
        api.fetch_recent_activity().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(300));
        assert!(start.elapsed() < Duration::from_millis(500));

        let start = Instant::now();
        api.add_health_entry(EntryDraft::new(MetricKind::Steps, 1000.0))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_rate_never_fails() {
        let api = reliable();
        for _ in 0..50 {
            assert_eq!(api.fetch_health_stats().await.unwrap(), fixtures::health_stats());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn full_rate_always_fails_with_operation_kind() {
        let api = broken();
        assert_eq!(
            api.fetch_health_stats().await.unwrap_err(),
            ApiError::HealthStatsFailed
        );
        assert_eq!(
            api.fetch_recent_activity().await.unwrap_err(),
            ApiError::RecentActivityFailed
        );
        assert_eq!(
            api.add_health_entry(EntryDraft::new(MetricKind::Weight, 80.0))
                .await
                .unwrap_err(),
            ApiError::AddEntryFailed
        );
    }

    #[tokio::test(start_paused = true)]
    async fn successful_add_records_draft_once() {
        let api = reliable();
        let draft = EntryDraft::new(MetricKind::Weight, 80.0);
        api.add_health_entry(draft).await.unwrap();
        assert_eq!(api.recorded_entries(), vec![draft]);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_add_records_nothing() {
        let api = broken();
        let _ = api
            .add_health_entry(EntryDraft::new(MetricKind::Sleep, 8.0))
            .await;
        assert!(api.recorded_entries().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn same_seed_gives_same_outcomes() {
        let config = ApiConfig::default().with_latency_ms(0).with_seed(99);
        let a = MockHealthApi::new(config.clone());
        let b = MockHealthApi::new(config);

        let mut outcomes_a = Vec::new();
        let mut outcomes_b = Vec::new();
        for _ in 0..200 {
            outcomes_a.push(a.fetch_health_stats().await.is_ok());
            outcomes_b.push(b.fetch_health_stats().await.is_ok());
        }
        assert_eq!(outcomes_a, outcomes_b);
    }

    #[test]
    fn nan_rate_is_treated_as_reliable() {
        let api = reliable();
        assert!(!api.roll_failure(f64::NAN));
    }

    #[test]
    fn debug_output_hides_rng_state() {
        let rendered = format!("{:?}", reliable());
        assert!(rendered.starts_with("MockHealthApi"));
        assert!(!rendered.contains("rng"));
    }
}

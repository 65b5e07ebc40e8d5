#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;

use vitaldash::api::{
    ActivityRecord, ApiFuture, EntryDraft, HealthApi, HealthStats, MockHealthApi, fixtures,
};
use vitaldash::config::ApiConfig;
use vitaldash::error::ApiError;

pub const SAMPLE_SEED: u64 = 0x5EED_0010;

/// Mock with every operation at `rate`, default latencies.
pub fn mock(rate: f64) -> Arc<MockHealthApi> {
    Arc::new(MockHealthApi::new(
        ApiConfig::default().with_failure_rate(rate).with_seed(SAMPLE_SEED),
    ))
}

/// Seeded mock with the default failure profile and no latency.
pub fn instant_mock() -> MockHealthApi {
    MockHealthApi::new(ApiConfig::default().with_latency_ms(0).with_seed(SAMPLE_SEED))
}

/// Backend whose `add_health_entry` blocks until the test releases it.
///
/// Reads resolve immediately from the fixtures.
pub struct GatedApi {
    release: Notify,
    fail: bool,
    calls: AtomicUsize,
}

impl GatedApi {
    pub fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            release: Notify::new(),
            fail,
            calls: AtomicUsize::new(0),
        })
    }

    /// Let one pending (or the next) submission resolve.
    pub fn release_one(&self) {
        self.release.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HealthApi for GatedApi {
    fn name(&self) -> &str {
        "gated"
    }

    fn fetch_health_stats(&self) -> ApiFuture<'_, HealthStats> {
        Box::pin(async { Ok(fixtures::health_stats()) })
    }

    fn fetch_recent_activity(&self) -> ApiFuture<'_, Vec<ActivityRecord>> {
        Box::pin(async { Ok(fixtures::recent_activity()) })
    }

    fn add_health_entry(&self, _draft: EntryDraft) -> ApiFuture<'_, ()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            self.release.notified().await;
            if self.fail {
                Err(ApiError::AddEntryFailed)
            } else {
                Ok(())
            }
        })
    }
}

pub fn plain(text: &str) -> String {
    console::strip_ansi_codes(text).to_string()
}

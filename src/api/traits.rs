use std::future::Future;
use std::pin::Pin;

use super::types::{ActivityRecord, EntryDraft, HealthStats};
use crate::error::ApiError;

pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'a>>;

/// Data-access seam used by widgets and forms.
///
/// Every call resolves independently: there is no ordering between
/// concurrent calls, no internal retry and no cancellation. Dropping the
/// returned future abandons the call.
pub trait HealthApi: Send + Sync {
    /// Backend name (e.g. "mock")
    fn name(&self) -> &str;

    /// Latest value of every tracked metric.
    fn fetch_health_stats(&self) -> ApiFuture<'_, HealthStats>;

    /// Recent entries, newest first by convention.
    fn fetch_recent_activity(&self) -> ApiFuture<'_, Vec<ActivityRecord>>;

    /// Submit a new entry. Resolves with no payload on success.
    fn add_health_entry(&self, draft: EntryDraft) -> ApiFuture<'_, ()>;
}

pub mod fixtures;
mod mock;
mod traits;
mod types;

pub use mock::MockHealthApi;
pub use traits::{ApiFuture, HealthApi};
pub use types::{ActivityRecord, EntryDraft, HealthStat, HealthStats, HistoryEntry, MetricKind};

mod api;
mod core;
mod observability;

pub use api::{ApiConfig, EndpointConfig};
pub use core::{Config, SUPPORTED_LOCALES};
pub use observability::ObservabilityConfig;

pub mod schema;

pub use schema::{ApiConfig, Config, EndpointConfig, ObservabilityConfig, SUPPORTED_LOCALES};

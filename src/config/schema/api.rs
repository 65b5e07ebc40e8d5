use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

/// Simulated behaviour of one data-service operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Artificial delay before the call resolves.
    pub latency_ms: u64,
    /// Probability in `0.0..=1.0` that a call fails.
    pub failure_rate: f64,
}

impl EndpointConfig {
    pub const fn new(latency_ms: u64, failure_rate: f64) -> Self {
        Self {
            latency_ms,
            failure_rate,
        }
    }

    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(ConfigError::Validation(format!(
                "api.{name}.failure_rate must be within 0.0..=1.0, got {}",
                self.failure_rate
            ))
            .into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Seed for the failure RNG; unset draws from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_health_stats")]
    pub health_stats: EndpointConfig,
    #[serde(default = "default_recent_activity")]
    pub recent_activity: EndpointConfig,
    #[serde(default = "default_add_entry")]
    pub add_entry: EndpointConfig,
}

fn default_health_stats() -> EndpointConfig {
    EndpointConfig::new(500, 0.10)
}

fn default_recent_activity() -> EndpointConfig {
    EndpointConfig::new(300, 0.05)
}

fn default_add_entry() -> EndpointConfig {
    EndpointConfig::new(800, 0.15)
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            seed: None,
            health_stats: default_health_stats(),
            recent_activity: default_recent_activity(),
            add_entry: default_add_entry(),
        }
    }
}

impl ApiConfig {
    /// Override the failure rate of every operation.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.health_stats.failure_rate = rate;
        self.recent_activity.failure_rate = rate;
        self.add_entry.failure_rate = rate;
        self
    }

    /// Override the latency of every operation.
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.health_stats.latency_ms = latency_ms;
        self.recent_activity.latency_ms = latency_ms;
        self.add_entry.latency_ms = latency_ms;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.health_stats.validate("health_stats")?;
        self.recent_activity.validate("recent_activity")?;
        self.add_entry.validate("add_entry")?;
        Ok(())
    }
}

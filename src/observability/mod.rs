use anyhow::{Result, bail};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::config::ObservabilityConfig;

/// Parse a configured log level name.
pub fn parse_level(raw: &str) -> Result<Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => bail!("Unknown log level '{other}' (expected trace|debug|info|warn|error)"),
    }
}

/// Install the global fmt subscriber. Call once, from `main`.
pub fn init_logging(config: &ObservabilityConfig) -> Result<()> {
    let level = parse_level(&config.log_level)?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("setting default subscriber failed: {e}"))?;
    Ok(())
}

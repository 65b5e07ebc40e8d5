use super::super::{ApiConfig, ObservabilityConfig};
use crate::error::ConfigError;
use anyhow::Result;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// UI language: "en" | "es" | "fr". Unset means detect from the environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());

        Self {
            config_path: home.join(".vitaldash").join("config.toml"),
            locale: None,
            api: ApiConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if let Some(locale) = self
            .locale
            .as_deref()
            .filter(|locale| !super::SUPPORTED_LOCALES.contains(locale))
        {
            return Err(ConfigError::Validation(format!(
                "locale must be one of {}, got '{locale}'",
                super::SUPPORTED_LOCALES.join(", "),
            ))
            .into());
        }
        self.api.validate()?;
        crate::observability::parse_level(&self.observability.log_level)?;
        Ok(())
    }
}

use super::Config;

/// Locales with a translation table under `locales/`.
pub const SUPPORTED_LOCALES: [&str; 3] = ["en", "es", "fr"];

/// Environment variables consulted when the config leaves the locale unset.
const LOCALE_ENV_VARS: [&str; 4] = ["VITALDASH_LANG", "LC_ALL", "LC_MESSAGES", "LANG"];

fn detect_env_locale() -> Option<String> {
    LOCALE_ENV_VARS.iter().find_map(|key| {
        std::env::var(key)
            .ok()
            .map(|lang| lang.trim().to_lowercase())
            .filter(|lang| !lang.is_empty())
    })
}

/// Detect locale: config value -> `VITALDASH_LANG` -> `LC_ALL` -> `LC_MESSAGES` -> `LANG` -> `"en"`.
fn detect_locale(config_locale: Option<&str>) -> String {
    let configured = config_locale
        .map(|locale| locale.trim().to_lowercase())
        .filter(|locale| !locale.is_empty());

    configured
        .or_else(detect_env_locale)
        .map_or_else(|| "en".into(), |lang| normalise_locale(&lang))
}

/// Normalise `"es_ES.UTF-8"` -> `"es"`, `"en_US"` -> `"en"`, passthrough `"fr"`.
fn normalise_locale(raw: &str) -> String {
    let base = raw.split('.').next().unwrap_or(raw);
    let lang = base.split('_').next().unwrap_or(base);
    lang.to_string()
}

/// Unsupported languages render in English.
fn resolve_supported(locale: &str) -> &'static str {
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|supported| *supported == locale)
        .unwrap_or("en")
}

impl Config {
    /// Detect locale from config -> environment, then set `rust_i18n::set_locale`.
    pub fn apply_locale(&self) -> String {
        let detected = detect_locale(self.locale.as_deref());
        let locale = resolve_supported(&detected);
        rust_i18n::set_locale(locale);
        tracing::debug!(locale, detected = %detected, "locale applied");
        locale.to_string()
    }

    /// Like [`Config::apply_locale`], but an explicit request wins over detection.
    pub fn apply_locale_with(&self, requested: Option<&str>) -> String {
        let Some(requested) = requested else {
            return self.apply_locale();
        };
        let normalised = normalise_locale(&requested.trim().to_lowercase());
        let locale = resolve_supported(&normalised);
        rust_i18n::set_locale(locale);
        tracing::debug!(locale, requested, "locale requested");
        locale.to_string()
    }
}

mod loader;
mod locale;
mod types;

pub use locale::SUPPORTED_LOCALES;
pub use types::Config;

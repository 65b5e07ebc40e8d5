use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `Vitaldash`.
///
/// Library callers match on these to decide what to show; the CLI edge keeps
/// using `anyhow::Result` for context chains and maps back through
/// [`localized_message`].
#[derive(Debug, Error)]
pub enum VitalError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Data service ─────────────────────────────────────────────────────
    #[error("api: {0}")]
    Api(#[from] ApiError),

    // ── Overlay hosts ────────────────────────────────────────────────────
    #[error("dialog: {0}")]
    Dialog(#[from] DialogError),

    // ── Forms ────────────────────────────────────────────────────────────
    #[error("form: {0}")]
    Form(#[from] FormError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Data service errors ─────────────────────────────────────────────────────

/// One sentinel per data-service operation. The `Display` text doubles as
/// the untranslated message; [`ApiError::kind`] is the stable string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ApiError {
    #[error("Failed to fetch health stats")]
    HealthStatsFailed,

    #[error("Failed to fetch recent activity")]
    RecentActivityFailed,

    #[error("Failed to add health entry")]
    AddEntryFailed,
}

impl ApiError {
    pub const ALL: [Self; 3] = [
        Self::HealthStatsFailed,
        Self::RecentActivityFailed,
        Self::AddEntryFailed,
    ];

    pub const fn kind(self) -> &'static str {
        match self {
            Self::HealthStatsFailed => "HEALTH_STATS_FAILED",
            Self::RecentActivityFailed => "RECENT_ACTIVITY_FAILED",
            Self::AddEntryFailed => "ADD_ENTRY_FAILED",
        }
    }

    pub fn from_kind(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|err| err.kind() == kind)
    }

    /// Translation key of the user-facing message.
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::HealthStatsFailed => "errors.failed_to_load_health_stats",
            Self::RecentActivityFailed => "errors.failed_to_load_recent_activity",
            Self::AddEntryFailed => "errors.failed_to_add_health_entry",
        }
    }

    pub fn localized(self) -> String {
        t!(self.message_key()).to_string()
    }
}

// ─── Overlay host errors ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialogError {
    /// A capability was requested from a scope with no provider installed.
    #[error("{capability} must be used within a {provider}")]
    MissingProvider {
        capability: &'static str,
        provider: &'static str,
    },
}

// ─── Form errors ─────────────────────────────────────────────────────────────

/// A single failed field; `key` is the translation key of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub key: &'static str,
}

impl FieldError {
    pub const fn new(field: &'static str, key: &'static str) -> Self {
        Self { field, key }
    }

    pub fn message(&self) -> String {
        t!(self.key).to_string()
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("invalid fields: {}", join_fields(.0))]
    Invalid(Vec<FieldError>),

    #[error(transparent)]
    Api(#[from] ApiError),
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{} ({})", f.field, f.key))
        .collect::<Vec<_>>()
        .join(", ")
}

// ─── Presentation mapping ────────────────────────────────────────────────────

/// Map any error to user-facing text.
///
/// Known data-service kinds are translated, whether typed or relayed as a
/// bare kind string; anything else passes its own message through, falling
/// back to the generic message when that is empty.
pub fn localized_message(err: &anyhow::Error) -> String {
    if let Some(api) = find_api_error(err) {
        return api.localized();
    }
    let text = err.to_string();
    let trimmed = text.trim();
    if let Some(api) = ApiError::from_kind(trimmed) {
        return api.localized();
    }
    if trimmed.is_empty() {
        t!("errors.generic_error").to_string()
    } else {
        text
    }
}

fn find_api_error(err: &anyhow::Error) -> Option<ApiError> {
    err.chain().find_map(|cause| {
        if let Some(api) = cause.downcast_ref::<ApiError>() {
            return Some(*api);
        }
        match cause.downcast_ref::<VitalError>() {
            Some(VitalError::Api(api) | VitalError::Form(FormError::Api(api))) => Some(*api),
            _ => match cause.downcast_ref::<FormError>() {
                Some(FormError::Api(api)) => Some(*api),
                _ => None,
            },
        }
    })
}

use std::sync::Arc;

use super::slot::Slot;
use crate::ui::style;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: Option<String>,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Single-slot notification host; same replace/idempotent-hide rules as
/// [`DialogHost`](super::DialogHost).
#[derive(Clone)]
pub struct ToastHost {
    slot: Slot<Toast>,
}

impl ToastHost {
    pub fn new() -> Self {
        Self { slot: Slot::new() }
    }

    pub fn show_toast(&self, toast: Toast) {
        tracing::debug!(kind = %toast.kind, message = %toast.message, "toast shown");
        let id = self.slot.reserve();
        self.slot.install(id, Arc::new(toast));
    }

    pub fn hide_toast(&self) {
        self.slot.clear();
    }

    pub fn current(&self) -> Option<Toast> {
        self.slot.active().map(|(_, toast)| (*toast).clone())
    }

    pub fn render(&self) -> Option<String> {
        let toast = self.current()?;
        let body = match &toast.title {
            Some(title) => format!("{title}: {}", toast.message),
            None => toast.message.clone(),
        };
        Some(match toast.kind {
            ToastKind::Success => style::success(body),
            ToastKind::Error => style::error(body),
            ToastKind::Warning => style::yellow(body),
            ToastKind::Info => style::cyan(body),
        })
    }

    /// Whether both handles refer to the same host.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.slot.shares_state_with(&other.slot)
    }
}

impl Default for ToastHost {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ToastHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastHost")
            .field("current", &self.current())
            .finish()
    }
}

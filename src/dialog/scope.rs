use super::host::DialogHost;
use super::toast::ToastHost;
use crate::error::DialogError;

/// Explicit context threaded through the UI tree.
///
/// Hosts are installed once at the application root; anything below looks
/// them up with [`use_dialog`] / [`use_toast`]. A scope without a host
/// reports a usage error instead of silently creating one.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    dialogs: Option<DialogHost>,
    toasts: Option<ToastHost>,
}

impl Scope {
    /// A scope with nothing provided.
    pub fn new() -> Self {
        Self::default()
    }

    /// Application root: fresh dialog and toast hosts.
    pub fn app() -> Self {
        Self::new()
            .with_dialogs(DialogHost::new())
            .with_toasts(ToastHost::new())
    }

    pub fn with_dialogs(mut self, host: DialogHost) -> Self {
        self.dialogs = Some(host);
        self
    }

    pub fn with_toasts(mut self, host: ToastHost) -> Self {
        self.toasts = Some(host);
        self
    }
}

/// Access the enclosing dialog host.
pub fn use_dialog(scope: &Scope) -> Result<DialogHost, DialogError> {
    scope.dialogs.clone().ok_or(DialogError::MissingProvider {
        capability: "use_dialog",
        provider: "DialogHost",
    })
}

/// Access the enclosing toast host.
pub fn use_toast(scope: &Scope) -> Result<ToastHost, DialogError> {
    scope.toasts.clone().ok_or(DialogError::MissingProvider {
        capability: "use_toast",
        provider: "ToastHost",
    })
}

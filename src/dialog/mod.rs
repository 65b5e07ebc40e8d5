mod host;
mod scope;
mod slot;
mod toast;

pub use host::{DialogContent, DialogHost, Dismiss};
pub use scope::{Scope, use_dialog, use_toast};
pub use toast::{Toast, ToastHost, ToastKind};

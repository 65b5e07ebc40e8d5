use std::sync::{Arc, Mutex, OnceLock};

use super::lock;
use super::validation::{parse_positive_value, parse_stat_type};
use crate::api::{EntryDraft, HealthApi, MetricKind};
use crate::dialog::{DialogContent, Dismiss, Scope, Toast, ToastHost, use_dialog, use_toast};
use crate::error::{DialogError, FieldError, FormError};
use crate::ui::{self, style};

/// Raw field state of the add-entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddEntryForm {
    default_stat_type: Option<MetricKind>,
    stat_type: String,
    value: String,
}

impl AddEntryForm {
    pub fn new(default_stat_type: Option<MetricKind>) -> Self {
        Self {
            default_stat_type,
            stat_type: default_stat_type.map(|k| k.to_string()).unwrap_or_default(),
            value: String::new(),
        }
    }

    pub fn set_stat_type(&mut self, raw: impl Into<String>) {
        self.stat_type = raw.into();
    }

    pub fn set_value(&mut self, raw: impl Into<String>) {
        self.value = raw.into();
    }

    pub fn stat_type(&self) -> &str {
        &self.stat_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Kind currently selected, if the field holds a known one.
    pub fn selected_kind(&self) -> Option<MetricKind> {
        self.stat_type.parse().ok()
    }

    /// Every failing field is reported, not just the first.
    pub fn validate(&self) -> Result<EntryDraft, Vec<FieldError>> {
        let kind = parse_stat_type("type", &self.stat_type);
        let value = parse_positive_value("value", &self.value);
        match (kind, value) {
            (Ok(kind), Ok(value)) => Ok(EntryDraft::new(kind, value)),
            (kind, value) => Err([kind.err(), value.err()].into_iter().flatten().collect()),
        }
    }

    /// Back to the initial values.
    pub fn reset(&mut self) {
        *self = Self::new(self.default_stat_type);
    }
}

struct AddEntrySession {
    form: Mutex<AddEntryForm>,
    errors: Mutex<Vec<FieldError>>,
    api: Arc<dyn HealthApi>,
    toasts: ToastHost,
    dismiss: OnceLock<Dismiss>,
}

impl AddEntrySession {
    fn close(&self) -> bool {
        self.dismiss.get().is_some_and(Dismiss::dismiss)
    }
}

/// Dialog content for the add-entry form.
pub struct AddEntryDialog {
    session: Arc<AddEntrySession>,
}

impl DialogContent for AddEntryDialog {
    fn title(&self) -> String {
        t!("add_entry.title").to_string()
    }

    fn render(&self) -> String {
        let form = lock(&self.session.form).clone();
        let errors = lock(&self.session.errors).clone();
        let selected = form.selected_kind();

        let mut lines = vec![style::dim(t!("add_entry.subtitle"))];

        let stat_type = selected.map_or_else(
            || style::dim(t!("add_entry.select_stat_type")),
            |kind| style::value(kind.label()),
        );
        lines.push(format!("{}: {stat_type}", style::cyan(t!("add_entry.stat_type"))));

        let value = if form.value().is_empty() {
            style::dim(t!("add_entry.enter_value"))
        } else {
            style::value(form.value())
        };
        let unit = selected
            .map(|kind| format!(" {}", ui::unit_label(kind.unit())))
            .unwrap_or_default();
        lines.push(format!("{}: {value}{unit}", style::cyan(t!("add_entry.value"))));

        for error in &errors {
            lines.push(style::yellow(format!("  ! {}", error.message())));
        }

        lines.push(format!(
            "[{}] [{}]",
            t!("common.cancel"),
            t!("add_entry.add_entry")
        ));
        lines.join("\n")
    }
}

/// Trigger-side handle to an open add-entry dialog.
///
/// Shares the form state with the dialog content; submitting after the
/// dialog was replaced is allowed and only updates what is still relevant.
#[derive(Clone)]
pub struct AddEntryHandle {
    session: Arc<AddEntrySession>,
}

impl AddEntryHandle {
    pub fn set_stat_type(&self, raw: impl Into<String>) {
        lock(&self.session.form).set_stat_type(raw);
    }

    pub fn set_value(&self, raw: impl Into<String>) {
        lock(&self.session.form).set_value(raw);
    }

    pub fn form(&self) -> AddEntryForm {
        lock(&self.session.form).clone()
    }

    /// Field errors from the last submit attempt.
    pub fn errors(&self) -> Vec<FieldError> {
        lock(&self.session.errors).clone()
    }

    /// Whether this dialog is still the one showing.
    pub fn is_open(&self) -> bool {
        self.session.dismiss.get().is_some_and(Dismiss::is_active)
    }

    pub fn cancel(&self) {
        self.session.close();
        lock(&self.session.form).reset();
        lock(&self.session.errors).clear();
    }

    /// Validate, then submit through the data service.
    ///
    /// On success the dialog closes itself and the form resets. On failure
    /// the error is logged, an error toast is shown and the dialog stays
    /// open so the user can retry.
    pub async fn submit(&self) -> Result<(), FormError> {
        let validated = lock(&self.session.form).validate();
        let draft = match validated {
            Ok(draft) => draft,
            Err(fields) => {
                tracing::debug!(fields = fields.len(), "add-entry validation failed");
                lock(&self.session.errors).clone_from(&fields);
                return Err(FormError::Invalid(fields));
            }
        };
        lock(&self.session.errors).clear();

        match self.session.api.add_health_entry(draft).await {
            Ok(()) => {
                let closed = self.session.close();
                lock(&self.session.form).reset();
                if !closed {
                    tracing::debug!("add-entry resolved after its dialog was replaced");
                }
                self.session
                    .toasts
                    .show_toast(Toast::success(t!("add_entry.saved")));
                Ok(())
            }
            Err(err) => {
                let message = err.localized();
                tracing::error!(kind = err.kind(), "{message}");
                self.session
                    .toasts
                    .show_toast(Toast::error(message).with_title(t!("common.error")));
                Err(FormError::Api(err))
            }
        }
    }
}

/// Show the add-entry dialog in the scope's dialog host.
pub fn open_add_entry(
    scope: &Scope,
    api: Arc<dyn HealthApi>,
    default_stat_type: Option<MetricKind>,
) -> Result<AddEntryHandle, DialogError> {
    let dialogs = use_dialog(scope)?;
    let toasts = use_toast(scope)?;

    let session = Arc::new(AddEntrySession {
        form: Mutex::new(AddEntryForm::new(default_stat_type)),
        errors: Mutex::new(Vec::new()),
        api,
        toasts,
        dismiss: OnceLock::new(),
    });

    let content = Arc::clone(&session);
    dialogs.show(move |dismiss| {
        let _ = content.dismiss.set(dismiss);
        AddEntryDialog { session: content }
    });

    Ok(AddEntryHandle { session })
}

use std::sync::{Arc, Mutex, OnceLock};

use chrono::NaiveDate;

use super::lock;
use super::validation::parse_positive_value;
use crate::api::{ActivityRecord, HistoryEntry, MetricKind};
use crate::dialog::{DialogContent, Dismiss, Scope, use_dialog};
use crate::error::{DialogError, FieldError, FormError};
use crate::ui::{self, style};

/// Values the edit dialog opens with. Date and kind are fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct EditEntryInitial {
    pub stat_type: MetricKind,
    pub value: f64,
    pub date: NaiveDate,
    pub unit: String,
}

impl EditEntryInitial {
    pub fn from_record(record: &ActivityRecord) -> Self {
        Self {
            stat_type: record.kind,
            value: record.value,
            date: record.timestamp.date_naive(),
            unit: record.unit.clone(),
        }
    }

    /// A row of a metric's history table.
    pub fn from_history(kind: MetricKind, entry: &HistoryEntry) -> Self {
        Self {
            stat_type: kind,
            value: entry.value,
            date: entry.date,
            unit: kind.unit().to_string(),
        }
    }
}

/// Payload handed to the save callback.
#[derive(Debug, Clone, PartialEq)]
pub struct EditedEntry {
    pub date: NaiveDate,
    pub stat_type: MetricKind,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditEntryForm {
    initial: EditEntryInitial,
    value: String,
}

impl EditEntryForm {
    pub fn new(initial: EditEntryInitial) -> Self {
        let value = initial.value.to_string();
        Self { initial, value }
    }

    pub fn initial(&self) -> &EditEntryInitial {
        &self.initial
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, raw: impl Into<String>) {
        self.value = raw.into();
    }

    pub fn validate(&self) -> Result<EditedEntry, Vec<FieldError>> {
        let value = parse_positive_value("value", &self.value).map_err(|err| vec![err])?;
        Ok(EditedEntry {
            date: self.initial.date,
            stat_type: self.initial.stat_type,
            value,
        })
    }
}

type SaveCallback = Box<dyn Fn(EditedEntry) + Send + Sync>;

struct EditEntrySession {
    form: Mutex<EditEntryForm>,
    errors: Mutex<Vec<FieldError>>,
    on_save: SaveCallback,
    dismiss: OnceLock<Dismiss>,
}

pub struct EditEntryDialog {
    session: Arc<EditEntrySession>,
}

impl DialogContent for EditEntryDialog {
    fn title(&self) -> String {
        t!("edit_entry.title").to_string()
    }

    fn render(&self) -> String {
        let form = lock(&self.session.form).clone();
        let errors = lock(&self.session.errors).clone();
        let initial = form.initial();

        let mut lines = vec![
            format!(
                "{}: {}",
                style::cyan(t!("common.date")),
                style::dim(initial.date)
            ),
            format!(
                "{}: {}",
                style::cyan(t!("add_entry.stat_type")),
                style::dim(initial.stat_type.label())
            ),
            format!(
                "{}: {} {}",
                style::cyan(t!("add_entry.value")),
                style::value(form.value()),
                ui::unit_label(&initial.unit)
            ),
        ];
        lines.extend(
            errors
                .iter()
                .map(|error| style::yellow(format!("  ! {}", error.message()))),
        );
        lines.push(format!("[{}] [{}]", t!("common.cancel"), t!("common.save")));
        lines.join("\n")
    }
}

/// Trigger-side handle to an open edit dialog.
#[derive(Clone)]
pub struct EditEntryHandle {
    session: Arc<EditEntrySession>,
}

impl EditEntryHandle {
    pub fn set_value(&self, raw: impl Into<String>) {
        lock(&self.session.form).set_value(raw);
    }

    pub fn form(&self) -> EditEntryForm {
        lock(&self.session.form).clone()
    }

    pub fn errors(&self) -> Vec<FieldError> {
        lock(&self.session.errors).clone()
    }

    pub fn is_open(&self) -> bool {
        self.session.dismiss.get().is_some_and(Dismiss::is_active)
    }

    pub fn cancel(&self) {
        if let Some(dismiss) = self.session.dismiss.get() {
            dismiss.dismiss();
        }
    }

    /// Validate, hand the result to the save callback, then close.
    pub fn submit(&self) -> Result<EditedEntry, FormError> {
        let validated = lock(&self.session.form).validate();
        match validated {
            Ok(entry) => {
                lock(&self.session.errors).clear();
                (self.session.on_save)(entry.clone());
                self.cancel();
                Ok(entry)
            }
            Err(fields) => {
                lock(&self.session.errors).clone_from(&fields);
                Err(FormError::Invalid(fields))
            }
        }
    }
}

/// Show the edit dialog for an existing entry.
pub fn open_edit_entry<F>(
    scope: &Scope,
    initial: EditEntryInitial,
    on_save: F,
) -> Result<EditEntryHandle, DialogError>
where
    F: Fn(EditedEntry) + Send + Sync + 'static,
{
    let dialogs = use_dialog(scope)?;
    let session = Arc::new(EditEntrySession {
        form: Mutex::new(EditEntryForm::new(initial)),
        errors: Mutex::new(Vec::new()),
        on_save: Box::new(on_save),
        dismiss: OnceLock::new(),
    });

    let content = Arc::clone(&session);
    dialogs.show(move |dismiss| {
        let _ = content.dismiss.set(dismiss);
        EditEntryDialog { session: content }
    });

    Ok(EditEntryHandle { session })
}

use super::dashboard_harness::{GatedApi, mock, plain};
use vitaldash::api::{EntryDraft, MetricKind};
use vitaldash::dialog::{Scope, ToastKind, use_dialog, use_toast};
use vitaldash::error::FormError;
use vitaldash::forms::{AddEntryForm, open_add_entry};

#[tokio::test]
async fn late_completion_of_replaced_form_leaves_new_dialog_showing() {
    let scope = Scope::app();
    let api = GatedApi::new(false);

    let first = open_add_entry(&scope, api.clone(), Some(MetricKind::Weight)).unwrap();
    first.set_value("80");
    let pending = tokio::spawn({
        let first = first.clone();
        async move { first.submit().await }
    });
    tokio::task::yield_now().await;

    let second = open_add_entry(&scope, api.clone(), Some(MetricKind::Steps)).unwrap();
    assert!(!first.is_open());
    assert!(second.is_open());

    api.release_one();
    pending.await.unwrap().unwrap();

    assert!(second.is_open());
    assert!(use_dialog(&scope).unwrap().is_showing());
    assert_eq!(second.form().stat_type(), "steps");
    assert_eq!(api.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn late_completion_with_simulated_latency() {
    let scope = Scope::app();
    let api = mock(0.0);

    let first = open_add_entry(&scope, api.clone(), Some(MetricKind::Sleep)).unwrap();
    first.set_value("7");
    let pending = tokio::spawn({
        let first = first.clone();
        async move { first.submit().await }
    });
    tokio::task::yield_now().await;

    let second = open_add_entry(&scope, api.clone(), None).unwrap();
    pending.await.unwrap().unwrap();

    assert!(second.is_open());
    assert_eq!(
        api.recorded_entries(),
        vec![EntryDraft::new(MetricKind::Sleep, 7.0)]
    );
}

#[tokio::test(start_paused = true)]
async fn failed_submit_shows_error_toast_and_keeps_dialog() {
    let scope = Scope::app();
    let api = mock(1.0);
    let handle = open_add_entry(&scope, api.clone(), Some(MetricKind::Weight)).unwrap();
    handle.set_value("80");

    let err = handle.submit().await.unwrap_err();
    match err {
        FormError::Api(api_err) => assert_eq!(api_err.kind(), "ADD_ENTRY_FAILED"),
        other => panic!("expected API failure, got {other:?}"),
    }

    assert!(handle.is_open());
    assert_eq!(handle.form().value(), "80");
    assert!(api.recorded_entries().is_empty());

    let toast = use_toast(&scope).unwrap().current().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.title.as_deref(), Some("Error"));
    assert_eq!(toast.message, "Failed to add health entry");
}

#[tokio::test(start_paused = true)]
async fn successful_submit_closes_resets_and_records_once() {
    let scope = Scope::app();
    let api = mock(0.0);
    let handle = open_add_entry(&scope, api.clone(), None).unwrap();
    handle.set_stat_type("heart-rate");
    handle.set_value("64");

    handle.submit().await.unwrap();

    assert!(!handle.is_open());
    assert!(!use_dialog(&scope).unwrap().is_showing());
    assert_eq!(handle.form(), AddEntryForm::new(None));
    assert_eq!(
        api.recorded_entries(),
        vec![EntryDraft::new(MetricKind::HeartRate, 64.0)]
    );

    let toast = use_toast(&scope).unwrap().current().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
}

#[tokio::test]
async fn invalid_submit_never_reaches_the_backend() {
    let scope = Scope::app();
    let api = GatedApi::new(false);
    let handle = open_add_entry(&scope, api.clone(), None).unwrap();

    let err = handle.submit().await.unwrap_err();
    assert!(matches!(&err, FormError::Invalid(fields) if fields.len() == 2));
    assert_eq!(api.calls(), 0);
    assert!(handle.is_open());
    assert!(use_toast(&scope).unwrap().current().is_none());

    let rendered = plain(&use_dialog(&scope).unwrap().render().unwrap());
    assert!(rendered.starts_with("Add Health Entry"));
    assert!(rendered.contains("Please select a stat type"));
    assert!(rendered.contains("Value is required"));
}

#[tokio::test]
async fn cancel_closes_and_clears_input() {
    let scope = Scope::app();
    let handle = open_add_entry(&scope, GatedApi::new(false), Some(MetricKind::Weight)).unwrap();
    handle.set_value("81.5");

    handle.cancel();
    handle.cancel();

    assert!(!handle.is_open());
    assert!(!use_dialog(&scope).unwrap().is_showing());
    assert_eq!(handle.form().value(), "");
    assert_eq!(handle.form().stat_type(), "weight");
}

#[tokio::test]
async fn dialog_shows_unit_of_selected_kind() {
    let scope = Scope::app();
    let handle = open_add_entry(&scope, GatedApi::new(false), None).unwrap();
    handle.set_stat_type("heart-rate");
    handle.set_value("64");

    let rendered = plain(&use_dialog(&scope).unwrap().render().unwrap());
    assert!(rendered.contains("Stat Type: Heart Rate"));
    assert!(rendered.contains("Value: 64 bpm"));
}

#[test]
fn history_row_edit_renders_row_and_saves_new_value() {
    use std::sync::{Arc, Mutex};
    use vitaldash::forms::{EditEntryInitial, open_edit_entry};
    use vitaldash::widgets::HistoryTable;

    let scope = Scope::app();
    let table = HistoryTable::for_kind(MetricKind::Sleep);
    let row = table.entries()[2];
    let saved = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&saved);
    let handle = open_edit_entry(
        &scope,
        EditEntryInitial::from_history(table.kind(), &row),
        move |entry| sink.lock().unwrap().push(entry),
    )
    .unwrap();

    let rendered = plain(&use_dialog(&scope).unwrap().render().unwrap());
    assert!(rendered.contains("Date: 2024-01-03"));
    assert!(rendered.contains("Value: 6.5 hours"));

    handle.set_value("7.25");
    let edited = handle.submit().unwrap();
    assert_eq!(edited.date, row.date);
    assert_eq!(edited.stat_type, MetricKind::Sleep);
    assert!(!use_dialog(&scope).unwrap().is_showing());
    assert_eq!(saved.lock().unwrap().as_slice(), &[edited]);
}

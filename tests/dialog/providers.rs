use super::dashboard_harness::GatedApi;
use vitaldash::api::fixtures;
use vitaldash::dialog::{DialogHost, Scope, Toast, ToastHost, use_dialog, use_toast};
use vitaldash::error::DialogError;
use vitaldash::forms::{EditEntryInitial, open_add_entry, open_edit_entry};

#[test]
fn use_toast_outside_provider_fails() {
    let err = use_toast(&Scope::new()).unwrap_err();
    assert_eq!(
        err,
        DialogError::MissingProvider {
            capability: "use_toast",
            provider: "ToastHost",
        }
    );
    assert_eq!(err.to_string(), "use_toast must be used within a ToastHost");
}

#[test]
fn add_entry_needs_both_providers() {
    let dialogs = DialogHost::new();
    let scope = Scope::new().with_dialogs(dialogs.clone());

    let err = open_add_entry(&scope, GatedApi::new(false), None).err().unwrap();
    assert!(matches!(
        err,
        DialogError::MissingProvider {
            capability: "use_toast",
            ..
        }
    ));
    // nothing was shown before the lookup failed
    assert!(!dialogs.is_showing());

    let scope = Scope::new().with_toasts(ToastHost::new());
    let err = open_add_entry(&scope, GatedApi::new(false), None).err().unwrap();
    assert_eq!(err.to_string(), "use_dialog must be used within a DialogHost");
}

#[test]
fn edit_dialog_replaces_add_dialog() {
    let scope = Scope::app();
    let add = open_add_entry(&scope, GatedApi::new(false), None).unwrap();
    let record = &fixtures::recent_activity()[1];
    let edit = open_edit_entry(&scope, EditEntryInitial::from_record(record), |_| {}).unwrap();

    assert!(!add.is_open());
    assert!(edit.is_open());
    assert_eq!(
        use_dialog(&scope).unwrap().active_title().as_deref(),
        Some("Edit Health Entry")
    );

    // closing the stale add dialog must not touch the edit dialog
    add.cancel();
    assert!(edit.is_open());
}

#[test]
fn hosts_are_shared_by_cloned_scopes() {
    let root = Scope::app();
    let child = root.clone();

    use_toast(&child).unwrap().show_toast(Toast::success("saved"));
    assert_eq!(
        use_toast(&root).unwrap().current(),
        Some(Toast::success("saved"))
    );

    use_toast(&root).unwrap().hide_toast();
    use_toast(&root).unwrap().hide_toast();
    assert!(use_toast(&child).unwrap().current().is_none());
}

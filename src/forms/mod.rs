mod add_entry;
mod edit_entry;
pub mod validation;

pub use add_entry::{AddEntryDialog, AddEntryForm, AddEntryHandle, open_add_entry};
pub use edit_entry::{
    EditEntryDialog, EditEntryForm, EditEntryHandle, EditEntryInitial, EditedEntry,
    open_edit_entry,
};

use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Identifies one installation of a value into a [`Slot`].
pub type SlotId = u64;

struct SlotState<T: ?Sized> {
    active: Option<(SlotId, Arc<T>)>,
    next_id: SlotId,
}

/// Single-slot holder shared by every clone.
///
/// Installing replaces the current occupant outright. Each installation gets
/// a fresh id so a stale holder can clear "its" value without touching a
/// newer one.
pub(crate) struct Slot<T: ?Sized> {
    state: Arc<Mutex<SlotState<T>>>,
}

impl<T: ?Sized> Slot<T> {
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SlotState {
                active: None,
                next_id: 1,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SlotState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reserve the id the next installation will carry.
    pub(crate) fn reserve(&self) -> SlotId {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        id
    }

    /// Install under a reserved id, returning the displaced occupant.
    pub(crate) fn install(&self, id: SlotId, value: Arc<T>) -> Option<Arc<T>> {
        self.lock().active.replace((id, value)).map(|(_, old)| old)
    }

    /// Clear unconditionally, returning the removed occupant.
    pub(crate) fn clear(&self) -> Option<Arc<T>> {
        self.lock().active.take().map(|(_, old)| old)
    }

    /// Clear only if `id` is still the active installation.
    pub(crate) fn clear_if(&self, id: SlotId) -> Option<Arc<T>> {
        let mut state = self.lock();
        if state.active.as_ref().is_some_and(|(active, _)| *active == id) {
            state.active.take().map(|(_, old)| old)
        } else {
            None
        }
    }

    pub(crate) fn active(&self) -> Option<(SlotId, Arc<T>)> {
        self.lock()
            .active
            .as_ref()
            .map(|(id, value)| (*id, Arc::clone(value)))
    }

    pub(crate) fn is_active(&self, id: SlotId) -> bool {
        matches!(&self.lock().active, Some((active, _)) if *active == id)
    }

    pub(crate) fn shares_state_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    /// Non-owning handle; occupants hold these so they never keep their own
    /// slot alive.
    pub(crate) fn downgrade(&self) -> WeakSlot<T> {
        WeakSlot {
            state: Arc::downgrade(&self.state),
        }
    }
}

pub(crate) struct WeakSlot<T: ?Sized> {
    state: Weak<Mutex<SlotState<T>>>,
}

impl<T: ?Sized> WeakSlot<T> {
    pub(crate) fn upgrade(&self) -> Option<Slot<T>> {
        self.state.upgrade().map(|state| Slot { state })
    }
}

impl<T: ?Sized> Clone for WeakSlot<T> {
    fn clone(&self) -> Self {
        Self {
            state: Weak::clone(&self.state),
        }
    }
}

impl<T: ?Sized> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

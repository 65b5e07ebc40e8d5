use std::sync::Arc;

use super::slot::{Slot, SlotId, WeakSlot};
use crate::ui::style;

/// A renderable overlay.
///
/// Content is built by the closure passed to [`DialogHost::show`], which
/// hands it the [`Dismiss`] capability for its own installation.
pub trait DialogContent: Send + Sync {
    /// Heading shown above the body.
    fn title(&self) -> String;

    /// Body text at the mount point.
    fn render(&self) -> String;
}

/// Capability to close one specific dialog.
///
/// Bound to the installation it was issued for: once that dialog has been
/// replaced or hidden, dismissing is a no-op and never touches whatever is
/// showing now.
#[derive(Clone)]
pub struct Dismiss {
    slot: WeakSlot<dyn DialogContent>,
    id: SlotId,
}

impl Dismiss {
    /// Close the dialog this handle was issued to. Returns `true` if it was
    /// still showing.
    pub fn dismiss(&self) -> bool {
        let removed = self
            .slot
            .upgrade()
            .and_then(|slot| slot.clear_if(self.id));
        match &removed {
            Some(content) => tracing::debug!(dialog = %content.title(), "dialog dismissed"),
            None => tracing::debug!(id = self.id, "stale dismiss ignored"),
        }
        removed.is_some()
    }

    /// Whether the dialog this handle was issued to is still showing.
    pub fn is_active(&self) -> bool {
        self.slot
            .upgrade()
            .is_some_and(|slot| slot.is_active(self.id))
    }
}

impl std::fmt::Debug for Dismiss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dismiss")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Single-slot dialog host.
///
/// At most one dialog is active; `show` replaces the current one without
/// notifying it and `hide` is idempotent. Clones share the slot.
#[derive(Clone)]
pub struct DialogHost {
    slot: Slot<dyn DialogContent>,
}

impl DialogHost {
    pub fn new() -> Self {
        Self { slot: Slot::new() }
    }

    /// Build a dialog with its dismissal capability and make it the active one.
    pub fn show<F, C>(&self, build: F)
    where
        F: FnOnce(Dismiss) -> C,
        C: DialogContent + 'static,
    {
        let id = self.slot.reserve();
        let content = build(Dismiss {
            slot: self.slot.downgrade(),
            id,
        });
        let title = content.title();
        let displaced = self.slot.install(id, Arc::new(content));
        tracing::debug!(
            dialog = %title,
            replaced = displaced.is_some(),
            "dialog shown"
        );
    }

    /// Clear the active dialog, if any.
    pub fn hide(&self) {
        if let Some(content) = self.slot.clear() {
            tracing::debug!(dialog = %content.title(), "dialog hidden");
        }
    }

    pub fn is_showing(&self) -> bool {
        self.slot.active().is_some()
    }

    pub fn active_title(&self) -> Option<String> {
        self.slot.active().map(|(_, content)| content.title())
    }

    /// Render the active dialog at the mount point.
    pub fn render(&self) -> Option<String> {
        // Render outside the slot lock: content may dismiss itself.
        let (_, content) = self.slot.active()?;
        Some(format!(
            "{}\n{}",
            style::header(content.title()),
            content.render()
        ))
    }

    /// Whether both handles refer to the same host.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.slot.shares_state_with(&other.slot)
    }
}

impl Default for DialogHost {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DialogHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogHost")
            .field("active", &self.active_title())
            .finish()
    }
}

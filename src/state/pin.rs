//! Pin state management.
//!
//! At most one top-level item is pinned at a time; pinning another item
//! silently replaces the previous pin. The pin/hover merge rules live in the
//! navigation coordinator; this component only owns the invariant.

use crate::catalog::ItemId;

/// State related to the pinned secondary panel.
///
/// Responsibilities:
/// - Tracking the at-most-one pinned item
/// - Last pin wins, no queueing
#[derive(Debug, Clone, Default)]
pub struct PinState {
    pinned: Option<ItemId>,
}

impl PinState {
    /// Creates a new pin state with nothing pinned.
    pub fn new() -> Self {
        Self { pinned: None }
    }

    // ===== Queries =====

    /// Returns the pinned item id, if any.
    pub fn pinned_id(&self) -> Option<&str> {
        self.pinned.as_deref()
    }

    /// Returns true if the given item is the pinned one.
    pub fn is_pinned(&self, id: &str) -> bool {
        self.pinned.as_deref() == Some(id)
    }

    // ===== Mutations =====

    /// Pins an item, replacing any existing pin.
    ///
    /// Returns the previously pinned item, if one was replaced.
    pub fn pin(&mut self, id: ItemId) -> Option<ItemId> {
        self.pinned.replace(id)
    }

    /// Removes the pin.
    ///
    /// Returns the item that was pinned.
    pub fn unpin(&mut self) -> Option<ItemId> {
        self.pinned.take()
    }

    /// Clears the pin without reporting what it was (tree rebuild).
    pub fn clear(&mut self) {
        self.pinned = None;
    }
}

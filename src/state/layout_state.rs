//! UI layout state management.
//!
//! This module encapsulates all state related to shell layout: the primary
//! rail width (compact icons or icon + label), the width the docked secondary
//! panel reserves, and whether rail labels are shown. Widths are persisted
//! across sessions; the label flag is a host preference stored under its own
//! key, so it is excluded from serialization here.

use serde::{Deserialize, Serialize};

/// State related to shell layout and sizing.
///
/// Responsibilities:
/// - Rail width (dependent on label visibility)
/// - Docked secondary panel width reservation
/// - Label visibility preference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutState {
    /// Rail width when only icons are shown
    compact_rail_width: f32,
    /// Rail width when labels are shown next to icons
    labeled_rail_width: f32,
    /// Width reserved by the docked secondary panel
    secondary_width: f32,
    /// Whether rail labels are shown (persisted separately by the host)
    #[serde(skip)]
    show_labels: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// Creates a layout state with default widths.
    pub fn new() -> Self {
        Self {
            compact_rail_width: 56.0,
            labeled_rail_width: 168.0,
            secondary_width: 224.0,
            show_labels: false,
        }
    }

    // ===== Layout Queries =====

    /// Returns the current rail width.
    pub fn rail_width(&self) -> f32 {
        if self.show_labels {
            self.labeled_rail_width
        } else {
            self.compact_rail_width
        }
    }

    /// Returns the width the docked secondary panel reserves.
    pub fn secondary_width(&self) -> f32 {
        self.secondary_width
    }

    /// Returns true if rail labels are shown.
    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    // ===== Mutations =====

    /// Sets label visibility.
    pub fn set_show_labels(&mut self, show: bool) {
        self.show_labels = show;
    }

    /// Returns a mutable reference to the label flag (for UI handlers).
    pub fn show_labels_mut(&mut self) -> &mut bool {
        &mut self.show_labels
    }
}

//! Centralized application state for the navigation shell.
//!
//! Composes focused state components, each owning one aspect of the
//! controller: hover intent, pin, tab history, layout, and theme. Keeping the
//! formerly ambient mutable state (hover timers, pointer-over-panel flags) as
//! explicit fields of one instance makes every transition unit-testable
//! without a GUI.

use crate::catalog::{Catalog, NavItem, NavMode, ScrollBehavior, Selection};
use crate::domain::active_path;
use crate::domain::panel_decision::{decide_panels, PanelDecision};
use crate::state::{HoverTracker, LayoutState, PinState, TabHistory, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Navigation data =====
    /// The full configured content set
    pub catalog: Catalog,
    /// Live navigation tree derived from catalog + enabled collections
    pub tree: Vec<NavItem>,
    /// Ordered enabled-collection ids (empty = all)
    pub enabled_collections: Vec<String>,
    /// Interaction pattern the controller runs in
    pub mode: NavMode,
    /// Identity of the page shown in the content area
    pub selection: Selection,

    // ===== Focused state components =====
    /// Hover intent state (debounced enter/leave)
    pub hover: HoverTracker,
    /// Pinned secondary panel state
    pub pin: PinState,
    /// Per-tab page history (manual mode)
    pub history: TabHistory,
    /// Theme and styling state
    pub theme: ThemeState,
    /// Shell layout state
    pub layout: LayoutState,

    // ===== Top-level state =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,
    /// Scroll directive the content area still has to honor
    pending_scroll: Option<ScrollBehavior>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values and no catalog.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::default(),
            tree: Vec::new(),
            enabled_collections: Vec::new(),
            mode: NavMode::ManualPin,
            selection: Selection::Route("/".to_string()),
            hover: HoverTracker::new(),
            pin: PinState::new(),
            history: TabHistory::new(),
            theme: ThemeState::new(),
            layout: LayoutState::new(),
            error_message: None,
            pending_scroll: None,
        }
    }

    /// Creates a new state in a specific interaction mode.
    pub fn with_mode(mode: NavMode) -> Self {
        Self {
            mode,
            ..Self::new()
        }
    }

    /// Creates a new state with preferences loaded from storage.
    pub fn with_preferences(
        theme_name: String,
        mut layout: LayoutState,
        enabled_collections: Vec<String>,
        show_labels: bool,
    ) -> Self {
        layout.set_show_labels(show_labels);
        Self {
            enabled_collections,
            theme: ThemeState::with_theme(theme_name),
            layout,
            ..Self::new()
        }
    }

    // ===== Derived queries =====

    /// Computes the secondary panel render decision for the current frame.
    ///
    /// Derived state: recomputed on demand, never stored.
    pub fn panel_decision(&self) -> PanelDecision<'_> {
        decide_panels(
            &self.tree,
            self.mode,
            &self.selection,
            self.hover.hovered_item(),
            self.pin.pinned_id(),
        )
    }

    /// Width the docked panel currently reserves, if any.
    ///
    /// This is the signal the host layout uses to reserve margin for the
    /// main content; a flyout reserves nothing.
    pub fn docked_reservation(&self) -> Option<f32> {
        self.panel_decision()
            .docked
            .map(|_| self.layout.secondary_width())
    }

    /// Resolves the top-level item owning the current selection.
    pub fn active_item(&self) -> Option<&NavItem> {
        active_path::resolve_active(&self.tree, &self.selection)
    }

    // ===== Scroll directive =====

    /// Queues a scroll directive for the content area.
    pub fn set_pending_scroll(&mut self, scroll: ScrollBehavior) {
        if scroll != ScrollBehavior::None {
            self.pending_scroll = Some(scroll);
        }
    }

    /// Takes the queued scroll directive, if any.
    pub fn take_pending_scroll(&mut self) -> Option<ScrollBehavior> {
        self.pending_scroll.take()
    }
}

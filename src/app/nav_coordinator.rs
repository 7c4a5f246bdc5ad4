//! Navigation coordination and workflow management.
//!
//! Owns every event-driven transition of the controller: per-frame pointer
//! sync, the hover debounce tick, pin toggling with its hover merge rules,
//! tab and page clicks, route changes, and tree rebuilds. All methods operate
//! on [`AppState`] and return the navigation requests the host router has to
//! execute.

use crate::app::AppState;
use crate::catalog::{
    CatalogSource, NavMode, NavRequest, NavTarget, ScrollBehavior, Selection,
};
use std::time::Instant;

/// Coordinates navigation-controller transitions.
pub struct NavCoordinator;

impl NavCoordinator {
    // ===== Catalog and tree lifecycle =====

    /// Loads a catalog from a source and rebuilds the navigation tree.
    ///
    /// On failure the previous tree stays live and the error is surfaced as a
    /// non-fatal shell message.
    pub fn load_catalog(state: &mut AppState, source: &dyn CatalogSource) {
        match source.load() {
            Ok(catalog) => {
                state.catalog = catalog;
                state.error_message = None;
                Self::rebuild_tree(state);
            }
            Err(err) => {
                state.error_message = Some(format!("Error loading catalog: {err:#}"));
            }
        }
    }

    /// Replaces the enabled-collections preference and rebuilds the tree.
    pub fn set_enabled_collections(state: &mut AppState, ids: Vec<String>) {
        state.enabled_collections = ids;
        Self::rebuild_tree(state);
    }

    /// Switches the interaction mode.
    ///
    /// Selection shape and transient state differ per mode, so a switch is
    /// treated as a tree rebuild.
    pub fn set_mode(state: &mut AppState, mode: NavMode) {
        if state.mode != mode {
            state.mode = mode;
            Self::rebuild_tree(state);
        }
    }

    /// Rebuilds the live tree from catalog + enabled collections.
    ///
    /// Rebuild is an implicit clear-all-transient-state event: selection
    /// resets to the first item's root page, and hover, pin, and history are
    /// dropped (the hover generation is bumped so an in-flight leave deadline
    /// cannot act on the new session).
    pub fn rebuild_tree(state: &mut AppState) {
        state.tree = state.catalog.enabled_tree(&state.enabled_collections);
        state.selection = match state.tree.first() {
            Some(first) => match state.mode {
                NavMode::ManualPin => Selection::root_of(first),
                NavMode::AutoPin => Selection::Route(first.path.clone()),
            },
            None => Selection::Route("/".to_string()),
        };
        state.hover.reset();
        state.pin.clear();
        state.history.clear();
    }

    // ===== Pointer handling =====

    /// Syncs the frame's pointer observation into hover state.
    ///
    /// `hovered_tab` is the rail trigger under the pointer this frame (if
    /// any); `over_panel` whether the pointer is over the secondary panel.
    /// The immediate-mode host samples these per frame; the tracker still
    /// sees them as enter/leave transitions.
    pub fn frame_pointer_state(
        state: &mut AppState,
        hovered_tab: Option<&str>,
        over_panel: bool,
        now: Instant,
    ) {
        state.hover.set_pointer_over_panel(over_panel);
        match hovered_tab {
            Some(id) => {
                let needs_enter =
                    state.hover.hovered_item() != Some(id) || state.hover.is_pending_leave();
                if needs_enter {
                    if let Some(item) = state.tree.iter().find(|i| i.id == id) {
                        state.hover.pointer_entered(item);
                    }
                }
            }
            None => {
                if !over_panel {
                    state.hover.pointer_left(now);
                }
            }
        }
        state.hover.poll(now, state.pin.pinned_id());
    }

    /// Advances the hover debounce deadline.
    ///
    /// Returns true if the hover phase changed (the shell repaints).
    pub fn tick(state: &mut AppState, now: Instant) -> bool {
        state.hover.poll(now, state.pin.pinned_id())
    }

    // ===== Pinning =====

    /// Toggles the pin, merging with hover state.
    ///
    /// Pinning clears the hover unless the pointer sits on the panel (the
    /// panel is now shown via pin). Unpinning hands the panel back to hover
    /// when the pointer is on it, so the display never flickers.
    pub fn toggle_pin(state: &mut AppState) {
        if state.pin.pinned_id().is_none() {
            let hovered = state.hover.hovered_item().map(str::to_string);
            if let Some(id) = hovered {
                state.pin.pin(id);
                if !state.hover.pointer_over_panel() {
                    state.hover.clear();
                }
            }
        } else {
            let was = state.pin.unpin();
            if state.hover.pointer_over_panel() {
                if let Some(id) = was {
                    state.hover.force_hover(id);
                }
            } else {
                state.hover.clear();
            }
        }
    }

    // ===== Navigation =====

    /// Handles a click on a primary rail tab.
    ///
    /// Manual mode runs the three-way history policy; auto-pin mode navigates
    /// to the item's route. Returns the request for the host router, already
    /// applied to the shell's own selection.
    pub fn tab_clicked(state: &mut AppState, id: &str) -> Option<NavRequest> {
        let item = state.tree.iter().find(|i| i.id == id)?.clone();
        let request = match state.mode {
            NavMode::ManualPin => state.history.resolve_click(&item, &state.selection),
            NavMode::AutoPin => NavRequest {
                target: Some(NavTarget::Route(item.path.clone())),
                scroll: ScrollBehavior::None,
            },
        };
        Self::apply(state, &request);
        Some(request)
    }

    /// Handles a click on a page inside the secondary panel.
    pub fn page_clicked(state: &mut AppState, parent_id: &str, page_id: &str) -> Option<NavRequest> {
        let (parent, page) = {
            let parent = state.tree.iter().find(|i| i.id == parent_id)?;
            let page = parent.child(page_id)?;
            (parent.id.clone(), page.clone())
        };
        let request = match state.mode {
            NavMode::ManualPin => NavRequest {
                target: Some(NavTarget::Page {
                    parent,
                    page: page.id,
                }),
                scroll: ScrollBehavior::None,
            },
            NavMode::AutoPin => NavRequest {
                target: Some(NavTarget::Route(page.path)),
                scroll: ScrollBehavior::None,
            },
        };
        Self::apply(state, &request);
        Some(request)
    }

    /// The host router reports an externally driven route change (auto mode).
    pub fn route_changed(state: &mut AppState, path: String) {
        state.selection = Selection::Route(path);
    }

    /// Applies a navigation request to the shell's own selection and history.
    ///
    /// History records every successful manual-mode navigation where parent
    /// and page are both known; route navigations bypass it.
    fn apply(state: &mut AppState, request: &NavRequest) {
        let Some(target) = &request.target else {
            return;
        };
        match target {
            NavTarget::Page { parent, page } => {
                state.selection = Selection::Page {
                    parent: parent.clone(),
                    page: page.clone(),
                };
                state.history.record_visit(parent, page);
            }
            NavTarget::Route(path) => {
                state.selection = Selection::Route(path.clone());
            }
        }
    }
}

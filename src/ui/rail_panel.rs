//! Primary rail UI rendering
//!
//! Handles the left icon rail with one trigger per top-level collection.
//! Reports which trigger the pointer sits on this frame; the coordinator
//! turns that observation into hover enter/leave transitions.

use crate::app::AppState;
use crate::catalog::ItemId;
use eframe::egui;

/// Result of user interaction with the rail panel.
pub enum RailInteraction {
    /// A primary tab was clicked
    TabClicked(ItemId),
}

/// Per-frame output of the rail panel.
pub struct RailFrame {
    /// Trigger under the pointer this frame, if any
    pub hovered_tab: Option<ItemId>,
    /// Click interaction, if any
    pub interaction: Option<RailInteraction>,
    /// Screen rectangle the rail occupies (anchors the flyout)
    pub rect: egui::Rect,
}

/// Renders the primary rail and reports pointer state.
pub fn render_rail_panel(ctx: &egui::Context, state: &AppState) -> RailFrame {
    let mut hovered_tab = None;
    let mut interaction = None;

    let panel = egui::SidePanel::left("nav_rail")
        .exact_width(state.layout.rail_width())
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(4.0);

            let active_id = state.active_item().map(|i| i.id.clone());
            for item in &state.tree {
                let selected =
                    active_id.as_deref() == Some(item.id.as_str()) || state.pin.is_pinned(&item.id);

                let text = if state.layout.show_labels() {
                    format!("{}  {}", item.icon, item.title)
                } else {
                    item.icon.clone()
                };

                let response = ui.selectable_label(selected, text);
                let response = if state.layout.show_labels() {
                    response
                } else {
                    response.on_hover_text(&item.title)
                };

                if response.hovered() {
                    hovered_tab = Some(item.id.clone());
                }
                if response.clicked() {
                    interaction = Some(RailInteraction::TabClicked(item.id.clone()));
                }
            }
        });

    RailFrame {
        hovered_tab,
        interaction,
        rect: panel.response.rect,
    }
}

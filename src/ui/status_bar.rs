//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying tree stats, the current
//! selection, and the secondary panel state.

use crate::app::AppState;
use crate::catalog::{NavMode, Selection};
use eframe::egui;
use egui::RichText;

/// Renders the status panel at the bottom of the window.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let mode = match state.mode {
            NavMode::ManualPin => "MANUAL",
            NavMode::AutoPin => "AUTO",
        };
        ui.label(RichText::new(mode).strong());

        ui.label(RichText::new("|").strong());

        let pages: usize = state.tree.iter().map(|c| c.children.len()).sum();
        ui.label(format!("Collections: {} | Pages: {}", state.tree.len(), pages));

        ui.label(RichText::new("|").strong());

        let selection = match &state.selection {
            Selection::Page { parent, page } if parent == page => parent.clone(),
            Selection::Page { parent, page } => format!("{parent}/{page}"),
            Selection::Route(path) => path.clone(),
        };
        ui.label(selection);

        ui.label(RichText::new("|").strong());

        let decision = state.panel_decision();
        let panel = if let Some(width) = state.docked_reservation() {
            format!("Docked {width:.0} px")
        } else if decision.flyout.is_some() {
            "Flyout".to_string()
        } else {
            "No panel".to_string()
        };
        ui.label(panel);
    });
}

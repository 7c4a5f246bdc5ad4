//! Header panel UI rendering
//!
//! Handles the top bar with catalog controls, the interaction-mode selector,
//! label and collection toggles, and the theme selector.

use crate::app::AppState;
use crate::catalog::NavMode;
use eframe::egui;
use egui::Color32;
use std::path::PathBuf;

/// Result of user interaction with the header panel.
pub enum HeaderInteraction {
    /// User picked a catalog file to open
    OpenCatalogRequested(PathBuf),
    /// User asked for the built-in sample catalog
    LoadSampleRequested,
    /// User switched the interaction mode
    ModeChanged(NavMode),
    /// User changed which collections are enabled (ordered id list)
    EnabledCollectionsChanged(Vec<String>),
}

/// Renders the application header.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Catalog").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Catalog Files", &["json"]);
            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }
            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenCatalogRequested(path));
            }
        }

        if ui.button("📚 Sample Catalog").clicked() {
            interaction = Some(HeaderInteraction::LoadSampleRequested);
        }

        ui.separator();

        ui.label("Mode:");
        let mut mode = state.mode;
        egui::ComboBox::from_id_salt("mode_selector")
            .selected_text(mode_label(mode))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut mode, NavMode::ManualPin, mode_label(NavMode::ManualPin));
                ui.selectable_value(&mut mode, NavMode::AutoPin, mode_label(NavMode::AutoPin));
            });
        if mode != state.mode {
            interaction = Some(HeaderInteraction::ModeChanged(mode));
        }

        ui.checkbox(state.layout.show_labels_mut(), "Labels");

        if let Some(changed) = render_collections_menu(ui, state) {
            interaction = Some(HeaderInteraction::EnabledCollectionsChanged(changed));
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}

fn mode_label(mode: NavMode) -> &'static str {
    match mode {
        NavMode::ManualPin => "Manual pin",
        NavMode::AutoPin => "Auto pin",
    }
}

/// Renders the enabled-collections menu.
///
/// Returns the new ordered id list when any checkbox changed. The list keeps
/// catalog order; an all-enabled selection is still stored explicitly.
fn render_collections_menu(ui: &mut egui::Ui, state: &AppState) -> Option<Vec<String>> {
    let mut result = None;

    ui.menu_button("Collections", |ui| {
        let enabled_now = |id: &str| -> bool {
            state.enabled_collections.is_empty()
                || state.enabled_collections.iter().any(|e| e == id)
        };

        let mut toggles: Vec<(String, bool)> = state
            .catalog
            .collections()
            .iter()
            .map(|c| (c.id.clone(), enabled_now(&c.id)))
            .collect();

        let mut changed = false;
        for (idx, collection) in state.catalog.collections().iter().enumerate() {
            if ui.checkbox(&mut toggles[idx].1, &collection.title).changed() {
                changed = true;
            }
        }

        if changed {
            result = Some(
                toggles
                    .into_iter()
                    .filter(|(_, on)| *on)
                    .map(|(id, _)| id)
                    .collect(),
            );
        }
    });

    result
}

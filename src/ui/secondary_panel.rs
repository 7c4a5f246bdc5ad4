//! Secondary panel UI rendering
//!
//! Renders the child pages of a top-level item either docked (a side panel
//! reserving layout width) or as a floating flyout overlaid above the content
//! with elevation. Both variants share one page-list renderer and report
//! whether the pointer is over the panel, which feeds the hover debounce.

use crate::app::AppState;
use crate::catalog::{ItemId, NavItem, NavMode, Selection};
use eframe::egui;

/// Result of user interaction with a secondary panel.
pub enum SecondaryInteraction {
    /// A child page was clicked
    PageClicked { parent: ItemId, page: ItemId },
    /// The pin affordance was clicked
    PinToggled,
}

/// Per-frame output of a secondary panel.
pub struct SecondaryFrame {
    /// Whether the pointer is over this panel
    pub pointer_over_panel: bool,
    /// Interaction, if any
    pub interaction: Option<SecondaryInteraction>,
}

/// Renders the docked secondary panel (reserves layout width).
pub fn render_docked_panel(
    ctx: &egui::Context,
    state: &AppState,
    item: &NavItem,
) -> SecondaryFrame {
    let mut interaction = None;

    let panel = egui::SidePanel::left("secondary_docked")
        .exact_width(state.layout.secondary_width())
        .resizable(false)
        .show(ctx, |ui| {
            interaction = render_pages(ui, state, item);
        });

    SecondaryFrame {
        pointer_over_panel: panel.response.contains_pointer(),
        interaction,
    }
}

/// Renders the floating flyout next to the rail (reserves no width).
pub fn render_flyout_panel(
    ctx: &egui::Context,
    state: &AppState,
    item: &NavItem,
    rail_rect: egui::Rect,
) -> SecondaryFrame {
    let mut interaction = None;

    // Popup framing carries the elevation shadow that sets the flyout apart
    // from the docked panel.
    let frame = egui::Frame::popup(&ctx.style()).inner_margin(egui::Margin::same(8));

    let area = egui::Area::new(egui::Id::new("secondary_flyout"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(rail_rect.right() + 4.0, rail_rect.top() + 4.0))
        .show(ctx, |ui| {
            frame.show(ui, |ui| {
                ui.set_min_width(state.layout.secondary_width() - 16.0);
                interaction = render_pages(ui, state, item);
            });
        });

    SecondaryFrame {
        pointer_over_panel: area.response.contains_pointer(),
        interaction,
    }
}

/// Renders the shared panel content: title row, pin affordance (manual mode),
/// and the item's child pages with the active one distinguished.
fn render_pages(ui: &mut egui::Ui, state: &AppState, item: &NavItem) -> Option<SecondaryInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.strong(&item.title);
        if state.mode == NavMode::ManualPin {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let pinned = state.pin.is_pinned(&item.id);
                let response = ui
                    .selectable_label(pinned, "📌")
                    .on_hover_text(if pinned { "Unpin" } else { "Pin" });
                if response.clicked() {
                    interaction = Some(SecondaryInteraction::PinToggled);
                }
            });
        }
    });
    ui.separator();

    for page in &item.children {
        let active = is_active_page(&state.selection, item, page);
        if ui.selectable_label(active, &page.title).clicked() {
            interaction = Some(SecondaryInteraction::PageClicked {
                parent: item.id.clone(),
                page: page.id.clone(),
            });
        }
    }

    interaction
}

fn is_active_page(selection: &Selection, parent: &NavItem, page: &NavItem) -> bool {
    match selection {
        Selection::Page {
            parent: sel_parent,
            page: sel_page,
        } => sel_parent == &parent.id && sel_page == &page.id,
        Selection::Route(path) => path == &page.path,
    }
}

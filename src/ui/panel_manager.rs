//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, rail, secondary, status, content) and
//! funnels their interactions into one result the application coordinator
//! handles. The docked secondary panel is rendered as a side panel so it
//! reserves layout width; the flyout is a foreground area and reserves none.

use crate::app::AppState;
use crate::catalog::{ItemId, NavItem, NavMode, Selection};
use crate::ui::{header, rail_panel, secondary_panel, status_bar};
use eframe::egui;

/// Result of panel interactions that need to be handled by the coordinator.
pub enum PanelInteraction {
    /// User picked a catalog file to open
    OpenCatalogRequested(std::path::PathBuf),
    /// User asked for the built-in sample catalog
    LoadSampleRequested,
    /// User switched the interaction mode
    ModeChanged(NavMode),
    /// User changed the enabled collections
    EnabledCollectionsChanged(Vec<String>),
    /// A primary tab was clicked
    TabClicked(ItemId),
    /// A page in a secondary panel was clicked
    PageClicked { parent: ItemId, page: ItemId },
    /// The pin affordance was clicked
    PinToggled,
}

/// Per-frame output of the full panel pass.
pub struct FrameOutput {
    /// Interaction to handle, if any
    pub interaction: Option<PanelInteraction>,
    /// Rail trigger under the pointer this frame
    pub hovered_tab: Option<ItemId>,
    /// Whether the pointer is over a secondary panel
    pub pointer_over_panel: bool,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> FrameOutput {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenCatalogRequested(path) => {
                        PanelInteraction::OpenCatalogRequested(path)
                    }
                    header::HeaderInteraction::LoadSampleRequested => {
                        PanelInteraction::LoadSampleRequested
                    }
                    header::HeaderInteraction::ModeChanged(mode) => {
                        PanelInteraction::ModeChanged(mode)
                    }
                    header::HeaderInteraction::EnabledCollectionsChanged(ids) => {
                        PanelInteraction::EnabledCollectionsChanged(ids)
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Primary rail
        let rail = rail_panel::render_rail_panel(ctx, state);
        if let Some(rail_panel::RailInteraction::TabClicked(id)) = rail.interaction {
            interaction = Some(PanelInteraction::TabClicked(id));
        }

        // Secondary panels follow the derived render decision. The items are
        // cloned so the decision's borrow of the tree ends before rendering.
        let (docked, flyout) = {
            let decision = state.panel_decision();
            (decision.docked.cloned(), decision.flyout.cloned())
        };

        let mut pointer_over_panel = false;

        if let Some(item) = &docked {
            let frame = secondary_panel::render_docked_panel(ctx, state, item);
            pointer_over_panel |= frame.pointer_over_panel;
            if let Some(secondary) = frame.interaction {
                interaction = Some(Self::convert_secondary(secondary));
            }
        }

        if let Some(item) = &flyout {
            let frame = secondary_panel::render_flyout_panel(ctx, state, item, rail.rect);
            pointer_over_panel |= frame.pointer_over_panel;
            if let Some(secondary) = frame.interaction {
                interaction = Some(Self::convert_secondary(secondary));
            }
        }

        // Main content area (stub page view)
        Self::render_content(ctx, state);

        FrameOutput {
            interaction,
            hovered_tab: rail.hovered_tab,
            pointer_over_panel,
        }
    }

    fn convert_secondary(interaction: secondary_panel::SecondaryInteraction) -> PanelInteraction {
        match interaction {
            secondary_panel::SecondaryInteraction::PageClicked { parent, page } => {
                PanelInteraction::PageClicked { parent, page }
            }
            secondary_panel::SecondaryInteraction::PinToggled => PanelInteraction::PinToggled,
        }
    }

    /// Renders the stub content area for the current selection.
    ///
    /// The real site renders page content here; the shell shows the page
    /// identity and honors the queued scroll directive.
    fn render_content(ctx: &egui::Context, state: &mut AppState) {
        let pending_scroll = state.take_pending_scroll();

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some((parent, page)) = current_page(state) else {
                ui.add_space(48.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Component Catalog");
                    ui.weak("Select a collection from the rail to get started.");
                });
                return;
            };

            let (parent_title, parent_path) = (parent.title.clone(), parent.path.clone());
            let (title, path) = match page {
                Some(p) => (p.title.clone(), p.path.clone()),
                None => (parent_title.clone(), parent_path.clone()),
            };

            let mut scroll_area = egui::ScrollArea::vertical().id_salt("content_scroll");
            if pending_scroll.is_some() {
                scroll_area = scroll_area.vertical_scroll_offset(0.0);
            }

            scroll_area.show(ui, |ui| {
                ui.add_space(8.0);
                ui.weak(format!("{parent_title}  ›  {title}"));
                ui.heading(&title);
                ui.monospace(&path);
                ui.separator();
                for section in 1..=6 {
                    ui.add_space(12.0);
                    ui.strong(format!("Section {section}"));
                    ui.label(
                        "Placeholder copy standing in for the page body. The shell \
                         only owns navigation; page content is rendered by the site.",
                    );
                }
            });
        });
    }
}

/// Resolves the current selection to (top-level item, optional child page).
fn current_page(state: &AppState) -> Option<(&NavItem, Option<&NavItem>)> {
    match &state.selection {
        Selection::Page { parent, page } => {
            let parent_item = state.tree.iter().find(|i| &i.id == parent)?;
            if page == parent {
                Some((parent_item, None))
            } else {
                Some((parent_item, parent_item.child(page)))
            }
        }
        Selection::Route(path) => {
            let active = state.active_item()?;
            if &active.path == path {
                Some((active, None))
            } else {
                Some((active, active.children.iter().find(|c| &c.path == path)))
            }
        }
    }
}

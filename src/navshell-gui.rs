//! Component Catalog navigation shell
//!
//! Desktop host for the hierarchical hover/pin navigation controller. The
//! shell plays the roles the controller treats as external collaborators:
//! the page layout (reserving width for the docked panel), the router
//! (executing navigation requests and scroll directives), and the preference
//! store (enabled collections, labels, layout, theme).
//!
//! The application is built with a modular architecture:
//! - `catalog` - Navigation model and catalog sources
//! - `domain` - Pure controller logic (active path, panel decision)
//! - `state` - Focused state components (hover, pin, history, layout, theme)
//! - `app` - Composed state and coordinators
//! - `ui` - Panel rendering and interaction reporting

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use navshell::app::{AppState, NavCoordinator, SettingsCoordinator, ThemeCoordinator};
use navshell::catalog::FileCatalog;
use navshell::sample::SampleCatalog;
use navshell::state::LayoutState;
use navshell::ui::panel_manager::{PanelInteraction, PanelManager};

const ENABLED_COLLECTIONS_KEY: &str = "enabled_collections";
const SHOW_LABELS_KEY: &str = "show_labels";
const LAYOUT_KEY: &str = "nav_layout";

/// Main application entry point for the navigation shell.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Optional catalog file to load instead of the built-in sample
    let initial_catalog = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Component Catalog"),
        ..Default::default()
    };

    eframe::run_native(
        "Component Catalog",
        options,
        Box::new(move |cc| Ok(Box::new(NavShellApp::new(cc, initial_catalog)))),
    )
}

/// The navigation shell application.
///
/// Deliberately thin: state transitions live in `NavCoordinator`, rendering
/// in `PanelManager`, persistence in the settings/theme coordinators.
struct NavShellApp {
    /// Centralized application state
    state: AppState,
}

impl NavShellApp {
    /// Creates the shell with preferences loaded from persistent storage and
    /// the initial catalog (file argument or built-in sample) applied.
    fn new(cc: &eframe::CreationContext, initial_catalog: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let layout: LayoutState = SettingsCoordinator::load_setting(cc.storage, LAYOUT_KEY);
        let enabled: Vec<String> =
            SettingsCoordinator::load_setting(cc.storage, ENABLED_COLLECTIONS_KEY);
        let show_labels: bool = SettingsCoordinator::load_setting(cc.storage, SHOW_LABELS_KEY);

        let mut state = AppState::with_preferences(theme_name, layout, enabled, show_labels);

        match initial_catalog {
            Some(path) => NavCoordinator::load_catalog(&mut state, &FileCatalog::new(path)),
            None => NavCoordinator::load_catalog(&mut state, &SampleCatalog::new()),
        }

        Self { state }
    }

    /// Handles panel interactions by delegating to the coordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::OpenCatalogRequested(path) => {
                NavCoordinator::load_catalog(&mut self.state, &FileCatalog::new(path));
            }
            PanelInteraction::LoadSampleRequested => {
                NavCoordinator::load_catalog(&mut self.state, &SampleCatalog::new());
            }
            PanelInteraction::ModeChanged(mode) => {
                NavCoordinator::set_mode(&mut self.state, mode);
            }
            PanelInteraction::EnabledCollectionsChanged(ids) => {
                NavCoordinator::set_enabled_collections(&mut self.state, ids);
            }
            PanelInteraction::TabClicked(id) => {
                if let Some(request) = NavCoordinator::tab_clicked(&mut self.state, &id) {
                    self.state.set_pending_scroll(request.scroll);
                    tracing::debug!(?request, "tab navigation");
                }
            }
            PanelInteraction::PageClicked { parent, page } => {
                if let Some(request) = NavCoordinator::page_clicked(&mut self.state, &parent, &page)
                {
                    self.state.set_pending_scroll(request.scroll);
                    tracing::debug!(?request, "page navigation");
                }
            }
            PanelInteraction::PinToggled => {
                NavCoordinator::toggle_pin(&mut self.state);
            }
        }
    }
}

impl eframe::App for NavShellApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, LAYOUT_KEY, &self.state.layout);
        SettingsCoordinator::save_setting(
            storage,
            ENABLED_COLLECTIONS_KEY,
            &self.state.enabled_collections,
        );
        SettingsCoordinator::save_setting(storage, SHOW_LABELS_KEY, &self.state.layout.show_labels());
    }

    /// Main update loop.
    ///
    /// 1. Advance the hover debounce and schedule the next wakeup
    /// 2. Apply the current theme
    /// 3. Render all panels via PanelManager
    /// 4. Feed the frame's pointer observation back into the controller
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if NavCoordinator::tick(&mut self.state, now) {
            ctx.request_repaint();
        }
        if let Some(deadline) = self.state.hover.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        let frame_output = PanelManager::render_all_panels(ctx, &mut self.state);

        NavCoordinator::frame_pointer_state(
            &mut self.state,
            frame_output.hovered_tab.as_deref(),
            frame_output.pointer_over_panel,
            now,
        );

        if let Some(interaction) = frame_output.interaction {
            self.handle_panel_interaction(interaction);
        }
    }
}

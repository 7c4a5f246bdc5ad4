pub mod app;
pub mod catalog;
pub mod domain;
pub mod sample;
pub mod state;
pub mod theme;
pub mod ui;

// Export the navigation model
pub use catalog::{
    Catalog, CatalogSource, FileCatalog, ItemId, NavItem, NavMode, NavRequest, NavTarget,
    ScrollBehavior, Selection,
};

// Export the built-in sample catalog
pub use sample::{sample_catalog, SampleCatalog};

// Export the controller surface
pub use app::{AppState, NavCoordinator, SettingsCoordinator, ThemeCoordinator};
pub use domain::active_path::resolve_active;
pub use domain::panel_decision::{decide_panels, PanelDecision};
pub use state::{HoverTracker, LayoutState, PinState, TabHistory, LEAVE_DEBOUNCE};

// Export theme support
pub use theme::{hex_to_color32, with_alpha, Theme, ThemeColors, ThemeManager};

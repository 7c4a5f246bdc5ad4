//! State management modules for the navigation shell.
//!
//! This module contains state-only logic (no UI concerns):
//! - Hover state (debounced pointer enter/leave intent tracking)
//! - Pin state (the at-most-one pinned item)
//! - Tab history (last visited child page per tab, manual mode)
//! - Layout state (rail and secondary panel widths, label visibility)
//! - Theme state (theme manager, current theme)

mod hover;
mod layout_state;
mod pin;
mod tab_history;
mod theme_state;

pub use hover::{HoverTracker, LEAVE_DEBOUNCE};
pub use layout_state::LayoutState;
pub use pin::PinState;
pub use tab_history::TabHistory;
pub use theme_state::ThemeState;

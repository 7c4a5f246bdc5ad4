//! Domain logic for the navigation controller.
//!
//! This module contains the pure, side-effect-free pieces:
//! - Active path resolution (selection → active top-level item)
//! - Panel decision (the derived docked/flyout render decision)

pub mod active_path;
pub mod panel_decision;

//! UI panel rendering subsystem
//!
//! This module contains all panel rendering logic for the navigation shell:
//! - Header panel (catalog controls, mode and label toggles, theme selector)
//! - Rail panel (primary collection icons with hover reporting)
//! - Secondary panel (docked panel and floating flyout of child pages)
//! - Status bar (tree stats, selection, panel state)
//! - Panel manager (panel orchestration and the content area)

pub mod header;
pub mod panel_manager;
pub mod rail_panel;
pub mod secondary_panel;
pub mod status_bar;

//! Secondary panel presentation decision.
//!
//! Combines tree, selection, hover, and pin state into a single render
//! decision: which item's children to dock (reserving layout width) and which
//! to show as a floating flyout. This is derived state, recomputed on every
//! relevant change and never stored.

use crate::catalog::{NavItem, NavMode, Selection};
use crate::domain::active_path;

/// The render decision for the secondary panel.
///
/// Invariant: `docked` and `flyout` never refer to the same item.
#[derive(Debug, Clone, Copy)]
pub struct PanelDecision<'a> {
    /// Item whose children are shown docked, reserving layout width
    pub docked: Option<&'a NavItem>,
    /// Item whose children are shown as a floating flyout
    pub flyout: Option<&'a NavItem>,
}

impl<'a> PanelDecision<'a> {
    /// Returns true when neither panel is shown.
    pub fn is_empty(&self) -> bool {
        self.docked.is_none() && self.flyout.is_none()
    }
}

/// Computes the panel decision for the current frame.
///
/// Auto-pin mode docks the route-active item; manual mode docks the pinned
/// item. In both modes the flyout follows the hovered item, suppressed when it
/// would duplicate the docked panel. Items with fewer than two children never
/// produce a panel.
pub fn decide_panels<'a>(
    tree: &'a [NavItem],
    mode: NavMode,
    selection: &Selection,
    hovered: Option<&str>,
    pinned: Option<&str>,
) -> PanelDecision<'a> {
    let docked = match mode {
        NavMode::AutoPin => active_path::resolve_active(tree, selection),
        NavMode::ManualPin => pinned.and_then(|id| find(tree, id)),
    }
    .filter(|item| item.has_secondary());

    let flyout = hovered
        .and_then(|id| find(tree, id))
        .filter(|item| item.has_secondary())
        .filter(|item| docked.map_or(true, |d| d.id != item.id));

    PanelDecision { docked, flyout }
}

fn find<'a>(tree: &'a [NavItem], id: &str) -> Option<&'a NavItem> {
    tree.iter().find(|item| item.id == id)
}

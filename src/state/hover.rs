//! Hover intent tracking with debounced leave.
//!
//! One pointer session at a time: entering a trigger with secondary content
//! starts a hover, leaving starts a grace period, and only an expired grace
//! period hides the panel. The grace period exists because the trigger icon
//! and the flyout panel are separated on screen; without it, moving the mouse
//! from icon to panel would flash-close the panel.
//!
//! All of this is plain data: the deadline is polled by the host loop rather
//! than held by a timer handle, and a generation token excludes deadlines
//! scheduled before the last reset.

use crate::catalog::{ItemId, NavItem};
use std::time::{Duration, Instant};

/// Grace period between leaving a trigger and hiding its panel.
pub const LEAVE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Phase of the single hover session.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HoverPhase {
    /// No trigger hovered
    Idle,
    /// A trigger with secondary content is hovered
    Hovering(ItemId),
    /// The pointer left; the panel stays until the deadline passes
    PendingLeave {
        item: ItemId,
        deadline: Instant,
        token: u64,
    },
}

/// State related to hover intent.
///
/// Responsibilities:
/// - Tracking which trigger is hovered (at most one)
/// - Debouncing pointer leave with a pollable deadline
/// - Tracking whether the pointer is over the secondary panel itself
#[derive(Debug, Clone)]
pub struct HoverTracker {
    phase: HoverPhase,
    /// Whether the pointer is currently over the secondary panel
    pointer_over_panel: bool,
    /// Session generation; bumped on reset so stale deadlines cannot act
    generation: u64,
}

impl Default for HoverTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverTracker {
    /// Creates a new tracker with no active hover.
    pub fn new() -> Self {
        Self {
            phase: HoverPhase::Idle,
            pointer_over_panel: false,
            generation: 0,
        }
    }

    // ===== Queries =====

    /// Returns the hovered item id, if any.
    ///
    /// An item in the leave grace period still counts as hovered; the panel
    /// must stay visible until the deadline passes.
    pub fn hovered_item(&self) -> Option<&str> {
        match &self.phase {
            HoverPhase::Idle => None,
            HoverPhase::Hovering(item) => Some(item),
            HoverPhase::PendingLeave { item, .. } => Some(item),
        }
    }

    /// Returns true while a leave grace period is running.
    pub fn is_pending_leave(&self) -> bool {
        matches!(self.phase, HoverPhase::PendingLeave { .. })
    }

    /// Returns true if the pointer is over the secondary panel.
    pub fn pointer_over_panel(&self) -> bool {
        self.pointer_over_panel
    }

    /// Returns the pending leave deadline, if one is running.
    ///
    /// The host uses this to schedule its next wakeup instead of busy-polling.
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.phase {
            HoverPhase::PendingLeave { deadline, .. } => Some(*deadline),
            _ => None,
        }
    }

    // ===== Transitions =====

    /// The pointer entered a trigger.
    ///
    /// Cancels any pending leave. Items with fewer than two children are
    /// direct links: entering one clears the hover instead of starting one.
    pub fn pointer_entered(&mut self, item: &NavItem) {
        if item.has_secondary() {
            self.phase = HoverPhase::Hovering(item.id.clone());
        } else {
            self.phase = HoverPhase::Idle;
        }
    }

    /// The pointer left the hovered trigger.
    ///
    /// Starts the grace period. A leave during an already-running grace
    /// period keeps the original deadline.
    pub fn pointer_left(&mut self, now: Instant) {
        if let HoverPhase::Hovering(item) = &self.phase {
            self.phase = HoverPhase::PendingLeave {
                item: item.clone(),
                deadline: now + LEAVE_DEBOUNCE,
                token: self.generation,
            };
        }
    }

    /// Updates whether the pointer is over the secondary panel.
    ///
    /// Entering the panel before the grace period expires cancels the pending
    /// leave, which coalesces the icon-to-panel flicker.
    pub fn set_pointer_over_panel(&mut self, over: bool) {
        self.pointer_over_panel = over;
        if over {
            if let HoverPhase::PendingLeave { item, .. } = &self.phase {
                self.phase = HoverPhase::Hovering(item.clone());
            }
        }
    }

    /// Polls the leave deadline.
    ///
    /// Idempotent: firing with no pending leave is a no-op, and a deadline
    /// scheduled before the last reset is discarded. When the deadline has
    /// passed, the hover ends, unless the expired item is pinned and the
    /// pointer sits on the panel itself, in which case the hover survives.
    ///
    /// Returns true if the phase changed.
    pub fn poll(&mut self, now: Instant, pinned: Option<&str>) -> bool {
        let (item, deadline, token) = match &self.phase {
            HoverPhase::PendingLeave {
                item,
                deadline,
                token,
            } => (item.clone(), *deadline, *token),
            _ => return false,
        };
        if now < deadline {
            return false;
        }
        if token != self.generation {
            // Scheduled before the last reset; never close the new session.
            self.phase = HoverPhase::Idle;
            return false;
        }
        if pinned == Some(item.as_str()) && self.pointer_over_panel {
            self.phase = HoverPhase::Hovering(item);
        } else {
            self.phase = HoverPhase::Idle;
        }
        true
    }

    /// Forces the hover onto an item, bypassing the enter transition.
    ///
    /// Used by the unpin merge rule: when unpinning while the pointer is over
    /// the panel, the panel keeps displaying via hover without flicker.
    pub fn force_hover(&mut self, item: ItemId) {
        self.phase = HoverPhase::Hovering(item);
    }

    /// Clears the hover (panel shown via pin instead, or panel dismissed).
    pub fn clear(&mut self) {
        self.phase = HoverPhase::Idle;
    }

    /// Resets the whole tracker for a new session (tree rebuild).
    ///
    /// Bumps the generation so a deadline scheduled before the reset can
    /// never close a hover of the new session.
    pub fn reset(&mut self) {
        self.phase = HoverPhase::Idle;
        self.pointer_over_panel = false;
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, child_count: usize) -> NavItem {
        NavItem {
            id: id.to_string(),
            title: id.to_string(),
            path: format!("/{id}"),
            icon: String::new(),
            children: (0..child_count)
                .map(|i| NavItem {
                    id: format!("{id}-p{i}"),
                    title: format!("page {i}"),
                    path: format!("/{id}/p{i}"),
                    icon: String::new(),
                    children: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_leaf_items_never_start_a_hover() {
        let mut hover = HoverTracker::new();

        hover.pointer_entered(&item("components", 3));
        assert_eq!(hover.hovered_item(), Some("components"));

        // Zero and one child are direct links, and entering them clears
        // whatever was hovered before.
        hover.pointer_entered(&item("home", 0));
        assert_eq!(hover.hovered_item(), None);

        hover.pointer_entered(&item("components", 3));
        hover.pointer_entered(&item("icons", 1));
        assert_eq!(hover.hovered_item(), None);
    }

    #[test]
    fn test_reenter_within_grace_period_never_drops_hover() {
        let mut hover = HoverTracker::new();
        let t0 = Instant::now();
        let c1 = item("c1", 2);

        hover.pointer_entered(&c1);
        hover.pointer_left(t0);
        assert!(hover.is_pending_leave());
        // Still hovered mid-grace: the panel must not flicker.
        assert_eq!(hover.hovered_item(), Some("c1"));

        hover.poll(t0 + Duration::from_millis(50), None);
        assert_eq!(hover.hovered_item(), Some("c1"));

        hover.pointer_entered(&c1);
        assert!(!hover.is_pending_leave());

        // The old deadline passing must not close the re-entered hover.
        hover.poll(t0 + Duration::from_millis(150), None);
        assert_eq!(hover.hovered_item(), Some("c1"));
    }

    #[test]
    fn test_expired_leave_clears_hover() {
        let mut hover = HoverTracker::new();
        let t0 = Instant::now();

        hover.pointer_entered(&item("c1", 2));
        hover.pointer_left(t0);
        assert!(hover.poll(t0 + LEAVE_DEBOUNCE, None));
        assert_eq!(hover.hovered_item(), None);

        // Polling again is a no-op.
        assert!(!hover.poll(t0 + Duration::from_millis(500), None));
    }

    #[test]
    fn test_panel_entry_cancels_pending_leave() {
        let mut hover = HoverTracker::new();
        let t0 = Instant::now();

        hover.pointer_entered(&item("c1", 2));
        hover.pointer_left(t0);
        hover.set_pointer_over_panel(true);
        assert!(!hover.is_pending_leave());

        hover.poll(t0 + Duration::from_millis(200), None);
        assert_eq!(hover.hovered_item(), Some("c1"));
    }

    #[test]
    fn test_pinned_item_survives_expiry_while_pointer_on_panel() {
        let mut hover = HoverTracker::new();
        let t0 = Instant::now();

        hover.pointer_entered(&item("c1", 2));
        // Pointer moves onto the panel, then a leave is reported anyway
        // (e.g. crossing the gap); the deadline expires while on the panel.
        hover.pointer_left(t0);
        hover.pointer_over_panel = true;

        assert!(hover.poll(t0 + LEAVE_DEBOUNCE, Some("c1")));
        assert_eq!(hover.hovered_item(), Some("c1"));

        // Without the pin the same expiry ends the hover.
        hover.pointer_left(t0 + Duration::from_millis(200));
        assert!(hover.poll(t0 + Duration::from_millis(300), None));
        assert_eq!(hover.hovered_item(), None);
    }

    #[test]
    fn test_reset_invalidates_scheduled_deadline() {
        let mut hover = HoverTracker::new();
        let t0 = Instant::now();
        let c1 = item("c1", 2);

        hover.pointer_entered(&c1);
        hover.pointer_left(t0);
        hover.reset();
        assert_eq!(hover.hovered_item(), None);
        assert!(!hover.pointer_over_panel());

        // A fresh hover in the new session is untouched by the old deadline.
        hover.pointer_entered(&c1);
        assert!(!hover.poll(t0 + LEAVE_DEBOUNCE, None));
        assert_eq!(hover.hovered_item(), Some("c1"));
    }

    #[test]
    fn test_leave_keeps_original_deadline() {
        let mut hover = HoverTracker::new();
        let t0 = Instant::now();

        hover.pointer_entered(&item("c1", 2));
        hover.pointer_left(t0);
        let deadline = hover.next_deadline().unwrap();

        // Repeated leave reports while already pending do not push it out.
        hover.pointer_left(t0 + Duration::from_millis(50));
        assert_eq!(hover.next_deadline(), Some(deadline));
    }
}

//! Per-tab navigation history (manual mode).
//!
//! Remembers, per top-level item, the last visited child page, so that
//! clicking a tab returns the user to where they left off. Entries are
//! overwritten on every visit and never removed for the lifetime of the
//! session; nothing here is persisted.

use crate::catalog::{ItemId, NavItem, NavRequest, NavTarget, ScrollBehavior, Selection};
use std::collections::HashMap;

/// State related to per-tab page history.
///
/// Responsibilities:
/// - Remembering the last visited page per tab
/// - Resolving the three-way tab click policy
#[derive(Debug, Clone, Default)]
pub struct TabHistory {
    last_visited: HashMap<ItemId, ItemId>,
}

impl TabHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            last_visited: HashMap::new(),
        }
    }

    // ===== Queries =====

    /// Returns the last visited page id for a tab, if any.
    pub fn last_for(&self, tab: &str) -> Option<&str> {
        self.last_visited.get(tab).map(String::as_str)
    }

    /// Returns true if no visits were recorded yet.
    pub fn is_empty(&self) -> bool {
        self.last_visited.is_empty()
    }

    // ===== Mutations =====

    /// Records a visit, overwriting the tab's previous entry.
    pub fn record_visit(&mut self, parent: &str, page: &str) {
        self.last_visited
            .insert(parent.to_string(), page.to_string());
    }

    /// Forgets all history (tree rebuild).
    pub fn clear(&mut self) {
        self.last_visited.clear();
    }

    // ===== Click policy =====

    /// Resolves a click on a primary tab against the current selection.
    ///
    /// Precedence, checked in this exact order:
    /// 1. The tab's own root is already shown → no navigation, smooth
    ///    scroll-to-top.
    /// 2. A child of the tab is shown → go up to the tab root, smooth scroll.
    /// 3. Anything else (different tab, or first click) → the remembered page
    ///    for this tab, falling back to its root; instant scroll.
    ///
    /// The scroll kind tells the user whether they moved within a tab
    /// (smooth) or jumped tabs (instant).
    pub fn resolve_click(&self, tab: &NavItem, selection: &Selection) -> NavRequest {
        if let Selection::Page { parent, page } = selection {
            if parent == &tab.id {
                if page == &tab.id {
                    return NavRequest {
                        target: None,
                        scroll: ScrollBehavior::SmoothToTop,
                    };
                }
                return NavRequest {
                    target: Some(NavTarget::Page {
                        parent: tab.id.clone(),
                        page: tab.id.clone(),
                    }),
                    scroll: ScrollBehavior::SmoothToTop,
                };
            }
        }

        let page = self.last_for(&tab.id).unwrap_or(&tab.id);
        NavRequest {
            target: Some(NavTarget::Page {
                parent: tab.id.clone(),
                page: page.to_string(),
            }),
            scroll: ScrollBehavior::Instant,
        }
    }
}

//! Active path resolution.
//!
//! Determines which top-level item, if any, owns the current selection: the
//! selection is the item itself, one of its children, or (route mode) a path
//! under the item's path prefix. Pure and deterministic; the tree invariant
//! of non-overlapping path prefixes means at most one item can match, and if
//! that invariant is ever violated the first match in tree order wins.

use crate::catalog::{NavItem, Selection};

/// Resolves the active top-level item for a selection.
pub fn resolve_active<'a>(tree: &'a [NavItem], selection: &Selection) -> Option<&'a NavItem> {
    tree.iter().find(|item| matches_item(item, selection))
}

fn matches_item(item: &NavItem, selection: &Selection) -> bool {
    match selection {
        Selection::Page { parent, page } => {
            page == &item.id || (parent == &item.id && item.child(page).is_some())
        }
        Selection::Route(path) => {
            path == &item.path || path.starts_with(&format!("{}/", item.path))
        }
    }
}

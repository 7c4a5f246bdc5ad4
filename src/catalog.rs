//! Navigation catalog model and loading.
//!
//! The catalog is the authored content set of the documentation site: an ordered
//! list of collections (component gallery, design tokens, icons, brand assets),
//! each with an ordered list of child pages. The live navigation tree shown in
//! the primary rail is derived from the catalog by the host's enabled-collections
//! preference; child ordering is meaningful and preserved end to end, which is
//! why the JSON layer keeps object order intact.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Type alias for navigation item identifiers (stable slugs).
pub type ItemId = String;

/// Glyph used for collections that do not declare an icon.
const DEFAULT_ICON: &str = "▪";

/// A single entry in the navigation tree.
///
/// Top-level items are collections shown in the primary rail; their children are
/// the pages listed in the secondary panel. The tree is at most two levels deep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Stable identifier, derived from the title when the catalog omits it
    pub id: ItemId,
    /// Display title
    pub title: String,
    /// Route path of the item's root page
    pub path: String,
    /// Glyph shown in the rail (top-level items only)
    pub icon: String,
    /// Ordered child pages; empty for leaf items
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// Returns true if this item opens a secondary panel.
    ///
    /// Items with zero or one child behave as direct links and never produce
    /// a flyout or docked panel.
    pub fn has_secondary(&self) -> bool {
        self.children.len() >= 2
    }

    /// Looks up a child page by id.
    pub fn child(&self, id: &str) -> Option<&NavItem> {
        self.children.iter().find(|c| c.id == id)
    }
}

/// Identity of the page currently shown in the main content area.
///
/// Exactly one selection is live at a time. It is owned by the host shell and
/// read-only to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Manual mode: a (parent, page) pair. The collection root is `parent == page`.
    Page { parent: ItemId, page: ItemId },
    /// Auto-pin mode: the current route path.
    Route(String),
}

impl Selection {
    /// The selection for a collection's own root page.
    pub fn root_of(item: &NavItem) -> Self {
        Selection::Page {
            parent: item.id.clone(),
            page: item.id.clone(),
        }
    }
}

/// Interaction pattern the controller runs in.
///
/// The two patterns share the hover tracker and the panel presenter; pinning
/// and tab history are manual-mode concerns, route-driven docking is the
/// auto-pin concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// Explicit pinning plus per-tab history cycling
    ManualPin,
    /// Secondary panel visibility driven by the active route
    AutoPin,
}

/// Scroll directive accompanying a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animated scroll to the top (moved within a tab)
    SmoothToTop,
    /// Immediate jump to the top (jumped tabs)
    Instant,
    /// Leave scroll position to the router
    None,
}

/// Destination of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Page { parent: ItemId, page: ItemId },
    Route(String),
}

/// Request emitted to the host router.
///
/// `target: None` means no navigation takes place and only the scroll
/// directive applies (clicking a tab whose root is already shown).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRequest {
    pub target: Option<NavTarget>,
    pub scroll: ScrollBehavior,
}

/// Source of catalog data.
///
/// The shell loads catalogs through this seam so that file-backed catalogs and
/// the built-in sample share one code path.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog>;
}

/// The full configured content set of the site.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    collections: Vec<NavItem>,
}

impl Catalog {
    /// Builds a catalog from already-constructed collections.
    ///
    /// Validates the tree invariants: unique top-level ids and at most one
    /// level of children.
    pub fn new(collections: Vec<NavItem>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for item in &collections {
            if !seen.insert(item.id.as_str()) {
                bail!("duplicate collection id '{}'", item.id);
            }
            for child in &item.children {
                if !child.children.is_empty() {
                    bail!(
                        "page '{}' under '{}' has nested pages; the tree is at most two levels deep",
                        child.id,
                        item.id
                    );
                }
            }
        }
        Ok(Self { collections })
    }

    /// Returns all collections in catalog order.
    pub fn collections(&self) -> &[NavItem] {
        &self.collections
    }

    /// Looks up a collection by id.
    pub fn get(&self, id: &str) -> Option<&NavItem> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Derives the live navigation tree from the enabled-collections preference.
    ///
    /// Collections appear in the order of `enabled_ids`; ids that no longer
    /// exist in the catalog are skipped with a logged warning. An empty list
    /// means "all collections in catalog order".
    pub fn enabled_tree(&self, enabled_ids: &[String]) -> Vec<NavItem> {
        if enabled_ids.is_empty() {
            return self.collections.clone();
        }
        enabled_ids
            .iter()
            .filter_map(|id| {
                let found = self.get(id);
                if found.is_none() {
                    tracing::warn!(id = id.as_str(), "enabled collection not in catalog, skipping");
                }
                found.cloned()
            })
            .collect()
    }

    /// Parses a catalog from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json).context("invalid catalog JSON")?;
        let collections = file
            .collections
            .into_iter()
            .map(collection_to_item)
            .collect::<Result<Vec<_>>>()?;
        Self::new(collections)
    }

    /// Reads and parses a catalog file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))
    }
}

/// File-backed catalog source.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self) -> Result<Catalog> {
        Catalog::from_file(&self.path)
    }
}

// ===== JSON file format =====

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    #[allow(dead_code)]
    version: Option<String>,
    collections: Vec<CollectionDef>,
}

#[derive(Deserialize)]
struct CollectionDef {
    title: String,
    #[serde(default)]
    id: Option<String>,
    path: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    pages: Vec<PageDef>,
}

#[derive(Deserialize)]
struct PageDef {
    title: String,
    #[serde(default)]
    id: Option<String>,
    path: String,
    #[serde(default)]
    pages: Vec<serde_json::Value>,
}

fn collection_to_item(def: CollectionDef) -> Result<NavItem> {
    let id = def.id.unwrap_or_else(|| slugify(&def.title));
    if id.is_empty() {
        bail!("collection '{}' yields an empty id", def.title);
    }
    let children = def
        .pages
        .into_iter()
        .map(|p| page_to_item(p, &id))
        .collect::<Result<Vec<_>>>()?;
    Ok(NavItem {
        id,
        title: def.title,
        path: def.path,
        icon: def.icon.unwrap_or_else(|| DEFAULT_ICON.to_string()),
        children,
    })
}

fn page_to_item(def: PageDef, parent_id: &str) -> Result<NavItem> {
    if !def.pages.is_empty() {
        bail!(
            "page '{}' under '{}' declares nested pages; the tree is at most two levels deep",
            def.title,
            parent_id
        );
    }
    let id = def.id.unwrap_or_else(|| slugify(&def.title));
    if id.is_empty() {
        return Err(anyhow!("page '{}' yields an empty id", def.title));
    }
    Ok(NavItem {
        id,
        title: def.title,
        path: def.path,
        icon: String::new(),
        children: Vec::new(),
    })
}

/// Derives a stable id from a display title: lowercase, alphanumerics kept,
/// runs of anything else collapsed to single dashes.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

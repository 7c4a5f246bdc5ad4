//! Built-in sample catalog.
//!
//! Ships the first-run/demo content set so the shell is usable before any
//! catalog file is opened. Served through the same [`CatalogSource`] seam as
//! file-backed catalogs.

use crate::catalog::{Catalog, CatalogSource, NavItem};
use anyhow::Result;
use once_cell::sync::Lazy;

/// In-memory catalog source with the demo component-catalog content.
pub struct SampleCatalog;

impl SampleCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for SampleCatalog {
    fn load(&self) -> Result<Catalog> {
        Ok(sample_catalog().clone())
    }
}

static SAMPLE: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(vec![
        collection("home", "Home", "/", "⌂", vec![]),
        collection(
            "components",
            "Components",
            "/components",
            "🧩",
            vec![
                page("button", "Button", "/components/button"),
                page("card", "Card", "/components/card"),
                page("dialog", "Dialog", "/components/dialog"),
                page("input", "Input", "/components/input"),
                page("table", "Table", "/components/table"),
                page("tabs", "Tabs", "/components/tabs"),
            ],
        ),
        collection(
            "tokens",
            "Design Tokens",
            "/tokens",
            "🎨",
            vec![
                page("color", "Color", "/tokens/color"),
                page("typography", "Typography", "/tokens/typography"),
                page("spacing", "Spacing", "/tokens/spacing"),
                page("elevation", "Elevation", "/tokens/elevation"),
            ],
        ),
        // Single page: the rail entry is a direct link, no secondary panel.
        collection(
            "icons",
            "Icons",
            "/icons",
            "✦",
            vec![page("gallery", "Icon Gallery", "/icons/gallery")],
        ),
        collection(
            "brand",
            "Brand Assets",
            "/brand",
            "🏷",
            vec![
                page("logos", "Logos", "/brand/logos"),
                page("illustrations", "Illustrations", "/brand/illustrations"),
            ],
        ),
    ])
    .expect("sample catalog is statically valid")
});

/// Returns the shared sample catalog instance.
pub fn sample_catalog() -> &'static Catalog {
    &SAMPLE
}

fn collection(id: &str, title: &str, path: &str, icon: &str, children: Vec<NavItem>) -> NavItem {
    NavItem {
        id: id.to_string(),
        title: title.to_string(),
        path: path.to_string(),
        icon: icon.to_string(),
        children,
    }
}

fn page(id: &str, title: &str, path: &str) -> NavItem {
    NavItem {
        id: id.to_string(),
        title: title.to_string(),
        path: path.to_string(),
        icon: String::new(),
        children: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = SampleCatalog::new().load().unwrap();
        let ids: Vec<_> = catalog.collections().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["home", "components", "tokens", "icons", "brand"]);

        // Home is a leaf, Icons a single-page direct link, the rest open panels.
        assert!(!catalog.get("home").unwrap().has_secondary());
        assert!(!catalog.get("icons").unwrap().has_secondary());
        assert!(catalog.get("components").unwrap().has_secondary());
        assert!(catalog.get("tokens").unwrap().has_secondary());
        assert!(catalog.get("brand").unwrap().has_secondary());
    }
}

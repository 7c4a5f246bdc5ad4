use navshell::{
    AppState, Catalog, NavCoordinator, NavItem, NavMode, NavTarget, ScrollBehavior, Selection,
    LEAVE_DEBOUNCE,
};
use std::time::{Duration, Instant};

fn page(id: &str, path: &str) -> NavItem {
    NavItem {
        id: id.to_string(),
        title: id.to_string(),
        path: path.to_string(),
        icon: String::new(),
        children: Vec::new(),
    }
}

fn collection(id: &str, path: &str, children: Vec<NavItem>) -> NavItem {
    NavItem {
        id: id.to_string(),
        title: id.to_string(),
        path: path.to_string(),
        icon: "▪".to_string(),
        children,
    }
}

/// Tree from the hover scenarios: Home (leaf), Collection1 with two pages,
/// Collection2 with a single page.
fn scenario_catalog() -> Catalog {
    Catalog::new(vec![
        collection("home", "/", vec![]),
        collection(
            "c1",
            "/c1",
            vec![page("p1", "/c1/p1"), page("p2", "/c1/p2")],
        ),
        collection("c2", "/c2", vec![page("q1", "/c2/q1")]),
    ])
    .unwrap()
}

/// Variant where both collections carry enough pages for a panel.
fn two_panel_catalog() -> Catalog {
    Catalog::new(vec![
        collection("home", "/", vec![]),
        collection(
            "c1",
            "/c1",
            vec![page("p1", "/c1/p1"), page("p2", "/c1/p2")],
        ),
        collection(
            "c2",
            "/c2",
            vec![page("q1", "/c2/q1"), page("q2", "/c2/q2")],
        ),
    ])
    .unwrap()
}

fn shell(mode: NavMode, catalog: Catalog) -> AppState {
    let mut state = AppState::with_mode(mode);
    state.catalog = catalog;
    NavCoordinator::rebuild_tree(&mut state);
    state
}

fn hover(state: &mut AppState, id: &str, now: Instant) {
    NavCoordinator::frame_pointer_state(state, Some(id), false, now);
}

fn pointer_away(state: &mut AppState, now: Instant) {
    NavCoordinator::frame_pointer_state(state, None, false, now);
}

#[test]
fn test_hover_scenario_multi_vs_single_child() {
    let mut state = shell(NavMode::ManualPin, scenario_catalog());
    let t0 = Instant::now();

    // Hovering the two-page collection opens a flyout with its pages.
    hover(&mut state, "c1", t0);
    let decision = state.panel_decision();
    assert!(decision.docked.is_none());
    let flyout = decision.flyout.expect("flyout for c1");
    let pages: Vec<_> = flyout.children.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(pages, ["p1", "p2"]);

    // The single-page collection is a direct link: no flyout.
    hover(&mut state, "c2", t0);
    assert!(state.panel_decision().is_empty());

    // Same for the leaf collection.
    hover(&mut state, "c1", t0);
    hover(&mut state, "home", t0);
    assert!(state.panel_decision().is_empty());
}

#[test]
fn test_pin_then_hover_other_collection() {
    let mut state = shell(NavMode::ManualPin, two_panel_catalog());
    let t0 = Instant::now();

    // Pin Collection1 with the pointer off the panel: docked, hover cleared.
    hover(&mut state, "c1", t0);
    NavCoordinator::toggle_pin(&mut state);
    assert_eq!(state.pin.pinned_id(), Some("c1"));
    assert_eq!(state.hover.hovered_item(), None);
    let decision = state.panel_decision();
    assert_eq!(decision.docked.map(|i| i.id.as_str()), Some("c1"));
    assert!(decision.flyout.is_none());

    // Hovering Collection2 shows its flyout alongside the docked panel.
    hover(&mut state, "c2", t0);
    let decision = state.panel_decision();
    assert_eq!(decision.docked.map(|i| i.id.as_str()), Some("c1"));
    assert_eq!(decision.flyout.map(|i| i.id.as_str()), Some("c2"));

    // Never the same item on both sides.
    hover(&mut state, "c1", t0);
    let decision = state.panel_decision();
    assert_eq!(decision.docked.map(|i| i.id.as_str()), Some("c1"));
    assert!(decision.flyout.is_none());
}

#[test]
fn test_debounce_keeps_panel_open_across_reentry() {
    let mut state = shell(NavMode::ManualPin, scenario_catalog());
    let t0 = Instant::now();

    hover(&mut state, "c1", t0);
    pointer_away(&mut state, t0);

    // Mid-grace the panel is still up.
    NavCoordinator::tick(&mut state, t0 + Duration::from_millis(50));
    assert_eq!(
        state.panel_decision().flyout.map(|i| i.id.as_str()),
        Some("c1")
    );

    // Re-entering before the deadline keeps it up past the deadline.
    hover(&mut state, "c1", t0 + Duration::from_millis(60));
    NavCoordinator::tick(&mut state, t0 + Duration::from_millis(200));
    assert_eq!(
        state.panel_decision().flyout.map(|i| i.id.as_str()),
        Some("c1")
    );

    // An uninterrupted grace period closes it.
    pointer_away(&mut state, t0 + Duration::from_millis(300));
    NavCoordinator::tick(&mut state, t0 + Duration::from_millis(300) + LEAVE_DEBOUNCE);
    assert!(state.panel_decision().is_empty());
}

#[test]
fn test_manual_click_cycle_with_history() {
    let mut state = shell(NavMode::ManualPin, scenario_catalog());

    // First click on c1: root page, instant scroll (tab jump).
    let req = NavCoordinator::tab_clicked(&mut state, "c1").unwrap();
    assert_eq!(
        req.target,
        Some(NavTarget::Page {
            parent: "c1".to_string(),
            page: "c1".to_string()
        })
    );
    assert_eq!(req.scroll, ScrollBehavior::Instant);

    // Second click while on the root: scroll-to-top, no navigation.
    let req = NavCoordinator::tab_clicked(&mut state, "c1").unwrap();
    assert_eq!(req.target, None);
    assert_eq!(req.scroll, ScrollBehavior::SmoothToTop);
    assert_eq!(
        state.selection,
        Selection::Page {
            parent: "c1".to_string(),
            page: "c1".to_string()
        }
    );

    // Visit p1, jump to another tab, come back: history restores p1.
    NavCoordinator::page_clicked(&mut state, "c1", "p1").unwrap();
    NavCoordinator::tab_clicked(&mut state, "c2").unwrap();
    let req = NavCoordinator::tab_clicked(&mut state, "c1").unwrap();
    assert_eq!(
        req.target,
        Some(NavTarget::Page {
            parent: "c1".to_string(),
            page: "p1".to_string()
        })
    );
    assert_eq!(req.scroll, ScrollBehavior::Instant);

    // Clicking the tab while on p1 goes up to the root, smoothly.
    let req = NavCoordinator::tab_clicked(&mut state, "c1").unwrap();
    assert_eq!(
        req.target,
        Some(NavTarget::Page {
            parent: "c1".to_string(),
            page: "c1".to_string()
        })
    );
    assert_eq!(req.scroll, ScrollBehavior::SmoothToTop);
}

#[test]
fn test_auto_pin_route_drives_docked_panel() {
    let mut state = shell(NavMode::AutoPin, two_panel_catalog());

    // Initial selection is the first item's route; home has no pages.
    assert_eq!(state.selection, Selection::Route("/".to_string()));
    assert!(state.panel_decision().is_empty());
    assert_eq!(state.docked_reservation(), None);

    // The router lands on a c1 page: c1 docks and reserves width.
    NavCoordinator::route_changed(&mut state, "/c1/p2".to_string());
    let decision = state.panel_decision();
    assert_eq!(decision.docked.map(|i| i.id.as_str()), Some("c1"));
    assert!(state.docked_reservation().unwrap() > 0.0);

    // Hovering another collection overlays a flyout without dropping the dock.
    let t0 = Instant::now();
    hover(&mut state, "c2", t0);
    let decision = state.panel_decision();
    assert_eq!(decision.docked.map(|i| i.id.as_str()), Some("c1"));
    assert_eq!(decision.flyout.map(|i| i.id.as_str()), Some("c2"));

    // Hovering the docked collection never duplicates the panel.
    hover(&mut state, "c1", t0);
    let decision = state.panel_decision();
    assert_eq!(decision.docked.map(|i| i.id.as_str()), Some("c1"));
    assert!(decision.flyout.is_none());
}

#[test]
fn test_auto_pin_tab_click_emits_route_request() {
    let mut state = shell(NavMode::AutoPin, two_panel_catalog());

    let req = NavCoordinator::tab_clicked(&mut state, "c2").unwrap();
    assert_eq!(req.target, Some(NavTarget::Route("/c2".to_string())));
    assert_eq!(req.scroll, ScrollBehavior::None);
    assert_eq!(
        state.panel_decision().docked.map(|i| i.id.as_str()),
        Some("c2")
    );

    let req = NavCoordinator::page_clicked(&mut state, "c2", "q1").unwrap();
    assert_eq!(req.target, Some(NavTarget::Route("/c2/q1".to_string())));
}

#[test]
fn test_rebuild_resets_selection_and_transient_state() {
    let mut state = shell(NavMode::ManualPin, two_panel_catalog());
    let t0 = Instant::now();

    NavCoordinator::page_clicked(&mut state, "c1", "p1").unwrap();
    hover(&mut state, "c2", t0);
    NavCoordinator::toggle_pin(&mut state);
    assert_eq!(state.pin.pinned_id(), Some("c2"));

    // Disabling collections rebuilds the tree and clears everything
    // transient; the stale pinned id cannot survive.
    NavCoordinator::set_enabled_collections(&mut state, vec!["c1".to_string()]);
    assert_eq!(state.tree.len(), 1);
    assert_eq!(
        state.selection,
        Selection::Page {
            parent: "c1".to_string(),
            page: "c1".to_string()
        }
    );
    assert_eq!(state.pin.pinned_id(), None);
    assert_eq!(state.hover.hovered_item(), None);
    assert!(state.history.is_empty());
    assert!(state.panel_decision().is_empty());

    // The old leave deadline must not close a panel of the new session.
    hover(&mut state, "c1", t0 + Duration::from_millis(10));
    NavCoordinator::tick(&mut state, t0 + Duration::from_millis(500));
    assert_eq!(
        state.panel_decision().flyout.map(|i| i.id.as_str()),
        Some("c1")
    );
}

#[test]
fn test_pin_survives_hover_wandering() {
    let mut state = shell(NavMode::ManualPin, two_panel_catalog());
    let t0 = Instant::now();

    hover(&mut state, "c1", t0);
    NavCoordinator::toggle_pin(&mut state);

    // Wander over other triggers and away; the dock stays put and only one
    // pin ever exists.
    hover(&mut state, "c2", t0);
    hover(&mut state, "home", t0);
    pointer_away(&mut state, t0 + Duration::from_millis(10));
    NavCoordinator::tick(&mut state, t0 + Duration::from_millis(500));

    assert_eq!(state.pin.pinned_id(), Some("c1"));
    let decision = state.panel_decision();
    assert_eq!(decision.docked.map(|i| i.id.as_str()), Some("c1"));
    assert!(decision.flyout.is_none());
}

#[test]
fn test_catalog_json_roundtrip_through_shell() {
    let json = r#"{
        "collections": [
            { "title": "Guides", "path": "/guides", "pages": [
                { "title": "Getting Started", "path": "/guides/start" },
                { "title": "Theming", "path": "/guides/theming" }
            ]},
            { "title": "Changelog", "path": "/changelog" }
        ]
    }"#;
    let catalog = Catalog::from_json_str(json).unwrap();
    let mut state = shell(NavMode::ManualPin, catalog);

    assert_eq!(
        state.selection,
        Selection::Page {
            parent: "guides".to_string(),
            page: "guides".to_string()
        }
    );

    let req = NavCoordinator::page_clicked(&mut state, "guides", "getting-started").unwrap();
    assert_eq!(
        req.target,
        Some(NavTarget::Page {
            parent: "guides".to_string(),
            page: "getting-started".to_string()
        })
    );
    assert_eq!(state.history.last_for("guides"), Some("getting-started"));
}

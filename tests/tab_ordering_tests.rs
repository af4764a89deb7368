//! Tests for tab ordering inside a pane
//!
//! ## Pinned prefix
//!
//! Pinned tabs always sit in front of unpinned ones. Requested insert and drop
//! positions are clamped to the pinned boundary instead of being rejected.
//!
//! ## Drag moves
//!
//! A drop index is a slot in the pre-move order: dropping a tab on its own slot
//! or the slot right after it changes nothing.
//!
//! ## Reselection
//!
//! Closing the selected tab selects the tab that slides into its slot, or the
//! new last tab when the closed tab was last.

mod common;

use common::{add_tabs, manager_with_frame, selected_title, titles};
use tabsplit::pane::SplitOrientation;
use tabsplit::{NewTabPosition, Tab, TabList};

// ============================================================================
// Pinned clamp
// ============================================================================

#[test]
fn test_pinned_insert_lands_in_front_of_unpinned() {
    let mut list = TabList::new();
    list.insert(Tab::new("u1"), 0, false);
    list.insert(Tab::new("u2"), 1, false);

    for requested in [0, 1, 2, 99] {
        let mut copy = list.clone();
        let index = copy.insert(Tab::new("p").pinned(), requested, false);
        assert_eq!(index, 0, "Pinned tab requested at {requested} should land first");
        assert!(copy.is_consistent());
    }
}

#[test]
fn test_unpinned_insert_lands_after_pinned() {
    let mut list = TabList::new();
    list.insert(Tab::new("p").pinned(), 0, false);
    let index = list.insert(Tab::new("u"), 0, false);
    assert_eq!(index, 1);
    assert_eq!(list.pinned_count(), 1);
    assert!(list.is_consistent());
}

#[test]
fn test_manager_add_tab_at_respects_pinned_boundary() {
    let mut manager = manager_with_frame(800.0, 600.0);
    let pane = manager.focused_pane_id().expect("pane");
    manager.add_tab(Tab::new("p1").pinned(), pane);
    manager.add_tab(Tab::new("u1"), pane);

    manager.add_tab_at(Tab::new("u0"), pane, 0).expect("u0");
    manager.add_tab_at(Tab::new("p2").pinned(), pane, 3).expect("p2");
    assert_eq!(titles(&manager, pane), vec!["p1", "p2", "u0", "u1"]);
    assert_eq!(selected_title(&manager, pane).as_deref(), Some("p2"));
}

#[test]
fn test_start_policy_keeps_pinned_prefix() {
    let config = tabsplit::LayoutConfig {
        new_tab_position: NewTabPosition::Start,
        ..tabsplit::LayoutConfig::default()
    };
    let mut manager = common::manager_with_config(config, 800.0, 600.0);
    let pane = manager.focused_pane_id().expect("pane");
    manager.add_tab(Tab::new("pinned").pinned(), pane);
    add_tabs(&mut manager, pane, &["a", "b"]);
    assert_eq!(titles(&manager, pane), vec!["pinned", "b", "a"]);
}

// ============================================================================
// Drag moves
// ============================================================================

#[test]
fn test_noop_drags_leave_order_and_selection() {
    let mut manager = manager_with_frame(800.0, 600.0);
    let pane = manager.focused_pane_id().expect("pane");
    let ids = add_tabs(&mut manager, pane, &["A", "B", "C"]);
    manager.select_tab(ids[1], pane);

    for (index, id) in ids.iter().enumerate() {
        assert!(!manager.move_tab(*id, pane, pane, index));
        assert!(!manager.move_tab(*id, pane, pane, index + 1));
    }
    assert_eq!(titles(&manager, pane), vec!["A", "B", "C"]);
    assert_eq!(selected_title(&manager, pane).as_deref(), Some("B"));
}

#[test]
fn test_drag_forward_and_backward() {
    let mut manager = manager_with_frame(800.0, 600.0);
    let pane = manager.focused_pane_id().expect("pane");
    let ids = add_tabs(&mut manager, pane, &["A", "B", "C", "D"]);

    // Drop A into the slot after C
    assert!(manager.move_tab(ids[0], pane, pane, 3));
    assert_eq!(titles(&manager, pane), vec!["B", "C", "A", "D"]);

    // Drop D in front of everything
    assert!(manager.move_tab(ids[3], pane, pane, 0));
    assert_eq!(titles(&manager, pane), vec!["D", "B", "C", "A"]);

    // Drop past the end
    assert!(manager.move_tab(ids[3], pane, pane, 4));
    assert_eq!(titles(&manager, pane), vec!["B", "C", "A", "D"]);
}

#[test]
fn test_drag_cannot_cross_pinned_boundary() {
    let mut list = TabList::new();
    list.insert(Tab::new("P").pinned(), 0, false);
    list.insert(Tab::new("A"), 1, false);
    list.insert(Tab::new("B"), 2, false);

    // Dragging B to the front clamps it just behind the pinned tab
    assert!(list.move_tab(2, 0));
    let order: Vec<_> = list.tabs().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(order, vec!["P", "B", "A"]);

    // Dragging the pinned tab to the end clamps it back to the front
    assert!(!list.move_tab(0, 3));
    assert!(list.is_consistent());
}

#[test]
fn test_cross_pane_move_clamps_to_destination_boundary() {
    let mut manager = manager_with_frame(800.0, 600.0);
    let left = manager.focused_pane_id().expect("pane");
    add_tabs(&mut manager, left, &["x"]);
    let right = manager
        .split_pane(left, SplitOrientation::Horizontal, Some(Tab::new("p").pinned()), false)
        .expect("split");
    add_tabs(&mut manager, right, &["y"]);
    let moving = manager.get_pane(left).map(|p| p.tab_ids()[0]).expect("x");

    assert!(manager.move_tab(moving, left, right, 0));
    assert_eq!(titles(&manager, right), vec!["p", "x", "y"]);
    assert_eq!(selected_title(&manager, right).as_deref(), Some("x"));
    // Source pane stays even though it is now empty
    assert!(manager.get_pane(left).is_some_and(|p| p.is_empty()));
    assert!(manager.is_consistent());
}

#[test]
fn test_cross_pane_move_keeps_tab_state() {
    let mut manager = manager_with_frame(800.0, 600.0);
    let left = manager.focused_pane_id().expect("pane");
    let icon_tab = Tab::new("docs").with_icon("favicon:docs.rs");
    let moving = icon_tab.id;
    manager.add_tab(icon_tab, left);
    let right = manager.split_focused(SplitOrientation::Vertical).expect("split");

    assert!(manager.move_tab(moving, left, right, 0));
    assert_eq!(manager.pane_of_tab(moving), Some(right));
    let moved = manager.find_tab(moving).expect("moved tab");
    assert_eq!(moved.title, "docs");
    assert_eq!(moved.icon.as_deref(), Some("favicon:docs.rs"));
}

// ============================================================================
// Reselection
// ============================================================================

#[test]
fn test_closing_selected_middle_tab_selects_next() {
    let mut manager = manager_with_frame(800.0, 600.0);
    let pane = manager.focused_pane_id().expect("pane");
    let ids = add_tabs(&mut manager, pane, &["A", "B", "C"]);
    manager.select_tab(ids[1], pane);

    assert!(manager.close_tab(ids[1], pane));
    assert_eq!(selected_title(&manager, pane).as_deref(), Some("C"));
}

#[test]
fn test_closing_selected_last_tab_selects_previous() {
    let mut manager = manager_with_frame(800.0, 600.0);
    let pane = manager.focused_pane_id().expect("pane");
    let ids = add_tabs(&mut manager, pane, &["A", "B", "C"]);
    manager.select_tab(ids[2], pane);

    assert!(manager.close_tab(ids[2], pane));
    assert_eq!(selected_title(&manager, pane).as_deref(), Some("B"));
}

#[test]
fn test_closing_unselected_tab_keeps_selection() {
    let mut manager = manager_with_frame(800.0, 600.0);
    let pane = manager.focused_pane_id().expect("pane");
    let ids = add_tabs(&mut manager, pane, &["A", "B", "C"]);
    manager.select_tab(ids[2], pane);

    assert!(manager.close_tab(ids[0], pane));
    assert_eq!(selected_title(&manager, pane).as_deref(), Some("C"));
    assert!(!manager.close_tab(ids[0], pane));
}

#[test]
fn test_cross_pane_move_reselects_source() {
    let mut manager = manager_with_frame(800.0, 600.0);
    let left = manager.focused_pane_id().expect("pane");
    let ids = add_tabs(&mut manager, left, &["A", "B", "C"]);
    manager.select_tab(ids[1], left);
    let right = manager.split_focused(SplitOrientation::Horizontal).expect("split");

    assert!(manager.move_tab(ids[1], left, right, 0));
    assert_eq!(selected_title(&manager, left).as_deref(), Some("C"));
    assert_eq!(manager.focused_pane_id(), Some(right));
}

//! Tests for Frame, PaneNode traversal, frame calculation and directional lookup.

use super::common::{NavigationDirection, SplitOrientation};
use super::frame::Frame;
use super::pane::Pane;
use super::pane_node::PaneNode;
use crate::tab::Tab;

/// Build `[a | [b / c]]`: a on the left, b over c on the right
fn three_pane_tree() -> (PaneNode, [Pane; 3]) {
    let a = Pane::with_tab(Tab::new("a"));
    let b = Pane::with_tab(Tab::new("b"));
    let c = Pane::new();
    let panes = [a.clone(), b.clone(), c.clone()];
    let right = PaneNode::split(
        SplitOrientation::Vertical,
        0.5,
        PaneNode::leaf(b),
        PaneNode::leaf(c),
    );
    let root = PaneNode::split(SplitOrientation::Horizontal, 0.5, PaneNode::leaf(a), right);
    (root, panes)
}

#[test]
fn test_frame_contains() {
    let frame = Frame::new(10.0, 20.0, 100.0, 50.0);

    // Inside
    assert!(frame.contains(50.0, 40.0));
    assert!(frame.contains(10.0, 20.0)); // Top-left corner

    // Outside
    assert!(!frame.contains(5.0, 40.0)); // Left of frame
    assert!(!frame.contains(110.0, 40.0)); // Right edge is exclusive
    assert!(!frame.contains(50.0, 10.0)); // Above frame
    assert!(!frame.contains(50.0, 80.0)); // Below frame
}

#[test]
fn test_frame_split_side_by_side() {
    let frame = Frame::new(0.0, 0.0, 201.0, 100.0);
    let (first, divider, second) = frame.split(SplitOrientation::Horizontal, 0.25, 1.0);
    assert_eq!(first, Frame::new(0.0, 0.0, 50.0, 100.0));
    assert_eq!(divider, Frame::new(50.0, 0.0, 1.0, 100.0));
    assert_eq!(second, Frame::new(51.0, 0.0, 150.0, 100.0));
}

#[test]
fn test_frame_split_stacked() {
    let frame = Frame::new(10.0, 10.0, 80.0, 104.0);
    let (first, divider, second) = frame.split(SplitOrientation::Vertical, 0.5, 4.0);
    assert_eq!(first, Frame::new(10.0, 10.0, 80.0, 50.0));
    assert_eq!(divider, Frame::new(10.0, 60.0, 80.0, 4.0));
    assert_eq!(second, Frame::new(10.0, 64.0, 80.0, 50.0));
}

#[test]
fn test_frame_split_smaller_than_divider() {
    let frame = Frame::new(0.0, 0.0, 2.0, 10.0);
    let (first, _, second) = frame.split(SplitOrientation::Horizontal, 0.5, 4.0);
    assert_eq!(first.width, 0.0);
    assert_eq!(second.width, 0.0);
}

#[test]
fn test_traversal_order_is_depth_first() {
    let (root, [a, b, c]) = three_pane_tree();
    assert_eq!(root.all_pane_ids(), vec![a.id, b.id, c.id]);
    assert_eq!(root.pane_count(), 3);
    assert_eq!(root.first_pane_id(), a.id);

    let tab_ids = root.all_tab_ids();
    assert_eq!(tab_ids, vec![a.tab_ids()[0], b.tab_ids()[0]]);
    assert_eq!(root.find_pane_with_tab(b.tab_ids()[0]).map(|p| p.id), Some(b.id));
}

#[test]
fn test_sibling_lookup() {
    let (root, [a, b, c]) = three_pane_tree();
    assert!(root.sibling_of(a.id).is_some_and(|n| !n.is_leaf()));
    assert_eq!(root.sibling_of(b.id).and_then(|n| n.as_pane()).map(|p| p.id), Some(c.id));
    assert!(PaneNode::leaf(Pane::new()).sibling_of(a.id).is_none());
}

#[test]
fn test_calculate_frames_and_dividers() {
    let (mut root, [a, b, c]) = three_pane_tree();
    let container = Frame::new(0.0, 0.0, 201.0, 101.0);
    root.calculate_frames(container, 1.0);

    assert_eq!(root.find_pane(a.id).map(|p| p.frame), Some(Frame::new(0.0, 0.0, 100.0, 101.0)));
    assert_eq!(root.find_pane(b.id).map(|p| p.frame), Some(Frame::new(101.0, 0.0, 100.0, 50.0)));
    assert_eq!(root.find_pane(c.id).map(|p| p.frame), Some(Frame::new(101.0, 51.0, 100.0, 50.0)));

    let dividers = root.collect_dividers(container, 1.0);
    assert_eq!(dividers.len(), 2);
    assert_eq!(dividers[0].orientation, SplitOrientation::Horizontal);
    assert_eq!(dividers[0].frame, Frame::new(100.0, 0.0, 1.0, 101.0));
    assert!(dividers[0].contains(99.0, 50.0, 2.0));
    assert!(!dividers[0].contains(90.0, 50.0, 2.0));
}

#[test]
fn test_split_region_lookup() {
    let (root, [_, b, _]) = three_pane_tree();
    let container = Frame::new(0.0, 0.0, 201.0, 101.0);
    let (inner_id, _) = root.nearest_split_of(b.id).expect("split");
    let (region, orientation) = root
        .find_split_region(inner_id, container, 1.0)
        .expect("region");
    assert_eq!(orientation, SplitOrientation::Vertical);
    assert_eq!(region, Frame::new(101.0, 0.0, 100.0, 101.0));
}

#[test]
fn test_find_pane_in_direction() {
    let (mut root, [a, b, c]) = three_pane_tree();
    root.calculate_frames(Frame::new(0.0, 0.0, 201.0, 101.0), 1.0);

    // Both b and c touch a's right edge: tree order picks b
    assert_eq!(root.find_pane_in_direction(a.id, NavigationDirection::Right), Some(b.id));
    assert_eq!(root.find_pane_in_direction(c.id, NavigationDirection::Left), Some(a.id));
    assert_eq!(root.find_pane_in_direction(b.id, NavigationDirection::Down), Some(c.id));
    assert_eq!(root.find_pane_in_direction(c.id, NavigationDirection::Up), Some(b.id));
    assert_eq!(root.find_pane_in_direction(a.id, NavigationDirection::Left), None);
    assert_eq!(root.find_pane_in_direction(b.id, NavigationDirection::Right), None);
}

#[test]
fn test_find_pane_in_direction_prefers_overlap() {
    // [[a / b] | [c / d]] with the right column split lower than the left
    let a = Pane::new();
    let b = Pane::new();
    let c = Pane::new();
    let d = Pane::new();
    let (b_id, d_id) = (b.id, d.id);
    let left = PaneNode::split(SplitOrientation::Vertical, 0.5, PaneNode::leaf(a), PaneNode::leaf(b));
    let right = PaneNode::split(SplitOrientation::Vertical, 0.8, PaneNode::leaf(c), PaneNode::leaf(d));
    let mut root = PaneNode::split(SplitOrientation::Horizontal, 0.5, left, right);
    root.calculate_frames(Frame::new(0.0, 0.0, 201.0, 201.0), 1.0);

    // b spans y 101..201; c spans 0..160 and d spans 161..201: both overlap, c comes first
    let target = root.find_pane_in_direction(b_id, NavigationDirection::Right);
    assert!(target.is_some());
    assert_ne!(target, Some(b_id));
    // From d going left, b is the only overlapping pane
    assert_eq!(root.find_pane_in_direction(d_id, NavigationDirection::Left), Some(b_id));
}

#[test]
fn test_set_split_position() {
    let (mut root, [a, _, _]) = three_pane_tree();
    let (split_id, in_first) = root.nearest_split_of(a.id).expect("split");
    assert!(in_first);
    assert!(root.set_split_position(split_id, 0.3));
    assert_eq!(root.find_split(split_id).map(|(_, p)| p), Some(0.3));
    assert!(!root.set_split_position(super::common::SplitId::new(), 0.3));
    assert_eq!(root.all_split_ids().len(), 2);
}

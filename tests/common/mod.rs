//! Shared integration test helpers for tabsplit.
//!
//! This module provides canonical factory functions and a recording observer
//! used across the `tests/` integration test suite.
//!
//! # Usage
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{manager_with_frame, RecordingObserver};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use tabsplit::pane::{Frame, LayoutSnapshot, PaneId, PaneManager, PaneNode, SplitId};
use tabsplit::{LayoutChange, LayoutConfig, LayoutObserver, Tab, TabId};

/// Creates a manager with default config laid out in a `width` x `height` container.
pub fn manager_with_frame(width: f32, height: f32) -> PaneManager {
    manager_with_config(LayoutConfig::default(), width, height)
}

/// Creates a manager with the given config laid out in a `width` x `height` container.
pub fn manager_with_config(config: LayoutConfig, width: f32, height: f32) -> PaneManager {
    let mut manager = PaneManager::new(config);
    manager.set_container_frame(Frame::new(0.0, 0.0, width, height));
    manager
}

/// Adds one tab per title to a pane, returning the new tab ids in order.
pub fn add_tabs(manager: &mut PaneManager, pane: PaneId, titles: &[&str]) -> Vec<TabId> {
    titles
        .iter()
        .map(|title| {
            manager
                .add_tab(Tab::new(*title), pane)
                .expect("Failed to add tab")
        })
        .collect()
}

/// Tab titles of a pane in display order.
pub fn titles(manager: &PaneManager, pane: PaneId) -> Vec<String> {
    manager
        .get_pane(pane)
        .map(|p| p.tabs.tabs().iter().map(|t| t.title.clone()).collect())
        .unwrap_or_default()
}

/// Title of a pane's selected tab.
pub fn selected_title(manager: &PaneManager, pane: PaneId) -> Option<String> {
    manager
        .get_pane(pane)
        .and_then(|p| p.tabs.selected_tab())
        .map(|t| t.title.clone())
}

/// Id of the root split. Panics if the root is a single pane.
pub fn root_split_id(manager: &PaneManager) -> SplitId {
    match manager.root() {
        Some(PaneNode::Split { id, .. }) => *id,
        _ => panic!("Root is not a split"),
    }
}

/// Checks that every split in a subtree has two live children and returns
/// the number of leaves.
pub fn assert_well_formed(node: &PaneNode) -> usize {
    match node {
        PaneNode::Leaf(_) => 1,
        PaneNode::Split {
            position,
            first,
            second,
            ..
        } => {
            assert!((0.0..=1.0).contains(position), "Position out of range");
            assert_well_formed(first) + assert_well_formed(second)
        }
    }
}

/// Everything a [`RecordingObserver`] has seen.
#[derive(Debug, Default)]
pub struct Recorded {
    pub changes: Vec<LayoutChange>,
    pub snapshots: Vec<LayoutSnapshot>,
    pub focus: Vec<Option<PaneId>>,
}

/// Observer that records notifications into shared state the test keeps a handle to.
pub struct RecordingObserver {
    log: Rc<RefCell<Recorded>>,
}

impl RecordingObserver {
    /// Installs a recording observer on the manager and returns the shared log.
    pub fn install(manager: &mut PaneManager) -> Rc<RefCell<Recorded>> {
        let log = Rc::new(RefCell::new(Recorded::default()));
        manager.set_observer(Box::new(RecordingObserver { log: log.clone() }));
        log
    }
}

impl LayoutObserver for RecordingObserver {
    fn layout_changed(&mut self, snapshot: &LayoutSnapshot, change: LayoutChange) {
        let mut log = self.log.borrow_mut();
        log.changes.push(change);
        log.snapshots.push(snapshot.clone());
    }

    fn focus_changed(&mut self, focused: Option<PaneId>) {
        self.log.borrow_mut().focus.push(focused);
    }
}

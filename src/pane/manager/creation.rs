//! Pane creation operations for PaneManager
//!
//! Handles creating new panes (initial, split) and adding them to the pane
//! tree, plus the consuming tree rewrites used by split and close.

use super::PaneManager;
use crate::pane::tree_ops::{PendingSplit, RemoveResult, SplitResult};
use crate::pane::types::{Pane, PaneId, PaneNode, SplitOrientation};
use crate::tab::Tab;
use crate::traits::LayoutChange;

impl PaneManager {
    /// Create a fresh root pane when the tree is empty
    ///
    /// Only valid in the zero-pane state left behind by closing the last pane.
    /// Returns the new pane's ID, or None if a tree already exists or the
    /// seed tab is invalid.
    pub fn create_initial_pane(&mut self, seed_tab: Option<Tab>) -> Option<PaneId> {
        if self.root.is_some() {
            log::debug!("create_initial_pane ignored: tree already has panes");
            return None;
        }

        let pane = match seed_tab {
            Some(tab) => Pane::with_tab(tab),
            None => Pane::new(),
        };
        let id = pane.id;
        self.root = Some(PaneNode::leaf(pane));
        self.recalculate_frames();
        self.set_focus(id);

        crate::debug_info!("PANE_CREATE", "Created initial pane {}", id);
        self.notify(LayoutChange::Structure);
        self.notify_focus();
        Some(id)
    }

    /// Split a pane, placing a new pane next to it
    ///
    /// The new pane is empty unless `seed_tab` is given. With `insert_first`
    /// the new pane goes left/top of the target, otherwise right/bottom. The
    /// divider starts centered and focus moves to the new pane.
    ///
    /// Returns the ID of the new pane, or None if the target does not exist
    /// or the seed tab's ID is already in the tree.
    pub fn split_pane(
        &mut self,
        target: PaneId,
        orientation: SplitOrientation,
        seed_tab: Option<Tab>,
        insert_first: bool,
    ) -> Option<PaneId> {
        let root = self.root.as_ref()?;
        if !root.contains_pane(target) {
            log::debug!("split_pane: pane {} not found", target);
            return None;
        }
        if let Some(tab) = seed_tab.as_ref()
            && root.find_pane_with_tab(tab.id).is_some()
        {
            log::warn!("split_pane: tab {} already lives in the tree", tab.id);
            return None;
        }

        let new_pane = match seed_tab {
            Some(tab) => Pane::with_tab(tab),
            None => Pane::new(),
        };
        let new_id = new_pane.id;
        let pending = PendingSplit {
            orientation,
            new_pane,
            insert_first,
        };

        let root = self.root.take()?;
        match Self::split_node(root, target, pending) {
            SplitResult::Split(new_root) => self.root = Some(new_root),
            SplitResult::NotFound(old_root, _) => {
                self.root = Some(old_root);
                return None;
            }
        }

        self.recalculate_frames();
        self.set_focus(new_id);

        crate::debug_info!(
            "PANE_SPLIT",
            "Split pane {} {:?}, created new pane {} (insert_first={}, focused)",
            target,
            orientation,
            new_id,
            insert_first
        );

        self.notify(LayoutChange::Structure);
        self.notify_focus();
        Some(new_id)
    }

    /// Split the focused pane, placing an empty pane after it
    pub fn split_focused(&mut self, orientation: SplitOrientation) -> Option<PaneId> {
        let focused = self.focused_pane_id?;
        self.split_pane(focused, orientation, None, false)
    }

    /// Split a node, finding the target pane and replacing it with a split
    ///
    /// The pending split is handed back alongside the untouched subtree when
    /// the target is not found here.
    pub(super) fn split_node(
        node: PaneNode,
        target_id: PaneId,
        pending: PendingSplit,
    ) -> SplitResult {
        match node {
            PaneNode::Leaf(pane) => {
                if pane.id == target_id {
                    SplitResult::Split(pending.apply(*pane))
                } else {
                    SplitResult::NotFound(PaneNode::Leaf(pane), pending)
                }
            }
            PaneNode::Split {
                id,
                orientation,
                position,
                first,
                second,
            } => match Self::split_node(*first, target_id, pending) {
                SplitResult::Split(new_first) => SplitResult::Split(PaneNode::Split {
                    id,
                    orientation,
                    position,
                    first: Box::new(new_first),
                    second,
                }),
                SplitResult::NotFound(first_node, pending) => {
                    match Self::split_node(*second, target_id, pending) {
                        SplitResult::Split(new_second) => SplitResult::Split(PaneNode::Split {
                            id,
                            orientation,
                            position,
                            first: Box::new(first_node),
                            second: Box::new(new_second),
                        }),
                        SplitResult::NotFound(second_node, pending) => SplitResult::NotFound(
                            PaneNode::Split {
                                id,
                                orientation,
                                position,
                                first: Box::new(first_node),
                                second: Box::new(second_node),
                            },
                            pending,
                        ),
                    }
                }
            },
        }
    }

    /// Remove a pane from the tree, returning the new tree structure
    ///
    /// A split that loses one child is replaced by the surviving child, so
    /// every remaining split keeps exactly two children.
    pub(super) fn remove_pane(node: PaneNode, target_id: PaneId) -> RemoveResult {
        match node {
            PaneNode::Leaf(pane) => {
                if pane.id == target_id {
                    RemoveResult::Removed(None)
                } else {
                    RemoveResult::NotFound(PaneNode::Leaf(pane))
                }
            }
            PaneNode::Split {
                id,
                orientation,
                position,
                first,
                second,
            } => match Self::remove_pane(*first, target_id) {
                // First child was the target: the second takes the split's place
                RemoveResult::Removed(None) => RemoveResult::Removed(Some(*second)),
                RemoveResult::Removed(Some(new_first)) => RemoveResult::Removed(Some(PaneNode::Split {
                    id,
                    orientation,
                    position,
                    first: Box::new(new_first),
                    second,
                })),
                RemoveResult::NotFound(first_node) => match Self::remove_pane(*second, target_id) {
                    RemoveResult::Removed(None) => RemoveResult::Removed(Some(first_node)),
                    RemoveResult::Removed(Some(new_second)) => {
                        RemoveResult::Removed(Some(PaneNode::Split {
                            id,
                            orientation,
                            position,
                            first: Box::new(first_node),
                            second: Box::new(new_second),
                        }))
                    }
                    RemoveResult::NotFound(second_node) => RemoveResult::NotFound(PaneNode::Split {
                        id,
                        orientation,
                        position,
                        first: Box::new(first_node),
                        second: Box::new(second_node),
                    }),
                },
            },
        }
    }
}

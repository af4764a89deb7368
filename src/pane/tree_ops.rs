//! Helper types for structural edits of the pane tree.
//!
//! The tree is rebuilt by value: `PaneManager` takes the root out, threads it
//! through a consuming recursive function and puts the result back. These
//! types carry the inputs and outcomes of those passes.

use super::types::{Pane, PaneNode, SplitOrientation};

/// A split waiting to be applied to its target leaf.
/// Groups the parameters passed through recursive calls in `split_node`.
pub(super) struct PendingSplit {
    pub(super) orientation: SplitOrientation,
    pub(super) new_pane: Pane,
    /// Place the new pane first (left/top) instead of second (right/bottom)
    pub(super) insert_first: bool,
}

impl PendingSplit {
    /// Turn the target leaf into a split holding it and the new pane
    pub(super) fn apply(self, target: Pane) -> PaneNode {
        let (first, second) = if self.insert_first {
            (self.new_pane, target)
        } else {
            (target, self.new_pane)
        };
        PaneNode::split(
            self.orientation,
            0.5,
            PaneNode::leaf(first),
            PaneNode::leaf(second),
        )
    }
}

/// Result of attempting to split a pane inside a subtree
pub(super) enum SplitResult {
    /// Target found and split
    Split(PaneNode),
    /// Target not in this subtree; the pending split is handed back
    NotFound(PaneNode, PendingSplit),
}

/// Result of attempting to remove a pane from the tree
pub(super) enum RemoveResult {
    /// Pane was removed, returning the new subtree (or None if empty)
    Removed(Option<PaneNode>),
    /// Pane was not found, returning the original tree
    NotFound(PaneNode),
}

//! `PaneNode`: binary tree structure for arbitrary pane nesting.

use super::common::{DividerRect, NavigationDirection, PaneId, SplitId, SplitOrientation};
use super::frame::Frame;
use super::pane::Pane;
use crate::tab::TabId;

/// Tolerance in pixels when deciding whether a pane lies beyond another pane's edge
const EDGE_EPSILON: f32 = 0.5;

/// Tree node for pane layout
///
/// The pane tree is a binary tree where:
/// - Leaf nodes contain panes
/// - Split nodes own exactly two children, an orientation and a divider position
#[derive(Debug, Clone)]
pub enum PaneNode {
    /// A leaf node containing a pane
    Leaf(Box<Pane>),
    /// A split containing two child nodes
    Split {
        /// Unique identifier for this split
        id: SplitId,
        /// Orientation of the split
        orientation: SplitOrientation,
        /// Divider position (0.0 to 1.0) as a fraction of the space left after the divider
        /// For horizontal: width of first child / available width
        /// For vertical: height of first child / available height
        position: f32,
        /// First child (left for horizontal, top for vertical)
        first: Box<PaneNode>,
        /// Second child (right for horizontal, bottom for vertical)
        second: Box<PaneNode>,
    },
}

impl PaneNode {
    /// Create a new leaf node with a pane
    pub fn leaf(pane: Pane) -> Self {
        PaneNode::Leaf(Box::new(pane))
    }

    /// Create a new split node with a fresh id
    pub fn split(
        orientation: SplitOrientation,
        position: f32,
        first: PaneNode,
        second: PaneNode,
    ) -> Self {
        PaneNode::Split {
            id: SplitId::new(),
            orientation,
            position: position.clamp(0.0, 1.0),
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, PaneNode::Leaf(_))
    }

    /// Get the pane if this is a leaf node
    pub fn as_pane(&self) -> Option<&Pane> {
        match self {
            PaneNode::Leaf(pane) => Some(pane),
            PaneNode::Split { .. } => None,
        }
    }

    /// Find a pane by ID (recursive)
    pub fn find_pane(&self, id: PaneId) -> Option<&Pane> {
        match self {
            PaneNode::Leaf(pane) => (pane.id == id).then_some(pane.as_ref()),
            PaneNode::Split { first, second, .. } => {
                first.find_pane(id).or_else(|| second.find_pane(id))
            }
        }
    }

    /// Find a mutable pane by ID (recursive)
    pub fn find_pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        match self {
            PaneNode::Leaf(pane) => (pane.id == id).then_some(pane.as_mut()),
            PaneNode::Split { first, second, .. } => first
                .find_pane_mut(id)
                .or_else(move || second.find_pane_mut(id)),
        }
    }

    /// Find the pane holding a tab
    pub fn find_pane_with_tab(&self, tab_id: TabId) -> Option<&Pane> {
        match self {
            PaneNode::Leaf(pane) => pane.tabs.contains(tab_id).then_some(pane.as_ref()),
            PaneNode::Split { first, second, .. } => first
                .find_pane_with_tab(tab_id)
                .or_else(|| second.find_pane_with_tab(tab_id)),
        }
    }

    /// Find the pane at a given pixel position
    pub fn find_pane_at(&self, x: f32, y: f32) -> Option<&Pane> {
        match self {
            PaneNode::Leaf(pane) => pane.frame.contains(x, y).then_some(pane.as_ref()),
            PaneNode::Split { first, second, .. } => first
                .find_pane_at(x, y)
                .or_else(|| second.find_pane_at(x, y)),
        }
    }

    /// Check whether a pane lives in this subtree
    pub fn contains_pane(&self, id: PaneId) -> bool {
        self.find_pane(id).is_some()
    }

    /// Get all pane IDs in this subtree (depth-first, first child before second)
    pub fn all_pane_ids(&self) -> Vec<PaneId> {
        match self {
            PaneNode::Leaf(pane) => vec![pane.id],
            PaneNode::Split { first, second, .. } => {
                let mut ids = first.all_pane_ids();
                ids.extend(second.all_pane_ids());
                ids
            }
        }
    }

    /// Get all panes in this subtree
    pub fn all_panes(&self) -> Vec<&Pane> {
        match self {
            PaneNode::Leaf(pane) => vec![pane],
            PaneNode::Split { first, second, .. } => {
                let mut panes = first.all_panes();
                panes.extend(second.all_panes());
                panes
            }
        }
    }

    /// Get all tab IDs in this subtree, pane by pane in display order
    pub fn all_tab_ids(&self) -> Vec<TabId> {
        self.all_panes()
            .into_iter()
            .flat_map(|pane| pane.tab_ids())
            .collect()
    }

    /// Get all split IDs in this subtree (pre-order)
    pub fn all_split_ids(&self) -> Vec<SplitId> {
        match self {
            PaneNode::Leaf(_) => Vec::new(),
            PaneNode::Split {
                id, first, second, ..
            } => {
                let mut ids = vec![*id];
                ids.extend(first.all_split_ids());
                ids.extend(second.all_split_ids());
                ids
            }
        }
    }

    /// First leaf reached by depth-first search
    pub fn first_pane_id(&self) -> PaneId {
        match self {
            PaneNode::Leaf(pane) => pane.id,
            PaneNode::Split { first, .. } => first.first_pane_id(),
        }
    }

    /// Count total number of panes
    pub fn pane_count(&self) -> usize {
        match self {
            PaneNode::Leaf(_) => 1,
            PaneNode::Split { first, second, .. } => first.pane_count() + second.pane_count(),
        }
    }

    /// Subtree sharing a parent split with the given pane
    ///
    /// None when the pane is the root or is not in this subtree.
    pub fn sibling_of(&self, id: PaneId) -> Option<&PaneNode> {
        match self {
            PaneNode::Leaf(_) => None,
            PaneNode::Split { first, second, .. } => {
                if first.as_pane().is_some_and(|p| p.id == id) {
                    return Some(second);
                }
                if second.as_pane().is_some_and(|p| p.id == id) {
                    return Some(first);
                }
                first.sibling_of(id).or_else(|| second.sibling_of(id))
            }
        }
    }

    /// Current orientation and divider position of a split
    pub fn find_split(&self, split_id: SplitId) -> Option<(SplitOrientation, f32)> {
        match self {
            PaneNode::Leaf(_) => None,
            PaneNode::Split {
                id,
                orientation,
                position,
                first,
                second,
            } => {
                if *id == split_id {
                    Some((*orientation, *position))
                } else {
                    first
                        .find_split(split_id)
                        .or_else(|| second.find_split(split_id))
                }
            }
        }
    }

    /// Region a split divides, given the frame of this subtree
    ///
    /// Returns the frame handed to the split plus its orientation.
    pub fn find_split_region(
        &self,
        split_id: SplitId,
        frame: Frame,
        divider_thickness: f32,
    ) -> Option<(Frame, SplitOrientation)> {
        match self {
            PaneNode::Leaf(_) => None,
            PaneNode::Split {
                id,
                orientation,
                position,
                first,
                second,
            } => {
                if *id == split_id {
                    return Some((frame, *orientation));
                }
                let (first_frame, _, second_frame) =
                    frame.split(*orientation, *position, divider_thickness);
                first
                    .find_split_region(split_id, first_frame, divider_thickness)
                    .or_else(|| second.find_split_region(split_id, second_frame, divider_thickness))
            }
        }
    }

    /// Overwrite a split's divider position; returns false if the split is not here
    pub fn set_split_position(&mut self, split_id: SplitId, new_position: f32) -> bool {
        match self {
            PaneNode::Leaf(_) => false,
            PaneNode::Split {
                id,
                position,
                first,
                second,
                ..
            } => {
                if *id == split_id {
                    *position = new_position.clamp(0.0, 1.0);
                    true
                } else {
                    first.set_split_position(split_id, new_position)
                        || second.set_split_position(split_id, new_position)
                }
            }
        }
    }

    /// Innermost split that has the pane as a direct or nested child, with the side it is on
    ///
    /// Returns `(split_id, pane_is_in_first_child)`.
    pub fn nearest_split_of(&self, pane_id: PaneId) -> Option<(SplitId, bool)> {
        match self {
            PaneNode::Leaf(_) => None,
            PaneNode::Split {
                id, first, second, ..
            } => {
                if first.contains_pane(pane_id) {
                    Some(first.nearest_split_of(pane_id).unwrap_or((*id, true)))
                } else if second.contains_pane(pane_id) {
                    Some(second.nearest_split_of(pane_id).unwrap_or((*id, false)))
                } else {
                    None
                }
            }
        }
    }

    /// Calculate frames for all panes given the total available area
    ///
    /// This recursively distributes space according to divider positions
    /// and updates each pane's frame field.
    pub fn calculate_frames(&mut self, frame: Frame, divider_thickness: f32) {
        match self {
            PaneNode::Leaf(pane) => {
                pane.frame = frame;
            }
            PaneNode::Split {
                orientation,
                position,
                first,
                second,
                ..
            } => {
                let (first_frame, _, second_frame) =
                    frame.split(*orientation, *position, divider_thickness);
                first.calculate_frames(first_frame, divider_thickness);
                second.calculate_frames(second_frame, divider_thickness);
            }
        }
    }

    /// Collect all divider rectangles in the pane tree
    ///
    /// Returns dividers in pre-order (a split's divider before those of its children).
    pub fn collect_dividers(&self, frame: Frame, divider_thickness: f32) -> Vec<DividerRect> {
        let mut dividers = Vec::new();
        self.collect_dividers_recursive(frame, divider_thickness, &mut dividers);
        dividers
    }

    /// Recursive helper for collecting dividers
    fn collect_dividers_recursive(
        &self,
        frame: Frame,
        divider_thickness: f32,
        dividers: &mut Vec<DividerRect>,
    ) {
        if let PaneNode::Split {
            id,
            orientation,
            position,
            first,
            second,
        } = self
        {
            let (first_frame, divider, second_frame) =
                frame.split(*orientation, *position, divider_thickness);
            dividers.push(DividerRect {
                split_id: *id,
                orientation: *orientation,
                frame: divider,
            });
            first.collect_dividers_recursive(first_frame, divider_thickness, dividers);
            second.collect_dividers_recursive(second_frame, divider_thickness, dividers);
        }
    }

    /// Find the closest pane in a given direction from a pane
    ///
    /// Candidates must lie entirely past the source pane's edge in the requested
    /// direction. The winner has the smallest gap on the perpendicular axis
    /// (zero when the two panes overlap on that axis), then the smallest
    /// distance along the travel axis. Ties go to the pane found first in tree
    /// order. Returns None if there is no pane in that direction.
    pub fn find_pane_in_direction(
        &self,
        from_id: PaneId,
        direction: NavigationDirection,
    ) -> Option<PaneId> {
        let from = self.find_pane(from_id)?.frame;

        let mut best: Option<(PaneId, f32, f32)> = None;

        for pane in self.all_panes() {
            if pane.id == from_id {
                continue;
            }
            let frame = pane.frame;

            let primary = match direction {
                NavigationDirection::Left => from.x - frame.right(),
                NavigationDirection::Right => frame.x - from.right(),
                NavigationDirection::Up => from.y - frame.bottom(),
                NavigationDirection::Down => frame.y - from.bottom(),
            };
            if primary < -EDGE_EPSILON {
                continue;
            }
            let primary = primary.max(0.0);

            let perpendicular = match direction.axis() {
                SplitOrientation::Horizontal => {
                    interval_gap(from.y, from.bottom(), frame.y, frame.bottom())
                }
                SplitOrientation::Vertical => {
                    interval_gap(from.x, from.right(), frame.x, frame.right())
                }
            };

            let better = match best {
                None => true,
                Some((_, best_gap, best_primary)) => {
                    perpendicular < best_gap
                        || (perpendicular == best_gap && primary < best_primary)
                }
            };
            if better {
                best = Some((pane.id, perpendicular, primary));
            }
        }

        best.map(|(id, _, _)| id)
    }
}

/// Distance between two 1-D intervals (0 when they overlap or touch)
fn interval_gap(a_start: f32, a_end: f32, b_start: f32, b_end: f32) -> f32 {
    (b_start - a_end).max(a_start - b_end).max(0.0)
}

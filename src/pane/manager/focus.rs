//! Focus and navigation operations for PaneManager
//!
//! Handles pane focus state, directional navigation, click-to-focus,
//! and closing panes with automatic focus transfer.

use super::PaneManager;
use crate::pane::tree_ops::RemoveResult;
use crate::pane::types::{NavigationDirection, Pane, PaneId, PaneNode};
use crate::traits::LayoutChange;

impl PaneManager {
    /// Close a pane by ID, destroying its tabs
    ///
    /// The parent split is replaced by the surviving sibling. The last pane
    /// can only be closed when `allow_close_last_pane` is set, which leaves
    /// the manager with no panes and no focus.
    ///
    /// Returns true if the pane was closed.
    pub fn close_pane(&mut self, id: PaneId) -> bool {
        crate::debug_info!("PANE_CLOSE", "close_pane called for pane {}", id);

        let Some(root) = self.root.as_ref() else {
            return false;
        };
        if !root.contains_pane(id) {
            crate::debug_info!("PANE_CLOSE", "Pane {} not found in tree", id);
            return false;
        }

        if root.is_leaf() {
            if !self.config.allow_close_last_pane {
                log::debug!("Refusing to close last pane {}", id);
                return false;
            }
            self.root = None;
            self.focused_pane_id = None;
            self.focus_history.clear();
            self.active_drag = None;
            log::info!("Closed last pane {}", id);
            self.notify(LayoutChange::Structure);
            self.notify_focus();
            return true;
        }

        let was_focused = self.focused_pane_id == Some(id);
        let fallback = if was_focused {
            self.focus_fallback(id)
        } else {
            None
        };

        let Some(root) = self.root.take() else {
            return false;
        };
        match Self::remove_pane(root, id) {
            RemoveResult::Removed(new_root) => self.root = new_root,
            RemoveResult::NotFound(root) => {
                self.root = Some(root);
                return false;
            }
        }

        self.focus_history.retain(|p| *p != id);
        if let Some(new_focus) = fallback {
            crate::debug_info!(
                "PANE_CLOSE",
                "Closed focused pane {}, new focus: {}",
                id,
                new_focus
            );
            self.set_focus(new_focus);
        }
        let drag_collapsed = self.active_drag.is_some_and(|split| {
            !self
                .root
                .as_ref()
                .is_some_and(|r| r.find_split(split).is_some())
        });
        if drag_collapsed {
            self.active_drag = None;
        }

        self.recalculate_frames();

        if let Some(ref root) = self.root {
            for pane in root.all_panes() {
                crate::debug_trace!(
                    "PANE_CLOSE",
                    "Remaining pane {} frame=({:.0},{:.0} {:.0}x{:.0})",
                    pane.id,
                    pane.frame.x,
                    pane.frame.y,
                    pane.frame.width,
                    pane.frame.height
                );
            }
        }

        crate::debug_info!("PANE_CLOSE", "Successfully closed pane {}", id);
        self.notify(LayoutChange::Structure);
        if drag_collapsed {
            self.notify(LayoutChange::DividerDragEnded);
        }
        if was_focused {
            self.notify_focus();
        }
        true
    }

    /// Pane to focus after the focused pane `closing` goes away
    ///
    /// The sibling if it is a leaf, otherwise the most recently focused leaf
    /// inside the sibling subtree, otherwise that subtree's first leaf.
    fn focus_fallback(&self, closing: PaneId) -> Option<PaneId> {
        let sibling = self.root.as_ref()?.sibling_of(closing)?;
        let id = match sibling {
            PaneNode::Leaf(pane) => pane.id,
            PaneNode::Split { .. } => self
                .focus_history
                .iter()
                .rev()
                .copied()
                .find(|id| sibling.contains_pane(*id))
                .unwrap_or_else(|| sibling.first_pane_id()),
        };
        Some(id)
    }

    /// Record focus on a pane; returns true if focus moved
    pub(super) fn set_focus(&mut self, id: PaneId) -> bool {
        let changed = self.focused_pane_id != Some(id);
        self.focused_pane_id = Some(id);
        self.focus_history.retain(|p| *p != id);
        self.focus_history.push(id);
        changed
    }

    /// Navigate to a pane in the given direction
    ///
    /// Returns the newly focused pane, or None if there is no pane that way
    /// (or no geometry to navigate yet).
    pub fn navigate_focus(&mut self, direction: NavigationDirection) -> Option<PaneId> {
        if self.container.is_empty() {
            log::debug!("navigate_focus {:?}: container frame not set", direction);
            return None;
        }
        let focused_id = self.focused_pane_id?;
        let new_id = self
            .root
            .as_ref()?
            .find_pane_in_direction(focused_id, direction)?;

        if self.set_focus(new_id) {
            self.notify_focus();
        }
        log::debug!(
            "Navigated {:?} from pane {} to pane {}",
            direction,
            focused_id,
            new_id
        );
        Some(new_id)
    }

    /// Focus a specific pane by ID
    pub fn focus_pane(&mut self, id: PaneId) -> bool {
        if !self.root.as_ref().is_some_and(|r| r.contains_pane(id)) {
            return false;
        }
        if self.set_focus(id) {
            self.notify_focus();
        }
        true
    }

    /// Focus the pane at a given pixel position
    pub fn focus_pane_at(&mut self, x: f32, y: f32) -> Option<PaneId> {
        let id = self.root.as_ref()?.find_pane_at(x, y)?.id;
        if self.set_focus(id) {
            self.notify_focus();
        }
        Some(id)
    }

    /// Get the currently focused pane
    pub fn focused_pane(&self) -> Option<&Pane> {
        self.focused_pane_id
            .and_then(|id| self.root.as_ref()?.find_pane(id))
    }

    /// Get the focused pane ID
    pub fn focused_pane_id(&self) -> Option<PaneId> {
        self.focused_pane_id
    }

    /// Previously focused panes, most recent last
    pub fn focus_history(&self) -> &[PaneId] {
        &self.focus_history
    }
}

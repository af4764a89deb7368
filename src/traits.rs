//! Shared trait definitions for tabsplit hosts.
//!
//! The layout engine never calls back into the host to ask for permission;
//! vetoes are the facade's business. It only reports what changed, through
//! [`LayoutObserver`].

use crate::pane::{LayoutSnapshot, PaneId};

/// What kind of change produced a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutChange {
    /// Panes or tabs were added, removed, moved or reselected
    Structure,
    /// Focus moved to another pane (or to none)
    Focus,
    /// Frames changed without an interactive drag (container resize, programmatic divider write)
    Geometry,
    /// A divider is being dragged interactively
    DividerDrag,
    /// An interactive divider drag finished
    DividerDragEnded,
}

impl LayoutChange {
    /// Whether this change comes from an in-progress divider drag
    pub fn is_dragging(self) -> bool {
        self == LayoutChange::DividerDrag
    }
}

/// Receives layout change notifications from a `PaneManager`.
///
/// All methods have no-op defaults so hosts implement only what they need.
/// Calls happen synchronously on the thread that mutated the manager.
pub trait LayoutObserver {
    /// The tree or its geometry changed; `snapshot` is the layout after the change.
    fn layout_changed(&mut self, _snapshot: &LayoutSnapshot, _change: LayoutChange) {}

    /// The focused pane changed.
    fn focus_changed(&mut self, _focused: Option<PaneId>) {}
}

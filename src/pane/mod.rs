//! Pane management for split tab views
//!
//! This module provides the pane infrastructure:
//! - `Pane`: A leaf holding an ordered list of tabs
//! - `PaneNode`: Tree structure for nested pane splits
//! - `PaneManager`: Owns the tree and coordinates every structural change
//! - `LayoutSnapshot` / `TreeSnapshot`: Read-only projections for renderers and other processes

mod manager;
mod snapshot;
mod tree_ops;
mod types;

pub use manager::PaneManager;
pub use snapshot::{LayoutSnapshot, PaneGeometry, TabSummary, TreeSnapshot};
pub use types::{
    DividerRect, Frame, NavigationDirection, Pane, PaneId, PaneNode, SplitId, SplitOrientation,
};

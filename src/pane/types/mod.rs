//! Core types for the pane system.
//!
//! This module defines the fundamental data structures for split panes:
//! - Binary tree structure for arbitrary nesting
//! - Per-pane tab state
//! - Frame calculation for layout
//!
//! Sub-modules:
//! - [`frame`]: `Frame` pixel-space rectangle
//! - [`common`]: `SplitOrientation`, `NavigationDirection`, `DividerRect`, id re-exports
//! - [`pane`]: `Pane` leaf struct
//! - [`pane_node`]: `PaneNode` binary tree for pane layout

mod common;
mod frame;
mod pane;
mod pane_node;

#[cfg(test)]
mod tests;

pub use common::{DividerRect, NavigationDirection, PaneId, SplitId, SplitOrientation};
pub use frame::Frame;
pub use pane::Pane;
pub use pane_node::PaneNode;

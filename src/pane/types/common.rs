//! Shared enums and small value types for the pane system.

use super::frame::Frame;
use serde::{Deserialize, Serialize};

// Re-export identifiers from tabsplit-config for shared access across crates
pub use tabsplit_config::{PaneId, SplitId};

/// Orientation of a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitOrientation {
    /// Children side by side (first = left, second = right), vertical divider line
    Horizontal,
    /// Children stacked (first = top, second = bottom), horizontal divider line
    Vertical,
}

/// Direction for pane navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Left,
    Right,
    Up,
    Down,
}

impl NavigationDirection {
    /// Split orientation whose axis this direction travels along
    pub fn axis(self) -> SplitOrientation {
        match self {
            NavigationDirection::Left | NavigationDirection::Right => SplitOrientation::Horizontal,
            NavigationDirection::Up | NavigationDirection::Down => SplitOrientation::Vertical,
        }
    }
}

/// A divider between the two children of a split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerRect {
    /// Split that owns this divider
    pub split_id: SplitId,
    /// Orientation of the owning split
    pub orientation: SplitOrientation,
    /// Divider rectangle in pixels
    pub frame: Frame,
}

impl DividerRect {
    /// Check if a point is on the divider (with optional padding for easier grabbing)
    pub fn contains(&self, px: f32, py: f32, padding: f32) -> bool {
        px >= self.frame.x - padding
            && px < self.frame.right() + padding
            && py >= self.frame.y - padding
            && py < self.frame.bottom() + padding
    }
}

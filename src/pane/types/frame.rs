//! `Frame`: pixel-space rectangle for containers, panes and dividers.

use super::common::SplitOrientation;
use serde::{Deserialize, Serialize};

/// A rectangle in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// X position in pixels from the left edge of the container's coordinate space
    pub x: f32,
    /// Y position in pixels from the top edge of the container's coordinate space
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Frame {
    /// Create a new frame
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether the frame covers no area
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside this frame
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Extent along a split's axis (width for side-by-side, height for stacked)
    pub fn extent(&self, orientation: SplitOrientation) -> f32 {
        match orientation {
            SplitOrientation::Horizontal => self.width,
            SplitOrientation::Vertical => self.height,
        }
    }

    /// Space shared by a split's two children once the divider is taken out
    pub fn available_extent(&self, orientation: SplitOrientation, divider_thickness: f32) -> f32 {
        (self.extent(orientation) - divider_thickness).max(0.0)
    }

    /// Divide this frame at a normalized divider position
    ///
    /// Returns `(first, divider, second)`. The first child gets
    /// `position * available` pixels, the divider sits right after it and the
    /// second child takes whatever remains.
    pub fn split(
        &self,
        orientation: SplitOrientation,
        position: f32,
        divider_thickness: f32,
    ) -> (Frame, Frame, Frame) {
        let available = self.available_extent(orientation, divider_thickness);
        let first_extent = available * position;
        let second_extent = available - first_extent;
        let thickness = divider_thickness.min(self.extent(orientation)).max(0.0);

        match orientation {
            SplitOrientation::Horizontal => (
                Frame::new(self.x, self.y, first_extent, self.height),
                Frame::new(self.x + first_extent, self.y, thickness, self.height),
                Frame::new(
                    self.x + first_extent + thickness,
                    self.y,
                    second_extent,
                    self.height,
                ),
            ),
            SplitOrientation::Vertical => (
                Frame::new(self.x, self.y, self.width, first_extent),
                Frame::new(self.x, self.y + first_extent, self.width, thickness),
                Frame::new(
                    self.x,
                    self.y + first_extent + thickness,
                    self.width,
                    second_extent,
                ),
            ),
        }
    }
}

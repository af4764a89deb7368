//! Layout management operations for PaneManager
//!
//! Handles frame calculation, divider position writes and clamping,
//! split nudging, drag-to-resize and layout projections.

use super::PaneManager;
use crate::pane::snapshot::TreeSnapshot;
use crate::pane::types::{DividerRect, Frame, PaneId, SplitId, SplitOrientation};
use crate::traits::LayoutChange;
use tabsplit_config::{LayoutConfig, defaults};

/// Divider position that interactive drags snap to
const SNAP_POSITION: f32 = 0.5;
/// How close (in normalized units) a drag must get to snap
const SNAP_THRESHOLD: f32 = 0.01;

impl PaneManager {
    /// Set the container frame available for panes and recalculate layout
    pub fn set_container_frame(&mut self, frame: Frame) {
        self.container = frame;
        self.recalculate_frames();
        log::debug!(
            "Container frame set to ({:.0},{:.0} {:.0}x{:.0})",
            frame.x,
            frame.y,
            frame.width,
            frame.height
        );
        self.notify(LayoutChange::Geometry);
    }

    /// Current container frame
    pub fn container_frame(&self) -> Frame {
        self.container
    }

    /// Recalculate frames for all panes
    pub fn recalculate_frames(&mut self) {
        let thickness = self.config.divider_thickness;
        if let Some(ref mut root) = self.root {
            root.calculate_frames(self.container, thickness);
        }
    }

    /// Frame a split divides along with its orientation
    fn split_region(&self, split_id: SplitId) -> Option<(Frame, SplitOrientation)> {
        self.root
            .as_ref()?
            .find_split_region(split_id, self.container, self.config.divider_thickness)
    }

    /// Range a split's divider position may take
    ///
    /// Starts from the configured min/max and, once the container frame is
    /// known, tightens so neither child gets less than `min_pane_size` pixels.
    /// When both limits cannot be met the midpoint of the configured range is
    /// the only valid position.
    pub fn valid_position_range(&self, split_id: SplitId) -> Option<(f32, f32)> {
        let (region, orientation) = self.split_region(split_id)?;
        let (lo, hi) = configured_range(&self.config);

        let available = region.available_extent(orientation, self.config.divider_thickness);
        if self.container.is_empty() || available <= 0.0 {
            return Some((lo, hi));
        }

        let min_fraction = self.config.min_pane_size / available;
        let tight_lo = lo.max(min_fraction);
        let tight_hi = hi.min(1.0 - min_fraction);
        if tight_lo > tight_hi {
            let mid = (lo + hi) / 2.0;
            Some((mid, mid))
        } else {
            Some((tight_lo, tight_hi))
        }
    }

    /// Clamp a position into the valid range of a split
    fn clamp_position(&self, split_id: SplitId, position: f32) -> Option<f32> {
        let (lo, hi) = self.valid_position_range(split_id)?;
        Some(position.clamp(lo, hi))
    }

    /// Current divider position of a split
    pub fn divider_position(&self, split_id: SplitId) -> Option<f32> {
        self.root
            .as_ref()?
            .find_split(split_id)
            .map(|(_, position)| position)
    }

    /// Write a divider position, clamped into the split's valid range
    ///
    /// Writes that mirror a change made elsewhere (`from_external`) are applied
    /// silently so they do not echo back to their source. Returns false if the
    /// split does not exist or the position is not a number.
    pub fn set_divider_position(
        &mut self,
        position: f32,
        split_id: SplitId,
        from_external: bool,
    ) -> bool {
        if !position.is_finite() {
            log::warn!("Ignoring non-finite divider position for split {}", split_id);
            return false;
        }
        let Some(clamped) = self.clamp_position(split_id, position) else {
            return false;
        };
        if !self.write_position(split_id, clamped) {
            return false;
        }

        crate::debug_log!(
            "DIVIDER",
            "Split {} position {:.3} (requested {:.3}, external={})",
            split_id,
            clamped,
            position,
            from_external
        );
        if !from_external {
            self.notify(LayoutChange::Geometry);
        }
        true
    }

    /// Store an already clamped position and recompute frames
    fn write_position(&mut self, split_id: SplitId, position: f32) -> bool {
        let written = self
            .root
            .as_mut()
            .is_some_and(|r| r.set_split_position(split_id, position));
        if written {
            self.recalculate_frames();
        }
        written
    }

    /// Pull every divider back into its valid range
    pub(super) fn reclamp_all_dividers(&mut self) {
        let split_ids = self
            .root
            .as_ref()
            .map(|r| r.all_split_ids())
            .unwrap_or_default();
        // Pre-order: a parent settles before its children's regions are measured
        for split_id in split_ids {
            if let Some(position) = self.divider_position(split_id)
                && let Some(clamped) = self.clamp_position(split_id, position)
                && clamped != position
            {
                self.write_position(split_id, clamped);
            }
        }
    }

    /// Resize a split by nudging its divider
    ///
    /// `pane_id`: The pane whose nearest enclosing split should be resized
    /// `delta`: Normalized amount to grow the pane by (negative shrinks it)
    pub fn resize_split(&mut self, pane_id: PaneId, delta: f32) -> bool {
        let Some((split_id, in_first)) = self
            .root
            .as_ref()
            .and_then(|r| r.nearest_split_of(pane_id))
        else {
            return false;
        };
        let Some(current) = self.divider_position(split_id) else {
            return false;
        };
        let target = if in_first {
            current + delta
        } else {
            current - delta
        };
        self.set_divider_position(target, split_id, false)
    }

    /// Get all divider rectangles in the pane tree
    pub fn dividers(&self) -> Vec<DividerRect> {
        self.root
            .as_ref()
            .map(|r| r.collect_dividers(self.container, self.config.divider_thickness))
            .unwrap_or_default()
    }

    /// Find a divider at the given position, with padding for easier grabbing
    pub fn find_divider_at(&self, x: f32, y: f32, padding: f32) -> Option<DividerRect> {
        self.dividers()
            .into_iter()
            .find(|divider| divider.contains(x, y, padding))
    }

    /// Pixel offset of a divider from the start of the region its split divides
    pub fn divider_pixel_offset(&self, split_id: SplitId) -> Option<f32> {
        let (region, orientation) = self.split_region(split_id)?;
        let position = self.divider_position(split_id)?;
        Some(region.available_extent(orientation, self.config.divider_thickness) * position)
    }

    /// Normalized position that puts a divider `offset` pixels into its region
    ///
    /// The result is not clamped. None when the split has no room to divide.
    pub fn divider_position_for_offset(&self, split_id: SplitId, offset: f32) -> Option<f32> {
        let (region, orientation) = self.split_region(split_id)?;
        let available = region.available_extent(orientation, self.config.divider_thickness);
        (available > 0.0).then(|| offset / available)
    }

    /// Start an interactive divider drag
    pub fn begin_divider_drag(&mut self, split_id: SplitId) -> bool {
        if self.divider_position(split_id).is_none() {
            return false;
        }
        crate::debug_info!("DIVIDER_DRAG", "Begin drag of split {}", split_id);
        self.active_drag = Some(split_id);
        true
    }

    /// Move a divider to follow the pointer
    ///
    /// The divider is centered on the pointer coordinate along the split's
    /// axis. Positions within 0.01 of the middle snap to exactly 0.5. Starts a
    /// drag implicitly if none is in progress for this split.
    pub fn drag_divider(&mut self, split_id: SplitId, x: f32, y: f32) -> bool {
        let Some((region, orientation)) = self.split_region(split_id) else {
            return false;
        };
        let pointer = match orientation {
            SplitOrientation::Horizontal => x - region.x,
            SplitOrientation::Vertical => y - region.y,
        };
        if !pointer.is_finite() {
            log::warn!("Ignoring non-finite drag coordinate for split {}", split_id);
            return false;
        }
        let offset = pointer - self.config.divider_thickness / 2.0;
        let Some(raw) = self.divider_position_for_offset(split_id, offset) else {
            return false;
        };
        let snapped = if (raw - SNAP_POSITION).abs() <= SNAP_THRESHOLD {
            SNAP_POSITION
        } else {
            raw
        };
        let Some(clamped) = self.clamp_position(split_id, snapped) else {
            return false;
        };

        if self.active_drag != Some(split_id) {
            self.active_drag = Some(split_id);
        }
        self.write_position(split_id, clamped);
        crate::debug_trace!(
            "DIVIDER_DRAG",
            "Split {} dragged to {:.3} (raw {:.3})",
            split_id,
            clamped,
            raw
        );
        self.notify(LayoutChange::DividerDrag);
        true
    }

    /// Finish the interactive drag in progress, if any
    pub fn end_divider_drag(&mut self) -> bool {
        let Some(split_id) = self.active_drag.take() else {
            return false;
        };
        crate::debug_info!(
            "DIVIDER_DRAG",
            "End drag of split {} at {:?}",
            split_id,
            self.divider_position(split_id)
        );
        self.notify(LayoutChange::DividerDragEnded);
        true
    }

    /// Split currently being dragged
    pub fn active_drag(&self) -> Option<SplitId> {
        self.active_drag
    }

    /// Shape-preserving projection of the tree for an external process
    pub fn tree_snapshot(&self) -> Option<TreeSnapshot> {
        self.root.as_ref().map(TreeSnapshot::from_node)
    }
}

/// Configured divider range, usable even for a config that was never validated
///
/// Non-numbers fall back to the defaults and an inverted range collapses to
/// its midpoint, so clamping against the result never panics.
fn configured_range(config: &LayoutConfig) -> (f32, f32) {
    let sanitize = |value: f32, fallback: f32| {
        if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            fallback
        }
    };
    let lo = sanitize(config.min_divider_position, defaults::min_divider_position());
    let hi = sanitize(config.max_divider_position, defaults::max_divider_position());
    if lo > hi {
        let mid = (lo + hi) / 2.0;
        (mid, mid)
    } else {
        (lo, hi)
    }
}

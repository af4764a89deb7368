//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `LayoutConfig` fields and by `LayoutConfig::default()`.

use crate::types::{DividerDragNotify, NewTabPosition};

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_false() -> bool {
    false
}

pub fn bool_true() -> bool {
    true
}

// ── Dividers ───────────────────────────────────────────────────────────────

pub fn divider_thickness() -> f32 {
    1.0 // 1 pixel divider between panes
}

pub fn min_divider_position() -> f32 {
    0.1
}

pub fn max_divider_position() -> f32 {
    0.9
}

pub fn min_pane_size() -> f32 {
    32.0 // Minimum pane extent in pixels along the split axis
}

pub fn divider_drag_notify() -> DividerDragNotify {
    DividerDragNotify::EveryFrame
}

// ── Tabs ───────────────────────────────────────────────────────────────────

pub fn new_tab_position() -> NewTabPosition {
    NewTabPosition::End
}

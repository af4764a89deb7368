//! Pane manager: the single owner of the split tree
//!
//! The PaneManager owns the pane tree and provides operations for:
//! - Splitting and closing panes
//! - Adding, closing, moving and selecting tabs
//! - Focus tracking and directional navigation
//! - Frame calculation, divider writes and layout snapshots
//!
//! Sub-modules:
//! - [`super::tree_ops`]: Helper types and free functions for structural edits.
//! - [`creation`]: Pane creation and tree manipulation (split, remove).
//! - [`focus`]: Focus management, directional navigation and pane closing.
//! - [`layout`]: Frames, divider positions, drag-to-resize and snapshots.
//! - [`tabs`]: Tab operations routed to the owning pane.

mod creation;
mod focus;
mod layout;
mod tabs;

use crate::pane::snapshot::LayoutSnapshot;
use crate::pane::types::{Frame, Pane, PaneId, PaneNode, SplitId};
use crate::traits::{LayoutChange, LayoutObserver};
use anyhow::{Context, Result};
use std::path::Path;
use tabsplit_config::{DividerDragNotify, LayoutConfig};

/// Manages the pane tree of one split view
pub struct PaneManager {
    /// Root of the pane tree (None only after the last pane was closed)
    pub(super) root: Option<PaneNode>,
    /// ID of the currently focused pane
    pub(super) focused_pane_id: Option<PaneId>,
    /// Previously focused panes, most recent last
    pub(super) focus_history: Vec<PaneId>,
    /// Layout tunables and pane/tab policy
    pub(super) config: LayoutConfig,
    /// Current container frame available for panes
    pub(super) container: Frame,
    /// Split whose divider is being dragged interactively
    pub(super) active_drag: Option<SplitId>,
    /// Receiver for change notifications
    pub(super) observer: Option<Box<dyn LayoutObserver>>,
}

impl PaneManager {
    /// Create a manager holding a single empty, focused pane
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_root_pane(config, Pane::new())
    }

    /// Create a manager whose tree is the given pane
    pub fn with_root_pane(config: LayoutConfig, pane: Pane) -> Self {
        let id = pane.id;
        log::info!("Created pane manager with initial pane {}", id);
        Self {
            root: Some(PaneNode::leaf(pane)),
            focused_pane_id: Some(id),
            focus_history: vec![id],
            config,
            container: Frame::default(),
            active_drag: None,
            observer: None,
        }
    }

    /// Create a manager from a YAML layout config file
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let config = LayoutConfig::load_from(path)
            .with_context(|| format!("failed to load layout config from {}", path.display()))?;
        Ok(Self::new(config))
    }

    /// Install the receiver for change notifications, returning the previous one
    pub fn set_observer(
        &mut self,
        observer: Box<dyn LayoutObserver>,
    ) -> Option<Box<dyn LayoutObserver>> {
        self.observer.replace(observer)
    }

    /// Remove the notification receiver
    pub fn clear_observer(&mut self) -> Option<Box<dyn LayoutObserver>> {
        self.observer.take()
    }

    /// Layout configuration in effect
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the layout configuration and re-clamp every divider
    ///
    /// An invalid config is rejected and the current one stays in effect.
    pub fn set_config(&mut self, config: LayoutConfig) -> Result<()> {
        config.validate().context("rejected layout config")?;
        self.config = config;
        self.reclamp_all_dividers();
        self.recalculate_frames();
        self.notify(LayoutChange::Geometry);
        Ok(())
    }

    /// Get a pane by ID
    pub fn get_pane(&self, id: PaneId) -> Option<&Pane> {
        self.root.as_ref()?.find_pane(id)
    }

    /// Get all panes in tree order
    pub fn all_panes(&self) -> Vec<&Pane> {
        self.root
            .as_ref()
            .map(|r| r.all_panes())
            .unwrap_or_default()
    }

    /// Get all pane IDs in tree order
    pub fn all_pane_ids(&self) -> Vec<PaneId> {
        self.root
            .as_ref()
            .map(|r| r.all_pane_ids())
            .unwrap_or_default()
    }

    /// Get all tab IDs, pane by pane in tree order
    pub fn all_tab_ids(&self) -> Vec<crate::tab::TabId> {
        self.root
            .as_ref()
            .map(|r| r.all_tab_ids())
            .unwrap_or_default()
    }

    /// Get the number of panes
    pub fn pane_count(&self) -> usize {
        self.root.as_ref().map(|r| r.pane_count()).unwrap_or(0)
    }

    /// Check if there are multiple panes
    pub fn has_multiple_panes(&self) -> bool {
        self.pane_count() > 1
    }

    /// Get access to the root node (for rendering)
    pub fn root(&self) -> Option<&PaneNode> {
        self.root.as_ref()
    }

    /// Check every structural invariant
    ///
    /// Pane tab lists keep their pinned prefix and valid selection, pane and tab
    /// ids are unique, and focus points at a live pane whenever one exists.
    pub fn is_consistent(&self) -> bool {
        let Some(root) = self.root.as_ref() else {
            return self.focused_pane_id.is_none();
        };

        let panes = root.all_panes();
        let tabs_ok = panes.iter().all(|p| p.tabs.is_consistent());

        let mut pane_ids = root.all_pane_ids();
        pane_ids.sort();
        pane_ids.dedup();
        let mut tab_ids = root.all_tab_ids();
        let tab_total = tab_ids.len();
        tab_ids.sort();
        tab_ids.dedup();
        let unique_ok = pane_ids.len() == panes.len() && tab_ids.len() == tab_total;

        let focus_ok = self
            .focused_pane_id
            .is_some_and(|id| root.contains_pane(id));

        tabs_ok && unique_ok && focus_ok
    }

    /// Emit a change notification carrying the latest layout snapshot
    ///
    /// Drag updates are dropped when the config asks for end-of-drag
    /// notifications only.
    pub(super) fn notify(&mut self, change: LayoutChange) {
        if change.is_dragging() && self.config.divider_drag_notify == DividerDragNotify::OnDragEnd {
            crate::debug_trace!("LAYOUT_NOTIFY", "Suppressed drag notification");
            return;
        }
        if self.observer.is_none() {
            return;
        }
        let snapshot = self.layout_snapshot();
        if let Some(observer) = self.observer.as_mut() {
            crate::debug_trace!("LAYOUT_NOTIFY", "{:?} ({} panes)", change, snapshot.panes.len());
            observer.layout_changed(&snapshot, change);
        }
    }

    /// Tell the observer that focus moved
    pub(super) fn notify_focus(&mut self) {
        let focused = self.focused_pane_id;
        if let Some(observer) = self.observer.as_mut() {
            observer.focus_changed(focused);
        }
        self.notify(LayoutChange::Focus);
    }

    /// Point-in-time pixel layout of every leaf
    pub fn layout_snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::capture(self.root.as_ref(), self.container, self.focused_pane_id)
    }
}

impl Default for PaneManager {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

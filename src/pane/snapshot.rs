//! Read-only projections of the pane tree for external consumers
//!
//! - [`LayoutSnapshot`]: flat list of leaf frames plus focus, for renderers and
//!   window managers that only care where panes are
//! - [`TreeSnapshot`]: shape-preserving projection with string ids, meant to be
//!   serialized (JSON) and shipped to another process

use super::types::{Frame, Pane, PaneId, PaneNode, SplitOrientation};
use crate::tab::TabId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geometry and tab state of one leaf
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaneGeometry {
    pub pane_id: PaneId,
    pub frame: Frame,
    pub selected_tab_id: Option<TabId>,
    pub tab_ids: Vec<TabId>,
}

impl PaneGeometry {
    fn from_pane(pane: &Pane) -> Self {
        Self {
            pane_id: pane.id,
            frame: pane.frame,
            selected_tab_id: pane.selected_tab_id(),
            tab_ids: pane.tab_ids(),
        }
    }
}

/// Point-in-time pixel layout of every leaf
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSnapshot {
    pub container_frame: Frame,
    /// Leaves in tree order
    pub panes: Vec<PaneGeometry>,
    pub focused_pane_id: Option<PaneId>,
    pub timestamp: DateTime<Utc>,
}

impl LayoutSnapshot {
    /// Build a snapshot from a tree whose pane frames are up to date
    pub(crate) fn capture(
        root: Option<&PaneNode>,
        container_frame: Frame,
        focused_pane_id: Option<PaneId>,
    ) -> Self {
        let panes = root
            .map(|r| r.all_panes().into_iter().map(PaneGeometry::from_pane).collect())
            .unwrap_or_default();
        Self {
            container_frame,
            panes,
            focused_pane_id,
            timestamp: Utc::now(),
        }
    }

    /// Geometry of one pane
    pub fn pane(&self, id: PaneId) -> Option<&PaneGeometry> {
        self.panes.iter().find(|p| p.pane_id == id)
    }
}

/// Tab entry in the external tree projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSummary {
    pub id: String,
    pub title: String,
}

/// Shape-preserving projection of the pane tree
///
/// Serializes as
/// `{"kind":"pane","id":..,"frame":{..},"tabs":[{"id":..,"title":..}],"selectedTabId":..}` or
/// `{"kind":"split","id":..,"orientation":"horizontal"|"vertical","dividerPosition":..,"first":..,"second":..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum TreeSnapshot {
    Pane {
        id: String,
        frame: Frame,
        tabs: Vec<TabSummary>,
        selected_tab_id: Option<String>,
    },
    Split {
        id: String,
        orientation: SplitOrientation,
        divider_position: f32,
        first: Box<TreeSnapshot>,
        second: Box<TreeSnapshot>,
    },
}

impl TreeSnapshot {
    /// Project a subtree
    pub fn from_node(node: &PaneNode) -> Self {
        match node {
            PaneNode::Leaf(pane) => TreeSnapshot::Pane {
                id: pane.id.to_string(),
                frame: pane.frame,
                tabs: pane
                    .tabs
                    .tabs()
                    .iter()
                    .map(|tab| TabSummary {
                        id: tab.id.to_string(),
                        title: tab.title.clone(),
                    })
                    .collect(),
                selected_tab_id: pane.selected_tab_id().map(|id| id.to_string()),
            },
            PaneNode::Split {
                id,
                orientation,
                position,
                first,
                second,
            } => TreeSnapshot::Split {
                id: id.to_string(),
                orientation: *orientation,
                divider_position: *position,
                first: Box::new(Self::from_node(first)),
                second: Box::new(Self::from_node(second)),
            },
        }
    }

    /// Number of leaves in the projection
    pub fn pane_count(&self) -> usize {
        match self {
            TreeSnapshot::Pane { .. } => 1,
            TreeSnapshot::Split { first, second, .. } => first.pane_count() + second.pane_count(),
        }
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a projection previously produced by [`TreeSnapshot::to_json`]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

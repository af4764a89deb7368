//! `Pane`: a leaf of the split tree holding an ordered list of tabs.

use super::common::PaneId;
use super::frame::Frame;
use crate::tab::{Tab, TabId, TabList};

/// A single pane with its tab bar contents
#[derive(Debug, Clone)]
pub struct Pane {
    /// Unique identifier for this pane
    pub id: PaneId,
    /// Tabs shown in this pane, with selection
    pub tabs: TabList,
    /// Current frame of this pane (updated on layout calculation)
    pub frame: Frame,
}

impl Pane {
    /// Create an empty pane with a fresh id
    pub fn new() -> Self {
        Self::with_id(PaneId::new())
    }

    /// Create an empty pane with a given id
    pub fn with_id(id: PaneId) -> Self {
        Self {
            id,
            tabs: TabList::new(),
            frame: Frame::default(),
        }
    }

    /// Create a pane holding one selected tab
    pub fn with_tab(tab: Tab) -> Self {
        let mut pane = Self::new();
        pane.tabs.insert(tab, 0, true);
        pane
    }

    /// Whether the pane has no tabs
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Selected tab ID
    pub fn selected_tab_id(&self) -> Option<TabId> {
        self.tabs.selected_tab_id()
    }

    /// Tab ids in display order
    pub fn tab_ids(&self) -> Vec<TabId> {
        self.tabs.ids()
    }
}

impl Default for Pane {
    fn default() -> Self {
        Self::new()
    }
}

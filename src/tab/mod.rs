//! Tab records and per-pane tab ordering
//!
//! - `Tab`: one entry in a pane's tab bar (title, icon, status flags)
//! - `TabList`: the ordered tabs of a single pane plus its selection,
//!   enforcing the pinned-prefix ordering rule

mod list;

pub use list::TabList;
pub use tabsplit_config::TabId;

use serde::Serialize;

/// A single tab belonging to exactly one pane
///
/// The `pinned` flag is private: it can only change through
/// [`TabList::set_pinned`], which relocates the tab so that pinned tabs stay
/// in front of unpinned ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    /// Unique identifier for this tab
    pub id: TabId,
    /// Title shown in the tab bar
    pub title: String,
    /// Opaque icon reference (favicon URL, symbol name, ...) resolved by the renderer
    pub icon: Option<String>,
    /// Content has unsaved changes
    pub is_dirty: bool,
    /// Content is still loading
    pub is_loading: bool,
    /// Tab shows a notification badge
    pub has_notification: bool,
    pinned: bool,
}

impl Tab {
    /// Create an unpinned tab with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TabId::new(),
            title: title.into(),
            icon: None,
            is_dirty: false,
            is_loading: false,
            has_notification: false,
            pinned: false,
        }
    }

    /// Builder: set the icon reference
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Builder: mark the tab pinned before it is inserted anywhere
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Whether this tab is pinned
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub(crate) fn set_pinned_flag(&mut self, pinned: bool) {
        self.pinned = pinned;
    }
}

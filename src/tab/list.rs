//! Ordered tabs of one pane and the rules for inserting, moving and removing them
//!
//! Invariant: `tabs[..pinned_count]` are pinned and `tabs[pinned_count..]` are
//! not. Every mutation clamps its target index against that boundary instead of
//! rejecting the call.

use super::{Tab, TabId};
use tabsplit_config::NewTabPosition;

/// The tab bar contents of a single pane
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabList {
    /// Tabs in display order
    tabs: Vec<Tab>,
    /// Currently selected tab (None only when there is nothing to select)
    selected_tab_id: Option<TabId>,
}

impl TabList {
    /// Create an empty tab list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tabs
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Whether the list has no tabs
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// All tabs in display order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Tab ids in display order
    pub fn ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id).collect()
    }

    /// Get a tab by ID
    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a tab by ID
    ///
    /// The pinned flag is not reachable through this reference; use
    /// [`TabList::set_pinned`].
    pub fn get_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    /// Position of a tab
    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Whether the list holds a tab
    pub fn contains(&self, id: TabId) -> bool {
        self.index_of(id).is_some()
    }

    /// Number of pinned tabs (the length of the pinned prefix)
    pub fn pinned_count(&self) -> usize {
        self.tabs.iter().take_while(|t| t.is_pinned()).count()
    }

    /// Selected tab ID
    pub fn selected_tab_id(&self) -> Option<TabId> {
        self.selected_tab_id
    }

    /// Selected tab
    pub fn selected_tab(&self) -> Option<&Tab> {
        self.selected_tab_id.and_then(|id| self.get(id))
    }

    /// Index of the selected tab
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_tab_id.and_then(|id| self.index_of(id))
    }

    /// Clamp a requested index against the pinned boundary
    fn clamp_index(&self, pinned: bool, requested: usize) -> usize {
        let pinned_count = self.pinned_count();
        let index = if pinned {
            requested.min(pinned_count)
        } else {
            requested.max(pinned_count)
        };
        index.min(self.tabs.len())
    }

    /// Insert a tab near `at_index`, returning the index it actually landed at
    ///
    /// Pinned tabs never land after an unpinned tab and unpinned tabs never land
    /// before a pinned one. The first tab of an empty list is always selected.
    pub fn insert(&mut self, tab: Tab, at_index: usize, select: bool) -> usize {
        let index = self.clamp_index(tab.is_pinned(), at_index);
        let id = tab.id;
        self.tabs.insert(index, tab);
        if select || self.selected_tab_id.is_none() {
            self.selected_tab_id = Some(id);
        }
        index
    }

    /// Insert a tab according to a placement policy
    pub fn insert_with_policy(&mut self, tab: Tab, position: NewTabPosition, select: bool) -> usize {
        let requested = match position {
            NewTabPosition::End => self.tabs.len(),
            NewTabPosition::Start => 0,
            NewTabPosition::AfterSelected => self
                .selected_index()
                .map(|idx| idx + 1)
                .unwrap_or(self.tabs.len()),
        };
        self.insert(tab, requested, select)
    }

    /// Remove a tab, returning it and the index it occupied
    ///
    /// If the removed tab was selected, the tab that slides into its slot is
    /// selected (or the new last tab when the removed one was last).
    pub fn remove(&mut self, id: TabId) -> Option<(Tab, usize)> {
        let idx = self.index_of(id)?;
        let tab = self.tabs.remove(idx);

        if self.selected_tab_id == Some(id) {
            self.selected_tab_id = if self.tabs.is_empty() {
                None
            } else {
                let new_idx = idx.min(self.tabs.len() - 1);
                Some(self.tabs[new_idx].id)
            };
        }

        Some((tab, idx))
    }

    /// Move a tab within this list (drag-and-drop reordering)
    ///
    /// `to_index` is a drop slot in the pre-move list: dropping on the tab's own
    /// slot or the slot right after it leaves everything untouched. Returns true
    /// if the order changed.
    pub fn move_tab(&mut self, from_index: usize, to_index: usize) -> bool {
        if from_index >= self.tabs.len() {
            return false;
        }
        if to_index == from_index || to_index == from_index + 1 {
            return false;
        }

        let tab = self.tabs.remove(from_index);
        let adjusted = if to_index > from_index {
            to_index - 1
        } else {
            to_index
        };
        let index = self.clamp_index(tab.is_pinned(), adjusted);
        self.tabs.insert(index, tab);

        if index != from_index {
            log::debug!("Moved tab from index {} to {}", from_index, index);
        }
        index != from_index
    }

    /// Select a tab by ID
    pub fn select(&mut self, id: TabId) -> bool {
        if self.contains(id) {
            self.selected_tab_id = Some(id);
            true
        } else {
            false
        }
    }

    /// Select the next tab (wraps around)
    pub fn select_next(&mut self) -> Option<TabId> {
        let current = self.selected_index()?;
        let next = self.tabs[(current + 1) % self.tabs.len()].id;
        self.selected_tab_id = Some(next);
        Some(next)
    }

    /// Select the previous tab (wraps around)
    pub fn select_previous(&mut self) -> Option<TabId> {
        let current = self.selected_index()?;
        let prev_idx = if current == 0 {
            self.tabs.len() - 1
        } else {
            current - 1
        };
        let prev = self.tabs[prev_idx].id;
        self.selected_tab_id = Some(prev);
        Some(prev)
    }

    /// Pin or unpin a tab, moving it to the pinned/unpinned boundary
    ///
    /// A newly pinned tab becomes the last pinned tab; a newly unpinned tab
    /// becomes the first unpinned tab. Selection is preserved.
    pub fn set_pinned(&mut self, id: TabId, pinned: bool) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        if self.tabs[idx].is_pinned() == pinned {
            return true;
        }

        let mut tab = self.tabs.remove(idx);
        tab.set_pinned_flag(pinned);
        let boundary = self.pinned_count();
        self.tabs.insert(boundary, tab);
        true
    }

    /// Check the pinned-prefix and selection invariants
    pub fn is_consistent(&self) -> bool {
        let pinned_count = self.pinned_count();
        let prefix_ok = self.tabs[pinned_count..].iter().all(|t| !t.is_pinned());
        let selection_ok = match self.selected_tab_id {
            Some(id) => self.contains(id),
            None => true,
        };
        prefix_ok && selection_ok
    }
}

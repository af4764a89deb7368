//! Tab operations for PaneManager
//!
//! Tabs live inside panes; these methods route each request to the owning
//! pane's `TabList` and keep the tree-level rules (unique tab ids, empty pane
//! auto-close, focus) in one place.

use super::PaneManager;
use crate::pane::types::{Pane, PaneId, SplitOrientation};
use crate::tab::{Tab, TabId};
use crate::traits::LayoutChange;

impl PaneManager {
    /// Get a pane mutably
    fn pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        self.root.as_mut()?.find_pane_mut(id)
    }

    /// Whether a tab ID is already used anywhere in the tree
    fn tab_in_tree(&self, tab_id: TabId) -> bool {
        self.root
            .as_ref()
            .is_some_and(|r| r.find_pane_with_tab(tab_id).is_some())
    }

    /// Add a tab to a pane, placed by the configured `new_tab_position`
    ///
    /// The new tab becomes the pane's selected tab. Returns None if the pane
    /// does not exist or the tab's ID is already in the tree.
    pub fn add_tab(&mut self, tab: Tab, pane_id: PaneId) -> Option<TabId> {
        if self.tab_in_tree(tab.id) {
            log::warn!("add_tab: tab {} already lives in the tree", tab.id);
            return None;
        }
        let position = self.config.new_tab_position;
        let tab_id = tab.id;
        let index = self
            .pane_mut(pane_id)?
            .tabs
            .insert_with_policy(tab, position, true);

        log::info!("Added tab {} to pane {} at index {}", tab_id, pane_id, index);
        self.notify(LayoutChange::Structure);
        Some(tab_id)
    }

    /// Add a tab to a pane at an explicit index (clamped to the pinned boundary)
    pub fn add_tab_at(&mut self, tab: Tab, pane_id: PaneId, index: usize) -> Option<TabId> {
        if self.tab_in_tree(tab.id) {
            log::warn!("add_tab_at: tab {} already lives in the tree", tab.id);
            return None;
        }
        let tab_id = tab.id;
        let landed = self.pane_mut(pane_id)?.tabs.insert(tab, index, true);

        log::info!("Added tab {} to pane {} at index {}", tab_id, pane_id, landed);
        self.notify(LayoutChange::Structure);
        Some(tab_id)
    }

    /// Close a tab in a pane
    ///
    /// If the closed tab was selected the pane reselects the tab that slides
    /// into its slot. A pane left without tabs is closed when
    /// `auto_close_empty_panes` is set (subject to the last-pane rule).
    ///
    /// Returns false if the pane does not hold the tab.
    pub fn close_tab(&mut self, tab_id: TabId, pane_id: PaneId) -> bool {
        let Some(pane) = self.pane_mut(pane_id) else {
            return false;
        };
        let Some((_, index)) = pane.tabs.remove(tab_id) else {
            return false;
        };
        let now_empty = pane.is_empty();
        log::info!("Closing tab {} (index {}) in pane {}", tab_id, index, pane_id);

        if now_empty && self.config.auto_close_empty_panes {
            crate::debug_info!(
                "TAB_CLOSE",
                "Pane {} has no tabs left, closing it",
                pane_id
            );
            if self.close_pane(pane_id) {
                return true;
            }
        }

        self.notify(LayoutChange::Structure);
        true
    }

    /// Move a tab within a pane or to another pane
    ///
    /// Within one pane `at_index` is a drop slot in the current order and
    /// dropping a tab next to itself is a no-op. Across panes the tab is
    /// detached (the source reselects as if the tab were closed), inserted
    /// into the destination at `at_index` clamped to its pinned boundary and
    /// selected there, and the destination pane takes focus. The source pane
    /// is never closed by a move, even when it is left empty.
    ///
    /// Returns true if anything changed.
    pub fn move_tab(
        &mut self,
        tab_id: TabId,
        from_pane: PaneId,
        to_pane: PaneId,
        at_index: usize,
    ) -> bool {
        if from_pane == to_pane {
            let Some(pane) = self.pane_mut(from_pane) else {
                return false;
            };
            let Some(from_index) = pane.tabs.index_of(tab_id) else {
                return false;
            };
            let changed = pane.tabs.move_tab(from_index, at_index);
            if changed {
                self.notify(LayoutChange::Structure);
            }
            return changed;
        }

        let destination_ok = self.get_pane(to_pane).is_some();
        let source_ok = self
            .get_pane(from_pane)
            .is_some_and(|p| p.tabs.contains(tab_id));
        if !destination_ok || !source_ok {
            log::debug!(
                "move_tab: stale reference (tab {}, from {}, to {})",
                tab_id,
                from_pane,
                to_pane
            );
            return false;
        }

        let Some((tab, _)) = self
            .pane_mut(from_pane)
            .and_then(|pane| pane.tabs.remove(tab_id))
        else {
            return false;
        };
        let Some(destination) = self.pane_mut(to_pane) else {
            return false;
        };
        let landed = destination.tabs.insert(tab, at_index, true);

        crate::debug_info!(
            "TAB_MOVE",
            "Moved tab {} from pane {} to pane {} at index {}",
            tab_id,
            from_pane,
            to_pane,
            landed
        );

        let focus_moved = self.set_focus(to_pane);
        self.notify(LayoutChange::Structure);
        if focus_moved {
            self.notify_focus();
        }
        true
    }

    /// Move a tab out of its pane into a new pane split off `target`
    ///
    /// Returns the new pane's ID, or None on a stale reference. Like
    /// [`PaneManager::move_tab`], the source pane stays even when emptied.
    pub fn move_tab_to_new_split(
        &mut self,
        tab_id: TabId,
        from_pane: PaneId,
        target: PaneId,
        orientation: SplitOrientation,
        insert_first: bool,
    ) -> Option<PaneId> {
        if self.get_pane(target).is_none() {
            return None;
        }
        let (tab, _) = self.pane_mut(from_pane)?.tabs.remove(tab_id)?;
        log::debug!(
            "Moving tab {} from pane {} into a new split of pane {}",
            tab_id,
            from_pane,
            target
        );
        self.split_pane(target, orientation, Some(tab), insert_first)
    }

    /// Select a tab in a pane and focus that pane
    pub fn select_tab(&mut self, tab_id: TabId, pane_id: PaneId) -> bool {
        let Some(pane) = self.pane_mut(pane_id) else {
            return false;
        };
        let previous = pane.selected_tab_id();
        if !pane.tabs.select(tab_id) {
            return false;
        }

        if previous != Some(tab_id) {
            self.notify(LayoutChange::Structure);
        }
        if self.set_focus(pane_id) {
            self.notify_focus();
        }
        true
    }

    /// Select the next tab in a pane (wraps around)
    pub fn select_next_tab(&mut self, pane_id: PaneId) -> Option<TabId> {
        let selected = self.pane_mut(pane_id)?.tabs.select_next()?;
        self.notify(LayoutChange::Structure);
        Some(selected)
    }

    /// Select the previous tab in a pane (wraps around)
    pub fn select_previous_tab(&mut self, pane_id: PaneId) -> Option<TabId> {
        let selected = self.pane_mut(pane_id)?.tabs.select_previous()?;
        self.notify(LayoutChange::Structure);
        Some(selected)
    }

    /// Pin or unpin a tab wherever it lives
    pub fn set_tab_pinned(&mut self, tab_id: TabId, pinned: bool) -> bool {
        let Some(pane_id) = self.pane_of_tab(tab_id) else {
            return false;
        };
        let Some(pane) = self.pane_mut(pane_id) else {
            return false;
        };
        let was_pinned = pane.tabs.get(tab_id).is_some_and(|t| t.is_pinned());
        if !pane.tabs.set_pinned(tab_id, pinned) {
            return false;
        }
        if was_pinned != pinned {
            self.notify(LayoutChange::Structure);
        }
        true
    }

    /// Update a tab's display state (title, icon, badges)
    ///
    /// The tab's ID is restored after the closure runs and its pinned flag is
    /// not reachable from it; use [`PaneManager::set_tab_pinned`] for that.
    pub fn update_tab(&mut self, tab_id: TabId, update: impl FnOnce(&mut Tab)) -> bool {
        let Some(pane_id) = self.pane_of_tab(tab_id) else {
            return false;
        };
        let Some(tab) = self
            .pane_mut(pane_id)
            .and_then(|pane| pane.tabs.get_mut(tab_id))
        else {
            return false;
        };
        update(tab);
        tab.id = tab_id;
        self.notify(LayoutChange::Structure);
        true
    }

    /// Find a tab anywhere in the tree
    pub fn find_tab(&self, tab_id: TabId) -> Option<&Tab> {
        self.root
            .as_ref()?
            .find_pane_with_tab(tab_id)?
            .tabs
            .get(tab_id)
    }

    /// Pane holding a tab
    pub fn pane_of_tab(&self, tab_id: TabId) -> Option<PaneId> {
        self.root
            .as_ref()?
            .find_pane_with_tab(tab_id)
            .map(|pane| pane.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabsplit_config::{LayoutConfig, NewTabPosition};

    fn titles(manager: &PaneManager, pane_id: PaneId) -> Vec<String> {
        manager
            .get_pane(pane_id)
            .map(|p| p.tabs.tabs().iter().map(|t| t.title.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_add_tab_follows_policy() {
        let config = LayoutConfig {
            new_tab_position: NewTabPosition::AfterSelected,
            ..LayoutConfig::default()
        };
        let mut manager = PaneManager::new(config);
        let pane = manager.focused_pane_id().expect("pane");
        let a = manager.add_tab(Tab::new("a"), pane).expect("a");
        manager.add_tab(Tab::new("b"), pane).expect("b");
        manager.select_tab(a, pane);
        manager.add_tab(Tab::new("c"), pane).expect("c");
        assert_eq!(titles(&manager, pane), vec!["a", "c", "b"]);
        assert_eq!(
            manager.get_pane(pane).and_then(|p| p.tabs.selected_tab().map(|t| t.title.clone())),
            Some("c".to_string())
        );
    }

    #[test]
    fn test_add_tab_rejects_duplicates_and_stale_panes() {
        let mut manager = PaneManager::default();
        let pane = manager.focused_pane_id().expect("pane");
        let tab = Tab::new("a");
        let copy = tab.clone();
        assert!(manager.add_tab(tab, pane).is_some());
        assert!(manager.add_tab(copy, pane).is_none());
        assert!(manager.add_tab(Tab::new("b"), PaneId::new()).is_none());
        assert_eq!(manager.all_tab_ids().len(), 1);
    }

    #[test]
    fn test_update_tab_keeps_identity() {
        let mut manager = PaneManager::default();
        let pane = manager.focused_pane_id().expect("pane");
        let id = manager.add_tab(Tab::new("a"), pane).expect("tab");
        assert!(manager.update_tab(id, |tab| {
            tab.title = "renamed".to_string();
            tab.is_dirty = true;
            tab.id = TabId::new();
        }));
        let tab = manager.find_tab(id).expect("tab");
        assert_eq!(tab.title, "renamed");
        assert!(tab.is_dirty);
        assert!(!manager.update_tab(TabId::new(), |_| {}));
    }

    #[test]
    fn test_set_tab_pinned_moves_to_boundary() {
        let mut manager = PaneManager::default();
        let pane = manager.focused_pane_id().expect("pane");
        manager.add_tab(Tab::new("a"), pane);
        manager.add_tab(Tab::new("b"), pane);
        let c = manager.add_tab(Tab::new("c"), pane).expect("c");
        assert!(manager.set_tab_pinned(c, true));
        assert_eq!(titles(&manager, pane), vec!["c", "a", "b"]);
        assert!(manager.set_tab_pinned(c, false));
        assert_eq!(titles(&manager, pane), vec!["c", "a", "b"]);
        assert!(manager.is_consistent());
    }

    #[test]
    fn test_select_next_previous_wrap() {
        let mut manager = PaneManager::default();
        let pane = manager.focused_pane_id().expect("pane");
        let a = manager.add_tab(Tab::new("a"), pane).expect("a");
        let b = manager.add_tab(Tab::new("b"), pane).expect("b");
        assert_eq!(manager.select_next_tab(pane), Some(a));
        assert_eq!(manager.select_previous_tab(pane), Some(b));
        assert_eq!(manager.select_next_tab(PaneId::new()), None);
    }
}

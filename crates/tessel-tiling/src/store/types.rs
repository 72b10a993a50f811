//! Core types and accessors for the tab-group store.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tessel_common::{GroupId, TabId};

use crate::layout::LayoutEngine;
use crate::tab::Tab;
use crate::tree::LayoutTree;

/// One tileable workspace: its tabs, the active one, and their layout.
#[derive(Debug, Clone)]
pub struct TabGroup {
    pub(super) id: GroupId,
    /// Membership order. Drives "first remaining tab" after a close.
    pub(super) order: Vec<TabId>,
    pub(super) tabs: HashMap<TabId, Tab>,
    pub(super) active: TabId,
    pub(super) layout: LayoutTree,
    /// If `Some(id)`, that pane fills the whole group viewport.
    pub(super) maximized: Option<TabId>,
}

impl TabGroup {
    pub(super) fn with_tab(tab: Tab) -> Self {
        let id = tab.id.clone();
        Self {
            id: GroupId::new(),
            order: vec![id.clone()],
            tabs: HashMap::from([(id.clone(), tab)]),
            active: id.clone(),
            layout: LayoutTree::Leaf(id),
            maximized: None,
        }
    }

    pub fn id(&self) -> &GroupId {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, tab: &TabId) -> bool {
        self.tabs.contains_key(tab)
    }

    pub fn tab(&self, id: &TabId) -> Option<&Tab> {
        self.tabs.get(id)
    }

    /// Tabs in membership order.
    pub fn tabs(&self) -> impl Iterator<Item = &Tab> {
        self.order.iter().filter_map(|id| self.tabs.get(id))
    }

    pub fn tab_ids(&self) -> &[TabId] {
        &self.order
    }

    pub fn active_id(&self) -> &TabId {
        &self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.get(&self.active)
    }

    pub fn layout(&self) -> &LayoutTree {
        &self.layout
    }

    pub fn maximized(&self) -> Option<&TabId> {
        self.maximized.as_ref()
    }

    /// Check the group invariants: `active` is a member and the layout holds
    /// exactly the member ids, each once.
    pub fn is_consistent(&self) -> bool {
        if !self.tabs.contains_key(&self.active) || self.order.len() != self.tabs.len() {
            return false;
        }
        let leaves = self.layout.leaf_ids();
        let leaf_set: HashSet<&TabId> = leaves.iter().collect();
        leaf_set.len() == leaves.len()
            && leaves.len() == self.tabs.len()
            && self.order.iter().all(|id| leaf_set.contains(id))
    }

    pub fn snapshot(&self) -> TabGroupSnapshot {
        TabGroupSnapshot {
            id: self.id.clone(),
            tabs: self.tabs().cloned().collect(),
            active: self.active.clone(),
            layout: self.layout.clone(),
        }
    }
}

/// Immutable view of one group, in the shape the UI consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabGroupSnapshot {
    pub id: GroupId,
    pub tabs: Vec<Tab>,
    pub active: TabId,
    pub layout: LayoutTree,
}

/// Immutable view of the whole store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub tab_groups: Vec<TabGroupSnapshot>,
    pub active_tab_group: Option<GroupId>,
}

/// Result of removing a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The tab was not in the addressed group; nothing changed.
    NotFound,
    /// The tab was removed and its group still has panes.
    Removed(GroupId),
    /// The tab was the group's last pane, so the group was deleted.
    GroupRemoved(GroupId),
}

/// Owns every tab group and the globally active selection.
///
/// All mutations go through methods on this type; ids are the only handles
/// callers keep.
#[derive(Debug, Clone, Default)]
pub struct TabGroupStore {
    pub(super) groups: HashMap<GroupId, TabGroup>,
    pub(super) order: Vec<GroupId>,
    pub(super) tab_owner: HashMap<TabId, GroupId>,
    pub(super) active: Option<GroupId>,
    pub(super) layout_engine: LayoutEngine,
}

impl TabGroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom pixel layout engine.
    pub fn with_layout(layout_engine: LayoutEngine) -> Self {
        Self {
            layout_engine,
            ..Self::default()
        }
    }

    // -- Accessors --

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Groups in display order.
    pub fn groups(&self) -> impl Iterator<Item = &TabGroup> {
        self.order.iter().filter_map(|id| self.groups.get(id))
    }

    pub fn group_ids(&self) -> &[GroupId] {
        &self.order
    }

    pub fn group(&self, id: &GroupId) -> Option<&TabGroup> {
        self.groups.get(id)
    }

    pub fn active_group_id(&self) -> Option<&GroupId> {
        self.active.as_ref()
    }

    pub fn active_group(&self) -> Option<&TabGroup> {
        self.active.as_ref().and_then(|id| self.groups.get(id))
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_group().and_then(TabGroup::active_tab)
    }

    pub fn group_of_tab(&self, tab: &TabId) -> Option<&GroupId> {
        self.tab_owner.get(tab)
    }

    pub fn tab(&self, id: &TabId) -> Option<&Tab> {
        let owner = self.tab_owner.get(id)?;
        self.groups.get(owner)?.tab(id)
    }

    pub fn layout_engine(&self) -> &LayoutEngine {
        &self.layout_engine
    }

    pub fn set_gap(&mut self, gap: u32) {
        self.layout_engine.gap = gap;
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            tab_groups: self.groups().map(TabGroup::snapshot).collect(),
            active_tab_group: self.active.clone(),
        }
    }

    /// Every group consistent and the tab-owner index matching membership.
    pub fn is_consistent(&self) -> bool {
        let tab_total: usize = self.groups.values().map(TabGroup::len).sum();
        self.order.len() == self.groups.len()
            && self.order.iter().all(|id| self.groups.contains_key(id))
            && self.groups.values().all(TabGroup::is_consistent)
            && self.tab_owner.len() == tab_total
            && self.tab_owner.iter().all(|(tab, owner)| {
                self.groups
                    .get(owner)
                    .is_some_and(|group| group.contains(tab))
            })
            && self
                .active
                .as_ref()
                .map_or(true, |id| self.groups.contains_key(id))
    }

    /// Resolve the group an operation targets: the explicit one, or the
    /// active group.
    pub(super) fn target_group_id(&self, group: Option<&GroupId>) -> Option<GroupId> {
        match group {
            Some(id) => self.groups.contains_key(id).then(|| id.clone()),
            None => self.active.clone(),
        }
    }
}

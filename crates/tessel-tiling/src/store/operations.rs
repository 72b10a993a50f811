//! Create, split, close, update, and reorder operations on the store.

use std::collections::HashSet;

use tessel_common::{Direction, GroupId, SurfaceDetach, TabId};
use tracing::{debug, warn};

use crate::navigation::resolve_neighbor;
use crate::tab::{Tab, DEFAULT_URL};
use crate::tree::{LayoutTree, SplitDirection};

use super::{RemoveOutcome, TabGroup, TabGroupStore};

/// Percentage points moved per unit of resize delta.
pub const RESIZE_STEP: f64 = 5.0;

impl TabGroupStore {
    /// Create a group holding one fresh tab, append it, and make it active.
    pub fn create_group(&mut self, initial_url: Option<&str>) -> &TabGroup {
        let tab = Tab::new(initial_url.unwrap_or(DEFAULT_URL));
        let group = TabGroup::with_tab(tab);
        let id = group.id.clone();
        self.tab_owner.insert(group.active.clone(), id.clone());
        debug!(group = %id, tab = %group.active, "tab group created");
        self.order.push(id.clone());
        self.active = Some(id.clone());
        self.groups.entry(id).or_insert(group)
    }

    /// Split the anchor pane (the active pane of the active group by
    /// default) and make the new pane active. Returns the new tab's id.
    pub fn split_pane(
        &mut self,
        direction: SplitDirection,
        anchor: Option<&TabId>,
    ) -> Option<TabId> {
        let (group_id, anchor) = match anchor {
            Some(tab) => (self.tab_owner.get(tab)?.clone(), tab.clone()),
            None => {
                let group_id = self.active.clone()?;
                let anchor = self.groups.get(&group_id)?.active.clone();
                (group_id, anchor)
            }
        };
        let Some(group) = self.groups.get_mut(&group_id) else {
            warn!(group = %group_id, "split target group not found");
            return None;
        };

        let tab = Tab::default();
        let new_id = tab.id.clone();
        group.layout = group.layout.split(&anchor, new_id.clone(), direction);
        group.order.push(new_id.clone());
        group.tabs.insert(new_id.clone(), tab);
        group.active = new_id.clone();
        group.maximized = None;
        self.tab_owner.insert(new_id.clone(), group_id.clone());
        debug!(group = %group_id, anchor = %anchor, tab = %new_id, ?direction, "pane split");
        Some(new_id)
    }

    /// Remove a tab. The surface bound to it is detached first.
    ///
    /// When the removed tab was active, the first remaining tab in
    /// membership order becomes active. Removing the last tab deletes the
    /// group and, if it was the active group, clears the active selection.
    pub fn remove_tab(
        &mut self,
        tab: &TabId,
        group: Option<&GroupId>,
        surfaces: &mut impl SurfaceDetach,
    ) -> RemoveOutcome {
        let Some(owner) = self.tab_owner.get(tab).cloned() else {
            warn!(tab = %tab, "remove for unknown tab ignored");
            return RemoveOutcome::NotFound;
        };
        if group.is_some_and(|g| *g != owner) {
            warn!(tab = %tab, "tab is not a member of the addressed group");
            return RemoveOutcome::NotFound;
        }
        let Some(target) = self.groups.get_mut(&owner) else {
            return RemoveOutcome::NotFound;
        };

        surfaces.detach(tab);

        self.tab_owner.remove(tab);
        target.tabs.remove(tab);
        target.order.retain(|id| id != tab);
        target.maximized = None;

        match target.layout.remove(tab) {
            Some(layout) => {
                target.layout = layout;
                if target.active == *tab {
                    if let Some(first) = target.order.first() {
                        target.active = first.clone();
                    }
                }
                debug!(group = %owner, tab = %tab, active = %target.active, "tab removed");
                RemoveOutcome::Removed(owner)
            }
            None => {
                self.groups.remove(&owner);
                self.order.retain(|id| *id != owner);
                if self.active.as_ref() == Some(&owner) {
                    self.active = None;
                }
                debug!(group = %owner, tab = %tab, "last tab removed, group deleted");
                RemoveOutcome::GroupRemoved(owner)
            }
        }
    }

    /// Close the active pane of the active group.
    pub fn close_active(&mut self, surfaces: &mut impl SurfaceDetach) -> RemoveOutcome {
        match self.active_group().map(|g| g.active.clone()) {
            Some(tab) => self.remove_tab(&tab, None, surfaces),
            None => RemoveOutcome::NotFound,
        }
    }

    /// Close every pane of the active group except the active one.
    /// Returns the number of panes closed.
    pub fn close_others(&mut self, surfaces: &mut impl SurfaceDetach) -> usize {
        let Some(group) = self.active_group() else {
            return 0;
        };
        let keep = group.active.clone();
        let doomed: Vec<TabId> = group.order.iter().filter(|id| **id != keep).cloned().collect();
        for tab in &doomed {
            self.remove_tab(tab, None, surfaces);
        }
        doomed.len()
    }

    fn tab_mut(&mut self, tab: &TabId) -> Option<&mut Tab> {
        let owner = self.tab_owner.get(tab)?;
        self.groups.get_mut(owner)?.tabs.get_mut(tab)
    }

    /// Record a committed navigation. Unknown tabs are ignored.
    pub fn update_tab_url(&mut self, tab: &TabId, url: impl Into<String>) -> bool {
        match self.tab_mut(tab) {
            Some(t) => {
                t.url = url.into();
                true
            }
            None => {
                warn!(tab = %tab, "url update for unknown tab ignored");
                false
            }
        }
    }

    pub fn update_tab_title(&mut self, tab: &TabId, title: impl Into<String>) -> bool {
        match self.tab_mut(tab) {
            Some(t) => {
                t.title = Some(title.into());
                true
            }
            None => {
                warn!(tab = %tab, "title update for unknown tab ignored");
                false
            }
        }
    }

    pub fn update_tab_icon(&mut self, tab: &TabId, icon: impl Into<String>) -> bool {
        match self.tab_mut(tab) {
            Some(t) => {
                t.icon = Some(icon.into());
                true
            }
            None => {
                warn!(tab = %tab, "icon update for unknown tab ignored");
                false
            }
        }
    }

    /// Replace the group order wholesale. `new_order` must be a permutation
    /// of the current group ids, otherwise nothing changes.
    pub fn reorder_groups(&mut self, new_order: Vec<GroupId>) -> bool {
        let current: HashSet<&GroupId> = self.order.iter().collect();
        let proposed: HashSet<&GroupId> = new_order.iter().collect();
        if new_order.len() != self.order.len() || proposed != current {
            warn!("group reorder is not a permutation, ignored");
            return false;
        }
        self.order = new_order;
        true
    }

    /// Move the dragged group `active` to the index held by `over`.
    pub fn reorder_groups_by_drag(&mut self, active: &GroupId, over: &GroupId) -> bool {
        if active == over {
            return false;
        }
        let from = self.order.iter().position(|id| id == active);
        let to = self.order.iter().position(|id| id == over);
        let (Some(from), Some(to)) = (from, to) else {
            warn!(active = %active, over = %over, "drag reorder with unknown group ignored");
            return false;
        };
        let mut new_order = self.order.clone();
        let moved = new_order.remove(from);
        new_order.insert(to, moved);
        self.reorder_groups(new_order)
    }

    /// Replace a group's layout with a snapshot reported by the UI after a
    /// drag or resize. The snapshot must hold exactly the group's tabs and
    /// every split percentage must lie strictly between 0 and 100.
    pub fn replace_layout(&mut self, layout: LayoutTree, group: Option<&GroupId>) -> bool {
        let Some(group_id) = self.target_group_id(group) else {
            return false;
        };
        let Some(target) = self.groups.get_mut(&group_id) else {
            return false;
        };
        let leaves = layout.leaf_ids();
        let leaf_set: HashSet<&TabId> = leaves.iter().collect();
        if leaf_set.len() != leaves.len()
            || leaves.len() != target.tabs.len()
            || !leaves.iter().all(|id| target.tabs.contains_key(id))
        {
            warn!(group = %group_id, "layout snapshot does not match group tabs, ignored");
            return false;
        }
        if !layout.has_valid_percentages() {
            warn!(group = %group_id, "layout snapshot has an invalid split percentage, ignored");
            return false;
        }
        target.layout = layout;
        true
    }

    /// Move the divider next to the active pane. `delta` counts resize steps.
    pub fn resize(&mut self, direction: Direction, delta: i32) -> bool {
        let Some(group) = self.active_group_mut() else {
            return false;
        };
        let active = group.active.clone();
        group
            .layout
            .resize(&active, direction, delta as f64 * RESIZE_STEP)
    }

    /// Swap the active pane with its spatial neighbor.
    pub fn swap(&mut self, direction: Direction) -> bool {
        let Some(group) = self.active_group_mut() else {
            return false;
        };
        match resolve_neighbor(&group.layout, &group.active, direction) {
            Some(neighbor) => {
                let active = group.active.clone();
                group.layout.swap_leaves(&active, &neighbor)
            }
            None => false,
        }
    }

    pub fn equalize(&mut self) -> bool {
        self.active_group_mut()
            .map(|group| group.layout.equalize())
            .unwrap_or(false)
    }

    /// Toggle the active pane filling the whole group.
    pub fn toggle_maximize(&mut self) -> bool {
        let Some(group) = self.active_group_mut() else {
            return false;
        };
        if group.len() <= 1 {
            return false;
        }
        if group.maximized.as_ref() == Some(&group.active) {
            group.maximized = None;
        } else {
            group.maximized = Some(group.active.clone());
        }
        true
    }

    pub(super) fn active_group_mut(&mut self) -> Option<&mut TabGroup> {
        let id = self.active.as_ref()?;
        self.groups.get_mut(id)
    }
}

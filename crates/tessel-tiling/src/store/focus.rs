//! Active group and active pane selection.

use tessel_common::{Direction, GroupId, TabId};
use tracing::debug;

use crate::navigation::resolve_neighbor;

use super::TabGroupStore;

impl TabGroupStore {
    pub fn set_active_group(&mut self, group: &GroupId) -> bool {
        if self.groups.contains_key(group) {
            self.active = Some(group.clone());
            true
        } else {
            false
        }
    }

    /// Make `tab` the active pane of `group` (the active group by default).
    /// No-op when the tab is not a member of that group.
    pub fn set_active_tab(&mut self, tab: &TabId, group: Option<&GroupId>) -> bool {
        let Some(group_id) = self.target_group_id(group) else {
            return false;
        };
        match self.groups.get_mut(&group_id) {
            Some(g) if g.tabs.contains_key(tab) => {
                g.active = tab.clone();
                true
            }
            _ => false,
        }
    }

    /// Move the active pane to its spatial neighbor in `direction`.
    /// Returns the newly active tab, or `None` at the edge of the layout.
    pub fn focus_direction(&mut self, direction: Direction) -> Option<TabId> {
        let group = self.active_group_mut()?;
        let neighbor = resolve_neighbor(&group.layout, &group.active, direction)?;
        debug!(from = %group.active, to = %neighbor, ?direction, "focus moved");
        group.active = neighbor.clone();
        Some(neighbor)
    }

    /// Focus the next pane in layout order, wrapping.
    pub fn focus_next(&mut self) -> Option<TabId> {
        let group = self.active_group_mut()?;
        let next = group.layout.next_leaf(&group.active)?;
        group.active = next.clone();
        Some(next)
    }

    /// Focus the previous pane in layout order, wrapping.
    pub fn focus_prev(&mut self) -> Option<TabId> {
        let group = self.active_group_mut()?;
        let prev = group.layout.prev_leaf(&group.active)?;
        group.active = prev.clone();
        Some(prev)
    }
}

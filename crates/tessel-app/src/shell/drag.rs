//! Drag gestures: divider resizing inside a group and reordering of group
//! tiles. Surfaces stop receiving pointer events while either is active so
//! the embedded pages do not swallow the drag.

use tessel_common::{GroupId, TabId};
use tessel_tiling::layout::borders::{compute_borders, SplitBorder};
use tessel_webview::SurfaceCommand;
use tracing::debug;

use super::core::{BrowserShell, SurfaceHost};

/// An in-progress drag. Each variant remembers which panes had pointer
/// events turned off so the drop restores exactly those.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    /// Dragging the divider of one split in `group`.
    Divider {
        border: SplitBorder,
        group: GroupId,
        tabs: Vec<TabId>,
    },
    /// Dragging a group tile in the sidebar.
    GroupTile { tabs: Vec<TabId> },
}

impl DragState {
    /// Panes whose pointer events are suspended by this drag.
    pub fn tabs(&self) -> &[TabId] {
        match self {
            DragState::Divider { tabs, .. } | DragState::GroupTile { tabs } => tabs,
        }
    }

    fn tabs_mut(&mut self) -> &mut Vec<TabId> {
        match self {
            DragState::Divider { tabs, .. } | DragState::GroupTile { tabs } => tabs,
        }
    }
}

impl<S: SurfaceHost> BrowserShell<S> {
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Dividers of the active group in the current viewport.
    pub fn split_borders(&self) -> Vec<SplitBorder> {
        let Some(group) = self.store.active_group() else {
            return Vec::new();
        };
        if group.maximized().is_some() {
            return Vec::new();
        }
        let engine = self.store.layout_engine();
        let viewport = self.viewport.inset(engine.outer_padding as f64);
        compute_borders(group.layout(), viewport, engine.gap as f64)
    }

    /// Start a divider drag if `(x, y)` is on a divider.
    pub fn begin_resize_drag(&mut self, x: f64, y: f64) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let Some(border) = self.split_borders().into_iter().find(|b| b.hit_test(x, y)) else {
            return false;
        };
        let Some(group) = self.store.active_group_id().cloned() else {
            return false;
        };
        debug!(path = ?border.path, group = %group, "divider drag started");
        let tabs = self.suspend_pointer_events();
        self.drag = Some(DragState::Divider {
            border,
            group,
            tabs,
        });
        true
    }

    /// Move the dragged divider under the cursor.
    pub fn update_resize_drag(&mut self, x: f64, y: f64) -> bool {
        let Some(DragState::Divider { border, group, .. }) = &self.drag else {
            return false;
        };
        let Some(mut layout) = self.store.group(group).map(|g| g.layout().clone()) else {
            return false;
        };
        if !layout.set_split_percentage(&border.path, border.percentage_at(x, y)) {
            return false;
        }
        let group = group.clone();
        self.store.replace_layout(layout, Some(&group))
    }

    /// Start dragging a group tile.
    pub fn begin_group_drag(&mut self) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let tabs = self.suspend_pointer_events();
        self.drag = Some(DragState::GroupTile { tabs });
        true
    }

    /// Finish any drag, restoring pointer events on the panes it suspended.
    /// Returns whether a drag was in progress.
    pub fn end_drag(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        for tab in drag.tabs() {
            if self.surfaces.contains(tab) {
                self.surfaces
                    .issue_or_warn(tab, SurfaceCommand::SetPointerEvents(true));
            }
        }
        true
    }

    /// Drop of a group tile: move `active` to where `over` sits.
    pub fn drag_end(&mut self, active: &GroupId, over: &GroupId) -> bool {
        self.end_drag();
        self.store.reorder_groups_by_drag(active, over)
    }

    /// Keep a pane created mid-drag from taking pointer events until the
    /// drop.
    pub(super) fn suspend_during_drag(&mut self, tab: &TabId) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.tabs_mut().push(tab.clone());
        self.surfaces
            .issue_or_warn(tab, SurfaceCommand::SetPointerEvents(false));
    }

    fn suspend_pointer_events(&mut self) -> Vec<TabId> {
        let tabs: Vec<_> = self
            .store
            .active_group()
            .map(|g| g.tab_ids().to_vec())
            .unwrap_or_default();
        for tab in &tabs {
            self.surfaces
                .issue_or_warn(tab, SurfaceCommand::SetPointerEvents(false));
        }
        tabs
    }
}

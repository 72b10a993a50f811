//! Layout computation and command dispatch for the store.

use tessel_common::{Rect, SurfaceDetach, TabId};

use crate::commands::TilingCommand;
use crate::tree::SplitDirection;

use super::{RemoveOutcome, TabGroupStore};

impl TabGroupStore {
    /// Execute a tiling command against the active group. Returns `true`
    /// if the command changed anything.
    pub fn execute(&mut self, cmd: TilingCommand, surfaces: &mut impl SurfaceDetach) -> bool {
        match cmd {
            TilingCommand::SplitRow => self.split_pane(SplitDirection::Row, None).is_some(),
            TilingCommand::SplitColumn => self.split_pane(SplitDirection::Column, None).is_some(),
            TilingCommand::Close => self.close_active(surfaces) != RemoveOutcome::NotFound,
            TilingCommand::CloseOthers => self.close_others(surfaces) > 0,
            TilingCommand::Resize(dir, delta) => self.resize(dir, delta),
            TilingCommand::Swap(dir) => self.swap(dir),
            TilingCommand::FocusNext => self.focus_next().is_some(),
            TilingCommand::FocusPrev => self.focus_prev().is_some(),
            TilingCommand::FocusDirection(dir) => self.focus_direction(dir).is_some(),
            TilingCommand::Maximize => self.toggle_maximize(),
            TilingCommand::Equalize => self.equalize(),
        }
    }

    /// Pixel rects for the active group's panes within `viewport`.
    /// A maximized pane fills the entire viewport on its own.
    pub fn compute_layout(&self, viewport: Rect) -> Vec<(TabId, Rect)> {
        let Some(group) = self.active_group() else {
            return Vec::new();
        };
        match &group.maximized {
            Some(id) => vec![(id.clone(), viewport.inset(self.layout_engine.outer_padding as f64))],
            None => self.layout_engine.compute(&group.layout, viewport),
        }
    }
}

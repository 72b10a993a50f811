//! Action dispatch: routes resolved actions to the tab-group store or to
//! the active surface.

use tessel_common::{Action, Direction, GroupId, TabId};
use tessel_platform::{KeyCombo, MatchResult};
use tessel_tiling::{RemoveOutcome, SplitDirection, TilingCommand};
use tessel_webview::{normalize_url, SurfaceCommand};
use tracing::{debug, info, warn};

use crate::command_bar::{self, CommandBarInput, CommandBarResults};

use super::core::{BrowserShell, SurfaceHost};

/// What running the command bar did.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandBarOutcome {
    /// The active pane was sent to this URL.
    Navigated(String),
    /// Filtered entries to show.
    Results(CommandBarResults),
    Ignored,
}

impl<S: SurfaceHost> BrowserShell<S> {
    /// Dispatch one action. Returns `true` if anything changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!(?action, layout = action.is_layout_action(), "dispatch");
        match action {
            Action::NewTabGroup => {
                self.new_group(None);
                true
            }
            Action::CloseTab => {
                let outcome = self.store.close_active(&mut self.surfaces);
                if let RemoveOutcome::Removed(_) = outcome {
                    self.refocus(None);
                }
                outcome != RemoveOutcome::NotFound
            }
            Action::CloseOtherTabs => self.store.close_others(&mut self.surfaces) > 0,
            Action::SplitHorizontal => self.split(SplitDirection::Row),
            Action::SplitVertical => self.split(SplitDirection::Column),
            Action::FocusDirection(direction) => {
                let previous = self.active_tab_id();
                let moved = self.store.focus_direction(direction).is_some();
                if moved {
                    self.refocus(previous);
                }
                moved
            }
            Action::FocusNextTab | Action::FocusPrevTab => {
                let previous = self.active_tab_id();
                let moved = if action == Action::FocusNextTab {
                    self.store.focus_next()
                } else {
                    self.store.focus_prev()
                };
                if moved.is_some() {
                    self.refocus(previous);
                }
                moved.is_some()
            }
            Action::ResizePane { direction, delta } => self.store.resize(direction, delta),
            Action::MaximizePane => self.store.toggle_maximize(),
            Action::EqualizePanes => self.store.equalize(),

            Action::OpenUrl(url) => self.navigate_active(&url),
            Action::Reload => self.command_active(SurfaceCommand::Reload),
            Action::ReloadIgnoringCache => self.command_active(SurfaceCommand::ReloadIgnoringCache),
            Action::GoBack => self.command_active(SurfaceCommand::GoBack),
            Action::GoForward => self.command_active(SurfaceCommand::GoForward),
            Action::Find => self.command_active(SurfaceCommand::Find(String::new())),
            Action::ZoomIn => self.command_active(SurfaceCommand::ZoomIn),
            Action::ZoomOut => self.command_active(SurfaceCommand::ZoomOut),
            Action::ResetZoom => self.command_active(SurfaceCommand::ResetZoom),
            Action::ToggleDevTools => self.command_active(SurfaceCommand::ToggleDevTools),
            Action::SelectAll => self.command_active(SurfaceCommand::SelectAll),
            Action::Print => self.command_active(SurfaceCommand::Print),
            Action::LoseFocus => self.command_active(SurfaceCommand::Blur),

            Action::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                true
            }
            Action::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                true
            }
            Action::OpenCommandBar => {
                self.command_bar_open = !self.command_bar_open;
                true
            }
            Action::ReloadSettings => self.reload_settings(),
            Action::None => false,
        }
    }

    /// Open a group and move keyboard focus into it.
    pub fn new_group(&mut self, url: Option<&str>) -> TabId {
        let previous = self.active_tab_id();
        let tab = self.open_group(url);
        self.refocus(previous);
        tab
    }

    pub fn swap(&mut self, direction: Direction) -> bool {
        self.store
            .execute(TilingCommand::Swap(direction), &mut self.surfaces)
    }

    fn split(&mut self, direction: SplitDirection) -> bool {
        let previous = self.active_tab_id();
        let Some(tab) = self.store.split_pane(direction, None) else {
            return false;
        };
        let url = self
            .store
            .tab(&tab)
            .map(|t| t.url.clone())
            .unwrap_or_default();
        self.attach_surface(&tab, &url);
        self.refocus(previous);
        true
    }

    /// Load `input` in the active pane. Without an active group a new one
    /// is opened on that address instead.
    pub fn navigate_active(&mut self, input: &str) -> bool {
        let url = match normalize_url(input) {
            Ok(url) => url,
            Err(e) => {
                warn!("not navigating: {e}");
                return false;
            }
        };
        let Some(tab) = self.active_tab_id() else {
            self.open_group(Some(&url));
            return true;
        };
        self.store.update_tab_url(&tab, url.clone());
        self.surfaces.issue_or_warn(&tab, SurfaceCommand::Load(url))
    }

    /// Feed one key press to the hotkey matcher, dispatching on a match.
    pub fn handle_key(&mut self, combo: KeyCombo) -> MatchResult {
        let result = self.matcher.feed(&self.keybinds, combo);
        if let MatchResult::Matched(action) = &result {
            self.dispatch(action.clone());
        }
        result
    }

    /// Run command bar text as if Enter was pressed.
    pub fn run_command_bar(&mut self, input: &str) -> CommandBarOutcome {
        match command_bar::parse(input) {
            CommandBarInput::Url(term) | CommandBarInput::WebSearch(term) if term.is_empty() => {
                CommandBarOutcome::Ignored
            }
            CommandBarInput::Url(term) => self.command_bar_navigate(&term),
            CommandBarInput::WebSearch(term) => {
                self.command_bar_navigate(&command_bar::web_search_url(&term))
            }
            CommandBarInput::Filter(term) => CommandBarOutcome::Results(command_bar::filter(
                &self.store,
                &self.settings.settings().hotkeys,
                &term,
            )),
        }
    }

    fn command_bar_navigate(&mut self, target: &str) -> CommandBarOutcome {
        if !self.navigate_active(target) {
            return CommandBarOutcome::Ignored;
        }
        self.command_bar_open = false;
        let url = self
            .store
            .active_tab()
            .map(|t| t.url.clone())
            .unwrap_or_default();
        CommandBarOutcome::Navigated(url)
    }

    /// Switch to another tab group, e.g. from the command bar or sidebar.
    pub fn select_group(&mut self, group: &GroupId) -> bool {
        let previous = self.active_tab_id();
        if !self.store.set_active_group(group) {
            return false;
        }
        self.command_bar_open = false;
        self.refocus(previous);
        true
    }

    fn reload_settings(&mut self) -> bool {
        let Some(path) = self.settings.path().map(|p| p.to_path_buf()) else {
            debug!("in-memory settings, nothing to reload");
            return false;
        };
        match tessel_config::ReloadManager::new(path).reload_config() {
            Ok(config) => {
                info!("settings reloaded");
                self.apply_settings(config)
            }
            Err(e) => {
                warn!("settings reload failed: {e}");
                false
            }
        }
    }
}

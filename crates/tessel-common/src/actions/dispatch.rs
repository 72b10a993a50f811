use super::{Action, Direction};

impl Action {
    /// Human-readable label for display in the command bar.
    pub fn label(&self) -> &'static str {
        match self {
            Action::NewTabGroup => "Open New Tab",
            Action::CloseTab => "Close Current",
            Action::CloseOtherTabs => "Close All",
            Action::SplitHorizontal => "Split Horizontally",
            Action::SplitVertical => "Split Vertically",
            Action::FocusDirection(Direction::Left) => "Navigate Left",
            Action::FocusDirection(Direction::Right) => "Navigate Right",
            Action::FocusDirection(Direction::Up) => "Navigate Up",
            Action::FocusDirection(Direction::Down) => "Navigate Down",
            Action::FocusNextTab => "Next Tab",
            Action::FocusPrevTab => "Previous Tab",
            Action::ResizePane { .. } => "Resize Pane",
            Action::MaximizePane => "Maximize Current",
            Action::EqualizePanes => "Equalize Sizes",
            Action::OpenUrl(_) => "Open URL",
            Action::Reload => "Reload",
            Action::ReloadIgnoringCache => "Reload Without Cache",
            Action::GoBack => "Back",
            Action::GoForward => "Forward",
            Action::Find => "Find",
            Action::ZoomIn => "Zoom In",
            Action::ZoomOut => "Zoom Out",
            Action::ResetZoom => "Reset Zoom",
            Action::ToggleFullscreen => "Toggle Fullscreen",
            Action::ToggleDevTools => "Toggle Dev Tools",
            Action::SelectAll => "Select All",
            Action::Print => "Print",
            Action::ToggleSidebar => "Toggle Sidebar",
            Action::LoseFocus => "Lose Focus",
            Action::OpenCommandBar => "Command Bar",
            Action::ReloadSettings => "Reload Settings",
            Action::None => "None",
        }
    }

    /// Actions offered in the command bar.
    pub fn palette_actions() -> Vec<Action> {
        vec![
            Action::NewTabGroup,
            Action::CloseTab,
            Action::CloseOtherTabs,
            Action::SplitHorizontal,
            Action::SplitVertical,
            Action::FocusNextTab,
            Action::FocusPrevTab,
            Action::MaximizePane,
            Action::EqualizePanes,
            Action::Reload,
            Action::GoBack,
            Action::GoForward,
            Action::ToggleDevTools,
            Action::ToggleSidebar,
            Action::ReloadSettings,
        ]
    }

    /// Whether this action mutates the tab-group model (as opposed to
    /// commanding the active surface).
    pub fn is_layout_action(&self) -> bool {
        matches!(
            self,
            Action::NewTabGroup
                | Action::CloseTab
                | Action::CloseOtherTabs
                | Action::SplitHorizontal
                | Action::SplitVertical
                | Action::FocusDirection(_)
                | Action::FocusNextTab
                | Action::FocusPrevTab
                | Action::ResizePane { .. }
                | Action::MaximizePane
                | Action::EqualizePanes
        )
    }
}

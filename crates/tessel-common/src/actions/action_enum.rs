use serde::{Deserialize, Serialize};

use super::Direction;

/// Every user-triggerable action in the shell.
///
/// Hotkeys, the command bar, and the headless driver all resolve to an
/// `Action`. The shell controller matches on this enum to route to the
/// tab-group model or to the active surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Tab groups / tiling --
    NewTabGroup,
    CloseTab,
    CloseOtherTabs,
    /// Side-by-side panes (`row` split).
    SplitHorizontal,
    /// Stacked panes (`column` split).
    SplitVertical,
    FocusDirection(Direction),
    FocusNextTab,
    FocusPrevTab,
    ResizePane {
        direction: Direction,
        delta: i32,
    },
    MaximizePane,
    EqualizePanes,

    // -- Browser --
    OpenUrl(String),
    Reload,
    ReloadIgnoringCache,
    GoBack,
    GoForward,
    Find,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleFullscreen,
    ToggleDevTools,

    // -- Controls --
    SelectAll,
    Print,
    ToggleSidebar,
    LoseFocus,
    OpenCommandBar,

    // -- Config --
    ReloadSettings,

    // -- Noop --
    None,
}

use tessel_common::Direction;

/// Layout-level commands the tab-group store executes against the active group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TilingCommand {
    /// Side-by-side split of the active pane.
    SplitRow,
    /// Stacked split of the active pane.
    SplitColumn,
    Close,
    CloseOthers,
    Resize(Direction, i32),
    Swap(Direction),
    FocusNext,
    FocusPrev,
    FocusDirection(Direction),
    Maximize,
    Equalize,
}

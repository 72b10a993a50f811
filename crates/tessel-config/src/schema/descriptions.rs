//! Human-readable names and descriptions for settings and hotkeys.

/// Display name and one-line description for a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDescription {
    pub name: &'static str,
    pub description: &'static str,
}

const fn d(name: &'static str, description: &'static str) -> SettingDescription {
    SettingDescription { name, description }
}

pub const BACKGROUND_COLOR: SettingDescription =
    d("Background Color", "The color displayed in the background.");
pub const AD_BLOCKER: SettingDescription = d("Ad Blocker", "Controls whether ads are blocked.");

/// Describe the hotkey `settings.hotkeys.<category>.<action>`.
pub fn describe_hotkey(category: &str, action: &str) -> Option<SettingDescription> {
    let desc = match (category, action) {
        ("Split", "vertically") => d("Split Vertically", "Splits the screen vertically."),
        ("Split", "horizontally") => d("Split Horizontally", "Splits the screen horizontally."),
        ("Close", "current") => d("Close Current", "Closes the current element."),
        ("Close", "all") => d("Close All", "Closes all elements."),
        ("Navigate", "left") => d("Navigate Left", "Navigates to the left element."),
        ("Navigate", "right") => d("Navigate Right", "Navigates to the right element."),
        ("Navigate", "up") => d("Navigate Up", "Navigates to the top element."),
        ("Navigate", "down") => d("Navigate Down", "Navigates to the bottom element."),
        ("Navigate", "nextTab") => d("Next Tab", "Switches to the next tab."),
        ("Navigate", "previousTab") => d("Previous Tab", "Switches to the previous tab."),
        ("Navigate", "back") => d("Navigate Back", "Goes back in the page history."),
        ("Navigate", "forward") => d("Navigate Forward", "Goes forward in the page history."),
        ("Resize", "left") => d("Resize Left", "Resizes the element to the left."),
        ("Resize", "right") => d("Resize Right", "Resizes the element to the right."),
        ("Resize", "up") => d("Resize Up", "Resizes the element upwards."),
        ("Resize", "down") => d("Resize Down", "Resizes the element downwards."),
        ("Maximize", "current") => d("Maximize Current", "Maximizes the current element."),
        ("Equalize", "sizes") => d("Equalize Sizes", "Equalizes the sizes of all elements."),
        ("Browser", "openNewTab") => d("Open New Tab", "Opens a new tab."),
        ("Browser", "closeTab") => d("Close Tab", "Closes the current tab."),
        ("Browser", "reload") => d("Reload Page", "Reloads the current page."),
        ("Browser", "undo") => d("Undo Action", "Reverts the last action."),
        ("Browser", "redo") => d("Redo Action", "Restores the last undone action."),
        ("Browser", "reloadWithoutCache") => {
            d("Reload Without Cache", "Reloads the page ignoring the cache.")
        }
        ("Browser", "find") => d("Find", "Opens the search function."),
        ("Browser", "zoomIn") => d("Zoom In", "Increases the display size."),
        ("Browser", "zoomOut") => d("Zoom Out", "Decreases the display size."),
        ("Browser", "resetZoom") => d("Reset Zoom", "Resets the zoom to the default size."),
        ("Browser", "toggleFullscreen") => d(
            "Toggle Fullscreen",
            "Switches between fullscreen and windowed mode.",
        ),
        ("Browser", "toggleDevTools") => d(
            "Toggle Developer Tools",
            "Enables or disables the developer tools.",
        ),
        ("Controls", "selectAll") => d("Select All", "Selects everything on the page."),
        ("Controls", "print") => d("Print", "Opens the print preview."),
        ("Controls", "toggleSidebar") => d("Toggle Sidebar", "Shows or hides the sidebar."),
        ("Controls", "loseFocus") => d("Lose Focus", "Removes focus from the current selection."),
        _ => return None,
    };
    Some(desc)
}

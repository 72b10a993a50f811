//! Default settings template with inline documentation comments.

/// Generate the default settings file content.
pub(crate) fn default_config_toml() -> String {
    r##"# tessel settings
# Only override what you want to change -- missing fields use defaults.
#
# Hotkeys are chord sequences separated by "," or spaces.
# Each chord is modifier+...+key with ctrl, alt/option, shift, meta/cmd.
# A single uppercase letter implies shift ("g, T").
# An empty string unbinds the action.

[settings]
# backgroundColor = "#b7a153"
# adBlocker = false

[settings.hotkeys.Split]
# vertically = "w s v"
# horizontally = "w s h"

[settings.hotkeys.Close]
# current = "ctrl+w, c"
# all = "ctrl+w, o"

[settings.hotkeys.Navigate]
# left = "ctrl+w, h"
# right = "ctrl+w, l"
# up = "ctrl+w, k"
# down = "ctrl+w, j"
# nextTab = "g, t"
# previousTab = "g, T"
# back = "ctrl+o"
# forward = "ctrl+i"

[settings.hotkeys.Resize]
# left = "ctrl+w, <"
# right = "ctrl+w, >"
# up = "ctrl+w, +"
# down = "ctrl+w, -"

[settings.hotkeys.Maximize]
# current = "ctrl+w, |"

[settings.hotkeys.Equalize]
# sizes = "ctrl+w, ="

[settings.hotkeys.Browser]
# openNewTab = "t"
# closeTab = "d"
# reload = "F5"
# undo = "F4"               # history back
# redo = "F6"               # history forward
# reloadWithoutCache = "ctrl+r"
# find = "/"
# zoomIn = "ctrl+plus"
# zoomOut = "ctrl+-"
# resetZoom = "ctrl+0"
# toggleFullscreen = "F11"
# toggleDevTools = "F12"

[settings.hotkeys.Controls]
# selectAll = "ctrl+a"
# print = "ctrl+p"
# toggleSidebar = "meta+s"
# loseFocus = "meta+esc"
"##
    .to_string()
}

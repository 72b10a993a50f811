//! Hotkey binding schema.
//!
//! Field names serialize to the dotted keys the settings store exposes:
//! `settings.hotkeys.<Category>.<action>`, e.g. `settings.hotkeys.Navigate.nextTab`.
//!
//! Binding format: chords separated by `,` or whitespace, each chord
//! `modifier+...+key`. `"ctrl+w, h"` is ctrl+w followed by h.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplitHotkeys {
    pub vertically: String,
    pub horizontally: String,
}

impl Default for SplitHotkeys {
    fn default() -> Self {
        Self {
            vertically: "w s v".into(),
            horizontally: "w s h".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloseHotkeys {
    pub current: String,
    pub all: String,
}

impl Default for CloseHotkeys {
    fn default() -> Self {
        Self {
            current: "ctrl+w, c".into(),
            all: "ctrl+w, o".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigateHotkeys {
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
    pub next_tab: String,
    pub previous_tab: String,
    pub back: String,
    pub forward: String,
}

impl Default for NavigateHotkeys {
    fn default() -> Self {
        Self {
            left: "ctrl+w, h".into(),
            right: "ctrl+w, l".into(),
            up: "ctrl+w, k".into(),
            down: "ctrl+w, j".into(),
            next_tab: "g, t".into(),
            previous_tab: "g, T".into(),
            back: "ctrl+o".into(),
            forward: "ctrl+i".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResizeHotkeys {
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
}

impl Default for ResizeHotkeys {
    fn default() -> Self {
        Self {
            left: "ctrl+w, <".into(),
            right: "ctrl+w, >".into(),
            up: "ctrl+w, +".into(),
            down: "ctrl+w, -".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaximizeHotkeys {
    pub current: String,
}

impl Default for MaximizeHotkeys {
    fn default() -> Self {
        Self {
            current: "ctrl+w, |".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EqualizeHotkeys {
    pub sizes: String,
}

impl Default for EqualizeHotkeys {
    fn default() -> Self {
        Self {
            sizes: "ctrl+w, =".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrowserHotkeys {
    pub open_new_tab: String,
    pub close_tab: String,
    pub reload: String,
    /// History back.
    pub undo: String,
    /// History forward.
    pub redo: String,
    pub reload_without_cache: String,
    pub find: String,
    pub zoom_in: String,
    pub zoom_out: String,
    pub reset_zoom: String,
    pub toggle_fullscreen: String,
    pub toggle_dev_tools: String,
}

impl Default for BrowserHotkeys {
    fn default() -> Self {
        Self {
            open_new_tab: "t".into(),
            close_tab: "d".into(),
            reload: "F5".into(),
            undo: "F4".into(),
            redo: "F6".into(),
            reload_without_cache: "ctrl+r".into(),
            find: "/".into(),
            zoom_in: "ctrl+plus".into(),
            zoom_out: "ctrl+-".into(),
            reset_zoom: "ctrl+0".into(),
            toggle_fullscreen: "F11".into(),
            toggle_dev_tools: "F12".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlsHotkeys {
    pub select_all: String,
    pub print: String,
    pub toggle_sidebar: String,
    pub lose_focus: String,
}

impl Default for ControlsHotkeys {
    fn default() -> Self {
        Self {
            select_all: "ctrl+a".into(),
            print: "ctrl+p".into(),
            toggle_sidebar: "meta+s".into(),
            lose_focus: "meta+esc".into(),
        }
    }
}

/// All hotkey categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Hotkeys {
    pub split: SplitHotkeys,
    pub close: CloseHotkeys,
    pub navigate: NavigateHotkeys,
    pub resize: ResizeHotkeys,
    pub maximize: MaximizeHotkeys,
    pub equalize: EqualizeHotkeys,
    pub browser: BrowserHotkeys,
    pub controls: ControlsHotkeys,
}

/// One binding addressed by its category and action key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyEntry<'a> {
    pub category: &'static str,
    pub action: &'static str,
    pub binding: &'a str,
}

fn entry<'a>(category: &'static str, action: &'static str, binding: &'a str) -> HotkeyEntry<'a> {
    HotkeyEntry {
        category,
        action,
        binding,
    }
}

impl Hotkeys {
    /// Every binding as `(category, action, binding)`, in settings order.
    pub fn entries(&self) -> Vec<HotkeyEntry<'_>> {
        vec![
            entry("Split", "vertically", &self.split.vertically),
            entry("Split", "horizontally", &self.split.horizontally),
            entry("Close", "current", &self.close.current),
            entry("Close", "all", &self.close.all),
            entry("Navigate", "left", &self.navigate.left),
            entry("Navigate", "right", &self.navigate.right),
            entry("Navigate", "up", &self.navigate.up),
            entry("Navigate", "down", &self.navigate.down),
            entry("Navigate", "nextTab", &self.navigate.next_tab),
            entry("Navigate", "previousTab", &self.navigate.previous_tab),
            entry("Navigate", "back", &self.navigate.back),
            entry("Navigate", "forward", &self.navigate.forward),
            entry("Resize", "left", &self.resize.left),
            entry("Resize", "right", &self.resize.right),
            entry("Resize", "up", &self.resize.up),
            entry("Resize", "down", &self.resize.down),
            entry("Maximize", "current", &self.maximize.current),
            entry("Equalize", "sizes", &self.equalize.sizes),
            entry("Browser", "openNewTab", &self.browser.open_new_tab),
            entry("Browser", "closeTab", &self.browser.close_tab),
            entry("Browser", "reload", &self.browser.reload),
            entry("Browser", "undo", &self.browser.undo),
            entry("Browser", "redo", &self.browser.redo),
            entry("Browser", "reloadWithoutCache", &self.browser.reload_without_cache),
            entry("Browser", "find", &self.browser.find),
            entry("Browser", "zoomIn", &self.browser.zoom_in),
            entry("Browser", "zoomOut", &self.browser.zoom_out),
            entry("Browser", "resetZoom", &self.browser.reset_zoom),
            entry("Browser", "toggleFullscreen", &self.browser.toggle_fullscreen),
            entry("Browser", "toggleDevTools", &self.browser.toggle_dev_tools),
            entry("Controls", "selectAll", &self.controls.select_all),
            entry("Controls", "print", &self.controls.print),
            entry("Controls", "toggleSidebar", &self.controls.toggle_sidebar),
            entry("Controls", "loseFocus", &self.controls.lose_focus),
        ]
    }

    /// Look up one binding by category and action key.
    pub fn get(&self, category: &str, action: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|entry| entry.category == category && entry.action == action)
            .map(|entry| entry.binding)
    }
}

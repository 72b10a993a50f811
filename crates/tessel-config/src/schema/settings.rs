use serde::{Deserialize, Serialize};

use super::Hotkeys;

pub const DEFAULT_BACKGROUND_COLOR: &str = "#b7a153";

/// User settings, serialized under the `settings` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// CSS hex color painted behind the panes.
    pub background_color: String,
    pub ad_blocker: bool,
    pub hotkeys: Hotkeys,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR.into(),
            ad_blocker: false,
            hotkeys: Hotkeys::default(),
        }
    }
}

use serde::{Deserialize, Serialize};
use tessel_common::TabId;

/// URL loaded into every freshly created tab.
pub const DEFAULT_URL: &str = "https://google.com";

/// One browsing pane: its identity plus what the surface last reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Tab {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: TabId::new(),
            url: url.into(),
            title: None,
            icon: None,
        }
    }

    /// Title if the page has reported one, otherwise the URL.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.url)
    }
}

impl Default for Tab {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

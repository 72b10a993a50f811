//! Inbound events from embedded surfaces.

use serde::{Deserialize, Serialize};
use tessel_common::{SurfaceError, TabId};
use tokio::sync::mpsc;

/// A key press observed inside a surface, before the page handles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    /// Key name as the host reports it (`"w"`, `"Escape"`, `"F5"`, ...).
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
        }
    }
}

/// Everything a surface reports back about its own state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceEvent {
    /// A navigation committed.
    Navigated { url: String },
    TitleChanged { title: String },
    /// Favicon candidates, best first.
    IconChanged { icons: Vec<String> },
    DomReady,
    FocusGained,
    KeyDown(KeyPress),
    /// The page tried to open a popup or new window.
    NewWindowRequested { url: String },
}

/// The emitting half of one tab's event channel, handed to the host surface
/// when it registers.
#[derive(Debug, Clone)]
pub struct SurfaceEventSender {
    tab: TabId,
    tx: mpsc::UnboundedSender<SurfaceEvent>,
}

impl SurfaceEventSender {
    pub(crate) fn new(tab: TabId, tx: mpsc::UnboundedSender<SurfaceEvent>) -> Self {
        Self { tab, tx }
    }

    pub fn tab(&self) -> &TabId {
        &self.tab
    }

    /// Queue an event. Fails once the tab's binding has been unregistered.
    pub fn send(&self, event: SurfaceEvent) -> Result<(), SurfaceError> {
        self.tx
            .send(event)
            .map_err(|_| SurfaceError::NotFound(self.tab.to_string()))
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

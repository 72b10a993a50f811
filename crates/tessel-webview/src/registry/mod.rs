//! Lookup table from tab id to live surface handle.
//!
//! The registry never creates or destroys surfaces. It holds the handle the
//! host registered, the receiving end of that tab's event channel, and the
//! zoom factor last applied through it.

use std::collections::HashMap;

use tessel_common::{SurfaceDetach, SurfaceError, TabId};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::address::normalize_url;
use crate::events::{SurfaceEvent, SurfaceEventSender};
use crate::surface::{ContentSurface, SurfaceCommand};

pub const DEFAULT_ZOOM: f64 = 1.0;
pub const ZOOM_STEP: f64 = 0.1;
pub const MIN_ZOOM: f64 = 0.3;
pub const MAX_ZOOM: f64 = 3.0;

struct SurfaceBinding<H> {
    handle: H,
    events: mpsc::UnboundedReceiver<SurfaceEvent>,
    zoom: f64,
}

/// Maps tab ids to host surface handles. At most one handle per tab.
pub struct SurfaceRegistry<H> {
    bindings: HashMap<TabId, SurfaceBinding<H>>,
}

impl<H> SurfaceRegistry<H> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `handle` to `tab`, replacing any previous binding. Returns the
    /// sender the surface uses to report events for this tab.
    pub fn register(&mut self, tab: TabId, handle: H) -> SurfaceEventSender {
        let (tx, rx) = mpsc::unbounded_channel();
        let binding = SurfaceBinding {
            handle,
            events: rx,
            zoom: DEFAULT_ZOOM,
        };
        if self.bindings.insert(tab.clone(), binding).is_some() {
            debug!(tab = %tab, "surface binding replaced");
        } else {
            debug!(tab = %tab, "surface registered");
        }
        SurfaceEventSender::new(tab, tx)
    }

    /// Drop the binding for `tab` and hand back its handle. Events still
    /// queued for the tab are discarded and its sender stops accepting more.
    pub fn unregister(&mut self, tab: &TabId) -> Option<H> {
        let binding = self.bindings.remove(tab)?;
        debug!(tab = %tab, "surface unregistered");
        Some(binding.handle)
    }

    pub fn lookup(&self, tab: &TabId) -> Option<&H> {
        self.bindings.get(tab).map(|b| &b.handle)
    }

    pub fn lookup_mut(&mut self, tab: &TabId) -> Option<&mut H> {
        self.bindings.get_mut(tab).map(|b| &mut b.handle)
    }

    pub fn contains(&self, tab: &TabId) -> bool {
        self.bindings.contains_key(tab)
    }

    pub fn zoom(&self, tab: &TabId) -> Option<f64> {
        self.bindings.get(tab).map(|b| b.zoom)
    }

    /// Registered tab ids, sorted.
    pub fn tabs(&self) -> Vec<TabId> {
        let mut tabs: Vec<TabId> = self.bindings.keys().cloned().collect();
        tabs.sort();
        tabs
    }

    pub fn count(&self) -> usize {
        self.bindings.len()
    }

    /// Take every queued event. Events of one tab keep their emission order;
    /// tabs are visited in id order.
    pub fn drain_events(&mut self) -> Vec<(TabId, SurfaceEvent)> {
        let mut tabs: Vec<&TabId> = self.bindings.keys().collect();
        tabs.sort();
        let tabs: Vec<TabId> = tabs.into_iter().cloned().collect();

        let mut out = Vec::new();
        for tab in tabs {
            if let Some(binding) = self.bindings.get_mut(&tab) {
                while let Ok(event) = binding.events.try_recv() {
                    out.push((tab.clone(), event));
                }
            }
        }
        out
    }

    /// Unregister everything. Used at shutdown.
    pub fn clear(&mut self) {
        for tab in self.tabs() {
            self.unregister(&tab);
        }
    }
}

impl<H: ContentSurface> SurfaceRegistry<H> {
    /// Send one command to the surface bound to `tab`.
    pub fn issue(&mut self, tab: &TabId, command: SurfaceCommand) -> Result<(), SurfaceError> {
        let binding = self
            .bindings
            .get_mut(tab)
            .ok_or_else(|| SurfaceError::NotFound(tab.to_string()))?;
        let handle = &mut binding.handle;
        match command {
            SurfaceCommand::Load(url) => handle.load_url(&normalize_url(&url)?),
            SurfaceCommand::Reload => handle.reload(),
            SurfaceCommand::ReloadIgnoringCache => handle.reload_ignoring_cache(),
            SurfaceCommand::GoBack => handle.go_back(),
            SurfaceCommand::GoForward => handle.go_forward(),
            SurfaceCommand::SetPointerEvents(enabled) => handle.set_pointer_events(enabled),
            SurfaceCommand::Focus => handle.focus(),
            SurfaceCommand::Blur => handle.blur(),
            SurfaceCommand::ZoomIn => {
                binding.zoom = (binding.zoom + ZOOM_STEP).min(MAX_ZOOM);
                handle.set_zoom(binding.zoom)
            }
            SurfaceCommand::ZoomOut => {
                binding.zoom = (binding.zoom - ZOOM_STEP).max(MIN_ZOOM);
                handle.set_zoom(binding.zoom)
            }
            SurfaceCommand::ResetZoom => {
                binding.zoom = DEFAULT_ZOOM;
                handle.set_zoom(DEFAULT_ZOOM)
            }
            SurfaceCommand::ToggleDevTools => handle.toggle_devtools(),
            SurfaceCommand::Find(query) => handle.find(&query),
            SurfaceCommand::SelectAll => handle.select_all(),
            SurfaceCommand::Print => handle.print(),
        }
    }

    /// Issue a command and log instead of failing. Surface commands are
    /// best-effort from the shell's point of view.
    pub fn issue_or_warn(&mut self, tab: &TabId, command: SurfaceCommand) -> bool {
        match self.issue(tab, command.clone()) {
            Ok(()) => true,
            Err(e) => {
                warn!(tab = %tab, ?command, error = %e, "surface command failed");
                false
            }
        }
    }
}

impl<H> Default for SurfaceRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> SurfaceDetach for SurfaceRegistry<H> {
    fn detach(&mut self, tab: &TabId) {
        self.unregister(tab);
    }
}

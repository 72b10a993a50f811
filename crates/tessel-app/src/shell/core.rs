use tessel_common::{Color, Rect, TabId};
use tessel_config::{SettingsStore, TesselConfig};
use tessel_platform::{KeybindRegistry, SequenceMatcher};
use tessel_tiling::{StoreSnapshot, TabGroupStore};
use tessel_webview::{ContentSurface, SurfaceCommand, SurfaceEventSender, SurfaceRegistry};
use tracing::{debug, info, warn};

use super::drag::DragState;

/// Window size assumed until the host reports a real one.
pub const DEFAULT_VIEWPORT: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1280.0,
    height: 800.0,
};

/// Painted behind the panes when the configured color does not parse.
const FALLBACK_BACKGROUND: Color = Color {
    r: 0xb7,
    g: 0xa1,
    b: 0x53,
    a: 255,
};

/// The host side that creates embedded surfaces for new tabs.
pub trait SurfaceHost {
    type Surface: ContentSurface;

    /// Create the surface for a freshly created tab, already loading `url`.
    fn open(&mut self, tab: &TabId, url: &str) -> Self::Surface;

    /// Hand over the channel the surface for `tab` reports events on.
    fn connect(&mut self, tab: &TabId, events: SurfaceEventSender);
}

pub struct BrowserShell<S: SurfaceHost> {
    pub(super) store: TabGroupStore,
    pub(super) surfaces: SurfaceRegistry<S::Surface>,
    pub(super) host: S,
    pub(super) settings: SettingsStore,
    pub(super) keybinds: KeybindRegistry,
    pub(super) matcher: SequenceMatcher,
    pub(super) viewport: Rect,
    pub(super) drag: Option<DragState>,
    pub(super) command_bar_open: bool,
    pub(super) sidebar_open: bool,
    pub(super) fullscreen: bool,
}

impl<S: SurfaceHost> BrowserShell<S> {
    pub fn new(host: S, settings: SettingsStore) -> Self {
        let keybinds = KeybindRegistry::from_settings(&settings.settings().hotkeys);
        info!("keybind registry loaded ({} bindings)", keybinds.len());
        Self {
            store: TabGroupStore::new(),
            surfaces: SurfaceRegistry::new(),
            host,
            settings,
            keybinds,
            matcher: SequenceMatcher::new(),
            viewport: DEFAULT_VIEWPORT,
            drag: None,
            command_bar_open: false,
            sidebar_open: true,
            fullscreen: false,
        }
    }

    pub fn store(&self) -> &TabGroupStore {
        &self.store
    }

    pub fn surfaces(&self) -> &SurfaceRegistry<S::Surface> {
        &self.surfaces
    }

    pub fn host(&self) -> &S {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut S {
        &mut self.host
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn keybinds(&self) -> &KeybindRegistry {
        &self.keybinds
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot()
    }

    pub fn is_command_bar_open(&self) -> bool {
        self.command_bar_open
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn background_color(&self) -> Color {
        Color::from_hex(&self.settings.settings().background_color).unwrap_or(FALLBACK_BACKGROUND)
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Pixel rects for the active group's panes in the current viewport.
    pub fn compute_layout(&self) -> Vec<(TabId, Rect)> {
        self.store.compute_layout(self.viewport)
    }

    /// Create a new group with one tab and bind a surface to it.
    pub fn open_group(&mut self, url: Option<&str>) -> TabId {
        let group = self.store.create_group(url);
        let tab = group.active_id().clone();
        let url = group
            .active_tab()
            .map(|t| t.url.clone())
            .unwrap_or_default();
        self.attach_surface(&tab, &url);
        tab
    }

    pub(super) fn attach_surface(&mut self, tab: &TabId, url: &str) {
        let surface = self.host.open(tab, url);
        let events = self.surfaces.register(tab.clone(), surface);
        self.host.connect(tab, events);
        self.suspend_during_drag(tab);
    }

    pub(super) fn active_tab_id(&self) -> Option<TabId> {
        self.store.active_group().map(|g| g.active_id().clone())
    }

    /// Send a command to the active tab's surface. Best-effort.
    pub(super) fn command_active(&mut self, command: SurfaceCommand) -> bool {
        match self.active_tab_id() {
            Some(tab) => self.surfaces.issue_or_warn(&tab, command),
            None => {
                debug!(?command, "no active tab for surface command");
                false
            }
        }
    }

    /// Move keyboard focus between surfaces after the active tab changed.
    pub(super) fn refocus(&mut self, previous: Option<TabId>) {
        let current = self.active_tab_id();
        if previous == current {
            return;
        }
        if let Some(prev) = previous {
            if self.surfaces.contains(&prev) {
                self.surfaces.issue_or_warn(&prev, SurfaceCommand::Blur);
            }
        }
        if let Some(next) = current {
            self.surfaces.issue_or_warn(&next, SurfaceCommand::Focus);
        }
    }

    /// Adopt new settings: validate, swap them in, and rebuild the hotkeys.
    pub fn apply_settings(&mut self, config: TesselConfig) -> bool {
        if let Err(e) = self.settings.replace(config) {
            warn!("settings rejected: {e}");
            return false;
        }
        self.rebuild_keybinds();
        true
    }

    /// Update one dotted settings key and write it back.
    pub fn set_setting(&mut self, key: &str, value: toml::Value) -> tessel_common::Result<()> {
        self.settings.set(key, value)?;
        if key.starts_with("settings.hotkeys.") {
            self.rebuild_keybinds();
        }
        Ok(())
    }

    fn rebuild_keybinds(&mut self) {
        self.keybinds = KeybindRegistry::from_settings(&self.settings.settings().hotkeys);
        self.matcher.reset();
        info!("keybind registry rebuilt ({} bindings)", self.keybinds.len());
    }
}

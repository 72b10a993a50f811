//! Inbound surface events, translated into store updates.

use tessel_common::TabId;
use tessel_platform::KeyCombo;
use tessel_webview::SurfaceEvent;
use tracing::{debug, trace};

use super::core::{BrowserShell, SurfaceHost};

impl<S: SurfaceHost> BrowserShell<S> {
    /// Drain every pending surface event and apply it. Returns how many
    /// events were handled.
    ///
    /// Events for one tab are applied in the order the surface sent them.
    /// Events from a surface closed earlier in the same batch are dropped.
    pub fn pump_surface_events(&mut self) -> usize {
        let events = self.surfaces.drain_events();
        let count = events.len();
        for (tab, event) in events {
            self.apply_surface_event(&tab, event);
        }
        count
    }

    fn apply_surface_event(&mut self, tab: &TabId, event: SurfaceEvent) {
        if !self.surfaces.contains(tab) {
            debug!(tab = %tab, ?event, "event from a closed surface dropped");
            return;
        }
        trace!(tab = %tab, ?event, "surface event");
        match event {
            SurfaceEvent::Navigated { url } => {
                self.store.update_tab_url(tab, url);
            }
            SurfaceEvent::TitleChanged { title } => {
                self.store.update_tab_title(tab, title);
            }
            SurfaceEvent::IconChanged { icons } => {
                if let Some(icon) = icons.into_iter().next() {
                    self.store.update_tab_icon(tab, icon);
                }
            }
            SurfaceEvent::DomReady => debug!(tab = %tab, "surface ready"),
            SurfaceEvent::FocusGained => {
                let Some(group) = self.store.group_of_tab(tab).cloned() else {
                    return;
                };
                if self.store.active_group_id() != Some(&group) {
                    debug!(tab = %tab, group = %group, "focus from a hidden group ignored");
                    return;
                }
                self.store.set_active_tab(tab, Some(&group));
            }
            SurfaceEvent::KeyDown(press) => {
                let combo =
                    KeyCombo::from_modifiers(press.ctrl, press.alt, press.shift, press.meta, &press.key);
                self.handle_key(combo);
            }
            SurfaceEvent::NewWindowRequested { url } => {
                self.new_group(Some(&url));
            }
        }
    }
}

//! A surface host with no window: surfaces remember what they were told
//! and the host keeps each tab's event sender so the driver can play the
//! part of the page.

use std::collections::HashMap;

use serde::Serialize;
use tessel_common::{SurfaceError, TabId};
use tessel_webview::{ContentSurface, SurfaceEvent, SurfaceEventSender};
use tracing::{debug, info};

use crate::shell::SurfaceHost;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlessSurface {
    pub url: String,
    pub zoom: f64,
    pub focused: bool,
    pub pointer_events: bool,
    pub devtools_open: bool,
    /// Every command received, oldest first.
    pub calls: Vec<String>,
}

impl HeadlessSurface {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            zoom: 1.0,
            focused: false,
            pointer_events: true,
            devtools_open: false,
            calls: Vec::new(),
        }
    }

    fn record(&mut self, call: String) -> Result<(), SurfaceError> {
        debug!(call = %call, "headless surface");
        self.calls.push(call);
        Ok(())
    }
}

impl ContentSurface for HeadlessSurface {
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError> {
        self.url = url.to_string();
        self.record(format!("load {url}"))
    }

    fn reload(&mut self) -> Result<(), SurfaceError> {
        self.record("reload".into())
    }

    fn reload_ignoring_cache(&mut self) -> Result<(), SurfaceError> {
        self.record("reload_ignoring_cache".into())
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        self.record("go_back".into())
    }

    fn go_forward(&mut self) -> Result<(), SurfaceError> {
        self.record("go_forward".into())
    }

    fn set_pointer_events(&mut self, enabled: bool) -> Result<(), SurfaceError> {
        self.pointer_events = enabled;
        self.record(format!("pointer_events {enabled}"))
    }

    fn focus(&mut self) -> Result<(), SurfaceError> {
        self.focused = true;
        self.record("focus".into())
    }

    fn blur(&mut self) -> Result<(), SurfaceError> {
        self.focused = false;
        self.record("blur".into())
    }

    fn set_zoom(&mut self, factor: f64) -> Result<(), SurfaceError> {
        self.zoom = factor;
        self.record(format!("zoom {factor:.1}"))
    }

    fn toggle_devtools(&mut self) -> Result<(), SurfaceError> {
        self.devtools_open = !self.devtools_open;
        self.record("toggle_devtools".into())
    }

    fn find(&mut self, query: &str) -> Result<(), SurfaceError> {
        self.record(format!("find {query}").trim_end().to_string())
    }

    fn select_all(&mut self) -> Result<(), SurfaceError> {
        self.record("select_all".into())
    }

    fn print(&mut self) -> Result<(), SurfaceError> {
        self.record("print".into())
    }
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
    senders: HashMap<TabId, SurfaceEventSender>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `event` as if the surface for `tab` had produced it.
    pub fn emit(&mut self, tab: &TabId, event: SurfaceEvent) -> Result<(), SurfaceError> {
        let sender = self
            .senders
            .get(tab)
            .ok_or_else(|| SurfaceError::NotFound(tab.to_string()))?;
        let sent = sender.send(event);
        if sent.is_err() {
            self.senders.remove(tab);
        }
        sent
    }
}

impl SurfaceHost for HeadlessHost {
    type Surface = HeadlessSurface;

    fn open(&mut self, tab: &TabId, url: &str) -> HeadlessSurface {
        info!(tab = %tab, url, "surface opened");
        HeadlessSurface::new(url)
    }

    fn connect(&mut self, tab: &TabId, events: SurfaceEventSender) {
        self.senders.insert(tab.clone(), events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_records_commands() {
        let mut surface = HeadlessSurface::new("https://a.com");
        surface.load_url("https://b.com/").unwrap();
        surface.set_zoom(1.1).unwrap();
        surface.find("").unwrap();
        assert_eq!(surface.url, "https://b.com/");
        assert_eq!(surface.zoom, 1.1);
        assert_eq!(surface.calls, vec!["load https://b.com/", "zoom 1.1", "find"]);
    }

    #[test]
    fn emit_to_unknown_tab_fails() {
        let mut host = HeadlessHost::new();
        let err = host.emit(&TabId::from("nope"), SurfaceEvent::DomReady);
        assert!(matches!(err, Err(SurfaceError::NotFound(_))));
    }
}

use crate::id::TabId;

/// Releases whatever external resource is bound to a tab.
///
/// The tab-group model calls this before it drops a tab from its own state,
/// so a late surface notification can never find a half-removed pane.
pub trait SurfaceDetach {
    fn detach(&mut self, tab: &TabId);
}

/// No surfaces bound. Used by headless callers and tests.
impl SurfaceDetach for () {
    fn detach(&mut self, _tab: &TabId) {}
}

/// Collects detached ids in call order.
impl SurfaceDetach for Vec<TabId> {
    fn detach(&mut self, tab: &TabId) {
        self.push(tab.clone());
    }
}

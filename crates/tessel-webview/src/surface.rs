//! The command interface a host content surface exposes.

use tessel_common::SurfaceError;

/// A live embedded browsing surface owned by the host UI.
///
/// Every command is fire-and-forget: `Ok` means the command was handed to
/// the surface, not that it finished. Results come back later as
/// [`SurfaceEvent`](crate::SurfaceEvent)s.
pub trait ContentSurface {
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError>;
    fn reload(&mut self) -> Result<(), SurfaceError>;
    fn reload_ignoring_cache(&mut self) -> Result<(), SurfaceError>;
    fn go_back(&mut self) -> Result<(), SurfaceError>;
    fn go_forward(&mut self) -> Result<(), SurfaceError>;
    /// Whether the surface receives mouse input. Turned off during drags.
    fn set_pointer_events(&mut self, enabled: bool) -> Result<(), SurfaceError>;
    fn focus(&mut self) -> Result<(), SurfaceError>;
    fn blur(&mut self) -> Result<(), SurfaceError>;
    fn set_zoom(&mut self, factor: f64) -> Result<(), SurfaceError>;
    fn toggle_devtools(&mut self) -> Result<(), SurfaceError>;
    fn find(&mut self, query: &str) -> Result<(), SurfaceError>;
    fn select_all(&mut self) -> Result<(), SurfaceError>;
    fn print(&mut self) -> Result<(), SurfaceError>;
}

/// A single command addressed to a surface through the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Load(String),
    Reload,
    ReloadIgnoringCache,
    GoBack,
    GoForward,
    SetPointerEvents(bool),
    Focus,
    Blur,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleDevTools,
    Find(String),
    SelectAll,
    Print,
}

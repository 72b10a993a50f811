//! The shell controller.
//!
//! [`BrowserShell`] owns every piece of state (tab groups, surface
//! bindings, settings, hotkeys) and is the only thing that mutates it.
//! The host UI feeds it actions, key presses, drag gestures, and surface
//! events; it answers with snapshots and pixel layouts.

mod core;
mod dispatch;
mod drag;
mod events;

#[cfg(test)]
mod tests;

pub use self::core::{BrowserShell, SurfaceHost, DEFAULT_VIEWPORT};
pub use self::dispatch::CommandBarOutcome;
pub use self::drag::DragState;

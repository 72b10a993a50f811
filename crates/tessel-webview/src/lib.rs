//! Binding between tabs and the embedded content surfaces that render them.
//!
//! Surfaces are owned by the host UI. This crate only provides:
//! - The [`ContentSurface`] command interface a host surface implements
//! - A per-tab inbound [`SurfaceEvent`] channel
//! - The [`SurfaceRegistry`] lookup table from tab id to surface handle
//! - URL normalization for navigation requests

pub mod address;
pub mod events;
pub mod registry;
pub mod surface;

pub use address::normalize_url;
pub use events::{KeyPress, SurfaceEvent, SurfaceEventSender};
pub use registry::SurfaceRegistry;
pub use surface::{ContentSurface, SurfaceCommand};

//! The TabGroupStore owns tab groups, their layouts, and the active selection.

mod focus;
mod layout_compute;
mod operations;
mod types;

pub use operations::RESIZE_STEP;
pub use types::*;

//! Tiling core for the tessel browser shell.
//!
//! - [`tree`]: the binary split tree over tab identifiers
//! - [`layout`]: flattening a tree into normalized boxes or pixel rects
//! - [`navigation`]: spatial "move focus left/right/up/down" resolution
//! - [`store`]: tabs, tab groups, and the globally active selection

pub mod commands;
pub mod layout;
pub mod navigation;
pub mod store;
pub mod tab;
pub mod tree;

pub use commands::TilingCommand;
pub use layout::{flatten_to_boxes, LayoutBox, LayoutEngine};
pub use navigation::resolve_neighbor;
pub use store::{RemoveOutcome, StoreSnapshot, TabGroup, TabGroupSnapshot, TabGroupStore};
pub use tab::{Tab, DEFAULT_URL};
pub use tree::{Branch, LayoutTree, SplitDirection};

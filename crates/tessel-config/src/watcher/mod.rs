//! File watcher for live settings reload.
//!
//! Uses the `notify` crate to watch the settings file, with a 500ms
//! debounce so editor save sequences produce a single signal.

mod config_watcher;


pub use config_watcher::{ConfigWatcher, DEBOUNCE};

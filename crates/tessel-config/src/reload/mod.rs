//! Live settings reload.
//!
//! Combines the file watcher with settings loading so a running shell
//! picks up edits to the settings file.

mod manager;


pub use manager::ReloadManager;

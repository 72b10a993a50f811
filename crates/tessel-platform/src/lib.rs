//! Hotkey parsing and keyboard dispatch for tessel.
//!
//! Binding strings from the settings are parsed into chord sequences,
//! registered against [`Action`](tessel_common::Action)s, and matched one
//! key press at a time.

pub mod input;
pub mod keymap;

pub use input::{KeyCombo, KeybindRegistry, MatchResult, SequenceMatcher};
pub use keymap::{
    keybind_to_display, parse_hotkey, parse_keybind, sequence_to_display, KeyBind, Modifier,
};

//! Keyboard dispatch: chord combos, the hotkey registry, and the
//! multi-chord sequence matcher.

mod key_combo;
mod registry;
mod sequence;

pub use key_combo::KeyCombo;
pub use registry::{action_for, KeybindRegistry};
pub use sequence::{MatchResult, SequenceMatcher};

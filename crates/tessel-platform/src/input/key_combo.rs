use crate::keymap::{normalize_key_name, KeyBind, Modifier};

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_META: u8 = 0b1000;

/// A canonical chord for hashing and comparison.
///
/// Modifiers are a bitmask. Shift is dropped for single punctuation keys:
/// `+` arrives as shift+`+` on most layouts but is bound as plain `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Meta=8.
    pub mods: u8,
    /// Normalized key name (e.g. "W", "Escape", "F5", "+").
    pub key: String,
}

impl KeyCombo {
    fn new(mut mods: u8, key: String) -> Self {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_punctuation() {
                mods &= !MOD_SHIFT;
            }
        }
        Self { mods, key }
    }

    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mut mods = 0u8;
        for m in &kb.modifiers {
            mods |= match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Meta => MOD_META,
            };
        }
        Self::new(mods, kb.key.clone())
    }

    /// Build from a key event's modifier flags and key name, as reported
    /// by the embedded surface (`"t"`, `"T"`, `"Escape"`, `"F5"`).
    pub fn from_modifiers(ctrl: bool, alt: bool, shift: bool, meta: bool, key: &str) -> Self {
        let (key, implied_shift) = normalize_key_name(key);
        let mut mods = 0u8;
        if ctrl {
            mods |= MOD_CTRL;
        }
        if alt {
            mods |= MOD_ALT;
        }
        if shift || implied_shift {
            mods |= MOD_SHIFT;
        }
        if meta {
            mods |= MOD_META;
        }
        Self::new(mods, key)
    }

    /// True for a bare modifier press, which never advances a sequence.
    pub fn is_modifier_only(&self) -> bool {
        matches!(
            self.key.as_str(),
            "Control" | "Ctrl" | "Alt" | "Shift" | "Meta" | "Super" | "Os"
        )
    }

    pub(super) fn to_keybind(&self) -> KeyBind {
        let mut modifiers = Vec::new();
        if self.mods & MOD_CTRL != 0 {
            modifiers.push(Modifier::Ctrl);
        }
        if self.mods & MOD_ALT != 0 {
            modifiers.push(Modifier::Alt);
        }
        if self.mods & MOD_SHIFT != 0 {
            modifiers.push(Modifier::Shift);
        }
        if self.mods & MOD_META != 0 {
            modifiers.push(Modifier::Meta);
        }
        KeyBind {
            modifiers,
            key: self.key.clone(),
        }
    }
}

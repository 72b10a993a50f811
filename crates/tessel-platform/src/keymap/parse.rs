use std::sync::LazyLock;

use regex::Regex;
use tessel_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Separators between chords: a comma, whitespace, or both.
static CHORD_SEP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*|\s+").unwrap());

/// Parse a full binding such as `"ctrl+w, h"` or `"w s v"` into its chords.
pub fn parse_hotkey(s: &str) -> Result<Vec<KeyBind>, PlatformError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(PlatformError::InvalidHotkey("empty hotkey".into()));
    }
    CHORD_SEP_RE.split(trimmed).map(parse_keybind).collect()
}

/// Parse a single chord like `"ctrl+shift+t"`, `"meta+esc"`, or `"T"`.
///
/// - `ctrl`/`control`, `alt`/`option`/`opt`, `shift`, `meta`/`cmd`/`command`/`super`/`win`
/// - a single uppercase letter implies shift: `"T"` is `shift+t`
/// - `"+"` and `"ctrl++"` bind the plus key itself
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(PlatformError::InvalidHotkey("empty chord".into()));
    }

    let (mod_part, key_token) = if s == "+" {
        ("", "+")
    } else if let Some(prefix) = s.strip_suffix("++") {
        (prefix, "+")
    } else {
        s.rsplit_once('+').unwrap_or(("", s))
    };

    let key_token = key_token.trim();
    if key_token.is_empty() {
        return Err(PlatformError::InvalidHotkey(format!("'{s}' has no key")));
    }

    let mut modifiers = Vec::new();
    if !mod_part.is_empty() {
        for token in mod_part.split('+') {
            let modifier = normalize_modifier(token.trim()).ok_or_else(|| {
                PlatformError::InvalidHotkey(format!("unrecognized modifier '{token}' in '{s}'"))
            })?;
            if !modifiers.contains(&modifier) {
                modifiers.push(modifier);
            }
        }
    }

    let (key, implied_shift) = normalize_key_name(key_token);
    if implied_shift && !modifiers.contains(&Modifier::Shift) {
        modifiers.push(Modifier::Shift);
    }

    Ok(KeyBind { modifiers, key })
}

pub(crate) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "meta" | "cmd" | "command" | "super" | "win" => Some(Modifier::Meta),
        _ => None,
    }
}

/// Canonical key name, and whether the spelling implied shift.
pub(crate) fn normalize_key_name(token: &str) -> (String, bool) {
    let lower = token.to_lowercase();
    let named = match lower.as_str() {
        "plus" => "+",
        "minus" => "-",
        "period" => ".",
        "comma" => ",",
        "slash" => "/",
        "backslash" => "\\",
        "space" => "Space",
        "enter" | "return" => "Enter",
        "escape" | "esc" => "Escape",
        "tab" => "Tab",
        "backspace" => "Backspace",
        "delete" | "del" => "Delete",
        "up" | "arrowup" => "Up",
        "down" | "arrowdown" => "Down",
        "left" | "arrowleft" => "Left",
        "right" | "arrowright" => "Right",
        "home" => "Home",
        "end" => "End",
        "pageup" => "PageUp",
        "pagedown" => "PageDown",
        _ => "",
    };
    if !named.is_empty() {
        return (named.to_string(), false);
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => (c.to_uppercase().collect(), c.is_uppercase()),
        _ => {
            let mut chars = lower.chars();
            match chars.next() {
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    (format!("{upper}{}", chars.as_str()), false)
                }
                None => (lower, false),
            }
        }
    }
}

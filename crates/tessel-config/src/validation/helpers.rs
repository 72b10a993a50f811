//! Shared helpers used by the domain validators.

use regex::Regex;
use std::sync::LazyLock;

/// Hex color: #RGB, #RRGGBB, or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Separators between chords in a binding string.
static CHORD_SEP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*|\s+").unwrap());

/// Push an error if `value` is not a hex color.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if !HEX_RE.is_match(value.trim()) {
        errors.push(format!("{name} = {value:?} is not a hex color"));
    }
}

/// Canonical form of a binding for comparison: `"ctrl+w, h"` and
/// `"ctrl+w h"` are the same sequence.
pub(crate) fn canonical_binding(binding: &str) -> String {
    CHORD_SEP_RE.replace_all(binding.trim(), ",").into_owned()
}

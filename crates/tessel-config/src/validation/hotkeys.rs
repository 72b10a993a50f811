//! Hotkey binding validation.

use std::collections::HashMap;

use crate::schema::Hotkeys;

use super::helpers::canonical_binding;

/// Push an error for every binding shared by two actions. Empty bindings
/// mean "unbound" and are skipped.
pub(super) fn validate_no_duplicates(errors: &mut Vec<String>, hotkeys: &Hotkeys) {
    let mut seen: HashMap<String, String> = HashMap::new();
    for entry in hotkeys.entries() {
        if entry.binding.trim().is_empty() {
            continue;
        }
        let key = canonical_binding(entry.binding);
        let name = format!("{}.{}", entry.category, entry.action);
        if let Some(existing) = seen.get(&key) {
            errors.push(format!(
                "duplicate hotkey '{}': assigned to both '{existing}' and '{name}'",
                entry.binding
            ));
        } else {
            seen.insert(key, name);
        }
    }
}

use super::types::{KeyBind, Modifier};

/// Render a chord for display in the command bar's hotkey list.
///
/// macOS uses the modifier glyphs; other platforms spell them out.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mut ordered = kb.modifiers.clone();
    ordered.sort_by_key(|m| match m {
        Modifier::Ctrl => 0,
        Modifier::Alt => 1,
        Modifier::Shift => 2,
        Modifier::Meta => 3,
    });

    if cfg!(target_os = "macos") {
        let mut out = String::new();
        for m in &ordered {
            out.push_str(match m {
                Modifier::Ctrl => "\u{2303}",
                Modifier::Alt => "\u{2325}",
                Modifier::Shift => "\u{21E7}",
                Modifier::Meta => "\u{2318}",
            });
        }
        out.push_str(&kb.key);
        out
    } else {
        let mut parts: Vec<&str> = ordered
            .iter()
            .map(|m| match m {
                Modifier::Ctrl => "Ctrl",
                Modifier::Alt => "Alt",
                Modifier::Shift => "Shift",
                Modifier::Meta => {
                    if cfg!(target_os = "windows") {
                        "Win"
                    } else {
                        "Super"
                    }
                }
            })
            .collect();
        parts.push(&kb.key);
        parts.join("+")
    }
}

/// Render a chord sequence, chords separated by `", "`.
pub fn sequence_to_display(seq: &[KeyBind]) -> String {
    seq.iter()
        .map(keybind_to_display)
        .collect::<Vec<_>>()
        .join(", ")
}

mod display;
mod parse;
mod types;

pub use display::{keybind_to_display, sequence_to_display};
pub use parse::{parse_hotkey, parse_keybind};
pub(crate) use parse::normalize_key_name;
pub use types::{KeyBind, Modifier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_chord() {
        let kb = parse_keybind("ctrl+w").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "W");
    }

    #[test]
    fn parse_multi_modifier_chord() {
        let kb = parse_keybind("Ctrl+Shift+T").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(kb.key, "T");
    }

    #[test]
    fn modifier_aliases() {
        assert_eq!(parse_keybind("option+x").unwrap().modifiers, vec![Modifier::Alt]);
        assert_eq!(parse_keybind("cmd+x").unwrap().modifiers, vec![Modifier::Meta]);
        assert_eq!(parse_keybind("super+x").unwrap().modifiers, vec![Modifier::Meta]);
        assert_eq!(parse_keybind("meta+s").unwrap().modifiers, vec![Modifier::Meta]);
    }

    #[test]
    fn lowercase_letter_has_no_shift() {
        let kb = parse_keybind("t").unwrap();
        assert!(kb.modifiers.is_empty());
        assert_eq!(kb.key, "T");
    }

    #[test]
    fn uppercase_letter_implies_shift() {
        let kb = parse_keybind("T").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Shift]);
        assert_eq!(kb.key, "T");

        let kb = parse_keybind("shift+T").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Shift]);
    }

    #[test]
    fn named_keys() {
        assert_eq!(parse_keybind("meta+esc").unwrap().key, "Escape");
        assert_eq!(parse_keybind("ctrl+plus").unwrap().key, "+");
        assert_eq!(parse_keybind("ctrl+minus").unwrap().key, "-");
        assert_eq!(parse_keybind("F5").unwrap().key, "F5");
        assert_eq!(parse_keybind("f12").unwrap().key, "F12");
        assert_eq!(parse_keybind("Return").unwrap().key, "Enter");
    }

    #[test]
    fn literal_plus_key() {
        let kb = parse_keybind("+").unwrap();
        assert!(kb.modifiers.is_empty());
        assert_eq!(kb.key, "+");

        let kb = parse_keybind("ctrl++").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(kb.key, "+");
    }

    #[test]
    fn punctuation_keys_pass_through() {
        assert_eq!(parse_keybind("<").unwrap().key, "<");
        assert_eq!(parse_keybind("|").unwrap().key, "|");
        assert_eq!(parse_keybind("/").unwrap().key, "/");
        assert_eq!(parse_keybind("ctrl+-").unwrap().key, "-");
    }

    #[test]
    fn parse_errors() {
        assert!(parse_keybind("").is_err());
        assert!(parse_keybind("ctrl+").is_err());
        assert!(parse_keybind("hyper+x").is_err());
    }

    #[test]
    fn duplicate_modifiers_deduplicated() {
        let kb = parse_keybind("ctrl+ctrl+a").unwrap();
        assert_eq!(kb.modifiers, vec![Modifier::Ctrl]);
    }

    #[test]
    fn parse_sequence_with_commas() {
        let seq = parse_hotkey("ctrl+w, h").unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0].modifiers, vec![Modifier::Ctrl]);
        assert_eq!(seq[0].key, "W");
        assert!(seq[1].modifiers.is_empty());
        assert_eq!(seq[1].key, "H");
    }

    #[test]
    fn parse_sequence_with_spaces() {
        let seq = parse_hotkey("w s v").unwrap();
        let keys: Vec<&str> = seq.iter().map(|kb| kb.key.as_str()).collect();
        assert_eq!(keys, vec!["W", "S", "V"]);
    }

    #[test]
    fn parse_sequence_with_plus_chord() {
        let seq = parse_hotkey("ctrl+w, +").unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[1].key, "+");
    }

    #[test]
    fn parse_empty_sequence_fails() {
        assert!(parse_hotkey("   ").is_err());
    }

    #[test]
    fn parse_sequence_propagates_chord_errors() {
        assert!(parse_hotkey("ctrl+w, hyper+h").is_err());
    }

    #[test]
    fn display_chord_platform() {
        let kb = parse_keybind("ctrl+shift+t").unwrap();
        let display = keybind_to_display(&kb);
        if cfg!(target_os = "macos") {
            assert_eq!(display, "\u{2303}\u{21E7}T");
        } else {
            assert_eq!(display, "Ctrl+Shift+T");
        }
    }

    #[test]
    fn display_orders_modifiers() {
        let kb = KeyBind {
            modifiers: vec![Modifier::Shift, Modifier::Ctrl],
            key: "T".into(),
        };
        assert_eq!(
            keybind_to_display(&kb),
            keybind_to_display(&parse_keybind("ctrl+shift+t").unwrap())
        );
    }

    #[test]
    fn display_sequence() {
        let seq = parse_hotkey("g, t").unwrap();
        assert_eq!(sequence_to_display(&seq), "G, T");
    }

    #[test]
    fn keybind_serialization_roundtrip() {
        let kb = parse_keybind("alt+shift+x").unwrap();
        let json = serde_json::to_string(&kb).unwrap();
        let back: KeyBind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kb);
    }
}

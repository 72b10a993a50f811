use std::collections::{HashMap, HashSet};

use tessel_common::{Action, Direction};
use tessel_config::Hotkeys;
use tracing::{debug, warn};

use crate::keymap::{parse_hotkey, sequence_to_display};

use super::key_combo::KeyCombo;

/// Maps chord sequences to [`Action`]s.
///
/// Built from the hotkey settings at startup and rebuilt whenever the
/// settings change.
#[derive(Debug, Default)]
pub struct KeybindRegistry {
    bindings: HashMap<Vec<KeyCombo>, Action>,
    /// Every proper prefix of a registered sequence.
    prefixes: HashSet<Vec<KeyCombo>>,
}

/// The action a settings entry triggers.
pub fn action_for(category: &str, action: &str) -> Option<Action> {
    let resolved = match (category, action) {
        ("Split", "vertically") => Action::SplitVertical,
        ("Split", "horizontally") => Action::SplitHorizontal,
        ("Close", "current") => Action::CloseTab,
        ("Close", "all") => Action::CloseOtherTabs,
        ("Navigate", "left") => Action::FocusDirection(Direction::Left),
        ("Navigate", "right") => Action::FocusDirection(Direction::Right),
        ("Navigate", "up") => Action::FocusDirection(Direction::Up),
        ("Navigate", "down") => Action::FocusDirection(Direction::Down),
        ("Navigate", "nextTab") => Action::FocusNextTab,
        ("Navigate", "previousTab") => Action::FocusPrevTab,
        ("Navigate", "back") | ("Browser", "undo") => Action::GoBack,
        ("Navigate", "forward") | ("Browser", "redo") => Action::GoForward,
        ("Resize", dir) => Action::ResizePane {
            direction: Direction::parse(dir)?,
            delta: 1,
        },
        ("Maximize", "current") => Action::MaximizePane,
        ("Equalize", "sizes") => Action::EqualizePanes,
        ("Browser", "openNewTab") => Action::NewTabGroup,
        ("Browser", "closeTab") => Action::CloseTab,
        ("Browser", "reload") => Action::Reload,
        ("Browser", "reloadWithoutCache") => Action::ReloadIgnoringCache,
        ("Browser", "find") => Action::Find,
        ("Browser", "zoomIn") => Action::ZoomIn,
        ("Browser", "zoomOut") => Action::ZoomOut,
        ("Browser", "resetZoom") => Action::ResetZoom,
        ("Browser", "toggleFullscreen") => Action::ToggleFullscreen,
        ("Browser", "toggleDevTools") => Action::ToggleDevTools,
        ("Controls", "selectAll") => Action::SelectAll,
        ("Controls", "print") => Action::Print,
        ("Controls", "toggleSidebar") => Action::ToggleSidebar,
        ("Controls", "loseFocus") => Action::LoseFocus,
        _ => return None,
    };
    Some(resolved)
}

impl KeybindRegistry {
    /// Build the registry from the hotkey settings.
    ///
    /// Empty bindings are treated as unbound. Bindings that fail to parse
    /// are logged as warnings and skipped.
    pub fn from_settings(hotkeys: &Hotkeys) -> Self {
        let mut registry = Self::default();

        for entry in hotkeys.entries() {
            if entry.binding.trim().is_empty() {
                debug!("{}.{} is unbound", entry.category, entry.action);
                continue;
            }
            let Some(action) = action_for(entry.category, entry.action) else {
                warn!("no action for hotkey {}.{}", entry.category, entry.action);
                continue;
            };
            match parse_hotkey(entry.binding) {
                Ok(seq) => {
                    let combos = seq.iter().map(KeyCombo::from_keybind).collect();
                    registry.insert(combos, action);
                }
                Err(e) => {
                    warn!(
                        "invalid hotkey '{}' for {}.{}: {e}",
                        entry.binding, entry.category, entry.action
                    );
                }
            }
        }

        registry
    }

    /// Register a sequence. A later binding for the same sequence wins.
    pub fn insert(&mut self, combos: Vec<KeyCombo>, action: Action) {
        if combos.is_empty() {
            return;
        }
        for end in 1..combos.len() {
            self.prefixes.insert(combos[..end].to_vec());
        }
        if let Some(previous) = self.bindings.insert(combos, action) {
            warn!("hotkey for {previous:?} overridden");
        }
    }

    /// The action bound to exactly this sequence.
    pub fn lookup(&self, combos: &[KeyCombo]) -> Option<&Action> {
        self.bindings.get(combos)
    }

    /// Whether some longer binding starts with `combos`.
    pub fn is_prefix(&self, combos: &[KeyCombo]) -> bool {
        self.prefixes.contains(combos)
    }

    pub fn all_bindings(&self) -> &HashMap<Vec<KeyCombo>, Action> {
        &self.bindings
    }

    /// Display string of a sequence bound to `action`.
    ///
    /// When several sequences trigger the same action the shortest one is
    /// returned, ties broken alphabetically.
    pub fn keybind_for_action(&self, action: &Action) -> Option<String> {
        self.bindings
            .iter()
            .filter(|(_, a)| *a == action)
            .map(|(combos, _)| {
                let seq: Vec<_> = combos.iter().map(KeyCombo::to_keybind).collect();
                sequence_to_display(&seq)
            })
            .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

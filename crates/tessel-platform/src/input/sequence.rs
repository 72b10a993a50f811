use tessel_common::Action;
use tracing::trace;

use super::key_combo::KeyCombo;
use super::registry::KeybindRegistry;

/// Outcome of feeding one chord to a [`SequenceMatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Matched(Action),
    /// The chords so far begin a longer binding.
    Pending,
    NoMatch,
}

/// Accumulates chords until they complete a binding, vim style.
#[derive(Debug, Default)]
pub struct SequenceMatcher {
    pending: Vec<KeyCombo>,
}

impl SequenceMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chords typed so far toward an incomplete binding.
    pub fn pending(&self) -> &[KeyCombo] {
        &self.pending
    }

    pub fn reset(&mut self) {
        self.pending.clear();
    }

    /// Feed one chord.
    ///
    /// On a dead end the pending chords are dropped and `combo` is retried
    /// on its own, so a stray key never swallows the start of the next
    /// binding.
    pub fn feed(&mut self, registry: &KeybindRegistry, combo: KeyCombo) -> MatchResult {
        if combo.is_modifier_only() {
            return if self.pending.is_empty() {
                MatchResult::NoMatch
            } else {
                MatchResult::Pending
            };
        }

        self.pending.push(combo);
        let result = self.step(registry);
        if result != MatchResult::NoMatch || self.pending.len() == 1 {
            return result;
        }

        trace!(dropped = self.pending.len() - 1, "hotkey sequence reset");
        let last = self.pending.pop();
        self.pending.clear();
        self.pending.extend(last);
        self.step(registry)
    }

    fn step(&mut self, registry: &KeybindRegistry) -> MatchResult {
        if let Some(action) = registry.lookup(&self.pending) {
            let action = action.clone();
            self.pending.clear();
            return MatchResult::Matched(action);
        }
        if registry.is_prefix(&self.pending) {
            return MatchResult::Pending;
        }
        if self.pending.len() == 1 {
            self.pending.clear();
        }
        MatchResult::NoMatch
    }
}

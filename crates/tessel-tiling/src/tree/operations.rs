//! Structural operations on the layout tree.
//!
//! `split` and `remove` are pure and return new trees. The adjustment
//! helpers (swap, resize, equalize, percentage by path) edit in place and
//! report whether anything changed.

use tessel_common::{Direction, TabId};
use tracing::trace;

use super::{Branch, LayoutTree, SplitDirection, DEFAULT_SPLIT_PERCENTAGE};

/// Splits are clamped into this range when resized.
pub const MIN_SPLIT_PERCENTAGE: f64 = 10.0;
pub const MAX_SPLIT_PERCENTAGE: f64 = 90.0;

enum ResizeState {
    NotFound,
    Found,
    Applied,
}

impl LayoutTree {
    /// Replace the leaf `target` with a split whose first child is the new
    /// leaf and whose second child is `target`.
    ///
    /// Returns an unchanged copy when `target` is absent.
    pub fn split(&self, target: &TabId, new_leaf: TabId, direction: SplitDirection) -> LayoutTree {
        match self {
            LayoutTree::Leaf(id) if id == target => LayoutTree::Split {
                direction,
                first: Box::new(LayoutTree::Leaf(new_leaf)),
                second: Box::new(LayoutTree::Leaf(id.clone())),
                split_percentage: DEFAULT_SPLIT_PERCENTAGE,
            },
            LayoutTree::Leaf(_) => self.clone(),
            LayoutTree::Split {
                direction: dir,
                first,
                second,
                split_percentage,
            } => {
                // First depth-first match wins; ids are unique so at most one side changes.
                let (first, second) = if first.contains(target) {
                    (first.split(target, new_leaf, direction), (**second).clone())
                } else {
                    ((**first).clone(), second.split(target, new_leaf, direction))
                };
                LayoutTree::Split {
                    direction: *dir,
                    first: Box::new(first),
                    second: Box::new(second),
                    split_percentage: *split_percentage,
                }
            }
        }
    }

    /// Remove the leaf `target`, promoting its sibling into the parent's
    /// place. Returns `None` when the tree becomes empty.
    pub fn remove(&self, target: &TabId) -> Option<LayoutTree> {
        match self {
            LayoutTree::Leaf(id) if id == target => None,
            LayoutTree::Leaf(_) => Some(self.clone()),
            LayoutTree::Split {
                direction,
                first,
                second,
                split_percentage,
            } => match (first.remove(target), second.remove(target)) {
                (Some(first), Some(second)) => Some(LayoutTree::Split {
                    direction: *direction,
                    first: Box::new(first),
                    second: Box::new(second),
                    split_percentage: *split_percentage,
                }),
                (Some(only), None) | (None, Some(only)) => Some(only),
                (None, None) => None,
            },
        }
    }

    /// Swap the positions of two leaves. Both must exist for the swap to
    /// take effect.
    pub fn swap_leaves(&mut self, a: &TabId, b: &TabId) -> bool {
        if a == b || !self.contains(a) || !self.contains(b) {
            return false;
        }
        self.for_each_leaf_mut(&mut |id: &mut TabId| {
            if id == a {
                *id = b.clone();
            } else if id == b {
                *id = a.clone();
            }
        });
        true
    }

    fn for_each_leaf_mut(&mut self, f: &mut impl FnMut(&mut TabId)) {
        match self {
            LayoutTree::Leaf(id) => f(id),
            LayoutTree::Split { first, second, .. } => {
                first.for_each_leaf_mut(f);
                second.for_each_leaf_mut(f);
            }
        }
    }

    /// Move the nearest divider on `direction`'s axis that bounds `target`.
    ///
    /// `Left`/`Up` move the divider toward the first child, `Right`/`Down`
    /// toward the second. `delta` is in percentage points and the result is
    /// clamped to [`MIN_SPLIT_PERCENTAGE`, `MAX_SPLIT_PERCENTAGE`].
    pub fn resize(&mut self, target: &TabId, direction: Direction, delta: f64) -> bool {
        let axis = if direction.is_horizontal() {
            SplitDirection::Row
        } else {
            SplitDirection::Column
        };
        let signed = match direction {
            Direction::Left | Direction::Up => -delta,
            Direction::Right | Direction::Down => delta,
        };
        matches!(self.resize_inner(target, axis, signed), ResizeState::Applied)
    }

    fn resize_inner(&mut self, target: &TabId, axis: SplitDirection, delta: f64) -> ResizeState {
        match self {
            LayoutTree::Leaf(id) if id == target => ResizeState::Found,
            LayoutTree::Leaf(_) => ResizeState::NotFound,
            LayoutTree::Split {
                direction,
                first,
                second,
                split_percentage,
            } => {
                let child = match first.resize_inner(target, axis, delta) {
                    ResizeState::NotFound => second.resize_inner(target, axis, delta),
                    found => found,
                };
                match child {
                    ResizeState::Found if *direction == axis => {
                        *split_percentage = (*split_percentage + delta)
                            .clamp(MIN_SPLIT_PERCENTAGE, MAX_SPLIT_PERCENTAGE);
                        trace!(percentage = *split_percentage, "divider moved");
                        ResizeState::Applied
                    }
                    other => other,
                }
            }
        }
    }

    /// Reset every split to 50%. Returns `true` if any split changed.
    pub fn equalize(&mut self) -> bool {
        match self {
            LayoutTree::Leaf(_) => false,
            LayoutTree::Split {
                first,
                second,
                split_percentage,
                ..
            } => {
                let changed = *split_percentage != DEFAULT_SPLIT_PERCENTAGE;
                *split_percentage = DEFAULT_SPLIT_PERCENTAGE;
                let a = first.equalize();
                let b = second.equalize();
                changed || a || b
            }
        }
    }

    /// Set the split percentage of the split node reached by `path`.
    /// An empty path addresses the root. Non-finite percentages are rejected.
    pub fn set_split_percentage(&mut self, path: &[Branch], percentage: f64) -> bool {
        if !percentage.is_finite() {
            return false;
        }
        let clamped = percentage.clamp(MIN_SPLIT_PERCENTAGE, MAX_SPLIT_PERCENTAGE);
        match (self, path.split_first()) {
            (
                LayoutTree::Split {
                    split_percentage, ..
                },
                None,
            ) => {
                *split_percentage = clamped;
                true
            }
            (LayoutTree::Split { first, .. }, Some((Branch::First, rest))) => {
                first.set_split_percentage(rest, percentage)
            }
            (LayoutTree::Split { second, .. }, Some((Branch::Second, rest))) => {
                second.set_split_percentage(rest, percentage)
            }
            (LayoutTree::Leaf(_), _) => false,
        }
    }
}

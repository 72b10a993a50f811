//! Ordered traversal of the leaves of a layout tree.

use tessel_common::TabId;

use super::{Branch, LayoutTree};

impl LayoutTree {
    /// Get the leaf after `current` in depth-first order, wrapping around.
    pub fn next_leaf(&self, current: &TabId) -> Option<TabId> {
        let ids = self.leaf_ids();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|id| id == current)?;
        Some(ids[(idx + 1) % ids.len()].clone())
    }

    /// Get the leaf before `current` in depth-first order, wrapping around.
    pub fn prev_leaf(&self, current: &TabId) -> Option<TabId> {
        let ids = self.leaf_ids();
        if ids.len() <= 1 {
            return None;
        }
        let idx = ids.iter().position(|id| id == current)?;
        Some(ids[(idx + ids.len() - 1) % ids.len()].clone())
    }

    /// Branch path from the root to the leaf `target`.
    pub fn path_to(&self, target: &TabId) -> Option<Vec<Branch>> {
        match self {
            LayoutTree::Leaf(id) if id == target => Some(Vec::new()),
            LayoutTree::Leaf(_) => None,
            LayoutTree::Split { first, second, .. } => {
                if let Some(mut path) = first.path_to(target) {
                    path.insert(0, Branch::First);
                    Some(path)
                } else {
                    let mut path = second.path_to(target)?;
                    path.insert(0, Branch::Second);
                    Some(path)
                }
            }
        }
    }
}

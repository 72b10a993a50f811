//! Core types for the layout tree: SplitDirection, Branch, and LayoutTree.

use serde::{Deserialize, Serialize};
use tessel_common::TabId;

/// Split percentage given to both children of a freshly created split.
pub const DEFAULT_SPLIT_PERCENTAGE: f64 = 50.0;

/// Orientation of a split.
///
/// `Row` places the children side by side (first on the left), `Column`
/// stacks them (first on top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDirection {
    Row,
    Column,
}

/// Which child of a split a path step descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    First,
    Second,
}

/// A binary split tree whose leaves are tab identifiers.
///
/// Serializes the way the UI reports layouts: a bare string for a leaf and a
/// `{direction, first, second, splitPercentage}` object for a split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayoutTree {
    Leaf(TabId),
    Split {
        direction: SplitDirection,
        first: Box<LayoutTree>,
        second: Box<LayoutTree>,
        #[serde(rename = "splitPercentage", default = "default_split_percentage")]
        split_percentage: f64,
    },
}

fn default_split_percentage() -> f64 {
    DEFAULT_SPLIT_PERCENTAGE
}

impl LayoutTree {
    pub fn leaf(id: impl Into<TabId>) -> Self {
        LayoutTree::Leaf(id.into())
    }

    /// Build a split node at 50%.
    pub fn split_node(direction: SplitDirection, first: LayoutTree, second: LayoutTree) -> Self {
        LayoutTree::Split {
            direction,
            first: Box::new(first),
            second: Box::new(second),
            split_percentage: DEFAULT_SPLIT_PERCENTAGE,
        }
    }

    pub fn row(first: LayoutTree, second: LayoutTree) -> Self {
        Self::split_node(SplitDirection::Row, first, second)
    }

    pub fn column(first: LayoutTree, second: LayoutTree) -> Self {
        Self::split_node(SplitDirection::Column, first, second)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, LayoutTree::Leaf(_))
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            LayoutTree::Leaf(_) => 1,
            LayoutTree::Split { first, second, .. } => first.leaf_count() + second.leaf_count(),
        }
    }

    pub fn contains(&self, id: &TabId) -> bool {
        match self {
            LayoutTree::Leaf(leaf) => leaf == id,
            LayoutTree::Split { first, second, .. } => first.contains(id) || second.contains(id),
        }
    }

    /// Number of split levels above the deepest leaf. A bare leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            LayoutTree::Leaf(_) => 0,
            LayoutTree::Split { first, second, .. } => 1 + first.depth().max(second.depth()),
        }
    }

    /// Collect all leaf IDs in depth-first (first-before-second) order.
    pub fn leaf_ids(&self) -> Vec<TabId> {
        let mut ids = Vec::new();
        self.collect_ids_into(&mut ids);
        ids
    }

    fn collect_ids_into(&self, out: &mut Vec<TabId>) {
        match self {
            LayoutTree::Leaf(id) => out.push(id.clone()),
            LayoutTree::Split { first, second, .. } => {
                first.collect_ids_into(out);
                second.collect_ids_into(out);
            }
        }
    }

    /// Whether every split percentage is finite and strictly between 0 and 100.
    pub fn has_valid_percentages(&self) -> bool {
        match self {
            LayoutTree::Leaf(_) => true,
            LayoutTree::Split {
                first,
                second,
                split_percentage,
                ..
            } => {
                split_percentage.is_finite()
                    && *split_percentage > 0.0
                    && *split_percentage < 100.0
                    && first.has_valid_percentages()
                    && second.has_valid_percentages()
            }
        }
    }

    /// Whether every leaf identifier occurs exactly once.
    pub fn has_unique_leaves(&self) -> bool {
        let ids = self.leaf_ids();
        let unique: std::collections::HashSet<&TabId> = ids.iter().collect();
        unique.len() == ids.len()
    }
}

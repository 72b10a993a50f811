//! Recursive tree-to-rect computation.

use tessel_common::{Rect, TabId};

use crate::tree::{LayoutTree, SplitDirection};

use super::{LayoutBox, LayoutEngine};

/// Divide `bounds` between the two children of a split.
///
/// `gap` is carved out of the split axis before the percentage is applied.
pub(crate) fn split_rect(
    bounds: Rect,
    direction: SplitDirection,
    split_percentage: f64,
    gap: f64,
) -> (Rect, Rect) {
    let fraction = split_percentage / 100.0;
    match direction {
        SplitDirection::Row => {
            let available = (bounds.width - gap).max(0.0);
            let w1 = available * fraction;
            let w2 = (available - w1).max(0.0);
            (
                Rect::new(bounds.x, bounds.y, w1, bounds.height),
                Rect::new(bounds.x + w1 + gap, bounds.y, w2, bounds.height),
            )
        }
        SplitDirection::Column => {
            let available = (bounds.height - gap).max(0.0);
            let h1 = available * fraction;
            let h2 = (available - h1).max(0.0);
            (
                Rect::new(bounds.x, bounds.y, bounds.width, h1),
                Rect::new(bounds.x, bounds.y + h1 + gap, bounds.width, h2),
            )
        }
    }
}

fn walk(node: &LayoutTree, bounds: Rect, gap: f64, out: &mut Vec<(TabId, Rect)>) {
    match node {
        LayoutTree::Leaf(id) => out.push((id.clone(), bounds)),
        LayoutTree::Split {
            direction,
            first,
            second,
            split_percentage,
        } => {
            let (a, b) = split_rect(bounds, *direction, *split_percentage, gap);
            walk(first, a, gap, out);
            walk(second, b, gap, out);
        }
    }
}

/// Flatten a tree into normalized boxes over the unit square, depth-first.
pub fn flatten_to_boxes(tree: &LayoutTree) -> Vec<LayoutBox> {
    let mut rects = Vec::with_capacity(tree.leaf_count());
    walk(tree, Rect::unit(), 0.0, &mut rects);
    rects
        .into_iter()
        .map(|(id, rect)| LayoutBox::from_rect(id, rect))
        .collect()
}

impl LayoutEngine {
    /// Compute pixel rects for every leaf inside `viewport`.
    pub fn compute(&self, tree: &LayoutTree, viewport: Rect) -> Vec<(TabId, Rect)> {
        let mut results = Vec::with_capacity(tree.leaf_count());
        let bounds = viewport.inset(self.outer_padding as f64);
        walk(tree, bounds, self.gap as f64, &mut results);
        results
    }
}

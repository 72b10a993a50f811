//! Split border computation for drag-resize hit testing.
//!
//! Walks the layout tree and produces one `SplitBorder` per split node,
//! describing where the divider sits in pixel space and the branch path
//! that reaches that split. A drag handler hit-tests the cursor against
//! these and writes the new percentage back through the path.

use tessel_common::Rect;

use crate::tree::{Branch, LayoutTree, SplitDirection};

use super::calculation::split_rect;

/// A divider between the two children of one split node.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitBorder {
    /// `Row` splits have a vertical divider line, `Column` a horizontal one.
    pub direction: SplitDirection,
    /// Divider position in pixels (x for rows, y for columns).
    pub position: f64,
    /// Start of the divider line along the other axis.
    pub start: f64,
    /// End of the divider line.
    pub end: f64,
    /// Branch path from the root to this split.
    pub path: Vec<Branch>,
    /// The bounding rect of the entire split region.
    pub bounds: Rect,
}

impl SplitBorder {
    /// Half-width of the hit zone on each side of the border.
    const HIT_HALF_WIDTH: f64 = 6.0;

    /// Test whether a point (x, y) is within the drag zone of this border.
    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        match self.direction {
            SplitDirection::Row => {
                (x - self.position).abs() <= Self::HIT_HALF_WIDTH
                    && y >= self.start
                    && y <= self.end
            }
            SplitDirection::Column => {
                (y - self.position).abs() <= Self::HIT_HALF_WIDTH
                    && x >= self.start
                    && x <= self.end
            }
        }
    }

    fn span(&self) -> f64 {
        match self.direction {
            SplitDirection::Row => self.bounds.width,
            SplitDirection::Column => self.bounds.height,
        }
    }

    /// Convert a pixel delta to a split-percentage delta for this border.
    pub fn pixel_to_percentage(&self, pixel_delta: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        pixel_delta / span * 100.0
    }

    /// Split percentage that would put the divider at the cursor.
    pub fn percentage_at(&self, x: f64, y: f64) -> f64 {
        let offset = match self.direction {
            SplitDirection::Row => x - self.bounds.x,
            SplitDirection::Column => y - self.bounds.y,
        };
        self.pixel_to_percentage(offset)
    }
}

/// Compute all split borders from the tree within the given viewport.
pub fn compute_borders(root: &LayoutTree, bounds: Rect, gap: f64) -> Vec<SplitBorder> {
    let mut borders = Vec::new();
    let mut path = Vec::new();
    walk_borders(root, bounds, gap, &mut path, &mut borders);
    borders
}

fn walk_borders(
    node: &LayoutTree,
    bounds: Rect,
    gap: f64,
    path: &mut Vec<Branch>,
    out: &mut Vec<SplitBorder>,
) {
    let LayoutTree::Split {
        direction,
        first,
        second,
        split_percentage,
    } = node
    else {
        return;
    };

    let (a, b) = split_rect(bounds, *direction, *split_percentage, gap);
    let (position, start, end) = match direction {
        SplitDirection::Row => (a.right() + gap / 2.0, bounds.y, bounds.bottom()),
        SplitDirection::Column => (a.bottom() + gap / 2.0, bounds.x, bounds.right()),
    };
    out.push(SplitBorder {
        direction: *direction,
        position,
        start,
        end,
        path: path.clone(),
        bounds,
    });

    path.push(Branch::First);
    walk_borders(first, a, gap, path, out);
    path.pop();
    path.push(Branch::Second);
    walk_borders(second, b, gap, path, out);
    path.pop();
}

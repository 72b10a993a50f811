//! Spatial "move focus in a direction" resolution over a layout tree.
//!
//! Works purely on the normalized boxes from [`flatten_to_boxes`], so the
//! answer never depends on window size or render state.

use tessel_common::{Direction, TabId};

use crate::layout::{flatten_to_boxes, LayoutBox};
use crate::tree::LayoutTree;

/// Find the pane that focus should move to from `active` in `direction`.
///
/// A candidate must have its center strictly past the active center on the
/// movement axis and must overlap the active box on the other axis. The
/// closest center wins; ties go to the earliest box in depth-first order.
/// Returns `None` at the edge of the layout or when `active` is absent.
pub fn resolve_neighbor(tree: &LayoutTree, active: &TabId, direction: Direction) -> Option<TabId> {
    let boxes = flatten_to_boxes(tree);
    let current = boxes.iter().find(|b| &b.id == active)?;
    let (cx, cy) = current.center();

    let mut best: Option<(&LayoutBox, f64)> = None;
    for candidate in boxes.iter().filter(|b| &b.id != active) {
        let (x, y) = candidate.center();
        let distance = match direction {
            Direction::Left if x < cx && overlaps_vertically(candidate, current) => cx - x,
            Direction::Right if x > cx && overlaps_vertically(candidate, current) => x - cx,
            Direction::Up if y < cy && overlaps_horizontally(candidate, current) => cy - y,
            Direction::Down if y > cy && overlaps_horizontally(candidate, current) => y - cy,
            _ => continue,
        };
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((candidate, distance));
        }
    }
    best.map(|(b, _)| b.id.clone())
}

fn overlaps_vertically(a: &LayoutBox, b: &LayoutBox) -> bool {
    a.y < b.y + b.height && a.y + a.height > b.y
}

fn overlaps_horizontally(a: &LayoutBox, b: &LayoutBox) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SplitDirection;
    use proptest::prelude::*;

    fn id(s: &str) -> TabId {
        TabId::from(s)
    }

    fn l(s: &str) -> LayoutTree {
        LayoutTree::leaf(s)
    }

    #[test]
    fn row_split_left_and_right() {
        let tree = LayoutTree::row(l("B"), l("A"));
        assert_eq!(resolve_neighbor(&tree, &id("A"), Direction::Left), Some(id("B")));
        assert_eq!(resolve_neighbor(&tree, &id("A"), Direction::Right), None);
        assert_eq!(resolve_neighbor(&tree, &id("B"), Direction::Right), Some(id("A")));
    }

    #[test]
    fn row_split_has_no_vertical_neighbors() {
        let tree = LayoutTree::row(l("B"), l("A"));
        assert_eq!(resolve_neighbor(&tree, &id("A"), Direction::Up), None);
        assert_eq!(resolve_neighbor(&tree, &id("A"), Direction::Down), None);
    }

    #[test]
    fn three_way_layout() {
        // B | C
        //   | A
        let tree = LayoutTree::row(l("B"), LayoutTree::column(l("C"), l("A")));
        assert_eq!(resolve_neighbor(&tree, &id("A"), Direction::Up), Some(id("C")));
        assert_eq!(resolve_neighbor(&tree, &id("A"), Direction::Left), Some(id("B")));
        assert_eq!(resolve_neighbor(&tree, &id("C"), Direction::Down), Some(id("A")));
        assert_eq!(resolve_neighbor(&tree, &id("C"), Direction::Up), None);
    }

    #[test]
    fn equal_distance_ties_break_by_order() {
        let tree = LayoutTree::row(l("B"), LayoutTree::column(l("C"), l("A")));
        assert_eq!(resolve_neighbor(&tree, &id("B"), Direction::Right), Some(id("C")));
    }

    #[test]
    fn nearest_candidate_wins() {
        // A | B | C across a row
        let tree = LayoutTree::row(l("A"), LayoutTree::row(l("B"), l("C")));
        assert_eq!(resolve_neighbor(&tree, &id("A"), Direction::Right), Some(id("B")));
        assert_eq!(resolve_neighbor(&tree, &id("C"), Direction::Left), Some(id("B")));
    }

    #[test]
    fn missing_active_yields_none() {
        let tree = LayoutTree::row(l("A"), l("B"));
        assert_eq!(resolve_neighbor(&tree, &id("Z"), Direction::Left), None);
    }

    #[test]
    fn single_leaf_has_no_neighbors() {
        for direction in Direction::ALL {
            assert_eq!(resolve_neighbor(&l("A"), &id("A"), direction), None);
        }
    }

    proptest! {
        #[test]
        fn resolution_is_deterministic(splits in prop::collection::vec((any::<usize>(), any::<bool>()), 0..10), pick in any::<usize>(), dir in 0usize..4) {
            let mut tree = l("t0");
            for (n, (i, row)) in splits.into_iter().enumerate() {
                let leaves = tree.leaf_ids();
                let direction = if row { SplitDirection::Row } else { SplitDirection::Column };
                tree = tree.split(&leaves[i % leaves.len()], TabId::from(format!("t{}", n + 1)), direction);
            }
            let leaves = tree.leaf_ids();
            let active = &leaves[pick % leaves.len()];
            let direction = Direction::ALL[dir];
            let first = resolve_neighbor(&tree, active, direction);
            prop_assert_eq!(first.clone(), resolve_neighbor(&tree, active, direction));
            if let Some(neighbor) = first {
                prop_assert!(&neighbor != active);
                prop_assert!(tree.contains(&neighbor));
            }
        }
    }
}

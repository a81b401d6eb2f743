//! Forest scatter
//!
//! A jittered lattice over the whole map, independent of rooms and
//! corridors. Rows are four cells apart; each row advances by a fresh random
//! step and each tree is nudged vertically.

use crate::consts::{
    FOREST_JITTER_MAX, FOREST_JITTER_MIN, FOREST_ROW_STEP, FOREST_STEP_MAX, FOREST_STEP_MIN,
};
use crate::geometry::{GridPoint, PointSet};
use crate::rng::LayoutRng;

/// Scatter trees over a `map_size` square
///
/// Jitter can push a tree up to two rows outside the map; callers that
/// paint the set are expected to bounds-check.
pub fn scatter_forest(map_size: u32, rng: &mut LayoutRng) -> PointSet {
    let size = map_size as i32;
    let mut forest = PointSet::new();

    for y in (0..size).step_by(FOREST_ROW_STEP) {
        let mut x = 0;
        while x < size {
            let jitter = rng.range_i32(FOREST_JITTER_MIN, FOREST_JITTER_MAX);
            forest.insert(GridPoint::new(x, y + jitter));
            x += rng.range_i32(FOREST_STEP_MIN, FOREST_STEP_MAX);
        }
    }

    forest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forest_rows_and_jitter() {
        let mut rng = LayoutRng::new(42);
        let forest = scatter_forest(40, &mut rng);

        assert!(!forest.is_empty());
        for p in &forest {
            assert!(p.x >= 0 && p.x < 40);
            // Every tree sits within [-2, 2) of a row that is a multiple of 4
            let row = (0..40).step_by(4).find(|r| (p.y - r) >= -2 && (p.y - r) < 2);
            assert!(row.is_some(), "{p:?} is not near a lattice row");
        }
    }

    #[test]
    fn test_forest_column_spacing() {
        let mut rng = LayoutRng::new(7);
        let forest = scatter_forest(100, &mut rng);

        // Each row holds between 100/5 and 100/2 trees
        let rows = 25;
        assert!(forest.len() >= rows * 20);
        assert!(forest.len() <= rows * 50);
        assert!(forest.contains(&GridPoint::new(0, -2))
            || forest.contains(&GridPoint::new(0, -1))
            || forest.contains(&GridPoint::new(0, 0))
            || forest.contains(&GridPoint::new(0, 1)));
    }

    #[test]
    fn test_empty_map() {
        let mut rng = LayoutRng::new(1);
        assert!(scatter_forest(0, &mut rng).is_empty());
    }

    #[test]
    fn test_forest_reproducible() {
        let a = scatter_forest(64, &mut LayoutRng::new(5));
        let b = scatter_forest(64, &mut LayoutRng::new(5));
        assert_eq!(a, b);
    }
}

//! Decoration sampling over rooms and corridors
//!
//! Both passes accumulate into one shared set. Collisions merge silently,
//! so the set can hold fewer points than were drawn.

use crate::consts::{CORRIDOR_DECORATION_MAX_DIVISOR, CORRIDOR_DECORATION_MIN_DIVISOR};
use crate::geometry::{GridPoint, PointSet, Rect};
use crate::rng::LayoutRng;

/// Room pass: scatter `[width, width + height)` points inside each room
///
/// Returns the number of points drawn, before de-duplication.
pub fn decorate_rooms(rooms: &[Rect], rng: &mut LayoutRng, decorations: &mut PointSet) -> usize {
    let mut drawn = 0;
    for room in rooms {
        let count = rng.range_i32(room.width, room.width + room.height);
        for _ in 0..count {
            let x = rng.range_i32(room.x, room.max_x());
            let y = rng.range_i32(room.y, room.max_y());
            decorations.insert(GridPoint::new(x, y));
        }
        drawn += count.max(0) as usize;
    }
    drawn
}

/// Corridor pass: pick `[|C|/6, |C|/5)` corridor cells by index
///
/// Indices are drawn with replacement from the set's enumeration order, so
/// the same cell may be picked twice.
pub fn decorate_corridors(
    corridors: &PointSet,
    rng: &mut LayoutRng,
    decorations: &mut PointSet,
) -> usize {
    let cells: Vec<GridPoint> = corridors.iter().copied().collect();
    let lo = (cells.len() / CORRIDOR_DECORATION_MIN_DIVISOR) as i32;
    let hi = (cells.len() / CORRIDOR_DECORATION_MAX_DIVISOR) as i32;
    let count = rng.range_i32(lo, hi).max(0) as usize;

    for _ in 0..count {
        decorations.insert(cells[rng.index(cells.len())]);
    }
    count
}

//! Corridor carving between consecutive rooms
//!
//! Each pair `(rooms[i], rooms[i + 1])` is joined by an elbow: a horizontal
//! run from the first center until the truncated x matches the second
//! center, then a vertical run until the truncated y matches. Every step
//! lays two cells, so corridors are two cells thick across the direction of
//! travel. Rooms are joined in list order, not by proximity.

use crate::consts::CORRIDOR_WIDTH;
use crate::geometry::{GridPoint, PointSet, Rect};

/// Carve corridors for every consecutive pair of rooms
pub fn connect_rooms(rooms: &[Rect]) -> PointSet {
    let mut corridors = PointSet::new();
    for pair in rooms.windows(2) {
        dig_elbow(pair[0].center(), pair[1].center(), &mut corridors);
    }
    log::debug!(
        "carved {} corridor cells between {} rooms",
        corridors.len(),
        rooms.len()
    );
    corridors
}

/// Walk from `from` to `to`, horizontal run first
///
/// The start cell itself is not added; every stepped-to cell is, together
/// with the cell above it (horizontal run) or to its right (vertical run).
pub fn dig_elbow(from: (f32, f32), to: (f32, f32), corridors: &mut PointSet) {
    let (mut x, mut y) = from;
    let (tx, ty) = to;

    while x as i32 != tx as i32 {
        x += if tx > x { 1.0 } else { -1.0 };
        for j in 0..CORRIDOR_WIDTH {
            corridors.insert(GridPoint::new(x as i32, y as i32 + j));
        }
    }

    while y as i32 != ty as i32 {
        y += if ty > y { 1.0 } else { -1.0 };
        for j in 0..CORRIDOR_WIDTH {
            corridors.insert(GridPoint::new(x as i32 + j, y as i32));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_run_is_two_thick() {
        let mut set = PointSet::new();
        dig_elbow((2.5, 5.5), (8.5, 5.5), &mut set);

        assert_eq!(set.len(), 12);
        for x in 3..=8 {
            assert!(set.contains(&GridPoint::new(x, 5)));
            assert!(set.contains(&GridPoint::new(x, 6)));
        }
        assert!(!set.contains(&GridPoint::new(2, 5)), "start cell is not carved");
    }

    #[test]
    fn test_vertical_run_is_two_thick() {
        let mut set = PointSet::new();
        dig_elbow((4.0, 10.0), (4.0, 6.0), &mut set);

        assert_eq!(set.len(), 8);
        for y in 6..=9 {
            assert!(set.contains(&GridPoint::new(4, y)));
            assert!(set.contains(&GridPoint::new(5, y)));
        }
    }

    #[test]
    fn test_elbow_turns_at_target_column() {
        let mut set = PointSet::new();
        dig_elbow((1.5, 1.5), (5.5, 4.5), &mut set);

        // Horizontal leg on row 1, vertical leg on column 5
        assert!(set.contains(&GridPoint::new(5, 1)));
        assert!(set.contains(&GridPoint::new(5, 4)));
        assert!(set.contains(&GridPoint::new(6, 4)));
        assert!(!set.contains(&GridPoint::new(1, 4)));
    }

    #[test]
    fn test_same_cell_skips_both_phases() {
        let mut set = PointSet::new();
        dig_elbow((3.2, 3.7), (3.9, 3.1), &mut set);
        assert!(set.is_empty());
    }

    #[test]
    fn test_connect_rooms_in_list_order() {
        let rooms = [
            Rect::new(0, 0, 4, 4),
            Rect::new(20, 0, 4, 4),
            Rect::new(0, 20, 4, 4),
        ];
        let set = connect_rooms(&rooms);

        // Room 0 -> 1 along row 2, room 1 -> 2 back along row 2 then down column 2
        assert!(set.contains(&GridPoint::new(10, 2)));
        assert!(set.contains(&GridPoint::new(2, 12)));
        // No direct link from room 0 to room 2 other than through that path
        assert!(!set.contains(&GridPoint::new(22, 12)));
    }

    #[test]
    fn test_fewer_than_two_rooms() {
        assert!(connect_rooms(&[]).is_empty());
        assert!(connect_rooms(&[Rect::new(0, 0, 5, 5)]).is_empty());
    }
}

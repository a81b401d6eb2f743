//! Collaborator interfaces
//!
//! The generator hands finished sets to a painter and a spawner. Both only
//! read the sets; anything they derive is their own copy.

mod spawn;
mod tilemap;

pub use spawn::{Spawn, SpawnRegistry};
pub use tilemap::{CellLayers, Tile, TileMap};

use crate::geometry::{PointSet, Rect};

/// Paints layout sets onto a renderable surface
pub trait Painter {
    /// Fill the map with the wall layer
    fn paint_walls(&mut self);

    fn paint_rooms(&mut self, rooms: &[Rect]);

    fn paint_corridors(&mut self, corridors: &PointSet);

    fn paint_forest(&mut self, forest: &PointSet);

    /// Paint decorations; cells in `context` get a different decoration kind
    fn paint_decorations(&mut self, decorations: &PointSet, context: &PointSet);

    /// Erase the wall layer under every room
    fn cut_rooms(&mut self, rooms: &[Rect]);

    /// Erase the wall layer under every cell
    fn cut_cells(&mut self, cells: &PointSet);

    fn clear(&mut self);
}

/// Spawns entities into generated rooms
pub trait Spawner {
    fn spawn(&mut self, rooms: &[Rect]);

    fn clear(&mut self);
}

/// Painter that ignores every call
impl Painter for () {
    fn paint_walls(&mut self) {}
    fn paint_rooms(&mut self, _rooms: &[Rect]) {}
    fn paint_corridors(&mut self, _corridors: &PointSet) {}
    fn paint_forest(&mut self, _forest: &PointSet) {}
    fn paint_decorations(&mut self, _decorations: &PointSet, _context: &PointSet) {}
    fn cut_rooms(&mut self, _rooms: &[Rect]) {}
    fn cut_cells(&mut self, _cells: &PointSet) {}
    fn clear(&mut self) {}
}

/// Spawner that ignores every call
impl Spawner for () {
    fn spawn(&mut self, _rooms: &[Rect]) {}
    fn clear(&mut self) {}
}

//! Layered tile map painter
//!
//! Every cell carries a set of layers. Walls are laid over the whole map
//! first and later cut away under rooms and corridors; the visible tile is
//! the highest-precedence layer present.

use bitflags::bitflags;
use strum::{Display, EnumIter};

use crate::geometry::{GridPoint, PointSet, Rect};

use super::Painter;

bitflags! {
    /// Layers painted onto a cell
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct CellLayers: u8 {
        const WALL = 0x01;
        const LAWN = 0x02;
        const PATH = 0x04;
        const TREE = 0x08;
        const FLOWER = 0x10;
        const PEBBLE = 0x20;
    }
}

/// Visible tile kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Tile {
    Void,
    Wall,
    Lawn,
    Path,
    Tree,
    Flower,
    Pebble,
}

impl Tile {
    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Void => ' ',
            Tile::Wall => '#',
            Tile::Lawn => '.',
            Tile::Path => ':',
            Tile::Tree => 'T',
            Tile::Flower => '*',
            Tile::Pebble => ',',
        }
    }

    /// Visible tile for a layer set
    pub fn from_layers(layers: CellLayers) -> Self {
        if layers.contains(CellLayers::TREE) {
            Tile::Tree
        } else if layers.contains(CellLayers::WALL) {
            Tile::Wall
        } else if layers.contains(CellLayers::PEBBLE) {
            Tile::Pebble
        } else if layers.contains(CellLayers::FLOWER) {
            Tile::Flower
        } else if layers.contains(CellLayers::PATH) {
            Tile::Path
        } else if layers.contains(CellLayers::LAWN) {
            Tile::Lawn
        } else {
            Tile::Void
        }
    }
}

/// Square grid of layered cells
#[derive(Debug, Clone)]
pub struct TileMap {
    size: usize,
    /// Indexed `[x][y]`
    cells: Vec<Vec<CellLayers>>,
}

impl TileMap {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![CellLayers::empty(); size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, p: GridPoint) -> Option<(usize, usize)> {
        let in_bounds = |v: i32| v >= 0 && (v as usize) < self.size;
        if in_bounds(p.x) && in_bounds(p.y) {
            Some((p.x as usize, p.y as usize))
        } else {
            None
        }
    }

    pub fn layers_at(&self, p: GridPoint) -> Option<CellLayers> {
        self.index(p).map(|(x, y)| self.cells[x][y])
    }

    pub fn tile_at(&self, p: GridPoint) -> Option<Tile> {
        self.layers_at(p).map(Tile::from_layers)
    }

    /// Number of cells showing `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.cells
            .iter()
            .flat_map(|col| col.iter())
            .filter(|layers| Tile::from_layers(**layers) == tile)
            .count()
    }

    /// ASCII picture, one line per row
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for y in 0..self.size {
            for x in 0..self.size {
                out.push(Tile::from_layers(self.cells[x][y]).symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Apply `f` to every in-bounds cell covered by `rect`
    fn for_rect(&mut self, rect: &Rect, f: impl Fn(&mut CellLayers)) {
        let size = self.size as i32;
        let (x0, x1) = (rect.x.max(0), rect.max_x().min(size));
        let (y0, y1) = (rect.y.max(0), rect.max_y().min(size));
        for x in x0..x1 {
            for y in y0..y1 {
                f(&mut self.cells[x as usize][y as usize]);
            }
        }
    }

    /// Apply `f` to every in-bounds point; the rest are ignored
    fn for_points<'a>(
        &mut self,
        points: impl IntoIterator<Item = &'a GridPoint>,
        f: impl Fn(&mut CellLayers),
    ) {
        for p in points {
            if let Some((x, y)) = self.index(*p) {
                f(&mut self.cells[x][y]);
            }
        }
    }
}

impl Painter for TileMap {
    fn paint_walls(&mut self) {
        for col in &mut self.cells {
            for cell in col.iter_mut() {
                cell.insert(CellLayers::WALL);
            }
        }
    }

    fn paint_rooms(&mut self, rooms: &[Rect]) {
        for room in rooms {
            self.for_rect(room, |c| c.insert(CellLayers::LAWN));
        }
    }

    fn paint_corridors(&mut self, corridors: &PointSet) {
        self.for_points(corridors, |c| c.insert(CellLayers::PATH));
    }

    fn paint_forest(&mut self, forest: &PointSet) {
        self.for_points(forest, |c| c.insert(CellLayers::TREE));
    }

    fn paint_decorations(&mut self, decorations: &PointSet, context: &PointSet) {
        let (on_context, elsewhere): (Vec<&GridPoint>, Vec<&GridPoint>) =
            decorations.iter().partition(|p| context.contains(*p));
        self.for_points(on_context, |c| c.insert(CellLayers::PEBBLE));
        self.for_points(elsewhere, |c| c.insert(CellLayers::FLOWER));
    }

    fn cut_rooms(&mut self, rooms: &[Rect]) {
        for room in rooms {
            self.for_rect(room, |c| c.remove(CellLayers::WALL | CellLayers::TREE));
        }
    }

    fn cut_cells(&mut self, cells: &PointSet) {
        self.for_points(cells, |c| c.remove(CellLayers::WALL | CellLayers::TREE));
    }

    fn clear(&mut self) {
        for col in &mut self.cells {
            col.fill(CellLayers::empty());
        }
    }
}

//! Geometry primitives
//!
//! Rectangles live in integer world units; grid points are the unit of
//! corridor, decoration and forest placement.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: origin plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square rectangle anchored at the origin
    pub const fn square(size: i32) -> Self {
        Self::new(0, 0, size, size)
    }

    pub const fn max_x(&self) -> i32 {
        self.x + self.width
    }

    pub const fn max_y(&self) -> i32 {
        self.y + self.height
    }

    /// Real-valued center
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    pub const fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Check if this rectangle fully contains another
    pub const fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.max_x() >= other.max_x()
            && self.max_y() >= other.max_y()
    }

    /// Check if a grid cell lies inside (half-open on the max edges)
    pub const fn contains_point(&self, p: GridPoint) -> bool {
        p.x >= self.x && p.x < self.max_x() && p.y >= self.y && p.y < self.max_y()
    }

    /// Check if the interiors of two rectangles overlap
    ///
    /// Rectangles that only share an edge do not intersect.
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}x{}", self.x, self.y, self.width, self.height)
    }
}

/// A discrete grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Grid cell holding a world position (truncates toward zero)
    pub fn from_world(x: f32, y: f32) -> Self {
        Self::new(x as i32, y as i32)
    }

    /// The four orthogonal neighbours
    pub const fn neighbours(&self) -> [GridPoint; 4] {
        [
            GridPoint::new(self.x + 1, self.y),
            GridPoint::new(self.x - 1, self.y),
            GridPoint::new(self.x, self.y + 1),
            GridPoint::new(self.x, self.y - 1),
        ]
    }
}

/// Deduplicating set of grid cells
///
/// Inserting an existing point is a silent no-op. Iteration is in ascending
/// `(x, y)` order, which the corridor decoration pass relies on for
/// reproducible index sampling.
pub type PointSet = BTreeSet<GridPoint>;

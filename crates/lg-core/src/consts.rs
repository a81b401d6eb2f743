//! Layout constants
//!
//! Defaults match the stock level generator settings.

/// Default extent of the square generation area
pub const DEFAULT_MAP_SIZE: u32 = 100;

/// Default partition depth (2^5 = 32 rooms)
pub const DEFAULT_SPLIT_COUNT: u32 = 5;

/// Default split fraction
pub const DEFAULT_SPLIT_RATIO: f64 = 0.25;

/// Default hard floor on room width and height
pub const DEFAULT_MIN_ROOM_SIZE: u32 = 6;

/// Deepest accepted partition tree
pub const MAX_SPLIT_COUNT: u32 = 16;

/// Largest accepted map side; keeps coordinates exact in `f32` corridor walks
pub const MAX_MAP_SIZE: u32 = 1 << 15;

/// Smallest share of a cell's area that either child of a split keeps
///
/// Split sizes are at least `ceil(size * ratio)`, or `size / 2` rounded down
/// when the ratio leaves no choice, which is never below a third.
pub const MIN_SPLIT_SHARE: f64 = 1.0 / 3.0;

/// Aspect ratio at which the split axis is forced
pub const SPLIT_ASPECT_THRESHOLD: f64 = 1.25;

/// Corridor thickness in cells across the direction of travel
pub const CORRIDOR_WIDTH: i32 = 2;

/// Corridor decoration density: between |C|/MIN and |C|/MAX picks
pub const CORRIDOR_DECORATION_MIN_DIVISOR: usize = 6;
pub const CORRIDOR_DECORATION_MAX_DIVISOR: usize = 5;

/// Forest lattice row spacing
pub const FOREST_ROW_STEP: usize = 4;

/// Forest column step, half-open
pub const FOREST_STEP_MIN: i32 = 2;
pub const FOREST_STEP_MAX: i32 = 6;

/// Forest vertical jitter, half-open
pub const FOREST_JITTER_MIN: i32 = -2;
pub const FOREST_JITTER_MAX: i32 = 2;

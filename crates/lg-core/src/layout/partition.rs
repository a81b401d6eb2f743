//! Binary space partitioning and room reshaping
//!
//! A bounding rectangle is split recursively to a fixed depth. Each leaf
//! cell is then reshaped into a randomized room no smaller than the room
//! floor. Rooms are emitted in recursion order: first child before second.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::config::LayoutParams;
use crate::consts::SPLIT_ASPECT_THRESHOLD;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::Rect;
use crate::rng::LayoutRng;

/// Which way a partition is cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum SplitAxis {
    /// Vertical cut: left/right children, width is divided
    Vertical,
    /// Horizontal cut: top/bottom children, height is divided
    Horizontal,
}

/// A leaf of the partition tree and the room carved from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    /// The partition cell
    pub cell: Rect,
    /// The room reshaped inside the cell
    pub room: Rect,
}

/// Recursive rectangle splitter
#[derive(Debug, Clone)]
pub struct SpacePartitioner {
    /// Map bounds; rooms are never placed outside
    bounds: Rect,
    split_ratio: f64,
    min_room_size: i32,
}

impl SpacePartitioner {
    pub fn new(bounds: Rect, split_ratio: f64, min_room_size: i32) -> Self {
        Self {
            bounds,
            split_ratio,
            min_room_size,
        }
    }

    /// Partitioner over the square map described by `params`
    pub fn from_params(params: &LayoutParams) -> Self {
        Self::new(
            Rect::square(params.map_size as i32),
            params.split_ratio,
            params.min_room_size as i32,
        )
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Split `rect` to `depth` and reshape every leaf into a room
    ///
    /// Returns `2^depth` leaves in generation order.
    pub fn partition(
        &self,
        rect: Rect,
        depth: u32,
        rng: &mut LayoutRng,
    ) -> LayoutResult<Vec<Leaf>> {
        let mut leaves = Vec::with_capacity(1usize << depth.min(16));
        self.partition_into(rect, depth, rng, &mut leaves)?;
        Ok(leaves)
    }

    fn partition_into(
        &self,
        rect: Rect,
        depth: u32,
        rng: &mut LayoutRng,
        leaves: &mut Vec<Leaf>,
    ) -> LayoutResult<()> {
        if depth == 0 {
            let room = self.reshape(rect, rng);
            leaves.push(Leaf { cell: rect, room });
            return Ok(());
        }

        let (first, second, _) = self.split(rect, rng)?;
        self.partition_into(first, depth - 1, rng, leaves)?;
        self.partition_into(second, depth - 1, rng, leaves)
    }

    /// Pick the split axis from the aspect ratio, or by coin flip when near square
    pub fn choose_axis(&self, rect: Rect, rng: &mut LayoutRng) -> SplitAxis {
        let w = rect.width as f64;
        let h = rect.height as f64;
        if w / h >= SPLIT_ASPECT_THRESHOLD {
            SplitAxis::Vertical
        } else if h / w >= SPLIT_ASPECT_THRESHOLD {
            SplitAxis::Horizontal
        } else if rng.coin() {
            SplitAxis::Vertical
        } else {
            SplitAxis::Horizontal
        }
    }

    /// Cut `rect` in two
    ///
    /// The children's sizes along the split axis sum exactly to the parent's;
    /// the other dimension is inherited unchanged.
    pub fn split(
        &self,
        rect: Rect,
        rng: &mut LayoutRng,
    ) -> LayoutResult<(Rect, Rect, SplitAxis)> {
        let axis = self.choose_axis(rect, rng);
        let size = match axis {
            SplitAxis::Vertical => rect.width,
            SplitAxis::Horizontal => rect.height,
        };
        if size < 2 {
            return Err(LayoutError::DegeneratePartition { rect });
        }

        let first_size = self.split_size(size, rng);
        let second_size = size - first_size;
        log::trace!("split {} {} at {}/{}", rect, axis, first_size, second_size);

        Ok(match axis {
            SplitAxis::Vertical => (
                Rect::new(rect.x, rect.y, first_size, rect.height),
                Rect::new(rect.x + first_size, rect.y, second_size, rect.height),
                axis,
            ),
            SplitAxis::Horizontal => (
                Rect::new(rect.x, rect.y, rect.width, first_size),
                Rect::new(rect.x, rect.y + first_size, rect.width, second_size),
                axis,
            ),
        })
    }

    /// First child's size, drawn from `[size*ratio, size*(1-ratio)]`
    fn split_size(&self, size: i32, rng: &mut LayoutRng) -> i32 {
        let lo = (size as f64 * self.split_ratio).ceil() as i32;
        let hi = size - lo;
        if lo < 1 || lo > hi {
            // Too small for the ratio to leave a choice
            return (size / 2).max(1);
        }
        rng.range_i32(lo, hi + 1)
    }

    /// Carve a room out of a leaf cell
    ///
    /// Each dimension is drawn from `[min(w, h) * ratio, dimension]` and
    /// clamped up to the room floor. When the clamp makes the room larger
    /// than its cell, the origin on that axis is anchored at the cell origin
    /// without a draw and pulled back inside the map bounds; such a room may
    /// overlap a sibling cell.
    pub fn reshape(&self, cell: Rect, rng: &mut LayoutRng) -> Rect {
        let min_len = cell.width.min(cell.height);
        let lo = ((min_len as f64 * self.split_ratio).ceil() as i32).max(1);

        let width = rng.range_i32(lo, cell.width + 1).max(self.min_room_size);
        let height = rng.range_i32(lo, cell.height + 1).max(self.min_room_size);

        let x = self.place(cell.x, cell.width, width, self.bounds.x, self.bounds.width, rng);
        let y = self.place(cell.y, cell.height, height, self.bounds.y, self.bounds.height, rng);

        let room = Rect::new(x, y, width, height);
        if !cell.contains(&room) {
            log::debug!("room {} exceeds its partition {} after size floor", room, cell);
        }
        room
    }

    /// Origin on one axis for a span of `len` inside `[start, start + extent)`
    fn place(
        &self,
        start: i32,
        extent: i32,
        len: i32,
        bounds_start: i32,
        bounds_extent: i32,
        rng: &mut LayoutRng,
    ) -> i32 {
        let slack_hi = start + extent - len;
        if slack_hi >= start {
            return rng.range_i32(start, slack_hi + 1);
        }
        let bounds_end = bounds_start + bounds_extent;
        start.min(bounds_end - len).max(bounds_start)
    }
}

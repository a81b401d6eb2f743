//! Layout orchestration
//!
//! `LevelGenerator` owns the layout state and the random generator. A
//! generation pass clears everything, then runs partitioning, corridors,
//! room decorations, corridor decorations and forest in that fixed order.
//! The order is part of the seed contract: changing it changes the output.

use serde::Serialize;

use crate::collab::{Painter, Spawner};
use crate::config::LayoutParams;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::{PointSet, Rect};
use crate::rng::LayoutRng;

use super::corridor::connect_rooms;
use super::decoration::{decorate_corridors, decorate_rooms};
use super::forest::scatter_forest;
use super::partition::SpacePartitioner;

/// The finished sets of one generation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Layout {
    rooms: Vec<Rect>,
    partitions: Vec<Rect>,
    corridors: PointSet,
    decorations: PointSet,
    forest: PointSet,
}

impl Layout {
    /// Rooms in generation order
    pub fn rooms(&self) -> &[Rect] {
        &self.rooms
    }

    /// Partition cells, parallel to `rooms`
    pub fn partitions(&self) -> &[Rect] {
        &self.partitions
    }

    pub fn corridors(&self) -> &PointSet {
        &self.corridors
    }

    pub fn decorations(&self) -> &PointSet {
        &self.decorations
    }

    pub fn forest(&self) -> &PointSet {
        &self.forest
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
            && self.partitions.is_empty()
            && self.corridors.is_empty()
            && self.decorations.is_empty()
            && self.forest.is_empty()
    }

    fn clear(&mut self) {
        self.rooms.clear();
        self.partitions.clear();
        self.corridors.clear();
        self.decorations.clear();
        self.forest.clear();
    }
}

/// Drives the layout components and owns their output
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    params: LayoutParams,
    rng: LayoutRng,
    layout: Layout,
}

impl LevelGenerator {
    /// Create a generator; the parameters are validated here
    pub fn new(params: LayoutParams) -> LayoutResult<Self> {
        params.validate()?;
        let rng = match params.seed {
            Some(seed) => LayoutRng::new(seed),
            None => LayoutRng::from_entropy(),
        };
        Ok(Self {
            params,
            rng,
            layout: Layout::default(),
        })
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Seed of the generator's RNG
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Restart the random stream from `seed`
    pub fn reseed(&mut self, seed: u64) {
        self.rng = LayoutRng::new(seed);
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn rooms(&self) -> &[Rect] {
        self.layout.rooms()
    }

    pub fn corridors(&self) -> &PointSet {
        self.layout.corridors()
    }

    pub fn decorations(&self) -> &PointSet {
        self.layout.decorations()
    }

    pub fn forest(&self) -> &PointSet {
        self.layout.forest()
    }

    /// Clear and rebuild the whole layout
    ///
    /// On error the layout is left empty, never half-built.
    pub fn generate(&mut self) -> LayoutResult<&Layout> {
        self.clear();
        self.layout = build_layout(&self.params, &mut self.rng)?;
        log::info!(
            "generated layout: seed {} rooms {} corridors {} decorations {} forest {}",
            self.rng.seed(),
            self.layout.rooms.len(),
            self.layout.corridors.len(),
            self.layout.decorations.len(),
            self.layout.forest.len()
        );
        Ok(&self.layout)
    }

    /// Regenerate, then hand the finished sets to the collaborators
    pub fn generate_into<P, S>(&mut self, painter: &mut P, spawner: &mut S) -> LayoutResult<()>
    where
        P: Painter + ?Sized,
        S: Spawner + ?Sized,
    {
        self.clear_with(painter, spawner);
        self.generate()?;

        let layout = &self.layout;
        spawner.spawn(&layout.rooms);

        painter.paint_walls();
        painter.paint_rooms(&layout.rooms);
        painter.paint_corridors(&layout.corridors);
        painter.paint_forest(&layout.forest);

        painter.cut_rooms(&layout.rooms);
        painter.cut_cells(&layout.corridors);

        painter.paint_decorations(&layout.decorations, &layout.corridors);
        Ok(())
    }

    /// Empty the room list and every point set
    pub fn clear(&mut self) {
        self.layout.clear();
    }

    /// Clear the layout and the collaborators' derived state
    pub fn clear_with<P, S>(&mut self, painter: &mut P, spawner: &mut S)
    where
        P: Painter + ?Sized,
        S: Spawner + ?Sized,
    {
        spawner.clear();
        self.clear();
        painter.clear();
    }

    /// Center of a uniformly chosen room
    pub fn select_start_point(&mut self) -> LayoutResult<(f32, f32)> {
        self.rng
            .choose(&self.layout.rooms)
            .map(Rect::center)
            .ok_or(LayoutError::NoRooms)
    }
}

/// Run every pass in draw order into a fresh layout
fn build_layout(params: &LayoutParams, rng: &mut LayoutRng) -> LayoutResult<Layout> {
    let partitioner = SpacePartitioner::from_params(params);
    let leaves = partitioner.partition(partitioner.bounds(), params.split_count, rng)?;

    let mut layout = Layout {
        rooms: leaves.iter().map(|leaf| leaf.room).collect(),
        partitions: leaves.iter().map(|leaf| leaf.cell).collect(),
        ..Layout::default()
    };

    layout.corridors = connect_rooms(&layout.rooms);

    let from_rooms = decorate_rooms(&layout.rooms, rng, &mut layout.decorations);
    let from_corridors = decorate_corridors(&layout.corridors, rng, &mut layout.decorations);
    log::debug!(
        "decorations drawn: {} from rooms, {} from corridors, {} distinct",
        from_rooms,
        from_corridors,
        layout.decorations.len()
    );

    layout.forest = scatter_forest(params.map_size, rng);
    Ok(layout)
}

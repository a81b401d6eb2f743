//! lg-core: Seeded level layout generation
//!
//! Splits a square map into a binary tree of partitions, carves a room in
//! every leaf, joins consecutive rooms with two-cell-wide elbow corridors,
//! and scatters decorations and a forest lattice. The whole layout is a pure
//! function of a seed and a parameter set.
//!
//! Painting and entity spawning are collaborators behind the `Painter` and
//! `Spawner` traits; reference implementations live in [`collab`].
//!
//! ```
//! use lg_core::{LayoutParams, LevelGenerator};
//!
//! let params = LayoutParams { seed: Some(7), ..Default::default() };
//! let mut generator = LevelGenerator::new(params).unwrap();
//! let layout = generator.generate().unwrap();
//! assert_eq!(layout.rooms().len(), 32);
//! ```

pub mod collab;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;

mod consts;
mod rng;

pub use config::LayoutParams;
pub use consts::*;
pub use error::{LayoutError, LayoutResult};
pub use geometry::{GridPoint, PointSet, Rect};
pub use layout::{Layout, LevelGenerator};
pub use rng::LayoutRng;

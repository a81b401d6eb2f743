//! Layout system
//!
//! Contains space partitioning, corridor carving, decoration and forest
//! sampling, and the generator that drives them.

mod corridor;
mod decoration;
mod forest;
mod generator;
mod partition;

pub use corridor::{connect_rooms, dig_elbow};
pub use decoration::{decorate_corridors, decorate_rooms};
pub use forest::scatter_forest;
pub use generator::{Layout, LevelGenerator};
pub use partition::{Leaf, SpacePartitioner, SplitAxis};

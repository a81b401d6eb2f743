//! Room spawner
//!
//! Places one entity at the center of every room and remembers it until
//! cleared. Ids keep increasing across clears so stale handles never alias.

use serde::Serialize;

use crate::geometry::Rect;

use super::Spawner;

/// One spawned entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spawn {
    pub id: u32,
    /// Index of the room in generation order
    pub room: usize,
    pub position: (f32, f32),
}

/// Spawner that records one spawn per room
#[derive(Debug, Clone, Default)]
pub struct SpawnRegistry {
    spawns: Vec<Spawn>,
    next_id: u32,
}

impl SpawnRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawns(&self) -> &[Spawn] {
        &self.spawns
    }

    pub fn len(&self) -> usize {
        self.spawns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spawns.is_empty()
    }
}

impl Spawner for SpawnRegistry {
    fn spawn(&mut self, rooms: &[Rect]) {
        for (room, rect) in rooms.iter().enumerate() {
            self.spawns.push(Spawn {
                id: self.next_id,
                room,
                position: rect.center(),
            });
            self.next_id += 1;
        }
        log::debug!("spawned {} entities", rooms.len());
    }

    fn clear(&mut self) {
        self.spawns.clear();
    }
}

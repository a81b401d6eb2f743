//! Painter and spawner hand-off

use lg_core::collab::{Painter, SpawnRegistry, Spawner, Tile, TileMap};
use lg_core::{GridPoint, LayoutParams, LevelGenerator, PointSet, Rect};

/// Records every collaborator call by name
#[derive(Default)]
struct Recorder {
    calls: Vec<&'static str>,
}

impl Painter for Recorder {
    fn paint_walls(&mut self) {
        self.calls.push("paint_walls");
    }
    fn paint_rooms(&mut self, _rooms: &[Rect]) {
        self.calls.push("paint_rooms");
    }
    fn paint_corridors(&mut self, _corridors: &PointSet) {
        self.calls.push("paint_corridors");
    }
    fn paint_forest(&mut self, _forest: &PointSet) {
        self.calls.push("paint_forest");
    }
    fn paint_decorations(&mut self, _decorations: &PointSet, _context: &PointSet) {
        self.calls.push("paint_decorations");
    }
    fn cut_rooms(&mut self, _rooms: &[Rect]) {
        self.calls.push("cut_rooms");
    }
    fn cut_cells(&mut self, _cells: &PointSet) {
        self.calls.push("cut_cells");
    }
    fn clear(&mut self) {
        self.calls.push("painter.clear");
    }
}

impl Spawner for Recorder {
    fn spawn(&mut self, _rooms: &[Rect]) {
        self.calls.push("spawn");
    }
    fn clear(&mut self) {
        self.calls.push("spawner.clear");
    }
}

fn generator(seed: u64) -> LevelGenerator {
    LevelGenerator::new(LayoutParams {
        seed: Some(seed),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_call_order() {
    let mut painter = Recorder::default();
    let mut spawner = Recorder::default();
    generator(1).generate_into(&mut painter, &mut spawner).unwrap();

    assert_eq!(spawner.calls, ["spawner.clear", "spawn"]);
    assert_eq!(
        painter.calls,
        [
            "painter.clear",
            "paint_walls",
            "paint_rooms",
            "paint_corridors",
            "paint_forest",
            "cut_rooms",
            "cut_cells",
            "paint_decorations",
        ]
    );
}

#[test]
fn test_unit_collaborators() {
    let mut generator = generator(2);
    generator.generate_into(&mut (), &mut ()).unwrap();
    assert_eq!(generator.rooms().len(), 32);
}

#[test]
fn test_tilemap_shows_layout() {
    let mut generator = generator(3);
    let mut map = TileMap::new(100);
    let mut spawns = SpawnRegistry::new();
    generator.generate_into(&mut map, &mut spawns).unwrap();

    assert_eq!(spawns.len(), 32);
    for (spawn, room) in spawns.spawns().iter().zip(generator.rooms()) {
        assert_eq!(spawn.position, room.center());
    }

    for p in generator.corridors() {
        if let Some(tile) = map.tile_at(*p) {
            assert!(matches!(tile, Tile::Path | Tile::Pebble), "{p:?} shows {tile}");
        }
    }
    for room in generator.rooms() {
        for x in room.x..room.max_x() {
            for y in room.y..room.max_y() {
                let tile = map.tile_at(GridPoint::new(x, y)).unwrap();
                assert_ne!(tile, Tile::Wall, "wall left inside {room}");
                assert_ne!(tile, Tile::Tree, "tree left inside {room}");
            }
        }
    }
    assert!(map.count(Tile::Wall) > 0);
}

#[test]
fn test_regeneration_resets_collaborators() {
    let mut generator = generator(4);
    let mut map = TileMap::new(100);
    let mut spawns = SpawnRegistry::new();

    generator.generate_into(&mut map, &mut spawns).unwrap();
    generator.generate_into(&mut map, &mut spawns).unwrap();
    assert_eq!(spawns.len(), 32);

    generator.clear_with(&mut map, &mut spawns);
    assert!(spawns.is_empty());
    assert!(generator.layout().is_empty());
    assert_eq!(map.count(Tile::Void), 100 * 100);
}

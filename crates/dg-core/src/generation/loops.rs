//! Loop edges between touching rooms
//!
//! The tree from graph building has exactly one path between any two rooms.
//! This pass adds extra doors between rooms whose footprints touch, which
//! turns some dead ends into cycles. It never removes an edge.

use crate::graph::{DungeonGraph, RoomType};
use crate::layout::{Cardinal, TileMap};
use crate::rng::DungeonRng;

/// Add loop connections between adjacent, unconnected rooms
///
/// Returns the number of edges added.
pub fn add_loops(graph: &mut DungeonGraph, tiles: &TileMap, loop_chance: f64, rng: &mut DungeonRng) -> usize {
    let mut added = 0;

    for id in graph.ids() {
        // Tiles are copied out since connecting mutates the room
        let occupied = graph.room(id).occupied_tiles.clone();

        for tile in occupied {
            for dir in Cardinal::ALL {
                let Some(other) = tiles.get(tile.step(dir)) else {
                    continue;
                };
                if other == id || graph.are_connected(id, other) {
                    continue;
                }

                let roll = rng.value();
                let boss = graph.room(id).room_type == RoomType::Boss
                    || graph.room(other).room_type == RoomType::Boss;

                if roll < loop_chance && !boss {
                    graph.connect(id, other);
                    added += 1;
                }
            }
        }
    }

    log::debug!("added {added} loop edge(s)");
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RoomId;
    use crate::layout::{Footprint, GridPos};

    /// 2x2 block of rooms with tree edges 0-1, 0-2, 1-3 and a boss at 3
    fn block() -> (DungeonGraph, TileMap) {
        let mut graph = DungeonGraph::new();
        let a = graph.add_room(RoomType::Start, 0);
        let b = graph.add_room(RoomType::Combat, 1);
        let c = graph.add_room(RoomType::Combat, 1);
        let d = graph.add_room(RoomType::Boss, 2);
        graph.connect(a, b);
        graph.connect(a, c);
        graph.connect(b, d);

        let mut tiles = TileMap::new();
        for (id, x, y) in [(a, 0, 0), (b, 1, 0), (c, 0, 1), (d, 1, 1)] {
            tiles.reserve(graph.room_mut(id), Footprint::UNIT.at(GridPos::new(x, y)));
        }
        (graph, tiles)
    }

    #[test]
    fn test_zero_chance_adds_nothing() {
        let (mut graph, tiles) = block();
        let mut rng = DungeonRng::new(1);
        assert_eq!(add_loops(&mut graph, &tiles, 0.0, &mut rng), 0);
        assert_eq!(graph.edge_count(), graph.len() - 1);
    }

    #[test]
    fn test_full_chance_skips_boss() {
        let (mut graph, tiles) = block();
        let mut rng = DungeonRng::new(1);
        assert_eq!(add_loops(&mut graph, &tiles, 1.0, &mut rng), 0);

        // c touches d (the boss) but must stay unconnected
        assert!(!graph.are_connected(RoomId(2), RoomId(3)));
    }

    #[test]
    fn test_full_chance_connects_touching_rooms() {
        let (mut graph, tiles) = block();
        graph.room_mut(RoomId(3)).room_type = RoomType::Treasure;

        let mut rng = DungeonRng::new(1);
        assert_eq!(add_loops(&mut graph, &tiles, 1.0, &mut rng), 1);
        assert!(graph.are_connected(RoomId(2), RoomId(3)));
        assert!(graph.connections_are_symmetric());
        // Diagonal rooms never touch
        assert!(!graph.are_connected(RoomId(0), RoomId(3)));
    }

    #[test]
    fn test_existing_edges_not_duplicated() {
        let (mut graph, tiles) = block();
        graph.room_mut(RoomId(3)).room_type = RoomType::Combat;
        let mut rng = DungeonRng::new(4);
        add_loops(&mut graph, &tiles, 1.0, &mut rng);

        for room in graph.rooms() {
            let mut targets: Vec<_> = room.connections.iter().map(|c| c.target).collect();
            let before = targets.len();
            targets.sort();
            targets.dedup();
            assert_eq!(targets.len(), before, "duplicate edge on {}", room.id);
        }
    }

    #[test]
    fn test_unplaced_rooms_ignored() {
        let (mut graph, tiles) = block();
        let loose = graph.add_room(RoomType::Combat, 3);
        graph.connect(RoomId(1), loose);
        let edges = graph.edge_count();

        let mut rng = DungeonRng::new(2);
        add_loops(&mut graph, &tiles, 1.0, &mut rng);
        assert_eq!(graph.room(loose).connections.len(), 1);
        assert!(graph.edge_count() >= edges);
    }
}

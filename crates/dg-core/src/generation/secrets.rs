//! Secret room attachment
//!
//! Hangs hidden rooms off randomly chosen combat rooms. Each slot samples a
//! single host and gives up on that slot if the host has no free side.

use crate::config::GenerationConfig;
use crate::graph::{DungeonGraph, RoomId, RoomType};
use crate::layout::{Cardinal, TileMap};
use crate::rng::DungeonRng;

/// Attach up to `config.secret_room_count` secret rooms
///
/// Returns the number of rooms attached.
pub fn attach_secret_rooms(
    graph: &mut DungeonGraph,
    tiles: &mut TileMap,
    config: &GenerationConfig,
    rng: &mut DungeonRng,
) -> usize {
    let size = config.footprints.get(RoomType::Secret);
    let mut attached = 0;

    for slot in 0..config.secret_room_count {
        let hosts: Vec<RoomId> = graph
            .rooms_of_type(RoomType::Combat)
            .filter(|r| r.is_placed())
            .map(|r| r.id)
            .collect();

        let Some(&host) = rng.choose(&hosts) else {
            log::debug!("secret slot {slot}: no combat room to host it");
            continue;
        };

        let host_node = graph.room(host);
        let (Some(origin), depth) = (host_node.position, host_node.depth) else {
            continue;
        };

        for dir in Cardinal::PROBE_ORDER {
            let candidate = origin.step(dir);
            if tiles.is_reserved(candidate) {
                continue;
            }

            let rect = size.at(candidate);
            if !tiles.can_place(&rect) {
                continue;
            }

            let secret = graph.add_room(RoomType::Secret, depth);
            graph.connect(host, secret);
            tiles.reserve(graph.room_mut(secret), rect);
            attached += 1;

            log::debug!("secret room {secret} attached {dir} of {host}");
            break;
        }
    }

    attached
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FootprintTable;
    use crate::layout::{Footprint, GridPos};

    fn reserve(graph: &mut DungeonGraph, tiles: &mut TileMap, id: RoomId, x: i32, y: i32) {
        tiles.reserve(graph.room_mut(id), Footprint::UNIT.at(GridPos::new(x, y)));
    }

    fn config(count: usize) -> GenerationConfig {
        GenerationConfig {
            secret_room_count: count,
            footprints: FootprintTable::uniform(Footprint::UNIT),
            ..Default::default()
        }
    }

    #[test]
    fn test_attaches_next_to_host() {
        let mut graph = DungeonGraph::new();
        let start = graph.add_room(RoomType::Start, 0);
        let host = graph.add_room(RoomType::Combat, 1);
        graph.connect(start, host);
        let mut tiles = TileMap::new();
        reserve(&mut graph, &mut tiles, start, 0, 0);
        reserve(&mut graph, &mut tiles, host, 1, 0);

        let mut rng = DungeonRng::new(3);
        assert_eq!(attach_secret_rooms(&mut graph, &mut tiles, &config(1), &mut rng), 1);

        let secret = graph.room(RoomId(2));
        assert_eq!(secret.room_type, RoomType::Secret);
        assert_eq!(secret.depth, 1);
        // East is the first probe and it is free
        assert_eq!(secret.position, Some(GridPos::new(2, 0)));
        assert!(graph.are_connected(host, secret.id));
        assert_eq!(tiles.get(GridPos::new(2, 0)), Some(secret.id));
    }

    #[test]
    fn test_probe_order_skips_reserved() {
        let mut graph = DungeonGraph::new();
        let host = graph.add_room(RoomType::Combat, 1);
        let east = graph.add_room(RoomType::Start, 0);
        graph.connect(host, east);
        let mut tiles = TileMap::new();
        reserve(&mut graph, &mut tiles, host, 0, 0);
        reserve(&mut graph, &mut tiles, east, 1, 0);

        let mut rng = DungeonRng::new(3);
        attach_secret_rooms(&mut graph, &mut tiles, &config(1), &mut rng);
        assert_eq!(graph.room(RoomId(2)).position, Some(GridPos::new(-1, 0)));
    }

    #[test]
    fn test_surrounded_host_gets_nothing() {
        let mut graph = DungeonGraph::new();
        let host = graph.add_room(RoomType::Combat, 1);
        let mut tiles = TileMap::new();
        reserve(&mut graph, &mut tiles, host, 0, 0);
        for (x, y) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let wall = graph.add_room(RoomType::Start, 0);
            graph.connect(host, wall);
            reserve(&mut graph, &mut tiles, wall, x, y);
        }

        let rooms = graph.len();
        let edges = graph.edge_count();
        let mut rng = DungeonRng::new(3);
        assert_eq!(attach_secret_rooms(&mut graph, &mut tiles, &config(3), &mut rng), 0);
        assert_eq!(graph.len(), rooms);
        assert_eq!(graph.edge_count(), edges);
        assert_eq!(tiles.len(), 5);
    }

    #[test]
    fn test_no_host_skips_slot() {
        let mut graph = DungeonGraph::new();
        let start = graph.add_room(RoomType::Start, 0);
        let mut tiles = TileMap::new();
        reserve(&mut graph, &mut tiles, start, 0, 0);
        // Unplaced combat rooms cannot host
        graph.add_room(RoomType::Combat, 1);

        let mut rng = DungeonRng::new(3);
        assert_eq!(attach_secret_rooms(&mut graph, &mut tiles, &config(2), &mut rng), 0);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_oversized_secret_tries_next_side() {
        let mut graph = DungeonGraph::new();
        let host = graph.add_room(RoomType::Combat, 1);
        let blocker = graph.add_room(RoomType::Start, 0);
        let mut tiles = TileMap::new();
        reserve(&mut graph, &mut tiles, host, 0, 0);
        reserve(&mut graph, &mut tiles, blocker, 1, 1);

        let config = GenerationConfig {
            secret_room_count: 1,
            footprints: FootprintTable::uniform(Footprint::UNIT)
                .with(RoomType::Secret, Footprint::new(1, 2)),
            ..Default::default()
        };
        let mut rng = DungeonRng::new(3);
        assert_eq!(attach_secret_rooms(&mut graph, &mut tiles, &config, &mut rng), 1);
        // East tile (1, 0) is free but a 1x2 room there would hit (1, 1)
        assert_eq!(graph.room(RoomId(2)).position, Some(GridPos::new(-1, 0)));
        assert_eq!(graph.room(RoomId(2)).occupied_tiles.len(), 2);
    }
}

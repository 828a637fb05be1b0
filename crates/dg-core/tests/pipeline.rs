//! End-to-end generation tests
//!
//! Runs the full pipeline through the public API and checks the structural
//! guarantees of accepted dungeons.

use dg_core::boundary::{build_boundaries, resolve_doors};
use dg_core::generation::{MAX_PLACEMENT_ATTEMPTS, build_attempt};
use dg_core::{
    Cardinal, EdgeKind, Footprint, FootprintTable, GeneratedDungeon, GenerationConfig,
    GenerationError, Rejection, RoomType, SeedMode, TileMap, generate,
};

// ============================================================================
// Helpers
// ============================================================================

fn config(seed: u64) -> GenerationConfig {
    GenerationConfig {
        max_generation_attempts: 100,
        ..GenerationConfig::default().with_seed(seed)
    }
}

fn assert_well_formed(dungeon: &GeneratedDungeon, minimum_boss_depth: u32) {
    let graph = &dungeon.layout.graph;

    let starts: Vec<_> = graph.rooms_of_type(RoomType::Start).collect();
    assert_eq!(starts.len(), 1, "exactly one start room");
    assert_eq!(starts[0].depth, 0);

    let bosses: Vec<_> = graph.rooms_of_type(RoomType::Boss).collect();
    assert_eq!(bosses.len(), 1, "exactly one boss room");
    assert_eq!(bosses[0].depth, graph.max_depth());
    assert!(bosses[0].depth >= minimum_boss_depth);
    assert!(graph.is_reachable(starts[0].id, bosses[0].id));

    assert!(graph.connections_are_symmetric());

    let claimed: usize = graph.rooms().iter().map(|r| r.occupied_tiles.len()).sum();
    assert_eq!(claimed, dungeon.layout.tiles.len(), "footprints overlap");
    for room in graph.rooms() {
        assert_eq!(room.is_placed(), !room.occupied_tiles.is_empty());
        for &tile in &room.occupied_tiles {
            assert_eq!(dungeon.layout.tiles.get(tile), Some(room.id));
        }
    }
}

// ============================================================================
// Accepted dungeons
// ============================================================================

#[test]
fn test_default_config_dungeons_are_well_formed() {
    for seed in 0..20 {
        let dungeon = generate(&config(seed)).unwrap();
        assert_well_formed(&dungeon, 4);
    }
}

#[test]
fn test_same_seed_same_dungeon() {
    let a = generate(&config(2024)).unwrap();
    let b = generate(&config(2024)).unwrap();
    assert_eq!(a, b);

    let ids: Vec<_> = a.layout.graph.rooms().iter().map(|r| (r.id, r.room_type, r.position)).collect();
    let ids_b: Vec<_> = b.layout.graph.rooms().iter().map(|r| (r.id, r.room_type, r.position)).collect();
    assert_eq!(ids, ids_b);
}

#[test]
fn test_different_seeds_differ() {
    let a = generate(&config(1)).unwrap();
    let b = generate(&config(2)).unwrap();
    assert_ne!(a.layout.graph, b.layout.graph);
}

#[test]
fn test_tile_map_rebuilds_from_graph() {
    let dungeon = generate(&config(11)).unwrap();
    assert_eq!(TileMap::from_graph(&dungeon.layout.graph), dungeon.layout.tiles);
}

// ============================================================================
// Stage knobs
// ============================================================================

#[test]
fn test_no_loops_keeps_tree() {
    for seed in 0..10 {
        let config = GenerationConfig {
            loop_chance: 0.0,
            ..config(seed)
        };
        let dungeon = generate(&config).unwrap();
        let graph = &dungeon.layout.graph;
        assert_eq!(graph.edge_count(), graph.len() - 1, "seed {seed}");
    }
}

#[test]
fn test_certain_locks_cover_every_dead_end() {
    for seed in 0..10 {
        let config = GenerationConfig {
            lock_chance: 1.0,
            ..config(seed)
        };
        let dungeon = generate(&config).unwrap();
        for room in dungeon.layout.graph.rooms() {
            if room.is_dead_end() && !room.room_type.is_anchor() {
                assert_eq!(room.room_type, RoomType::Treasure);
                assert!(room.connections[0].is_locked);
            }
        }
    }
}

#[test]
fn test_locked_doors_follow_locked_edges() {
    let config = GenerationConfig {
        lock_chance: 1.0,
        ..config(5)
    };
    let dungeon = generate(&config).unwrap();
    for door in &dungeon.doors {
        let (a, b) = door.rooms;
        let conn = dungeon.layout.graph.room(a).connection_to(b).unwrap();
        assert_eq!(door.locked, conn.is_locked);
    }
}

#[test]
fn test_crowded_placement_does_not_fail_generation() {
    // A wide star: the start room only has four free sides
    let config = GenerationConfig {
        max_rooms: 7,
        min_branches: 6,
        max_branches: 6,
        minimum_boss_depth: 1,
        secret_room_count: 0,
        footprints: FootprintTable::uniform(Footprint::UNIT),
        ..config(3)
    };
    let dungeon = generate(&config).unwrap();
    let graph = &dungeon.layout.graph;

    let unplaced: Vec<_> = graph.rooms().iter().filter(|r| !r.is_placed()).collect();
    assert_eq!(unplaced.len(), 2);
    assert_eq!(dungeon.layout.counts.unplaced_rooms, 2);
    for room in unplaced {
        assert_eq!(room.placement_attempts, MAX_PLACEMENT_ATTEMPTS);
        assert!(dungeon.boundaries.iter().all(|b| b.room != room.id));
        assert!(dungeon.doors.iter().all(|d| d.rooms.0 != room.id && d.rooms.1 != room.id));
    }
}

#[test]
fn test_secret_rooms_hang_off_combat_rooms() {
    let config = GenerationConfig {
        secret_room_count: 3,
        lock_chance: 0.0,
        loop_chance: 0.0,
        ..config(17)
    };
    let layout = build_attempt(&config, 17);
    let graph = &layout.graph;

    let secrets: Vec<_> = graph.rooms_of_type(RoomType::Secret).collect();
    assert_eq!(secrets.len(), layout.counts.secret_rooms);
    for secret in secrets {
        assert!(secret.is_placed());
        assert_eq!(secret.connections.len(), 1);
        let host = graph.room(secret.connections[0].target);
        assert_eq!(host.room_type, RoomType::Combat);
        assert_eq!(secret.depth, host.depth);
    }
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn test_single_room_exhausts_attempts() {
    let config = GenerationConfig {
        max_rooms: 1,
        minimum_boss_depth: 1,
        max_generation_attempts: 5,
        seed: SeedMode::Fixed(9),
        ..Default::default()
    };
    match generate(&config) {
        Err(GenerationError::ExhaustedAttempts { attempts, last }) => {
            assert_eq!(attempts, 5);
            assert_eq!(
                last,
                Rejection::BossTooShallow {
                    depth: 0,
                    minimum: 1
                }
            );
        }
        other => panic!("expected exhaustion, got {other:?}"),
    }
}

#[test]
fn test_config_error_before_any_attempt() {
    let config = GenerationConfig {
        min_branches: 3,
        max_branches: 1,
        ..Default::default()
    };
    assert!(matches!(generate(&config), Err(GenerationError::Config(_))));
}

// ============================================================================
// Boundaries and doors
// ============================================================================

#[test]
fn test_boundaries_cover_every_tile() {
    let dungeon = generate(&config(8)).unwrap();
    assert_eq!(dungeon.boundaries.len(), dungeon.layout.tiles.len());

    for boundary in dungeon.boundaries.iter() {
        for dir in Cardinal::ALL {
            let neighbor = dungeon.layout.tiles.get(boundary.tile.step(dir));
            match boundary.edge(dir) {
                None => assert_eq!(neighbor, Some(boundary.room)),
                Some(EdgeKind::DoorWall) => {
                    let other = neighbor.unwrap();
                    assert!(dungeon.layout.graph.are_connected(boundary.room, other));
                }
                Some(EdgeKind::SolidWall) => {
                    if let Some(other) = neighbor {
                        assert_ne!(other, boundary.room);
                        assert!(!dungeon.layout.graph.are_connected(boundary.room, other));
                    }
                }
            }
        }
    }
}

#[test]
fn test_doors_sit_on_door_walls() {
    let dungeon = generate(&config(21)).unwrap();
    for door in &dungeon.doors {
        assert_eq!(dungeon.layout.tiles.get(door.tile), Some(door.rooms.0));
        assert_eq!(dungeon.layout.tiles.get(door.neighbor()), Some(door.rooms.1));
        assert_eq!(
            dungeon.boundaries.edge(door.tile, door.side),
            Some(EdgeKind::DoorWall)
        );
    }
}

#[test]
fn test_boundary_building_is_idempotent() {
    let dungeon = generate(&config(33)).unwrap();
    let graph = &dungeon.layout.graph;
    let tiles = &dungeon.layout.tiles;
    assert_eq!(build_boundaries(graph, tiles), dungeon.boundaries);
    assert_eq!(resolve_doors(graph, tiles), dungeon.doors);
}

#[test]
fn test_json_output() {
    let dungeon = generate(&config(4)).unwrap();
    let json = serde_json::to_value(&dungeon).unwrap();
    assert_eq!(json["seed"], serde_json::json!(dungeon.seed));
    assert!(json["layout"]["graph"]["rooms"].is_array());
    assert!(json["layout"].get("tiles").is_none());
}

//! Abstract room graph construction
//!
//! Grows a tree breadth-first from a single start room. Each dequeued room
//! draws a branch count and spawns that many children one level deeper.

use std::collections::VecDeque;

use crate::config::GenerationConfig;
use crate::graph::{DungeonGraph, RoomId, RoomType};
use crate::rng::DungeonRng;

/// Build the room tree and mark its deepest room as the boss
pub fn build_graph(config: &GenerationConfig, rng: &mut DungeonRng) -> DungeonGraph {
    let mut graph = DungeonGraph::new();
    let start = graph.add_room(RoomType::Start, 0);

    let mut frontier: VecDeque<RoomId> = VecDeque::new();
    frontier.push_back(start);

    while graph.len() < config.max_rooms {
        let Some(current) = frontier.pop_front() else {
            break;
        };

        let branches = rng.range_inclusive(config.min_branches, config.max_branches);
        let depth = graph.room(current).depth + 1;

        for _ in 0..branches {
            if graph.len() >= config.max_rooms {
                break;
            }

            let child = graph.add_room(RoomType::Combat, depth);
            graph.connect(current, child);
            frontier.push_back(child);
        }
    }

    if let Some(deepest) = graph.deepest() {
        graph.room_mut(deepest).room_type = RoomType::Boss;
    }

    log::debug!(
        "graph built: {} rooms, max depth {}",
        graph.len(),
        graph.max_depth()
    );

    graph
}

//! Gate locking
//!
//! A lock always sits on the single connection of a dead-end room, so a locked
//! gate never guards anything but that one room.

use crate::graph::{DungeonGraph, RoomType};
use crate::rng::DungeonRng;

/// Lock dead ends with probability `lock_chance` and retype them Treasure
///
/// Returns the number of rooms locked.
pub fn apply_locks(graph: &mut DungeonGraph, lock_chance: f64, rng: &mut DungeonRng) -> usize {
    let mut locked = 0;

    for id in graph.ids() {
        let room = graph.room(id);
        if !room.is_dead_end() || room.room_type.is_anchor() {
            continue;
        }
        if !rng.chance(lock_chance) {
            continue;
        }

        let target = room.connections[0].target;
        graph.lock_connection(id, target);
        graph.room_mut(id).room_type = RoomType::Treasure;
        locked += 1;
    }

    log::debug!("locked {locked} dead end(s)");
    locked
}

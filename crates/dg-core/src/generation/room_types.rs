//! Room role assignment
//!
//! Relabels every room other than start and boss from its degree and its
//! normalized depth. Both passes run on every room and the depth pass writes
//! last, so it can undo a treasure label given by the degree pass.

use crate::config::GenerationConfig;
use crate::graph::{DungeonGraph, RoomType};
use crate::rng::DungeonRng;

/// Normalized depth above which a dead end becomes treasure
const TREASURE_DEPTH: f64 = 0.3;

/// Normalized depth above which a room may become a shop
const SHOP_DEPTH: f64 = 0.6;

/// Probability that a deep room stays a combat room instead of a shop
const DEEP_COMBAT_CHANCE: f64 = 0.8;

/// Assign Treasure/Shop/Combat roles
pub fn assign_room_types(graph: &mut DungeonGraph, config: &GenerationConfig, rng: &mut DungeonRng) {
    let max_treasure = config.treasure_cap();
    let max_depth = graph.max_depth();
    let mut treasure_count = 0;

    for id in graph.ids() {
        let room = graph.room_mut(id);
        if room.room_type.is_anchor() {
            continue;
        }

        if room.is_dead_end() && treasure_count < max_treasure {
            room.room_type = RoomType::Treasure;
            treasure_count += 1;
        }

        let depth01 = if max_depth == 0 {
            0.0
        } else {
            room.depth as f64 / max_depth as f64
        };

        room.room_type = if room.is_dead_end() && depth01 > TREASURE_DEPTH {
            RoomType::Treasure
        } else if depth01 > SHOP_DEPTH {
            if rng.chance(DEEP_COMBAT_CHANCE) {
                RoomType::Combat
            } else {
                RoomType::Shop
            }
        } else {
            RoomType::Combat
        };
    }
}

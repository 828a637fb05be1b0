//! Dungeon graph
//!
//! Room nodes, typed connections and the arena that owns them.

mod dungeon_graph;
mod room;

pub use dungeon_graph::DungeonGraph;
pub use room::{ConnectionType, RoomConnection, RoomId, RoomNode, RoomType};

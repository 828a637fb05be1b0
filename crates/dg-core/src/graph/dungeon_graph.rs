//! Dungeon graph arena
//!
//! Owns every `RoomNode` of one generation attempt. Connections refer to rooms
//! by `RoomId`, which is the room's index in the arena, so dropping the graph
//! drops the whole attempt.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::room::{RoomConnection, RoomId, RoomNode, RoomType};

/// Room arena for one generation attempt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DungeonGraph {
    rooms: Vec<RoomNode>,
}

impl DungeonGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new unconnected room and return its id
    pub fn add_room(&mut self, room_type: RoomType, depth: u32) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(RoomNode::new(id, room_type, depth));
        id
    }

    /// Number of rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// All rooms in id order
    pub fn rooms(&self) -> &[RoomNode] {
        &self.rooms
    }

    /// All room ids in order
    pub fn ids(&self) -> impl Iterator<Item = RoomId> + use<> {
        (0..self.rooms.len()).map(RoomId)
    }

    pub fn room(&self, id: RoomId) -> &RoomNode {
        &self.rooms[id.index()]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut RoomNode {
        &mut self.rooms[id.index()]
    }

    pub fn get(&self, id: RoomId) -> Option<&RoomNode> {
        self.rooms.get(id.index())
    }

    /// The first room typed `Start`
    pub fn start(&self) -> Option<&RoomNode> {
        self.rooms.iter().find(|r| r.room_type == RoomType::Start)
    }

    /// The first room typed `Boss`
    pub fn boss(&self) -> Option<&RoomNode> {
        self.rooms.iter().find(|r| r.room_type == RoomType::Boss)
    }

    /// Rooms of a given type
    pub fn rooms_of_type(&self, room_type: RoomType) -> impl Iterator<Item = &RoomNode> {
        self.rooms.iter().filter(move |r| r.room_type == room_type)
    }

    /// Maximum depth over all rooms, 0 for an empty graph
    pub fn max_depth(&self) -> u32 {
        self.rooms.iter().map(|r| r.depth).max().unwrap_or(0)
    }

    /// The first room with the maximum depth
    pub fn deepest(&self) -> Option<RoomId> {
        let max = self.max_depth();
        self.rooms.iter().find(|r| r.depth == max).map(|r| r.id)
    }

    /// Check if an edge exists between two rooms
    pub fn are_connected(&self, a: RoomId, b: RoomId) -> bool {
        self.room(a).is_connected_to(b)
    }

    /// Add an unlocked door in both directions
    pub fn connect(&mut self, a: RoomId, b: RoomId) {
        self.room_mut(a).connections.push(RoomConnection::door(b));
        self.room_mut(b).connections.push(RoomConnection::door(a));
    }

    /// Lock the edge between two rooms on both sides
    ///
    /// Returns false if the rooms are not connected.
    pub fn lock_connection(&mut self, a: RoomId, b: RoomId) -> bool {
        let mut found = false;
        for (from, to) in [(a, b), (b, a)] {
            for conn in self.room_mut(from).connections.iter_mut() {
                if conn.target == to {
                    conn.is_locked = true;
                    found = true;
                }
            }
        }
        found
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.rooms.iter().map(|r| r.connections.len()).sum::<usize>() / 2
    }

    /// Undirected edges `(low, high, locked)`, each reported once
    pub fn edges(&self) -> impl Iterator<Item = (RoomId, RoomId, bool)> + '_ {
        self.rooms.iter().flat_map(|room| {
            room.connections
                .iter()
                .filter(move |c| room.id < c.target)
                .map(move |c| (room.id, c.target, c.is_locked))
        })
    }

    /// BFS over connections; `visited[i]` is true for rooms reachable from `from`
    pub fn reachable_from(&self, from: RoomId) -> Vec<bool> {
        let mut visited = vec![false; self.rooms.len()];
        let mut queue = VecDeque::new();

        visited[from.index()] = true;
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            for conn in &self.room(current).connections {
                let next = conn.target.index();
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(conn.target);
                }
            }
        }

        visited
    }

    /// Check if `to` can be reached from `from` over connections
    pub fn is_reachable(&self, from: RoomId, to: RoomId) -> bool {
        self.reachable_from(from)[to.index()]
    }

    /// Check that every connection has a mirror with the same lock flag
    pub fn connections_are_symmetric(&self) -> bool {
        self.rooms.iter().all(|room| {
            room.connections.iter().all(|conn| {
                self.get(conn.target)
                    .and_then(|target| target.connection_to(room.id))
                    .is_some_and(|mirror| mirror.is_locked == conn.is_locked)
            })
        })
    }
}

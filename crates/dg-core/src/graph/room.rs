//! Room types and nodes
//!
//! Defines the room roles a generated dungeon uses and the `RoomNode` stored
//! in the graph arena.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::layout::{Footprint, GridPos};

/// Index of a room in the graph arena
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomId(pub usize);

impl RoomId {
    /// Index into the arena
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Room role
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum RoomType {
    /// Entry room, always depth 0
    Start,
    /// Ordinary fight room
    #[default]
    #[serde(alias = "Normal")]
    Combat,
    /// Deepest room of the graph
    Boss,
    /// Loot room, often behind a locked gate
    Treasure,
    /// Merchant room
    Shop,
    /// Hidden room hanging off a combat room
    Secret,
}

impl RoomType {
    /// All room types for iteration
    pub const ALL: [RoomType; 6] = [
        RoomType::Start,
        RoomType::Combat,
        RoomType::Boss,
        RoomType::Treasure,
        RoomType::Shop,
        RoomType::Secret,
    ];

    /// Map glyph used by text renderers
    pub fn glyph(self) -> char {
        match self {
            RoomType::Start => 'S',
            RoomType::Combat => '.',
            RoomType::Boss => 'B',
            RoomType::Treasure => 'T',
            RoomType::Shop => '$',
            RoomType::Secret => '?',
        }
    }

    /// Check if stages after graph building must leave this room's type alone
    pub fn is_anchor(self) -> bool {
        matches!(self, RoomType::Start | RoomType::Boss)
    }
}

/// Kind of passage a connection represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum ConnectionType {
    #[default]
    Door,
}

/// One directed half of a room-to-room edge
///
/// Every connection has a mirror stored on the target room with the same
/// `is_locked` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConnection {
    /// Target room
    pub target: RoomId,
    /// Passage kind
    pub connection_type: ConnectionType,
    /// Whether the gate needs an external unlock condition
    pub is_locked: bool,
}

impl RoomConnection {
    /// An unlocked door to `target`
    pub fn door(target: RoomId) -> Self {
        Self {
            target,
            connection_type: ConnectionType::Door,
            is_locked: false,
        }
    }
}

/// A node of the dungeon graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomNode {
    /// Stable arena index
    pub id: RoomId,
    /// Room role
    pub room_type: RoomType,
    /// BFS distance from the start room at graph-building time
    pub depth: u32,
    /// Grid origin, `None` while the room is unplaced
    pub position: Option<GridPos>,
    /// Footprint reserved at `position`
    pub size: Footprint,
    /// Tiles reserved by this room
    pub occupied_tiles: Vec<GridPos>,
    /// Ordered outgoing connections
    pub connections: Vec<RoomConnection>,
    /// Failed placement passes
    pub placement_attempts: u32,
}

impl RoomNode {
    /// Create an unplaced, unconnected room
    pub fn new(id: RoomId, room_type: RoomType, depth: u32) -> Self {
        Self {
            id,
            room_type,
            depth,
            position: None,
            size: Footprint::UNIT,
            occupied_tiles: Vec::new(),
            connections: Vec::new(),
            placement_attempts: 0,
        }
    }

    /// Check if the room has a footprint on the grid
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Check if the room has exactly one connection
    pub fn is_dead_end(&self) -> bool {
        self.connections.len() == 1
    }

    /// Check if this room has a connection to `other`
    pub fn is_connected_to(&self, other: RoomId) -> bool {
        self.connections.iter().any(|c| c.target == other)
    }

    /// The connection to `other`, if any
    pub fn connection_to(&self, other: RoomId) -> Option<&RoomConnection> {
        self.connections.iter().find(|c| c.target == other)
    }
}

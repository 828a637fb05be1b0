//! Tile occupancy map
//!
//! Maps every reserved grid tile to the room that owns it. A tile is owned by
//! at most one room, which is what keeps room footprints disjoint.

use hashbrown::HashMap;

use super::{GridPos, TileRect};
use crate::graph::{DungeonGraph, RoomId, RoomNode};

/// Tile → owning room
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileMap {
    tiles: HashMap<GridPos, RoomId>,
}

impl TileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the map from the rooms' recorded tiles
    pub fn from_graph(graph: &DungeonGraph) -> Self {
        let mut map = Self::new();
        for room in graph.rooms() {
            for &tile in &room.occupied_tiles {
                map.tiles.insert(tile, room.id);
            }
        }
        map
    }

    /// Room owning a tile
    pub fn get(&self, pos: GridPos) -> Option<RoomId> {
        self.tiles.get(&pos).copied()
    }

    pub fn is_reserved(&self, pos: GridPos) -> bool {
        self.tiles.contains_key(&pos)
    }

    /// Check that no tile of the rectangle is reserved
    pub fn can_place(&self, rect: &TileRect) -> bool {
        rect.tiles().all(|tile| !self.is_reserved(tile))
    }

    /// Reserve a rectangle for a room and record the placement on the room
    ///
    /// The caller must have checked `can_place`.
    pub fn reserve(&mut self, room: &mut RoomNode, rect: TileRect) {
        room.occupied_tiles.clear();
        room.position = Some(rect.origin);
        room.size = rect.size;

        for tile in rect.tiles() {
            room.occupied_tiles.push(tile);
            self.tiles.insert(tile, room.id);
        }
    }

    /// Number of reserved tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Reserved tiles in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, RoomId)> + '_ {
        self.tiles.iter().map(|(pos, id)| (*pos, *id))
    }

    /// Smallest (min, max) corners enclosing every reserved tile
    pub fn bounds(&self) -> Option<(GridPos, GridPos)> {
        let mut iter = self.tiles.keys();
        let first = *iter.next()?;
        let (mut lo, mut hi) = (first, first);
        for pos in iter {
            lo.x = lo.x.min(pos.x);
            lo.y = lo.y.min(pos.y);
            hi.x = hi.x.max(pos.x);
            hi.y = hi.y.max(pos.y);
        }
        Some((lo, hi))
    }
}

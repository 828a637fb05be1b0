//! Wall and door resolution
//!
//! Turns the finished graph and tile map into per-tile edge information for
//! geometry spawners. Every edge of a reserved tile is either open (same room
//! on both sides), a solid wall, or a wall that may hold a door. Door
//! resolution then picks one concrete doorway per connection.
//!
//! Both passes are pure: running them twice on the same layout gives the same
//! output.

use hashbrown::HashMap;
use serde::Serialize;

use crate::graph::{DungeonGraph, RoomId};
use crate::layout::{Cardinal, GridPos, Sides, TileMap};

/// What sits on a closed tile edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeKind {
    /// Plain wall
    SolidWall,
    /// Wall between connected rooms, may carry a door
    DoorWall,
}

/// Edge information for one reserved tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileBoundary {
    pub tile: GridPos,
    pub room: RoomId,
    /// Edges with a solid wall
    pub solid: Sides,
    /// Edges with a door-capable wall
    pub doorways: Sides,
}

impl TileBoundary {
    /// Edge kind on one side, `None` when the edge is open
    pub fn edge(&self, dir: Cardinal) -> Option<EdgeKind> {
        let side = dir.side();
        if self.solid.contains(side) {
            Some(EdgeKind::SolidWall)
        } else if self.doorways.contains(side) {
            Some(EdgeKind::DoorWall)
        } else {
            None
        }
    }

    /// Edges with no wall at all
    pub fn open(&self) -> Sides {
        Sides::all() - self.solid - self.doorways
    }
}

/// Boundaries of every reserved tile, in room id then tile order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Boundaries {
    tiles: Vec<TileBoundary>,
    #[serde(skip)]
    index: HashMap<GridPos, usize>,
}

impl Boundaries {
    fn push(&mut self, boundary: TileBoundary) {
        self.index.insert(boundary.tile, self.tiles.len());
        self.tiles.push(boundary);
    }

    pub fn get(&self, tile: GridPos) -> Option<&TileBoundary> {
        self.index.get(&tile).map(|&i| &self.tiles[i])
    }

    /// Edge kind between `tile` and its neighbor in `dir`
    ///
    /// `None` when the edge is open or the tile is not reserved.
    pub fn edge(&self, tile: GridPos, dir: Cardinal) -> Option<EdgeKind> {
        self.get(tile).and_then(|b| b.edge(dir))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TileBoundary> {
        self.tiles.iter()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// One resolved doorway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoorPlacement {
    /// Connected rooms, lower id first
    pub rooms: (RoomId, RoomId),
    /// Tile of the lower-id room holding the door
    pub tile: GridPos,
    /// Side of `tile` the door sits on
    pub side: Cardinal,
    pub locked: bool,
}

impl DoorPlacement {
    /// The tile on the other side of the door
    pub fn neighbor(&self) -> GridPos {
        self.tile.step(self.side)
    }
}

/// Classify every edge of every reserved tile
pub fn build_boundaries(graph: &DungeonGraph, tiles: &TileMap) -> Boundaries {
    let mut boundaries = Boundaries::default();

    for room in graph.rooms() {
        for &tile in &room.occupied_tiles {
            let mut solid = Sides::empty();
            let mut doorways = Sides::empty();

            for dir in Cardinal::ALL {
                match tiles.get(tile.step(dir)) {
                    None => solid |= dir.side(),
                    Some(other) if other == room.id => {}
                    Some(other) if room.is_connected_to(other) => doorways |= dir.side(),
                    Some(_) => solid |= dir.side(),
                }
            }

            boundaries.push(TileBoundary {
                tile,
                room: room.id,
                solid,
                doorways,
            });
        }
    }

    boundaries
}

/// Pick one doorway tile and side for every connection
///
/// Connections with an unplaced endpoint are skipped. Placed rooms that do not
/// touch get no door and a warning.
pub fn resolve_doors(graph: &DungeonGraph, tiles: &TileMap) -> Vec<DoorPlacement> {
    let mut doors = Vec::new();

    for (a, b, locked) in graph.edges() {
        if !graph.room(a).is_placed() || !graph.room(b).is_placed() {
            log::debug!("no door for {a} - {b}: endpoint unplaced");
            continue;
        }

        let found = graph.room(a).occupied_tiles.iter().find_map(|&tile| {
            Cardinal::ALL
                .into_iter()
                .find(|&dir| tiles.get(tile.step(dir)) == Some(b))
                .map(|side| (tile, side))
        });

        match found {
            Some((tile, side)) => doors.push(DoorPlacement {
                rooms: (a, b),
                tile,
                side,
                locked,
            }),
            None => log::warn!("rooms {a} and {b} are connected but share no wall"),
        }
    }

    doors
}

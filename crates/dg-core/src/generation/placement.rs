//! Spatial room packing
//!
//! Walks the graph breadth-first from the start room and glues each unplaced
//! neighbor flush against the room that reached it. Candidate sides are tried
//! in a shuffled order; a room that fits nowhere is requeued and retried until
//! it has failed `MAX_PLACEMENT_ATTEMPTS` times, after which it stays in the
//! graph without a footprint.

use std::collections::VecDeque;

use crate::config::FootprintTable;
use crate::graph::{DungeonGraph, RoomId};
use crate::layout::{Cardinal, Footprint, GridPos, TileMap};
use crate::rng::DungeonRng;

/// Failed passes after which a room is left unplaced
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 8;

/// Origin for a room of `size` placed flush against `anchor` on side `dir`
pub fn candidate_origin(anchor: GridPos, anchor_size: Footprint, size: Footprint, dir: Cardinal) -> GridPos {
    match dir {
        Cardinal::East => anchor.offset(anchor_size.dx(), 0),
        Cardinal::West => anchor.offset(-size.dx(), 0),
        Cardinal::North => anchor.offset(0, anchor_size.dy()),
        Cardinal::South => anchor.offset(0, -size.dy()),
    }
}

/// Assign every reachable room a non-overlapping footprint
///
/// Returns the tile map of all reserved tiles. Rooms that could not be placed
/// keep `position == None`.
pub fn place_rooms(graph: &mut DungeonGraph, footprints: &FootprintTable, rng: &mut DungeonRng) -> TileMap {
    let mut tiles = TileMap::new();

    let Some(start) = graph.start().map(|r| r.id) else {
        log::debug!("no start room, skipping placement");
        return tiles;
    };

    let start_size = footprints.get(graph.room(start).room_type);
    tiles.reserve(graph.room_mut(start), start_size.at(GridPos::ORIGIN));

    let mut placer = Placer {
        graph: &mut *graph,
        tiles: &mut tiles,
        footprints,
        rng: &mut *rng,
        directions: Cardinal::PROBE_ORDER,
        queue: VecDeque::from([start]),
    };
    placer.run();

    let mut unplaced = 0;
    for room in graph.rooms().iter().filter(|r| !r.is_placed()) {
        unplaced += 1;
        if room.placement_attempts == 0 {
            log::warn!(
                "room {} left unplaced: no placed neighbor to attach to",
                room.id
            );
        }
    }

    log::debug!(
        "placement done: {} tiles reserved, {} room(s) unplaced",
        tiles.len(),
        unplaced
    );

    tiles
}

struct Placer<'a> {
    graph: &'a mut DungeonGraph,
    tiles: &'a mut TileMap,
    footprints: &'a FootprintTable,
    rng: &'a mut DungeonRng,
    directions: [Cardinal; 4],
    queue: VecDeque<RoomId>,
}

impl Placer<'_> {
    fn run(&mut self) {
        let mut expanded = vec![false; self.graph.len()];

        while let Some(current) = self.queue.pop_front() {
            if !self.graph.room(current).is_placed() && !self.retry(current) {
                self.record_failure(current);
                continue;
            }

            if expanded[current.index()] {
                continue;
            }
            expanded[current.index()] = true;

            let targets: Vec<RoomId> = self
                .graph
                .room(current)
                .connections
                .iter()
                .map(|c| c.target)
                .collect();

            for neighbor in targets {
                let room = self.graph.room(neighbor);
                if room.is_placed() || room.placement_attempts >= MAX_PLACEMENT_ATTEMPTS {
                    continue;
                }

                if self.place_next_to(current, neighbor) {
                    self.queue.push_back(neighbor);
                } else {
                    self.record_failure(neighbor);
                }
            }
        }
    }

    /// Try a requeued room against each of its placed neighbors
    fn retry(&mut self, room: RoomId) -> bool {
        let anchors: Vec<RoomId> = self
            .graph
            .room(room)
            .connections
            .iter()
            .map(|c| c.target)
            .filter(|&t| self.graph.room(t).is_placed())
            .collect();

        anchors.into_iter().any(|anchor| self.place_next_to(anchor, room))
    }

    fn place_next_to(&mut self, anchor: RoomId, room: RoomId) -> bool {
        let anchor_node = self.graph.room(anchor);
        let Some(anchor_pos) = anchor_node.position else {
            return false;
        };
        let anchor_size = anchor_node.size;
        let size = self.footprints.get(self.graph.room(room).room_type);

        self.rng.shuffle(&mut self.directions);

        for dir in self.directions {
            let rect = size.at(candidate_origin(anchor_pos, anchor_size, size, dir));
            if self.tiles.can_place(&rect) {
                self.tiles.reserve(self.graph.room_mut(room), rect);
                return true;
            }
        }

        false
    }

    fn record_failure(&mut self, room: RoomId) {
        let node = self.graph.room_mut(room);
        node.placement_attempts += 1;

        if node.placement_attempts < MAX_PLACEMENT_ATTEMPTS {
            self.queue.push_back(room);
        } else {
            log::warn!(
                "failed to place room {} after {} attempts",
                room,
                MAX_PLACEMENT_ATTEMPTS
            );
        }
    }
}

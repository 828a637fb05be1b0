//! Spatial layout
//!
//! Grid coordinates, room footprints and the tile occupancy map.

mod grid;
mod rect;
mod tile_map;

pub use grid::{Cardinal, GridPos, Sides};
pub use rect::{Footprint, TileRect};
pub use tile_map::TileMap;

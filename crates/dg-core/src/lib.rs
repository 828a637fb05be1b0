//! dg-core: Seeded dungeon layout generation
//!
//! Builds a room graph, packs the rooms onto a tile grid, adds secret rooms,
//! loops and locked gates, and validates the result. Identical configuration
//! and seed always give an identical dungeon.
//!
//! The crate does no I/O beyond optional config loading; the output is plain
//! data for whatever spawns the actual geometry.

pub mod boundary;
pub mod config;
pub mod error;
pub mod generation;
pub mod graph;
pub mod layout;

mod rng;

pub use boundary::{Boundaries, DoorPlacement, EdgeKind, TileBoundary};
pub use config::{FootprintTable, GenerationConfig, SeedMode};
pub use error::{ConfigError, ConfigLoadError, GenerationError, Rejection};
pub use generation::{DungeonLayout, GeneratedDungeon, generate, generate_attempt};
pub use graph::{DungeonGraph, RoomId, RoomNode, RoomType};
pub use layout::{Cardinal, Footprint, GridPos, TileMap};
pub use rng::DungeonRng;

//! Error types
//!
//! Configuration problems fail fast, validation rejections stay inside the
//! retry driver, and only exhausting every attempt surfaces as a hard error.

use thiserror::Error;

use crate::graph::{RoomId, RoomType};
use crate::layout::Footprint;

/// Invalid generation settings, detected before any attempt runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max_rooms must be at least 1")]
    NoRooms,

    #[error("branch bounds inverted: min_branches {min} > max_branches {max}")]
    InvertedBranches { min: u32, max: u32 },

    #[error("{name} must be within [0, 1], got {value}")]
    ChanceOutOfRange { name: &'static str, value: f64 },

    #[error("max_generation_attempts must be at least 1")]
    NoAttempts,

    #[error("footprint for {room_type} rooms must cover at least one tile")]
    EmptyFootprint { room_type: RoomType },

    #[error("footprint {size} for {room_type} rooms exceeds {max} tiles per side")]
    FootprintTooLarge {
        room_type: RoomType,
        size: Footprint,
        max: u32,
    },
}

/// Reason the validator refused a generation attempt
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("no start room")]
    MissingStart,

    #[error("no boss room")]
    MissingBoss,

    #[error("boss depth {depth} is below the minimum of {minimum}")]
    BossTooShallow { depth: u32, minimum: u32 },

    #[error("boss room {boss} is unreachable from start")]
    BossUnreachable { boss: RoomId },
}

/// Errors surfaced by the generation driver
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("no valid dungeon after {attempts} attempt(s); last rejection: {last}")]
    ExhaustedAttempts { attempts: u32, last: Rejection },
}

/// Errors while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}

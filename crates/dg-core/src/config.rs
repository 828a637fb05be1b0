//! Generation settings
//!
//! `GenerationConfig` carries every knob of the pipeline. It deserializes from
//! partial JSON (missing fields take their defaults) and is validated once
//! before the first attempt.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigLoadError};
use crate::graph::RoomType;
use crate::layout::Footprint;

/// How attempt seeds are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    /// Fresh entropy for every attempt
    #[default]
    Random,
    /// First attempt uses this seed, later attempts derive from it
    Fixed(u64),
}

/// Room type → footprint lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FootprintTable {
    entries: BTreeMap<RoomType, Footprint>,
}

impl FootprintTable {
    /// A table with no entries; every lookup falls back to one tile
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Every room type mapped to the same footprint
    pub fn uniform(size: Footprint) -> Self {
        Self {
            entries: RoomType::ALL.iter().map(|&t| (t, size)).collect(),
        }
    }

    /// Set the footprint for a room type
    pub fn with(mut self, room_type: RoomType, size: Footprint) -> Self {
        self.entries.insert(room_type, size);
        self
    }

    /// Footprint for a room type, one tile when the type has no entry
    pub fn get(&self, room_type: RoomType) -> Footprint {
        match self.entries.get(&room_type) {
            Some(size) => *size,
            None => {
                log::warn!("missing footprint for room type {room_type}, using 1x1");
                Footprint::UNIT
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomType, Footprint)> + '_ {
        self.entries.iter().map(|(t, f)| (*t, *f))
    }
}

impl Default for FootprintTable {
    fn default() -> Self {
        Self::uniform(Footprint::UNIT).with(RoomType::Boss, Footprint::new(2, 2))
    }
}

/// Full pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Seed selection
    pub seed: SeedMode,
    /// Upper bound on rooms created by graph building
    pub max_rooms: usize,
    /// Lower bound of the per-room branch draw
    pub min_branches: u32,
    /// Upper bound of the per-room branch draw
    pub max_branches: u32,
    /// Smallest boss depth the validator accepts
    pub minimum_boss_depth: u32,
    /// Attempts before giving up
    pub max_generation_attempts: u32,
    /// Probability of a loop edge per adjacent tile pair
    pub loop_chance: f64,
    /// Probability of locking each eligible dead end
    pub lock_chance: f64,
    /// Secret room slots
    pub secret_room_count: usize,
    /// Footprint per room type
    pub footprints: FootprintTable,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: SeedMode::Random,
            max_rooms: 20,
            min_branches: 1,
            max_branches: 3,
            minimum_boss_depth: 4,
            max_generation_attempts: 10,
            loop_chance: 0.15,
            lock_chance: 0.2,
            secret_room_count: 1,
            footprints: FootprintTable::default(),
        }
    }
}

impl GenerationConfig {
    /// Same settings with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = SeedMode::Fixed(seed);
        self
    }

    /// Check every setting, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rooms == 0 {
            return Err(ConfigError::NoRooms);
        }
        if self.min_branches > self.max_branches {
            return Err(ConfigError::InvertedBranches {
                min: self.min_branches,
                max: self.max_branches,
            });
        }
        for (name, value) in [
            ("loop_chance", self.loop_chance),
            ("lock_chance", self.lock_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ChanceOutOfRange { name, value });
            }
        }
        if self.max_generation_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        for (room_type, size) in self.footprints.iter() {
            if !size.is_valid() {
                return Err(ConfigError::EmptyFootprint { room_type });
            }
            if !size.within_limits() {
                return Err(ConfigError::FootprintTooLarge {
                    room_type,
                    size,
                    max: Footprint::MAX_EXTENT,
                });
            }
        }
        Ok(())
    }

    /// Most dead ends the degree pass turns into treasure rooms
    pub fn treasure_cap(&self) -> usize {
        (self.max_rooms / 6).max(1)
    }

    /// Load and validate a JSON configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(content: &str) -> Result<Self, ConfigLoadError> {
        let config: GenerationConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

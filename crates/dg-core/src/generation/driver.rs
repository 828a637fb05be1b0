//! Generation driver
//!
//! Runs the whole pipeline once per attempt and retries from scratch with a
//! new seed whenever validation rejects the result. Nothing survives between
//! attempts except the seed sequence.

use serde::Serialize;

use crate::boundary::{Boundaries, DoorPlacement, build_boundaries, resolve_doors};
use crate::config::{GenerationConfig, SeedMode};
use crate::error::{GenerationError, Rejection};
use crate::graph::DungeonGraph;
use crate::layout::TileMap;
use crate::rng::{DungeonRng, random_seed};

use super::graph_builder::build_graph;
use super::locks::apply_locks;
use super::loops::add_loops;
use super::placement::place_rooms;
use super::room_types::assign_room_types;
use super::secrets::attach_secret_rooms;
use super::validation::validate;

/// Per-stage counts for one attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageCounts {
    /// Rooms left without a footprint
    pub unplaced_rooms: usize,
    pub secret_rooms: usize,
    pub loop_edges: usize,
    pub locked_rooms: usize,
}

/// Graph and tile map produced by one attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DungeonLayout {
    pub graph: DungeonGraph,
    /// Occupancy lookup, rebuilt from `graph` with `TileMap::from_graph`
    #[serde(skip)]
    pub tiles: TileMap,
    pub counts: StageCounts,
}

/// An accepted dungeon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedDungeon {
    /// Seed of the accepted attempt
    pub seed: u64,
    /// Attempts used, including the accepted one
    pub attempts: u32,
    pub layout: DungeonLayout,
    pub boundaries: Boundaries,
    pub doors: Vec<DoorPlacement>,
}

/// Seeds handed to successive attempts
#[derive(Debug)]
pub enum SeedSequence {
    Random,
    Fixed {
        first: Option<u64>,
        stream: DungeonRng,
    },
}

impl SeedSequence {
    pub fn new(mode: SeedMode) -> Self {
        match mode {
            SeedMode::Random => SeedSequence::Random,
            SeedMode::Fixed(seed) => SeedSequence::Fixed {
                first: Some(seed),
                stream: DungeonRng::new(seed),
            },
        }
    }

    /// Seed for the next attempt
    pub fn next_seed(&mut self) -> u64 {
        match self {
            SeedSequence::Random => random_seed(),
            SeedSequence::Fixed { first, stream } => first.take().unwrap_or_else(|| stream.next_seed()),
        }
    }
}

/// Driver states
#[derive(Debug)]
enum DriverState {
    Building { attempt: u32, seed: u64 },
    Validating { attempt: u32, seed: u64, layout: DungeonLayout },
    Retrying { attempt: u32, seed: u64, rejection: Rejection },
    Accepted { attempt: u32, seed: u64, layout: DungeonLayout },
}

/// Run every construction stage for one seed, without validation
pub fn build_attempt(config: &GenerationConfig, seed: u64) -> DungeonLayout {
    let mut rng = DungeonRng::new(seed);

    let mut graph = build_graph(config, &mut rng);
    assign_room_types(&mut graph, config, &mut rng);
    let mut tiles = place_rooms(&mut graph, &config.footprints, &mut rng);
    let secret_rooms = attach_secret_rooms(&mut graph, &mut tiles, config, &mut rng);
    let loop_edges = add_loops(&mut graph, &tiles, config.loop_chance, &mut rng);
    let locked_rooms = apply_locks(&mut graph, config.lock_chance, &mut rng);

    let counts = StageCounts {
        unplaced_rooms: graph.rooms().iter().filter(|r| !r.is_placed()).count(),
        secret_rooms,
        loop_edges,
        locked_rooms,
    };

    DungeonLayout {
        graph,
        tiles,
        counts,
    }
}

/// Build and validate a single attempt
pub fn generate_attempt(config: &GenerationConfig, seed: u64) -> Result<DungeonLayout, Rejection> {
    let layout = build_attempt(config, seed);
    validate(&layout.graph, config.minimum_boss_depth)?;
    Ok(layout)
}

/// Generate a dungeon, retrying until one validates or attempts run out
pub fn generate(config: &GenerationConfig) -> Result<GeneratedDungeon, GenerationError> {
    config.validate()?;

    let mut seeds = SeedSequence::new(config.seed);
    let mut state = DriverState::Building {
        attempt: 1,
        seed: seeds.next_seed(),
    };

    loop {
        state = match state {
            DriverState::Building { attempt, seed } => {
                log::debug!("attempt {attempt}: building with seed {seed}");
                DriverState::Validating {
                    attempt,
                    seed,
                    layout: build_attempt(config, seed),
                }
            }
            DriverState::Validating {
                attempt,
                seed,
                layout,
            } => match validate(&layout.graph, config.minimum_boss_depth) {
                Ok(()) => DriverState::Accepted {
                    attempt,
                    seed,
                    layout,
                },
                Err(rejection) => DriverState::Retrying {
                    attempt,
                    seed,
                    rejection,
                },
            },
            DriverState::Retrying {
                attempt,
                seed,
                rejection,
            } => {
                log::debug!("attempt {attempt} (seed {seed}) rejected: {rejection}");
                if attempt >= config.max_generation_attempts {
                    return Err(GenerationError::ExhaustedAttempts {
                        attempts: attempt,
                        last: rejection,
                    });
                }
                DriverState::Building {
                    attempt: attempt + 1,
                    seed: seeds.next_seed(),
                }
            }
            DriverState::Accepted {
                attempt,
                seed,
                layout,
            } => {
                log::info!(
                    "dungeon accepted on attempt {attempt} (seed {seed}): {} rooms, {} edges",
                    layout.graph.len(),
                    layout.graph.edge_count()
                );
                let boundaries = build_boundaries(&layout.graph, &layout.tiles);
                let doors = resolve_doors(&layout.graph, &layout.tiles);
                return Ok(GeneratedDungeon {
                    seed,
                    attempts: attempt,
                    layout,
                    boundaries,
                    doors,
                });
            }
        };
    }
}

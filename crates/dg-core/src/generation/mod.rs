//! Dungeon generation pipeline
//!
//! Stages run in a fixed order on one seeded RNG:
//! graph building, room typing, placement, secret rooms, loops, locks.
//! The driver validates the result and retries with a new seed on rejection.

mod driver;
mod graph_builder;
mod locks;
mod loops;
mod placement;
mod room_types;
mod secrets;
mod validation;

pub use driver::{
    DungeonLayout, GeneratedDungeon, SeedSequence, StageCounts, build_attempt, generate,
    generate_attempt,
};
pub use graph_builder::build_graph;
pub use locks::apply_locks;
pub use loops::add_loops;
pub use placement::{MAX_PLACEMENT_ATTEMPTS, candidate_origin, place_rooms};
pub use room_types::assign_room_types;
pub use secrets::attach_secret_rooms;
pub use validation::validate;

//! Acceptance checks for a finished attempt
//!
//! Boss checks run first, so a lone room (retyped from start to boss) is
//! reported as too shallow whenever a minimum depth is set. Reachability is a
//! pure graph property: placement and locks are ignored.

use crate::error::Rejection;
use crate::graph::DungeonGraph;

/// Check that an attempt is playable
pub fn validate(graph: &DungeonGraph, minimum_boss_depth: u32) -> Result<(), Rejection> {
    let boss = graph.boss().ok_or(Rejection::MissingBoss)?;

    if boss.depth < minimum_boss_depth {
        return Err(Rejection::BossTooShallow {
            depth: boss.depth,
            minimum: minimum_boss_depth,
        });
    }

    let start = graph.start().ok_or(Rejection::MissingStart)?;

    if !graph.is_reachable(start.id, boss.id) {
        return Err(Rejection::BossUnreachable { boss: boss.id });
    }

    Ok(())
}

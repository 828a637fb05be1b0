//! Grid coordinates, directions and side sets

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A tile coordinate on the layout grid
///
/// `x` grows to the east, `y` grows to the north.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a delta, saturating at the edges of the grid
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// The adjacent tile in the given direction
    pub const fn step(self, dir: Cardinal) -> Self {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four grid directions
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Cardinal {
    North,
    South,
    East,
    West,
}

impl Cardinal {
    /// Scan order used by boundary and door resolution
    pub const ALL: [Cardinal; 4] = [
        Cardinal::North,
        Cardinal::South,
        Cardinal::East,
        Cardinal::West,
    ];

    /// Probe order used when looking for free neighbor tiles
    pub const PROBE_ORDER: [Cardinal; 4] = [
        Cardinal::East,
        Cardinal::West,
        Cardinal::North,
        Cardinal::South,
    ];

    /// Unit (dx, dy) for this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Cardinal::North => (0, 1),
            Cardinal::South => (0, -1),
            Cardinal::East => (1, 0),
            Cardinal::West => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Cardinal {
        match self {
            Cardinal::North => Cardinal::South,
            Cardinal::South => Cardinal::North,
            Cardinal::East => Cardinal::West,
            Cardinal::West => Cardinal::East,
        }
    }

    /// The single-side flag for this direction
    pub const fn side(self) -> Sides {
        match self {
            Cardinal::North => Sides::NORTH,
            Cardinal::South => Sides::SOUTH,
            Cardinal::East => Sides::EAST,
            Cardinal::West => Sides::WEST,
        }
    }
}

bitflags! {
    /// A set of tile edges
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Sides: u8 {
        const NORTH = 0x01;
        const SOUTH = 0x02;
        const EAST = 0x04;
        const WEST = 0x08;
    }
}

impl Sides {
    /// Iterate the directions contained in this set, in scan order
    pub fn directions(self) -> impl Iterator<Item = Cardinal> {
        Cardinal::ALL
            .into_iter()
            .filter(move |dir| self.contains(dir.side()))
    }
}

// Manual serde impl for Sides
impl Serialize for Sides {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Sides {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Sides::from_bits_truncate(bits))
    }
}

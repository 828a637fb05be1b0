//! Room footprints and tile rectangles
//!
//! A footprint is the width×length a room type reserves. Anchored at an origin
//! it becomes a `TileRect`, the unit the placer tests for collisions.

use serde::{Deserialize, Serialize};

use super::GridPos;

/// Width (x extent) and length (y extent) of a room, in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub width: u32,
    pub length: u32,
}

impl Footprint {
    /// A single tile
    pub const UNIT: Footprint = Footprint {
        width: 1,
        length: 1,
    };

    pub const fn new(width: u32, length: u32) -> Self {
        Self { width, length }
    }

    /// Number of tiles covered
    pub const fn area(&self) -> u32 {
        self.width * self.length
    }

    /// Largest width or length a configuration may ask for
    pub const MAX_EXTENT: u32 = 1024;

    /// Check the footprint covers at least one tile
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.length > 0
    }

    /// Check neither side exceeds `MAX_EXTENT`
    pub const fn within_limits(&self) -> bool {
        self.width <= Self::MAX_EXTENT && self.length <= Self::MAX_EXTENT
    }

    /// Width as a grid delta, saturating at `i32::MAX`
    pub fn dx(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    /// Length as a grid delta, saturating at `i32::MAX`
    pub fn dy(&self) -> i32 {
        i32::try_from(self.length).unwrap_or(i32::MAX)
    }

    /// Anchor this footprint at a grid origin
    pub const fn at(self, origin: GridPos) -> TileRect {
        TileRect {
            origin,
            size: self,
        }
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::UNIT
    }
}

impl std::fmt::Display for Footprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.length)
    }
}

/// A footprint anchored at its lowest (x, y) corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub origin: GridPos,
    pub size: Footprint,
}

impl TileRect {
    /// All covered tiles, x-major
    pub fn tiles(&self) -> impl Iterator<Item = GridPos> + use<> {
        let origin = self.origin;
        let (width, length) = (self.size.dx(), self.size.dy());
        (0..width).flat_map(move |dx| (0..length).map(move |dy| origin.offset(dx, dy)))
    }
}

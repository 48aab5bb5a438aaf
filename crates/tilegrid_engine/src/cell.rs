use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

/// Default highest tile id (10 bit tile index)
pub const DEFAULT_MAX_TILE_ID: u16 = 0x3FF;

/// Default passability width in bits
pub const DEFAULT_PASSABILITY_BITS: u8 = 2;

/// Default height width in bits
pub const DEFAULT_HEIGHT_BITS: u8 = 4;

/// One grid entry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub tile_id: u16,
    pub passability: u8,
    pub height: u8,
}

impl Cell {
    pub const fn new(tile_id: u16, passability: u8, height: u8) -> Self {
        Self { tile_id, passability, height }
    }

    pub const fn from_tile(tile_id: u16) -> Self {
        Self {
            tile_id,
            passability: 0,
            height: 0,
        }
    }

    pub fn collision(&self) -> CollisionData {
        CollisionData::new(self.passability, self.height)
    }

    pub fn with_collision(self, collision: CollisionData) -> Self {
        Self {
            passability: collision.passability,
            height: collision.height,
            ..self
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03X}:{}:{}", self.tile_id, self.passability, self.height)
    }
}

/// Passability and height of a cell, the auxiliary data a pattern may carry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollisionData {
    pub passability: u8,
    pub height: u8,
}

impl CollisionData {
    pub const fn new(passability: u8, height: u8) -> Self {
        Self { passability, height }
    }
}

/// Value ranges a grid accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLimits {
    pub max_tile_id: u16,
    pub passability_bits: u8,
    pub height_bits: u8,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            max_tile_id: DEFAULT_MAX_TILE_ID,
            passability_bits: DEFAULT_PASSABILITY_BITS,
            height_bits: DEFAULT_HEIGHT_BITS,
        }
    }
}

impl GridLimits {
    pub fn new(max_tile_id: u16, passability_bits: u8, height_bits: u8) -> Result<Self> {
        let limits = Self {
            max_tile_id,
            passability_bits,
            height_bits,
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Both auxiliary values are stored in a `u8`.
    pub fn validate(&self) -> Result<()> {
        if self.passability_bits > 8 {
            return Err(EngineError::InvalidGridLimits {
                message: format!("passability uses {} bits, at most 8 are supported", self.passability_bits),
            });
        }
        if self.height_bits > 8 {
            return Err(EngineError::InvalidGridLimits {
                message: format!("height uses {} bits, at most 8 are supported", self.height_bits),
            });
        }
        Ok(())
    }

    pub fn max_passability(&self) -> u8 {
        bit_mask(self.passability_bits)
    }

    pub fn max_height(&self) -> u8 {
        bit_mask(self.height_bits)
    }

    pub fn is_valid(&self, cell: Cell) -> bool {
        cell.tile_id <= self.max_tile_id && cell.passability <= self.max_passability() && cell.height <= self.max_height()
    }

    /// Clamps the tile id to `max_tile_id` and masks passability and height
    /// to their bit widths.
    pub fn normalize(&self, cell: Cell) -> Cell {
        Cell {
            tile_id: cell.tile_id.min(self.max_tile_id),
            passability: cell.passability & self.max_passability(),
            height: cell.height & self.max_height(),
        }
    }
}

fn bit_mask(bits: u8) -> u8 {
    if bits >= 8 { u8::MAX } else { (1u16 << bits) as u8 - 1 }
}

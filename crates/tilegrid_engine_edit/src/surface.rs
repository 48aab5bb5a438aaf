//! Grid kinds the paint algorithms can edit.
//!
//! Both kinds live in the same `BlockGrid`; a surface decides which part of
//! a cell fills compare on and which part a pattern writes.

use serde::{Deserialize, Serialize};
use tilegrid_engine::{Cell, Pattern};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    /// Tile ids (with collision data if the pattern carries it)
    #[default]
    Metatiles,
    /// Passability and height only
    Collision,
}

impl SurfaceKind {
    pub fn surface(self) -> &'static dyn EditableGridSurface {
        match self {
            SurfaceKind::Metatiles => &MetatileSurface,
            SurfaceKind::Collision => &CollisionSurface,
        }
    }
}

/// Capability interface the paint algorithms are written against.
pub trait EditableGridSurface {
    fn kind(&self) -> SurfaceKind;

    /// Whether two cells count as the same value for fills.
    fn matches(&self, a: Cell, b: Cell) -> bool;

    /// The cell after writing pattern cell `index` into it, or `None` when
    /// the pattern has nothing to write for this surface.
    fn stamp(&self, cell: Cell, pattern: &Pattern, index: usize) -> Option<Cell>;

    /// Whether pattern cell `index` already holds the value of `cell`.
    fn pattern_matches(&self, pattern: &Pattern, index: usize, cell: Cell) -> bool;

    fn supports_smart_path(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MetatileSurface;

impl EditableGridSurface for MetatileSurface {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Metatiles
    }

    fn matches(&self, a: Cell, b: Cell) -> bool {
        a.tile_id == b.tile_id
    }

    fn stamp(&self, cell: Cell, pattern: &Pattern, index: usize) -> Option<Cell> {
        let pattern_cell = pattern.cell(index)?;
        let mut result = Cell {
            tile_id: pattern_cell.tile_id,
            ..cell
        };
        if let Some(collision) = pattern.collision_at(index) {
            result = result.with_collision(collision);
        }
        Some(result)
    }

    fn pattern_matches(&self, pattern: &Pattern, index: usize, cell: Cell) -> bool {
        pattern.cell(index).is_some_and(|c| c.tile_id == cell.tile_id)
    }

    fn supports_smart_path(&self) -> bool {
        true
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CollisionSurface;

impl EditableGridSurface for CollisionSurface {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Collision
    }

    fn matches(&self, a: Cell, b: Cell) -> bool {
        a.collision() == b.collision()
    }

    fn stamp(&self, cell: Cell, pattern: &Pattern, index: usize) -> Option<Cell> {
        pattern.collision_at(index).map(|collision| cell.with_collision(collision))
    }

    fn pattern_matches(&self, pattern: &Pattern, index: usize, cell: Cell) -> bool {
        pattern.collision_at(index) == Some(cell.collision())
    }
}

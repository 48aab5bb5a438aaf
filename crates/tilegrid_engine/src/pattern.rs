//! The rectangular stamp used by paint and fill tools.
//!
//! A pattern tiles seamlessly across the grid: any absolute coordinate maps
//! to a pattern cell through a floor modulo relative to an anchor, so
//! coordinates left of or above the anchor pick the right cell as well.

use serde::{Deserialize, Serialize};

use crate::{BlockGrid, CollisionData, EngineError, Position, Result, cell_count, floor_mod};

/// Index of the "open" tile of a 3x3 smart path pattern (its center).
pub const SMART_PATH_OPEN_INDEX: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternCell {
    pub enabled: bool,
    pub tile_id: u16,
}

impl PatternCell {
    pub const fn new(tile_id: u16) -> Self {
        Self { enabled: true, tile_id }
    }

    pub const fn disabled() -> Self {
        Self { enabled: false, tile_id: 0 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PatternData")]
pub struct Pattern {
    width: i32,
    height: i32,
    cells: Vec<PatternCell>,
    /// Parallel passability/height data. Only honored when its length
    /// matches `cells`.
    collision: Vec<CollisionData>,
}

/// Unchecked serialized form, validated through `Pattern::new`.
#[derive(Deserialize)]
struct PatternData {
    width: i32,
    height: i32,
    cells: Vec<PatternCell>,
    #[serde(default)]
    collision: Vec<CollisionData>,
}

impl TryFrom<PatternData> for Pattern {
    type Error = EngineError;

    fn try_from(data: PatternData) -> Result<Self> {
        let pattern = Self::new(data.width, data.height, data.cells)?;
        if data.collision.is_empty() {
            return Ok(pattern);
        }
        Ok(pattern.with_collision(data.collision))
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::single(0)
    }
}

impl Pattern {
    pub fn new(width: i32, height: i32, cells: Vec<PatternCell>) -> Result<Self> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(EngineError::PatternSizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
            collision: Vec::new(),
        })
    }

    pub fn single(tile_id: u16) -> Self {
        Self {
            width: 1,
            height: 1,
            cells: vec![PatternCell::new(tile_id)],
            collision: Vec::new(),
        }
    }

    pub fn from_tiles(width: i32, height: i32, tiles: &[u16]) -> Result<Self> {
        Self::new(width, height, tiles.iter().map(|&t| PatternCell::new(t)).collect())
    }

    /// A 1x1 pattern carrying only collision data, used by the collision
    /// surface.
    pub fn collision(collision: CollisionData) -> Self {
        Self::single(0).with_collision(vec![collision])
    }

    /// Attaches passability/height data. Data whose length differs from the
    /// tile array is kept but never applied.
    pub fn with_collision(mut self, collision: Vec<CollisionData>) -> Self {
        if collision.len() != self.cells.len() {
            log::debug!(
                "collision data length {} does not match pattern size {}, ignoring it",
                collision.len(),
                self.cells.len()
            );
        }
        self.collision = collision;
        self
    }

    /// Copies the rectangle spanned by two corners out of a grid. The
    /// rectangle is clipped to the grid; `None` if nothing remains.
    pub fn from_grid_rect(grid: &BlockGrid, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<Self> {
        let min_x = x0.min(x1).max(0);
        let min_y = y0.min(y1).max(0);
        let max_x = x0.max(x1).min(grid.width() - 1);
        let max_y = y0.max(y1).min(grid.height() - 1);
        if min_x > max_x || min_y > max_y {
            return None;
        }

        let mut cells = Vec::new();
        let mut collision = Vec::new();
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let cell = grid.get(x, y)?;
                cells.push(PatternCell::new(cell.tile_id));
                collision.push(cell.collision());
            }
        }
        Some(Self {
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
            cells,
            collision,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[PatternCell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<PatternCell> {
        self.cells.get(index).copied()
    }

    pub fn has_collision(&self) -> bool {
        !self.collision.is_empty() && self.collision.len() == self.cells.len()
    }

    /// Collision data for a pattern cell, `None` unless the pattern carries
    /// data of matching length.
    pub fn collision_at(&self, index: usize) -> Option<CollisionData> {
        if self.has_collision() { self.collision.get(index).copied() } else { None }
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.enabled = enabled;
        }
    }

    /// Pattern index for an absolute coordinate relative to an anchor.
    pub fn index_for(&self, pos: Position, anchor: Position) -> usize {
        let i = floor_mod(pos.x - anchor.x, self.width);
        let j = floor_mod(pos.y - anchor.y, self.height);
        (j * self.width + i) as usize
    }

    pub fn enabled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.enabled).count()
    }

    /// The tile of the only enabled cell, if exactly one cell is enabled.
    pub fn single_enabled_tile(&self) -> Option<u16> {
        let mut enabled = self.cells.iter().filter(|c| c.enabled);
        let first = enabled.next()?;
        if enabled.next().is_some() { None } else { Some(first.tile_id) }
    }

    /// The only enabled cell's index, if exactly one cell is enabled.
    pub fn single_enabled_index(&self) -> Option<usize> {
        let mut enabled = self.cells.iter().enumerate().filter(|(_, c)| c.enabled);
        let (index, _) = enabled.next()?;
        if enabled.next().is_some() { None } else { Some(index) }
    }

    /// 3x3 with every cell enabled.
    pub fn is_smart_path_capable(&self) -> bool {
        self.width == 3 && self.height == 3 && self.cells.iter().all(|c| c.enabled)
    }

    /// Whether a tile id belongs to the pattern's tile set.
    pub fn contains_tile(&self, tile_id: u16) -> bool {
        self.cells.iter().any(|c| c.tile_id == tile_id)
    }
}

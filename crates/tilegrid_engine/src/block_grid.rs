//! The fixed-size cell array of one map layout.

use crate::{Cell, EngineError, GridLimits, Position, Result, cell_count, floor_mod};

/// A write that asked to be reported to the script hook.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellChange {
    pub pos: Position,
    pub prev: Cell,
    pub new: Cell,
}

/// Row-major grid of cells with a fixed width and height.
///
/// All accessors are bounds checked: reads outside the grid return `None`,
/// writes outside the grid are dropped. Writes made with `notify` set are
/// collected in a change journal that the edit session drains after each
/// operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockGrid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    limits: GridLimits,
    changes: Vec<CellChange>,
}

impl BlockGrid {
    pub fn new(width: i32, height: i32, fill: Cell, limits: GridLimits) -> Result<Self> {
        let count = cell_count(width, height)?;
        limits.validate()?;
        let fill = limits.normalize(fill);
        Ok(Self {
            width,
            height,
            cells: vec![fill; count],
            limits,
            changes: Vec::new(),
        })
    }

    /// Creates a grid from existing row-major cell data.
    pub fn from_cells(width: i32, height: i32, cells: Vec<Cell>, limits: GridLimits) -> Result<Self> {
        let expected = cell_count(width, height)?;
        limits.validate()?;
        if cells.len() != expected {
            return Err(EngineError::SnapshotSizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        let cells = cells.into_iter().map(|c| limits.normalize(c)).collect();
        Ok(Self {
            width,
            height,
            cells,
            limits,
            changes: Vec::new(),
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

    pub fn limits(&self) -> &GridLimits {
        &self.limits
    }

    pub fn within_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.within_bounds(x, y) {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn tile_id(&self, x: i32, y: i32) -> Option<u16> {
        self.get(x, y).map(|c| c.tile_id)
    }

    /// Writes a cell; returns `true` if the stored value changed.
    ///
    /// The value is normalized to the grid limits first. Out of bounds writes
    /// are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell, notify: bool) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        let cell = self.limits.normalize(cell);
        let prev = self.cells[i];
        if prev == cell {
            return false;
        }
        self.cells[i] = cell;
        if notify {
            self.changes.push(CellChange {
                pos: Position::new(x, y),
                prev,
                new: cell,
            });
        }
        true
    }

    /// Toroidal translation: the cell at (i, j) moves to
    /// ((i + dx) mod W, (j + dy) mod H).
    pub fn shift(&mut self, dx: i32, dy: i32) {
        let dx = floor_mod(dx, self.width);
        let dy = floor_mod(dy, self.height);
        if dx == 0 && dy == 0 {
            return;
        }
        let mut shifted = vec![Cell::default(); self.cells.len()];
        for j in 0..self.height {
            for i in 0..self.width {
                let dst_x = floor_mod(i + dx, self.width);
                let dst_y = floor_mod(j + dy, self.height);
                shifted[(dst_y * self.width + dst_x) as usize] = self.cells[(j * self.width + i) as usize];
            }
        }
        self.cells = shifted;
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn snapshot(&self) -> Vec<Cell> {
        self.cells.clone()
    }

    /// Replaces the whole grid content with a snapshot of the same length.
    pub fn restore(&mut self, snapshot: &[Cell]) -> Result<()> {
        if snapshot.len() != self.cells.len() {
            return Err(EngineError::SnapshotSizeMismatch {
                expected: self.cells.len(),
                actual: snapshot.len(),
            });
        }
        self.cells.copy_from_slice(snapshot);
        Ok(())
    }

    /// Drains the journal of notifying writes since the last call.
    pub fn take_changes(&mut self) -> Vec<CellChange> {
        std::mem::take(&mut self.changes)
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn count_tile(&self, tile_id: u16) -> usize {
        self.cells.iter().filter(|c| c.tile_id == tile_id).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }
}

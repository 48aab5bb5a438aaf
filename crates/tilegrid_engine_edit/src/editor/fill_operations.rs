//! Flood fill and magic fill
//!
//! Both are one-shot: a single call snapshots the grid, fills, records one
//! command and closes the action.

use tilegrid_engine::Position;

use crate::paint;

use super::{EditFlags, EditKind, EditState};

impl EditState {
    /// Fill the region connected to (x, y) with the current pattern.
    ///
    /// With `use_smart_path` the region is opened with the smart path
    /// pattern and its borders re-tiled. Returns the number of cells the
    /// fill visited, 0 for a no-op.
    pub fn flood_fill(&mut self, x: i32, y: i32, use_smart_path: bool) -> usize {
        self.flood_fill_with(x, y, use_smart_path, EditFlags::empty())
    }

    pub fn flood_fill_with(&mut self, x: i32, y: i32, use_smart_path: bool, flags: EditFlags) -> usize {
        self.interrupt_gesture();
        let seed = Position::new(x, y);
        if !self.grid.within_bounds(x, y) {
            log::debug!("flood fill seed {seed} outside the grid");
            return 0;
        }

        let surface = self.editable_surface();
        let notify = flags.notifies();
        let pre = self.grid.snapshot();
        let (kind, visited) = if use_smart_path {
            if !surface.supports_smart_path() {
                log::debug!("smart path fill not available on {:?}", surface.kind());
                return 0;
            }
            (
                EditKind::SmartFloodFill,
                paint::smart_path_flood_fill(&mut self.grid, &self.pattern, seed, notify),
            )
        } else {
            (EditKind::FloodFill, paint::flood_fill(&mut self.grid, surface, &self.pattern, seed, notify))
        };

        self.flush_notifications();
        self.record(kind, pre, flags);
        self.finish_action();
        visited
    }

    /// Replace every cell holding the same value as (x, y). Returns the
    /// number of matching cells, 0 for a no-op.
    pub fn magic_fill(&mut self, x: i32, y: i32) -> usize {
        self.magic_fill_with(x, y, EditFlags::empty())
    }

    pub fn magic_fill_with(&mut self, x: i32, y: i32, flags: EditFlags) -> usize {
        self.interrupt_gesture();
        if !self.grid.within_bounds(x, y) {
            log::debug!("magic fill seed ({x}, {y}) outside the grid");
            return 0;
        }

        let surface = self.editable_surface();
        let pre = self.grid.snapshot();
        let matched = paint::magic_fill(&mut self.grid, surface, &self.pattern, Position::new(x, y), flags.notifies());

        self.flush_notifications();
        self.record(EditKind::MagicFill, pre, flags);
        self.finish_action();
        matched
    }
}

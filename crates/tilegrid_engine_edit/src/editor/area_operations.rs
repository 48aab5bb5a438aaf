//! Whole grid and single cell operations: shift, pick, set_cell

use tilegrid_engine::{Cell, Pattern, Position};

use crate::{PointerPhase, SurfaceKind};

use super::{EditFlags, EditKind, EditState};

impl EditState {
    /// Translate the grid toroidally by (dx, dy).
    pub fn shift(&mut self, dx: i32, dy: i32) {
        self.shift_with(dx, dy, EditFlags::empty());
    }

    pub fn shift_with(&mut self, dx: i32, dy: i32, flags: EditFlags) {
        self.interrupt_gesture();
        let pre = self.grid.snapshot();
        self.shift_and_notify(dx, dy, flags);
        self.record(EditKind::Shift, pre, flags);
        self.finish_action();
    }

    /// The shift tool: every move shifts the grid by the pointer delta since
    /// the last move. One undo step per drag.
    pub fn shift_drag(&mut self, phase: PointerPhase, x: i32, y: i32) {
        let pos = Position::new(x, y);
        match phase {
            PointerPhase::Press => self.begin_gesture(EditKind::Shift, pos),
            PointerPhase::Move => {
                let Some(last) = self.gesture.as_ref().map(|g| g.last) else {
                    log::debug!("shift move at {pos} without press, ignored");
                    return;
                };
                let delta = pos - last;
                if delta == Position::default() {
                    return;
                }
                self.shift_and_notify(delta.x, delta.y, EditFlags::empty());
                if let Some(gesture) = self.gesture.as_mut() {
                    gesture.last = pos;
                }
            }
            PointerPhase::Release => self.release_gesture(),
        }
    }

    fn shift_and_notify(&mut self, dx: i32, dy: i32, flags: EditFlags) {
        self.grid.shift(dx, dy);
        if !flags.notifies() {
            return;
        }
        if let Some(hook) = self.script_hook.as_mut() {
            hook.on_grid_shifted(dx, dy);
        }
    }

    /// Make the cell at (x, y) the current pattern.
    ///
    /// On the metatile surface the pattern carries the tile and its
    /// collision data, on the collision surface only the collision data.
    /// Returns the picked cell, `None` out of bounds.
    pub fn pick(&mut self, x: i32, y: i32) -> Option<Cell> {
        let cell = self.grid.get(x, y)?;
        self.pattern = match self.surface {
            SurfaceKind::Metatiles => Pattern::single(cell.tile_id).with_collision(vec![cell.collision()]),
            SurfaceKind::Collision => Pattern::collision(cell.collision()),
        };
        if let Some(hook) = self.script_hook.as_mut() {
            hook.on_tile_picked(Position::new(x, y), cell);
        }
        Some(cell)
    }

    /// Copy the rectangle between two corners (clipped to the grid) into
    /// the current pattern. Returns `false` if nothing of it is on the grid.
    pub fn pick_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
        let Some(pattern) = Pattern::from_grid_rect(&self.grid, x0, y0, x1, y1) else {
            return false;
        };
        self.pattern = pattern;
        true
    }

    /// Write one cell. Returns `true` if the grid changed.
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell, flags: EditFlags) -> bool {
        self.interrupt_gesture();
        let pre = self.grid.snapshot();
        let changed = self.grid.set(x, y, cell, flags.notifies());
        self.flush_notifications();
        if changed {
            self.record(EditKind::SetCell, pre, flags);
        }
        self.finish_action();
        changed
    }
}

//! Callbacks for map scripts reacting to edits.

use std::cell::RefCell;
use std::rc::Rc;

use tilegrid_engine::{Cell, Position};

/// Receives edit notifications from an `EditState`.
///
/// All methods default to doing nothing. Hooks are called after the grid
/// has been mutated, once per changed cell.
pub trait ScriptHook {
    fn on_block_changed(&mut self, _pos: Position, _prev: Cell, _new: Cell) {}

    fn on_grid_shifted(&mut self, _dx: i32, _dy: i32) {}

    fn on_tile_picked(&mut self, _pos: Position, _cell: Cell) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptEvent {
    BlockChanged { pos: Position, prev: Cell, new: Cell },
    GridShifted { dx: i32, dy: i32 },
    TilePicked { pos: Position, cell: Cell },
}

/// Hook that appends every notification to a shared list.
///
/// Keep a `handle()` before boxing the log into the session to read the
/// events back.
#[derive(Clone, Debug, Default)]
pub struct ScriptEventLog {
    events: Rc<RefCell<Vec<ScriptEvent>>>,
}

impl ScriptEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> Rc<RefCell<Vec<ScriptEvent>>> {
        self.events.clone()
    }

    pub fn events(&self) -> Vec<ScriptEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl ScriptHook for ScriptEventLog {
    fn on_block_changed(&mut self, pos: Position, prev: Cell, new: Cell) {
        self.events.borrow_mut().push(ScriptEvent::BlockChanged { pos, prev, new });
    }

    fn on_grid_shifted(&mut self, dx: i32, dy: i32) {
        self.events.borrow_mut().push(ScriptEvent::GridShifted { dx, dy });
    }

    fn on_tile_picked(&mut self, pos: Position, cell: Cell) {
        self.events.borrow_mut().push(ScriptEvent::TilePicked { pos, cell });
    }
}

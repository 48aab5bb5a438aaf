#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
//! Editing layer for tile grids.
//!
//! `EditState` is the editing session: it owns the `BlockGrid`, the current
//! `Pattern`, the undo history and the action id counter, and turns pointer
//! gestures into paint and fill operations.

mod editor;
pub use editor::*;

mod axis_lock;
pub use axis_lock::{AxisLock, AxisLockState};

pub mod paint;

mod script_hook;
pub use script_hook::{ScriptEvent, ScriptEventLog, ScriptHook};

mod surface;
pub use surface::{CollisionSurface, EditableGridSurface, MetatileSurface, SurfaceKind};

pub mod tools;
pub use tools::{Modifiers, PointerPhase, Tool};

// Re-export the grid model
pub use tilegrid_engine::{
    BlockGrid, Cell, CellChange, CollisionData, EngineError, GridLimits, Pattern, PatternCell, Position, Result, SMART_PATH_OPEN_INDEX, floor_mod,
};

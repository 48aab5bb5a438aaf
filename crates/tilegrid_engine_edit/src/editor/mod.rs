//! Grid edit session
//!
//! Split into multiple files by operation category:
//! - `state.rs` - `EditState` struct, constructors, getters, basic setters
//! - `paint_operations.rs` - Paint gestures, smart path painting, tool dispatch
//! - `fill_operations.rs` - Flood fill and magic fill
//! - `area_operations.rs` - Shift, pick and single cell writes
//! - `undo.rs` - Recording, atomic edits, undo/redo
//! - `undo_operation.rs` / `undo_stack.rs` - Commands and the history

mod undo_operation;
pub use undo_operation::{ActionId, EditKind, GridEditCommand};

mod undo_stack;
pub use undo_stack::{EditHistory, UndoState};

mod state;
pub use state::{EditFlags, EditState};

mod area_operations;
mod fill_operations;
mod paint_operations;
mod undo;
pub use undo::AtomicEdit;

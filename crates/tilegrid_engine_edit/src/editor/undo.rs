//! Undo/Redo for the edit session
//!
//! - Gestures snapshot the grid on press and record one command on release
//! - One-shot operations snapshot, apply and record immediately
//! - `begin_atomic_edit()` / `end_atomic_edit()` fold several programmatic
//!   calls into a single command

use tilegrid_engine::{Cell, Result};

use super::{EditFlags, EditKind, EditState, GridEditCommand, UndoState};

/// An open atomic edit. Pass it back to `EditState::end_atomic_edit`.
#[must_use]
#[derive(Debug)]
pub struct AtomicEdit {
    kind: EditKind,
    pre: Vec<Cell>,
}

impl AtomicEdit {
    pub fn kind(&self) -> EditKind {
        self.kind
    }
}

impl EditState {
    /// Record the difference between `pre` and the current grid as `kind`.
    ///
    /// Marks the session dirty when anything changed, even if the history
    /// is suppressed. Nothing is pushed while an atomic edit is open.
    pub(super) fn record(&mut self, kind: EditKind, pre: Vec<Cell>, flags: EditFlags) {
        let post = self.grid.snapshot();
        if pre == post {
            return;
        }
        self.is_dirty = true;
        if !flags.records_history() || self.atomic_depth > 0 {
            return;
        }
        let Some(command) = GridEditCommand::new(kind, self.surface, pre, post, self.action_id) else {
            return;
        };
        if !self.history.push(command) {
            log::debug!("{} merged back to its starting state, dropped", kind.description());
        }
    }

    /// Finish the open gesture, if any, without closing the action.
    /// Returns `false` if no gesture was open.
    pub(super) fn end_gesture(&mut self) -> bool {
        self.axis_lock.reset();
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        log::debug!("{} gesture ended at {}", gesture.kind.description(), gesture.last);
        self.record(gesture.kind, gesture.pre, EditFlags::empty());
        true
    }

    /// Finish the open gesture as its own action before a one-shot edit.
    pub(super) fn interrupt_gesture(&mut self) {
        if self.end_gesture() {
            self.finish_action();
        }
    }

    pub fn begin_atomic_edit(&mut self, kind: EditKind) -> AtomicEdit {
        self.atomic_depth += 1;
        AtomicEdit {
            kind,
            pre: self.grid.snapshot(),
        }
    }

    /// Close an atomic edit and record everything since its start as one
    /// command. Nested edits are recorded by the outermost one.
    pub fn end_atomic_edit(&mut self, edit: AtomicEdit, flags: EditFlags) {
        if self.atomic_depth == 0 {
            log::warn!("end_atomic_edit without matching begin_atomic_edit");
        }
        self.atomic_depth = self.atomic_depth.saturating_sub(1);
        self.record(edit.kind, edit.pre, flags);
        self.finish_action();
    }

    pub fn is_atomic_edit_open(&self) -> bool {
        self.atomic_depth > 0
    }

    /// Drop the whole history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UndoState Trait Implementation
// ═══════════════════════════════════════════════════════════════════════════

impl UndoState for EditState {
    fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Ignored while an atomic edit is open.
    fn undo(&mut self) -> Result<()> {
        if self.atomic_depth > 0 {
            log::warn!("undo inside an atomic edit ignored");
            return Ok(());
        }
        self.interrupt_gesture();
        let Some(command) = self.history.pop_undo() else {
            return Ok(());
        };
        if let Err(err) = command.undo(&mut self.grid) {
            log::warn!("can't undo {}: {err}", command.description());
            self.history.push_redone(command);
            return Err(err);
        }
        self.is_dirty = true;
        self.history.push_redo(command);
        Ok(())
    }

    fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Ignored while an atomic edit is open.
    fn redo(&mut self) -> Result<()> {
        if self.atomic_depth > 0 {
            log::warn!("redo inside an atomic edit ignored");
            return Ok(());
        }
        self.interrupt_gesture();
        let Some(command) = self.history.pop_redo() else {
            return Ok(());
        };
        if let Err(err) = command.redo(&mut self.grid) {
            log::warn!("can't redo {}: {err}", command.description());
            self.history.push_redo(command);
            return Err(err);
        }
        self.is_dirty = true;
        self.history.push_redone(command);
        Ok(())
    }
}

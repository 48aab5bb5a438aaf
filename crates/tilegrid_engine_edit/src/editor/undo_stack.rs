//! Undo history for grid editing

use tilegrid_engine::Result;

use super::GridEditCommand;

/// Trait for types that support undo/redo operations
pub trait UndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Perform undo operation
    fn undo(&mut self) -> Result<()>;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Perform redo operation
    fn redo(&mut self) -> Result<()>;
}

/// Undo and redo stacks of grid edit commands.
///
/// A pushed command that continues the action on top of the stack (same
/// action id and surface) is folded into it, so one action is always one
/// undo step.
#[derive(Debug, Default, Clone)]
pub struct EditHistory {
    undo_stack: Vec<GridEditCommand>,
    redo_stack: Vec<GridEditCommand>,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new command. Clears the redo stack.
    ///
    /// Returns `false` if the command was absorbed without leaving a change
    /// behind (a merge that restored the original content drops the entry).
    pub fn push(&mut self, command: GridEditCommand) -> bool {
        self.redo_stack.clear();

        if let Some(top) = self.undo_stack.last_mut() {
            if top.can_merge(&command) {
                top.merge(command);
                if top.is_noop() {
                    self.undo_stack.pop();
                    return false;
                }
                return true;
            }
        }

        if command.is_noop() {
            return false;
        }
        self.undo_stack.push(command);
        true
    }

    /// Pop an operation from the undo stack
    pub fn pop_undo(&mut self) -> Option<GridEditCommand> {
        self.undo_stack.pop()
    }

    /// Push an undone operation onto the redo stack
    pub fn push_redo(&mut self, command: GridEditCommand) {
        self.redo_stack.push(command);
    }

    /// Pop an operation from the redo stack
    pub fn pop_redo(&mut self) -> Option<GridEditCommand> {
        self.redo_stack.pop()
    }

    /// Put a redone operation back without touching the redo stack
    pub fn push_redone(&mut self, command: GridEditCommand) {
        self.undo_stack.push(command);
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.last().map(|c| c.description().to_string())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|c| c.description().to_string())
    }

    /// The command undo would revert next
    pub fn last(&self) -> Option<&GridEditCommand> {
        self.undo_stack.last()
    }

    pub fn commands(&self) -> &[GridEditCommand] {
        &self.undo_stack
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

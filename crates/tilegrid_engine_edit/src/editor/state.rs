//! Tile grid edit state
//!
//! The session object behind a map editor canvas. It owns the grid, the
//! selected pattern and the history, and keeps the gesture in progress.
//!
//! ## Actions
//!
//! Every gesture (press, any number of moves, release) is one action and
//! produces at most one undo step. The session carries a single action id
//! counter for all tools; it advances when a gesture is released, after a
//! one-shot operation (fill, shift, programmatic write) and when an atomic
//! edit closes. Commands that share an action id merge in the history.

use bitflags::bitflags;
use tilegrid_engine::{BlockGrid, Cell, Pattern, Position};

use crate::{AxisLock, AxisLockState, EditableGridSurface, ScriptHook, SurfaceKind};

use super::{ActionId, EditHistory, EditKind};

bitflags! {
    /// Per call switches for programmatic edits.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EditFlags: u8 {
        /// Don't record an undo step.
        const NO_HISTORY = 1 << 0;
        /// Don't call the script hook.
        const NO_NOTIFY = 1 << 1;
        const SUPPRESS = Self::NO_HISTORY.bits() | Self::NO_NOTIFY.bits();
    }
}

impl EditFlags {
    pub fn records_history(self) -> bool {
        !self.contains(EditFlags::NO_HISTORY)
    }

    pub fn notifies(self) -> bool {
        !self.contains(EditFlags::NO_NOTIFY)
    }
}

/// A pointer gesture between press and release.
#[derive(Debug, Clone)]
pub(super) struct Gesture {
    pub kind: EditKind,
    /// Press position; patterns align to it
    pub anchor: Position,
    /// Last position an operation was applied at
    pub last: Position,
    pub pre: Vec<Cell>,
}

pub struct EditState {
    pub(super) grid: BlockGrid,
    pub(super) pattern: Pattern,
    pub(super) surface: SurfaceKind,
    pub(super) history: EditHistory,
    pub(super) script_hook: Option<Box<dyn ScriptHook>>,

    pub(super) action_id: ActionId,
    pub(super) axis_lock: AxisLock,
    pub(super) gesture: Option<Gesture>,
    pub(super) pick_anchor: Option<Position>,
    pub(super) atomic_depth: usize,

    pub(super) smart_paths_enabled: bool,
    pub(super) is_dirty: bool,
}

impl EditState {
    pub fn new(grid: BlockGrid) -> Self {
        Self {
            grid,
            pattern: Pattern::default(),
            surface: SurfaceKind::default(),
            history: EditHistory::new(),
            script_hook: None,
            action_id: ActionId::default(),
            axis_lock: AxisLock::new(),
            gesture: None,
            pick_anchor: None,
            atomic_depth: 0,
            smart_paths_enabled: false,
            is_dirty: false,
        }
    }

    pub fn with_hook(grid: BlockGrid, hook: Box<dyn ScriptHook>) -> Self {
        let mut state = Self::new(grid);
        state.script_hook = Some(hook);
        state
    }

    // ═══════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════

    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn surface(&self) -> SurfaceKind {
        self.surface
    }

    pub(super) fn editable_surface(&self) -> &'static dyn EditableGridSurface {
        self.surface.surface()
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn action_id(&self) -> ActionId {
        self.action_id
    }

    pub fn axis_lock_state(&self) -> AxisLockState {
        self.axis_lock.state()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn smart_paths_enabled(&self) -> bool {
        self.smart_paths_enabled
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    // ═══════════════════════════════════════════════════════════════════
    // Setters
    // ═══════════════════════════════════════════════════════════════════

    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.pattern = pattern;
    }

    /// Switch the edited surface. An open gesture is finished first so its
    /// command keeps the surface it was painted on.
    pub fn set_surface(&mut self, surface: SurfaceKind) {
        if self.surface == surface {
            return;
        }
        self.interrupt_gesture();
        self.surface = surface;
    }

    pub fn set_smart_paths_enabled(&mut self, enabled: bool) {
        self.smart_paths_enabled = enabled;
    }

    pub fn set_script_hook(&mut self, hook: Option<Box<dyn ScriptHook>>) {
        self.script_hook = hook;
    }

    /// Replace the grid. Clears the history since its snapshots no longer
    /// fit.
    pub fn set_grid(&mut self, grid: BlockGrid) {
        self.gesture = None;
        self.pick_anchor = None;
        self.axis_lock.reset();
        self.grid = grid;
        self.history.clear();
        self.is_dirty = false;
    }

    pub fn mark_saved(&mut self) {
        self.is_dirty = false;
    }

    // ═══════════════════════════════════════════════════════════════════
    // Action bookkeeping
    // ═══════════════════════════════════════════════════════════════════

    /// Close the current action. Deferred while an atomic edit is open.
    pub fn finish_action(&mut self) {
        if self.atomic_depth > 0 {
            return;
        }
        self.action_id = self.action_id.next();
    }

    /// Hand the grid's change journal to the script hook.
    pub(super) fn flush_notifications(&mut self) {
        let changes = self.grid.take_changes();
        let Some(hook) = self.script_hook.as_mut() else {
            return;
        };
        for change in changes {
            hook.on_block_changed(change.pos, change.prev, change.new);
        }
    }
}

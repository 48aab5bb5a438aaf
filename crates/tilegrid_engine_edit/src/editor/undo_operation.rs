//! Grid edit command
//!
//! Every tool records the same command type: the full grid content before
//! and after the action. Undo and redo restore one of the two snapshots, no
//! matter which tool produced the command.

use serde::{Deserialize, Serialize};
use tilegrid_engine::{BlockGrid, Cell, Result};

use crate::SurfaceKind;

/// Identifies one logical gesture (press, drags, release).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActionId(pub u32);

impl ActionId {
    pub fn next(self) -> ActionId {
        ActionId(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which operation produced a command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditKind {
    Paint,
    SmartPaint,
    FloodFill,
    SmartFloodFill,
    MagicFill,
    Shift,
    SetCell,
}

impl EditKind {
    pub fn description(&self) -> &'static str {
        match self {
            EditKind::Paint => "Paint",
            EditKind::SmartPaint => "Paint smart path",
            EditKind::FloodFill => "Flood fill",
            EditKind::SmartFloodFill => "Smart path fill",
            EditKind::MagicFill => "Magic fill",
            EditKind::Shift => "Shift",
            EditKind::SetCell => "Set cell",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridEditCommand {
    pub kind: EditKind,
    pub surface: SurfaceKind,
    pub pre: Vec<Cell>,
    pub post: Vec<Cell>,
    pub action_id: ActionId,
}

impl GridEditCommand {
    /// `None` when the grid did not change.
    pub fn new(kind: EditKind, surface: SurfaceKind, pre: Vec<Cell>, post: Vec<Cell>, action_id: ActionId) -> Option<Self> {
        if pre == post {
            return None;
        }
        Some(Self {
            kind,
            surface,
            pre,
            post,
            action_id,
        })
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    /// Whether `other` continues the same action and can fold into this one.
    pub fn can_merge(&self, other: &GridEditCommand) -> bool {
        self.action_id == other.action_id && self.surface == other.surface && self.post.len() == other.pre.len()
    }

    /// Keep this command's `pre`, take the other's `post`.
    pub fn merge(&mut self, other: GridEditCommand) {
        self.post = other.post;
    }

    pub fn is_noop(&self) -> bool {
        self.pre == self.post
    }

    /// Number of cells that differ between the snapshots.
    pub fn changed_cells(&self) -> usize {
        self.pre.iter().zip(&self.post).filter(|(a, b)| a != b).count()
    }

    pub fn undo(&self, grid: &mut BlockGrid) -> Result<()> {
        grid.restore(&self.pre)
    }

    pub fn redo(&self, grid: &mut BlockGrid) -> Result<()> {
        grid.restore(&self.post)
    }
}

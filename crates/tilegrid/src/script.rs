//! Edit scripts
//!
//! A script describes a starting grid and a list of steps, each one an
//! editing call on the session:
//!
//! ```toml
//! [grid]
//! width = 8
//! height = 4
//!
//! [[steps]]
//! op = "pattern"
//! width = 1
//! height = 1
//! tiles = [5]
//!
//! [[steps]]
//! op = "paint"
//! points = [[0, 0], [3, 0]]
//! ```

use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tilegrid_engine_edit::{
    BlockGrid, Cell, CollisionData, EditFlags, EditState, GridLimits, Modifiers, Pattern, PatternCell, PointerPhase, SurfaceKind, UndoState,
};

use crate::Settings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub grid: GridSpec,
    /// Overrides the limits from the settings
    #[serde(default)]
    pub limits: Option<GridLimits>,
    #[serde(default)]
    pub smart_paths: Option<bool>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSpec {
    pub width: i32,
    pub height: i32,
    /// Initial tile of every cell
    #[serde(default)]
    pub tile: u16,
    /// Explicit row-major tile ids; overrides `tile`
    #[serde(default)]
    pub tiles: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Select a pattern
    Pattern {
        width: i32,
        height: i32,
        tiles: Vec<u16>,
        /// Indices of disabled pattern cells
        #[serde(default)]
        disabled: Vec<usize>,
        #[serde(default)]
        collision: Vec<CollisionData>,
    },
    Surface {
        surface: SurfaceKind,
    },
    /// One paint gesture: press at the first point, move through the rest
    Paint {
        points: Vec<[i32; 2]>,
        #[serde(default)]
        straight: bool,
        #[serde(default)]
        smart: bool,
    },
    SmartPaint {
        points: Vec<[i32; 2]>,
    },
    FloodFill {
        at: [i32; 2],
        #[serde(default)]
        smart: bool,
    },
    MagicFill {
        at: [i32; 2],
    },
    Shift {
        dx: i32,
        dy: i32,
    },
    Pick {
        at: [i32; 2],
    },
    PickRect {
        from: [i32; 2],
        to: [i32; 2],
    },
    SetCell {
        at: [i32; 2],
        tile: u16,
        #[serde(default)]
        passability: u8,
        #[serde(default)]
        height: u8,
    },
    Undo {
        #[serde(default = "one")]
        count: usize,
    },
    Redo {
        #[serde(default = "one")]
        count: usize,
    },
}

fn one() -> usize {
    1
}

impl Script {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("can't read script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid script {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    fn build_grid(&self, limits: GridLimits) -> anyhow::Result<BlockGrid> {
        let layout = &self.grid;
        if layout.tiles.is_empty() {
            return Ok(BlockGrid::new(layout.width, layout.height, Cell::from_tile(layout.tile), limits)?);
        }
        let cells = layout.tiles.iter().map(|&t| Cell::from_tile(t)).collect();
        Ok(BlockGrid::from_cells(layout.width, layout.height, cells, limits)?)
    }

    /// Run all steps on a fresh session.
    pub fn run(&self, settings: &Settings) -> anyhow::Result<EditState> {
        let limits = self.limits.unwrap_or(settings.limits);
        limits.validate()?;
        let mut state = EditState::new(self.build_grid(limits)?);
        state.set_smart_paths_enabled(self.smart_paths.unwrap_or(settings.smart_paths));

        for (i, step) in self.steps.iter().enumerate() {
            log::debug!("step {}: {step:?}", i + 1);
            run_step(&mut state, step).with_context(|| format!("step {} failed", i + 1))?;
        }
        Ok(state)
    }
}

fn run_step(state: &mut EditState, step: &Step) -> anyhow::Result<()> {
    match step {
        Step::Pattern {
            width,
            height,
            tiles,
            disabled,
            collision,
        } => {
            let cells = tiles.iter().map(|&t| PatternCell::new(t)).collect();
            let mut pattern = Pattern::new(*width, *height, cells)?;
            for &index in disabled {
                pattern.set_enabled(index, false);
            }
            if !collision.is_empty() {
                pattern = pattern.with_collision(collision.clone());
            }
            state.set_pattern(pattern);
        }
        Step::Surface { surface } => state.set_surface(*surface),
        Step::Paint { points, straight, smart } => {
            let mut modifiers = Modifiers::empty();
            modifiers.set(Modifiers::STRAIGHT, *straight);
            modifiers.set(Modifiers::SMART_PATH, *smart);
            gesture(points, |phase, [x, y]| state.paint(phase, x, y, modifiers));
        }
        Step::SmartPaint { points } => {
            gesture(points, |phase, [x, y]| state.smart_paint(phase, x, y, Modifiers::empty()));
        }
        Step::FloodFill { at: [x, y], smart } => {
            let visited = state.flood_fill(*x, *y, *smart);
            log::info!("flood fill at ({x}, {y}) visited {visited} cells");
        }
        Step::MagicFill { at: [x, y] } => {
            let matched = state.magic_fill(*x, *y);
            log::info!("magic fill at ({x}, {y}) replaced {matched} cells");
        }
        Step::Shift { dx, dy } => state.shift(*dx, *dy),
        Step::Pick { at: [x, y] } => {
            if state.pick(*x, *y).is_none() {
                log::warn!("pick at ({x}, {y}) is outside the grid");
            }
        }
        Step::PickRect { from, to } => {
            if !state.pick_rect(from[0], from[1], to[0], to[1]) {
                log::warn!("pick rectangle {from:?}..{to:?} is outside the grid");
            }
        }
        Step::SetCell {
            at: [x, y],
            tile,
            passability,
            height,
        } => {
            state.set_cell(*x, *y, Cell::new(*tile, *passability, *height), EditFlags::empty());
        }
        Step::Undo { count } => {
            for _ in 0..*count {
                state.undo()?;
            }
        }
        Step::Redo { count } => {
            for _ in 0..*count {
                state.redo()?;
            }
        }
    }
    Ok(())
}

/// Feed points as press, moves and release.
fn gesture(points: &[[i32; 2]], mut step: impl FnMut(PointerPhase, [i32; 2])) {
    let Some((&first, rest)) = points.split_first() else {
        return;
    };
    step(PointerPhase::Press, first);
    for &point in rest {
        step(PointerPhase::Move, point);
    }
    step(PointerPhase::Release, *points.last().unwrap_or(&first));
}

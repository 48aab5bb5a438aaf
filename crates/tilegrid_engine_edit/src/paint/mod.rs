//! Paint algorithms for tile grids
//!
//! Contains the grid mutating algorithms behind the paint tools:
//! - Direct pattern stamping aligned to the gesture anchor
//! - Smart path auto-tiling (single application and flood)
//! - Flood fill (4-connected BFS)
//! - Magic fill (global replacement)
//!
//! The algorithms work on a `BlockGrid` directly and know nothing about
//! undo; `EditState` wraps them into gestures and commands. Every write goes
//! through `BlockGrid::set`, so an algorithm that stops early still leaves a
//! valid grid.

mod smart_path;
pub use smart_path::{SMART_PATH_TABLE, neighbor_code, smart_path_apply, smart_path_flood_fill};

use std::collections::{HashSet, VecDeque};

use tilegrid_engine::{BlockGrid, Cell, Pattern, Position};

use crate::EditableGridSurface;

// ═══════════════════════════════════════════════════════════════════════════
// Direct Paint
// ═══════════════════════════════════════════════════════════════════════════

/// Snap one axis of `current` to a pattern-sized step away from `anchor`,
/// rounding toward negative infinity.
fn align_axis(anchor: i32, current: i32, dim: i32) -> i32 {
    let mut offset = current - anchor;
    if offset < 0 && offset % dim != 0 {
        offset -= dim;
    }
    anchor + (offset / dim) * dim
}

/// Paint origin for a drag: the pattern-aligned cell at or before `current`
/// so a drag stamps repeated copies on the anchor's pattern lattice.
pub fn aligned_origin(anchor: Position, current: Position, pattern: &Pattern) -> Position {
    Position::new(
        align_axis(anchor.x, current.x, pattern.width()),
        align_axis(anchor.y, current.y, pattern.height()),
    )
}

/// Stamp the pattern with its top-left cell at `origin`.
///
/// Disabled pattern cells and cells outside the grid are skipped. Returns
/// the number of cells that changed.
pub fn paint_pattern(grid: &mut BlockGrid, surface: &dyn EditableGridSurface, pattern: &Pattern, origin: Position, notify: bool) -> usize {
    let mut changed = 0;
    for j in 0..pattern.height() {
        for i in 0..pattern.width() {
            let index = (j * pattern.width() + i) as usize;
            if !pattern.cell(index).is_some_and(|c| c.enabled) {
                continue;
            }
            let x = origin.x + i;
            let y = origin.y + j;
            let Some(cell) = grid.get(x, y) else {
                continue;
            };
            if let Some(new_cell) = surface.stamp(cell, pattern, index) {
                if grid.set(x, y, new_cell, notify) {
                    changed += 1;
                }
            }
        }
    }
    changed
}

/// Write the anchor-relative pattern cell at `pos`. Disabled cells leave the
/// grid untouched.
fn stamp_relative(grid: &mut BlockGrid, surface: &dyn EditableGridSurface, pattern: &Pattern, pos: Position, anchor: Position, notify: bool) -> bool {
    let index = pattern.index_for(pos, anchor);
    if !pattern.cell(index).is_some_and(|c| c.enabled) {
        return false;
    }
    let Some(cell) = grid.get(pos.x, pos.y) else {
        return false;
    };
    match surface.stamp(cell, pattern, index) {
        Some(new_cell) => grid.set(pos.x, pos.y, new_cell, notify),
        None => false,
    }
}

/// A single enabled cell that already holds the seed's value turns a fill
/// into a no-op.
fn fill_is_noop(surface: &dyn EditableGridSurface, pattern: &Pattern, seed: Cell) -> bool {
    pattern
        .single_enabled_index()
        .is_some_and(|index| surface.pattern_matches(pattern, index, seed))
}

// ═══════════════════════════════════════════════════════════════════════════
// Flood Fill
// ═══════════════════════════════════════════════════════════════════════════

/// Flood fill from `seed` over 4-connected cells matching the seed's
/// original value.
///
/// Each visited cell is written with the pattern cell picked relative to the
/// seed, so multi-cell patterns tile across the region. Returns the number of
/// visited cells; 0 when the fill is a no-op or the seed is out of bounds.
pub fn flood_fill(grid: &mut BlockGrid, surface: &dyn EditableGridSurface, pattern: &Pattern, seed: Position, notify: bool) -> usize {
    let Some(original) = grid.get(seed.x, seed.y) else {
        return 0;
    };
    if fill_is_noop(surface, pattern, original) {
        log::debug!("flood fill at {seed} is a no-op");
        return 0;
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(seed);
    queue.push_back(seed);

    while let Some(pos) = queue.pop_front() {
        stamp_relative(grid, surface, pattern, pos, seed, notify);

        for next in pos.neighbors() {
            if visited.contains(&next) {
                continue;
            }
            if grid.get(next.x, next.y).is_some_and(|cell| surface.matches(cell, original)) {
                visited.insert(next);
                queue.push_back(next);
            }
        }
    }

    visited.len()
}

// ═══════════════════════════════════════════════════════════════════════════
// Magic Fill
// ═══════════════════════════════════════════════════════════════════════════

/// Replace every cell in the grid that matches the seed's original value,
/// connected or not. Scans in row-major order. Returns the number of
/// matching cells.
pub fn magic_fill(grid: &mut BlockGrid, surface: &dyn EditableGridSurface, pattern: &Pattern, seed: Position, notify: bool) -> usize {
    let Some(original) = grid.get(seed.x, seed.y) else {
        return 0;
    };
    if fill_is_noop(surface, pattern, original) {
        log::debug!("magic fill at {seed} is a no-op");
        return 0;
    }

    let mut matched = 0;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let Some(cell) = grid.get(x, y) else {
                continue;
            };
            if surface.matches(cell, original) {
                stamp_relative(grid, surface, pattern, Position::new(x, y), seed, notify);
                matched += 1;
            }
        }
    }
    matched
}

//! Smart path auto-tiling
//!
//! A smart path pattern is a fully enabled 3x3 stamp. Its center is the
//! "open" tile; the other eight cells are edges, corners and junctions.
//! After painting open tiles, every affected cell that belongs to the
//! pattern's tile set is rewritten according to which of its four orthogonal
//! neighbors also belong to the set.

use std::collections::{HashSet, VecDeque};

use tilegrid_engine::{BlockGrid, Pattern, Position, SMART_PATH_OPEN_INDEX};

/// Neighbor code (1 = up, 2 = right, 4 = down, 8 = left) to pattern index.
pub const SMART_PATH_TABLE: [usize; 16] = [4, 4, 4, 6, 4, 4, 0, 3, 4, 8, 4, 7, 2, 5, 1, 4];

const UP: usize = 1;
const RIGHT: usize = 2;
const DOWN: usize = 4;
const LEFT: usize = 8;

fn in_tile_set(grid: &BlockGrid, pattern: &Pattern, pos: Position) -> bool {
    grid.tile_id(pos.x, pos.y).is_some_and(|tile| pattern.contains_tile(tile))
}

/// 4-bit code of the orthogonal neighbors of `pos` whose tile is in the
/// pattern's tile set. Neighbors outside the grid never count.
pub fn neighbor_code(grid: &BlockGrid, pattern: &Pattern, pos: Position) -> usize {
    let [up, right, down, left] = pos.neighbors();
    let mut code = 0;
    if in_tile_set(grid, pattern, up) {
        code |= UP;
    }
    if in_tile_set(grid, pattern, right) {
        code |= RIGHT;
    }
    if in_tile_set(grid, pattern, down) {
        code |= DOWN;
    }
    if in_tile_set(grid, pattern, left) {
        code |= LEFT;
    }
    code
}

/// Writes pattern cell `index` (tile plus collision data when present).
fn write_index(grid: &mut BlockGrid, pattern: &Pattern, pos: Position, index: usize, notify: bool) -> bool {
    let (Some(cell), Some(pattern_cell)) = (grid.get(pos.x, pos.y), pattern.cell(index)) else {
        return false;
    };
    let mut new_cell = cell;
    new_cell.tile_id = pattern_cell.tile_id;
    if let Some(collision) = pattern.collision_at(index) {
        new_cell = new_cell.with_collision(collision);
    }
    grid.set(pos.x, pos.y, new_cell, notify)
}

/// Rewrites a set member with the piece matching its neighbors.
fn retile(grid: &mut BlockGrid, pattern: &Pattern, pos: Position, notify: bool) -> bool {
    let code = neighbor_code(grid, pattern, pos);
    write_index(grid, pattern, pos, SMART_PATH_TABLE[code], notify)
}

/// Paints a 2x2 block of open tiles at `pos` and re-tiles its surroundings.
///
/// Silently does nothing unless the pattern is smart path capable. Returns
/// the number of cells that changed.
pub fn smart_path_apply(grid: &mut BlockGrid, pattern: &Pattern, pos: Position, notify: bool) -> usize {
    if !pattern.is_smart_path_capable() {
        log::debug!("smart path needs a fully enabled 3x3 pattern, got {}x{}", pattern.width(), pattern.height());
        return 0;
    }

    let mut changed = 0;
    for y in pos.y..=pos.y + 1 {
        for x in pos.x..=pos.x + 1 {
            if write_index(grid, pattern, Position::new(x, y), SMART_PATH_OPEN_INDEX, notify) {
                changed += 1;
            }
        }
    }

    for y in pos.y - 1..=pos.y + 2 {
        for x in pos.x - 1..=pos.x + 2 {
            let is_corner = (x == pos.x - 1 || x == pos.x + 2) && (y == pos.y - 1 || y == pos.y + 2);
            if is_corner {
                continue;
            }
            let cell = Position::new(x, y);
            if in_tile_set(grid, pattern, cell) && retile(grid, pattern, cell, notify) {
                changed += 1;
            }
        }
    }
    changed
}

/// Two pass smart path flood fill.
///
/// The first pass floods the seed's region with the open tile; already open
/// cells bound it. The second pass floods from the seed over the pattern's
/// tile set and re-tiles every visited cell against the finished region.
/// Returns the number of cells the first pass filled.
pub fn smart_path_flood_fill(grid: &mut BlockGrid, pattern: &Pattern, seed: Position, notify: bool) -> usize {
    if !pattern.is_smart_path_capable() {
        log::debug!("smart path fill needs a fully enabled 3x3 pattern");
        return 0;
    }
    let Some(original) = grid.get(seed.x, seed.y) else {
        return 0;
    };
    let Some(open_tile) = pattern.cell(SMART_PATH_OPEN_INDEX).map(|c| c.tile_id) else {
        return 0;
    };

    // pass 1: open the region
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(seed);
    queue.push_back(seed);
    while let Some(pos) = queue.pop_front() {
        write_index(grid, pattern, pos, SMART_PATH_OPEN_INDEX, notify);
        for next in pos.neighbors() {
            if visited.contains(&next) {
                continue;
            }
            let Some(tile) = grid.tile_id(next.x, next.y) else {
                continue;
            };
            if tile == original.tile_id && tile != open_tile {
                visited.insert(next);
                queue.push_back(next);
            }
        }
    }
    let filled = visited.len();

    // pass 2: fix up edges against the final region
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(seed);
    queue.push_back(seed);
    while let Some(pos) = queue.pop_front() {
        retile(grid, pattern, pos, notify);
        for next in pos.neighbors() {
            if !visited.contains(&next) && in_tile_set(grid, pattern, next) {
                visited.insert(next);
                queue.push_back(next);
            }
        }
    }

    filled
}

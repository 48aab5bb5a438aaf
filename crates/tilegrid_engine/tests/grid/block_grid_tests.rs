//! Tests for BlockGrid access and shifting

use pretty_assertions::assert_eq;
use tilegrid_engine::{BlockGrid, Cell, EngineError, GridLimits};

fn numbered_grid(width: i32, height: i32) -> BlockGrid {
    let cells = (0..width * height).map(|i| Cell::new(i as u16, (i % 4) as u8, (i % 16) as u8)).collect();
    BlockGrid::from_cells(width, height, cells, GridLimits::default()).unwrap()
}

// ============================================================================
// Get / Set
// ============================================================================

#[test]
fn test_set_then_get_in_bounds() {
    let mut grid = BlockGrid::new(5, 4, Cell::default(), GridLimits::default()).unwrap();
    for y in 0..4 {
        for x in 0..5 {
            let cell = Cell::new((x * 10 + y) as u16, 1, 2);
            grid.set(x, y, cell, false);
            assert_eq!(grid.get(x, y), Some(cell), "cell at ({x}, {y})");
        }
    }
}

#[test]
fn test_out_of_bounds_access() {
    let mut grid = numbered_grid(4, 3);
    let before = grid.clone();

    for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (100, 100), (i32::MIN, 0)] {
        assert!(!grid.set(x, y, Cell::from_tile(99), true));
        assert_eq!(grid.get(x, y), None);
    }

    assert_eq!(grid, before);
    assert!(!grid.has_pending_changes());
}

#[test]
fn test_within_bounds_edges() {
    let grid = numbered_grid(4, 3);
    assert!(grid.within_bounds(0, 0));
    assert!(grid.within_bounds(3, 2));
    assert!(!grid.within_bounds(4, 2));
    assert!(!grid.within_bounds(3, 3));
    assert!(!grid.within_bounds(-1, -1));
}

#[test]
fn test_set_normalizes_to_limits() {
    let limits = GridLimits::new(15, 1, 2).unwrap();
    let mut grid = BlockGrid::new(2, 2, Cell::default(), limits).unwrap();
    grid.set(1, 1, Cell::new(200, 3, 7), false);
    assert_eq!(grid.get(1, 1), Some(Cell::new(15, 1, 3)));
}

// ============================================================================
// Shift
// ============================================================================

#[test]
fn test_full_period_shift_is_identity() {
    let original = numbered_grid(7, 5);

    let mut grid = original.clone();
    grid.shift(7, 0);
    assert_eq!(grid, original);

    grid.shift(0, 5);
    assert_eq!(grid, original);

    grid.shift(-14, 10);
    assert_eq!(grid, original);
}

#[test]
fn test_shift_is_permutation() {
    let original = numbered_grid(6, 4);
    let mut grid = original.clone();
    grid.shift(-3, 5);

    let mut before: Vec<u16> = original.cells().iter().map(|c| c.tile_id).collect();
    let mut after: Vec<u16> = grid.cells().iter().map(|c| c.tile_id).collect();
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
}

#[test]
fn test_shift_then_inverse_restores() {
    let original = numbered_grid(5, 5);
    let mut grid = original.clone();
    grid.shift(2, -3);
    assert_ne!(grid, original);
    grid.shift(-2, 3);
    assert_eq!(grid, original);
}

#[test]
fn test_shift_destination_formula() {
    let original = numbered_grid(4, 3);
    let mut grid = original.clone();
    grid.shift(-5, 4);

    for j in 0..3 {
        for i in 0..4 {
            let dst_x = (i - 5_i32).rem_euclid(4);
            let dst_y = (j + 4_i32).rem_euclid(3);
            assert_eq!(grid.get(dst_x, dst_y), original.get(i, j));
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_oversized_dimensions_are_rejected() {
    let err = BlockGrid::new(100_000, 50_000, Cell::default(), GridLimits::default()).unwrap_err();
    assert_eq!(err, EngineError::InvalidDimensions { width: 100_000, height: 50_000 });

    let result = BlockGrid::from_cells(i32::MAX, 2, Vec::new(), GridLimits::default());
    assert_eq!(result.unwrap_err(), EngineError::InvalidDimensions { width: i32::MAX, height: 2 });

    assert!(BlockGrid::new(0, 3, Cell::default(), GridLimits::default()).is_err());
}

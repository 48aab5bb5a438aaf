//! Editing the collision surface

use pretty_assertions::assert_eq;
use tilegrid_engine_edit::{BlockGrid, Cell, CollisionData, EditState, GridLimits, Modifiers, Pattern, PointerPhase, SurfaceKind, Tool};

fn collision_state(cells: Vec<Cell>, width: i32, height: i32) -> EditState {
    let mut state = EditState::new(BlockGrid::from_cells(width, height, cells, GridLimits::default()).unwrap());
    state.set_surface(SurfaceKind::Collision);
    state
}

#[test]
fn test_collision_fill_ignores_tile_ids() {
    let mut state = collision_state(vec![Cell::new(1, 0, 0), Cell::new(2, 0, 0), Cell::new(3, 1, 0)], 3, 1);
    state.set_pattern(Pattern::collision(CollisionData::new(2, 3)));

    assert_eq!(state.flood_fill(0, 0, false), 2);

    let cells = state.grid().cells().to_vec();
    assert_eq!(cells, vec![Cell::new(1, 2, 3), Cell::new(2, 2, 3), Cell::new(3, 1, 0)]);
    assert_eq!(state.history().last().unwrap().surface, SurfaceKind::Collision);
}

#[test]
fn test_collision_magic_fill_matches_both_fields() {
    let mut state = collision_state(vec![Cell::new(0, 1, 1), Cell::new(0, 1, 2), Cell::new(0, 1, 1)], 3, 1);
    state.set_pattern(Pattern::collision(CollisionData::new(0, 0)));

    assert_eq!(state.magic_fill(2, 0), 2);
    assert_eq!(state.grid().get(1, 0), Some(Cell::new(0, 1, 2)));
}

#[test]
fn test_tile_pattern_without_collision_writes_nothing() {
    let mut state = collision_state(vec![Cell::default(); 4], 2, 2);
    state.set_pattern(Pattern::single(9));

    state.pointer(Tool::Paint, PointerPhase::Press, 0, 0, Modifiers::empty());
    state.pointer(Tool::Paint, PointerPhase::Release, 0, 0, Modifiers::empty());

    assert_eq!(state.grid().cells(), &[Cell::default(); 4]);
    assert_eq!(state.history().undo_len(), 0);
}

#[test]
fn test_smart_fill_is_noop_on_collision_surface() {
    let mut state = collision_state(vec![Cell::default(); 9], 3, 3);
    state.set_pattern(Pattern::from_tiles(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap());

    assert_eq!(state.flood_fill(1, 1, true), 0);
    assert_eq!(state.grid().cells(), &[Cell::default(); 9]);
}

#[test]
fn test_collision_values_are_masked_to_limits() {
    let mut state = collision_state(vec![Cell::default(); 2], 2, 1);
    // two passability bits, four height bits
    state.set_pattern(Pattern::collision(CollisionData::new(0xFF, 0xFF)));

    state.flood_fill(0, 0, false);

    assert_eq!(state.grid().get(0, 0), Some(Cell::new(0, 3, 15)));
}

#[test]
fn test_metatile_pattern_with_collision_writes_both() {
    let grid = BlockGrid::new(2, 1, Cell::default(), GridLimits::default()).unwrap();
    let mut state = EditState::new(grid);
    state.set_pattern(Pattern::single(4).with_collision(vec![CollisionData::new(1, 5)]));

    state.flood_fill(0, 0, false);

    assert_eq!(state.grid().cells(), &[Cell::new(4, 1, 5), Cell::new(4, 1, 5)]);
}

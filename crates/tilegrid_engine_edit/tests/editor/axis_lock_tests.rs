//! Axis lock behavior during paint drags

use pretty_assertions::assert_eq;
use tilegrid_engine_edit::{AxisLockState, Modifiers, Pattern, PointerPhase};

use crate::helpers::blank_state;

#[test]
fn test_axis_lock_scenario() {
    let mut state = blank_state(10, 10);
    state.set_pattern(Pattern::single(1));

    state.paint(PointerPhase::Press, 5, 5, Modifiers::STRAIGHT);
    state.paint(PointerPhase::Move, 5, 8, Modifiers::STRAIGHT);
    // Y moved further, so X is pinned
    assert_eq!(state.axis_lock_state(), AxisLockState::LockedX);
    assert_eq!(state.grid().tile_id(5, 8), Some(1));

    state.paint(PointerPhase::Move, 7, 8, Modifiers::STRAIGHT);
    assert_eq!(state.grid().tile_id(7, 8), Some(0));
    assert_eq!(state.grid().count_tile(1), 2);

    state.paint(PointerPhase::Release, 7, 8, Modifiers::STRAIGHT);
    assert_eq!(state.axis_lock_state(), AxisLockState::Unlocked);
}

#[test]
fn test_horizontal_drag_locks_y() {
    let mut state = blank_state(10, 10);
    state.set_pattern(Pattern::single(1));

    state.paint(PointerPhase::Press, 2, 2, Modifiers::STRAIGHT);
    state.paint(PointerPhase::Move, 5, 3, Modifiers::STRAIGHT);
    state.paint(PointerPhase::Move, 6, 9, Modifiers::STRAIGHT);

    assert_eq!(state.axis_lock_state(), AxisLockState::LockedY);
    assert_eq!(state.grid().tile_id(5, 2), Some(1));
    assert_eq!(state.grid().tile_id(6, 2), Some(1));
    assert_eq!(state.grid().count_tile(1), 3);
}

#[test]
fn test_releasing_modifier_unlocks_mid_drag() {
    let mut state = blank_state(10, 10);
    state.set_pattern(Pattern::single(1));

    state.paint(PointerPhase::Press, 1, 1, Modifiers::STRAIGHT);
    state.paint(PointerPhase::Move, 1, 4, Modifiers::STRAIGHT);
    state.paint(PointerPhase::Move, 6, 6, Modifiers::empty());

    assert_eq!(state.axis_lock_state(), AxisLockState::Unlocked);
    assert_eq!(state.grid().tile_id(6, 6), Some(1));
}

#[test]
fn test_modifier_pressed_mid_drag_locks_from_there() {
    let mut state = blank_state(10, 10);
    state.set_pattern(Pattern::single(1));

    state.paint(PointerPhase::Press, 0, 0, Modifiers::empty());
    state.paint(PointerPhase::Move, 3, 3, Modifiers::STRAIGHT);
    state.paint(PointerPhase::Move, 8, 4, Modifiers::STRAIGHT);

    // lock armed at (3, 3); the move goes mostly along x
    assert_eq!(state.axis_lock_state(), AxisLockState::LockedY);
    assert_eq!(state.grid().tile_id(8, 3), Some(1));
    assert_eq!(state.grid().tile_id(8, 4), Some(0));
}

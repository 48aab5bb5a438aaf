//! Direct paint gesture tests

use pretty_assertions::assert_eq;
use tilegrid_engine_edit::{EditKind, Modifiers, Pattern, PointerPhase};

use crate::helpers::{blank_state, paint_drag, path_pattern, tiles};

#[test]
fn test_press_stamps_pattern_at_press_position() {
    let mut state = blank_state(4, 3);
    state.set_pattern(Pattern::from_tiles(2, 1, &[1, 2]).unwrap());

    state.paint(PointerPhase::Press, 1, 1, Modifiers::empty());

    assert_eq!(tiles(&state), vec![0, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0]);
    assert!(state.is_gesture_active());
}

#[test]
fn test_drag_stamps_on_anchor_lattice() {
    let mut state = blank_state(6, 4);
    state.set_pattern(Pattern::from_tiles(2, 2, &[1, 2, 3, 4]).unwrap());

    // (2, 1) aligns back to (1, 1); (3, 2) aligns to (3, 1)
    paint_drag(&mut state, &[(1, 1), (2, 1), (3, 2)], Modifiers::empty());

    #[rustfmt::skip]
    let expected = vec![
        0, 0, 0, 0, 0, 0,
        0, 1, 2, 1, 2, 0,
        0, 3, 4, 3, 4, 0,
        0, 0, 0, 0, 0, 0,
    ];
    assert_eq!(tiles(&state), expected);
}

#[test]
fn test_drag_left_of_anchor_floors() {
    let mut state = blank_state(6, 1);
    state.set_pattern(Pattern::from_tiles(2, 1, &[1, 2]).unwrap());

    // one cell left of the anchor belongs to the stamp starting at x = 2
    paint_drag(&mut state, &[(4, 0), (3, 0)], Modifiers::empty());

    assert_eq!(tiles(&state), vec![0, 0, 1, 2, 1, 2]);
}

#[test]
fn test_disabled_pattern_cells_are_skipped() {
    let mut state = blank_state(2, 2);
    let mut pattern = Pattern::from_tiles(2, 2, &[5, 6, 7, 8]).unwrap();
    pattern.set_enabled(1, false);
    pattern.set_enabled(2, false);
    state.set_pattern(pattern);

    paint_drag(&mut state, &[(0, 0)], Modifiers::empty());

    assert_eq!(tiles(&state), vec![5, 0, 0, 8]);
}

#[test]
fn test_paint_outside_grid_changes_nothing() {
    let mut state = blank_state(3, 3);
    state.set_pattern(Pattern::single(4));

    paint_drag(&mut state, &[(-1, 0), (3, 3), (10, -4)], Modifiers::empty());

    assert_eq!(tiles(&state), vec![0; 9]);
    assert_eq!(state.history().undo_len(), 0);
}

#[test]
fn test_move_without_press_is_ignored() {
    let mut state = blank_state(3, 3);
    state.set_pattern(Pattern::single(4));

    state.paint(PointerPhase::Move, 1, 1, Modifiers::empty());
    state.paint(PointerPhase::Release, 1, 1, Modifiers::empty());

    assert_eq!(tiles(&state), vec![0; 9]);
    assert_eq!(state.action_id().0, 0);
}

#[test]
fn test_smart_path_modifier_toggles_session_setting() {
    // modifier alone turns smart paths on
    let mut state = blank_state(4, 2);
    state.set_pattern(path_pattern());
    paint_drag(&mut state, &[(0, 0)], Modifiers::SMART_PATH);
    assert_eq!(tiles(&state), vec![10, 12, 0, 0, 16, 18, 0, 0]);
    assert_eq!(state.history().last().unwrap().kind, EditKind::Paint);

    // session setting plus modifier cancel out: plain stamp
    let mut state = blank_state(4, 2);
    state.set_pattern(path_pattern());
    state.set_smart_paths_enabled(true);
    paint_drag(&mut state, &[(0, 0)], Modifiers::SMART_PATH);
    assert_eq!(tiles(&state), vec![10, 11, 12, 0, 13, 14, 15, 0]);
}

#[test]
fn test_smart_setting_ignored_for_incapable_pattern() {
    let mut state = blank_state(3, 1);
    state.set_pattern(Pattern::from_tiles(2, 1, &[1, 2]).unwrap());
    state.set_smart_paths_enabled(true);

    paint_drag(&mut state, &[(0, 0)], Modifiers::empty());

    assert_eq!(tiles(&state), vec![1, 2, 0]);
}

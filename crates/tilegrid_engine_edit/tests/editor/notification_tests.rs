//! Script hook notification tests

use pretty_assertions::assert_eq;
use tilegrid_engine_edit::{BlockGrid, Cell, EditFlags, EditState, GridLimits, Modifiers, Pattern, PointerPhase, Position, ScriptEvent, ScriptEventLog};

fn hooked_state(width: i32, height: i32) -> (EditState, ScriptEventLog) {
    let grid = BlockGrid::new(width, height, Cell::default(), GridLimits::default()).unwrap();
    let log = ScriptEventLog::new();
    let state = EditState::with_hook(grid, Box::new(log.clone()));
    (state, log)
}

fn changed(x: i32, y: i32, prev: u16, new: u16) -> ScriptEvent {
    ScriptEvent::BlockChanged {
        pos: Position::new(x, y),
        prev: Cell::from_tile(prev),
        new: Cell::from_tile(new),
    }
}

#[test]
fn test_flood_fill_notifies_each_changed_cell() {
    let (mut state, log) = hooked_state(2, 1);
    state.set_pattern(Pattern::single(3));

    state.flood_fill(0, 0, false);

    assert_eq!(log.events(), vec![changed(0, 0, 0, 3), changed(1, 0, 0, 3)]);
}

#[test]
fn test_paint_notifies_during_drag() {
    let (mut state, log) = hooked_state(3, 1);
    state.set_pattern(Pattern::single(1));

    state.paint(PointerPhase::Press, 0, 0, Modifiers::empty());
    assert_eq!(log.len(), 1);
    state.paint(PointerPhase::Move, 0, 0, Modifiers::empty());
    state.paint(PointerPhase::Move, 2, 0, Modifiers::empty());
    state.paint(PointerPhase::Release, 2, 0, Modifiers::empty());

    assert_eq!(log.events(), vec![changed(0, 0, 0, 1), changed(2, 0, 0, 1)]);
}

#[test]
fn test_suppressed_edits_do_not_notify_or_record() {
    let (mut state, log) = hooked_state(3, 3);
    state.set_pattern(Pattern::single(2));

    assert_eq!(state.flood_fill_with(0, 0, false, EditFlags::SUPPRESS), 9);
    state.set_cell(1, 1, Cell::from_tile(5), EditFlags::SUPPRESS);
    state.shift_with(1, 0, EditFlags::SUPPRESS);

    assert!(log.is_empty());
    assert_eq!(state.history().undo_len(), 0);
    assert_eq!(state.grid().count_tile(2), 8);
}

#[test]
fn test_no_notify_still_records_history() {
    let (mut state, log) = hooked_state(2, 2);
    state.set_pattern(Pattern::single(6));

    state.magic_fill_with(0, 0, EditFlags::NO_NOTIFY);

    assert!(log.is_empty());
    assert_eq!(state.history().undo_len(), 1);
}

#[test]
fn test_shift_notifies_translation() {
    let (mut state, log) = hooked_state(4, 4);

    state.shift(1, -2);

    assert_eq!(log.events(), vec![ScriptEvent::GridShifted { dx: 1, dy: -2 }]);
}

#[test]
fn test_undo_does_not_notify() {
    let (mut state, log) = hooked_state(2, 1);
    state.set_pattern(Pattern::single(1));
    state.flood_fill(0, 0, false);
    log.clear();

    tilegrid_engine_edit::UndoState::undo(&mut state).unwrap();

    assert!(log.is_empty());
}

#[test]
fn test_pick_notifies_picked_cell() {
    let (mut state, log) = hooked_state(2, 2);
    state.set_cell(1, 0, Cell::new(7, 1, 2), EditFlags::NO_NOTIFY);

    state.pick(1, 0);

    assert_eq!(
        log.events(),
        vec![ScriptEvent::TilePicked {
            pos: Position::new(1, 0),
            cell: Cell::new(7, 1, 2),
        }]
    );
}

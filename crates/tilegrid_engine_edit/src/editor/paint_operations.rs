//! Paint gestures and pointer dispatch

use tilegrid_engine::Position;

use crate::paint::{aligned_origin, paint_pattern, smart_path_apply};
use crate::{Modifiers, PointerPhase, Tool};

use super::state::Gesture;
use super::{EditKind, EditState};

impl EditState {
    /// Direct paint gesture.
    ///
    /// Stamps the pattern aligned to the press position. With smart paths
    /// switched on (session setting XOR `Modifiers::SMART_PATH`) and a smart
    /// path capable pattern, paints smart paths instead. `Modifiers::STRAIGHT`
    /// locks the drag to one axis.
    pub fn paint(&mut self, phase: PointerPhase, x: i32, y: i32, modifiers: Modifiers) {
        self.gesture_step(EditKind::Paint, phase, Position::new(x, y), modifiers);
    }

    /// Smart path gesture. A no-op unless the pattern is smart path capable.
    pub fn smart_paint(&mut self, phase: PointerPhase, x: i32, y: i32, modifiers: Modifiers) {
        self.gesture_step(EditKind::SmartPaint, phase, Position::new(x, y), modifiers);
    }

    /// Route a pointer event to the operation behind `tool`.
    ///
    /// Fills act on press only. Pick takes a single cell on press and the
    /// dragged rectangle on move.
    pub fn pointer(&mut self, tool: Tool, phase: PointerPhase, x: i32, y: i32, modifiers: Modifiers) {
        match tool {
            Tool::Paint => self.paint(phase, x, y, modifiers),
            Tool::SmartPaint => self.smart_paint(phase, x, y, modifiers),
            Tool::Fill | Tool::SmartFill => {
                if phase == PointerPhase::Press {
                    self.flood_fill(x, y, tool == Tool::SmartFill);
                }
            }
            Tool::MagicFill => {
                if phase == PointerPhase::Press {
                    self.magic_fill(x, y);
                }
            }
            Tool::Shift => self.shift_drag(phase, x, y),
            Tool::Pick => match phase {
                PointerPhase::Press => {
                    self.pick_anchor = Some(Position::new(x, y));
                    self.pick(x, y);
                }
                PointerPhase::Move => {
                    if let Some(anchor) = self.pick_anchor {
                        self.pick_rect(anchor.x, anchor.y, x, y);
                    }
                }
                PointerPhase::Release => self.pick_anchor = None,
            },
        }
    }

    /// Open a gesture at `pos`. A press while another gesture is still open
    /// finishes that one under the same action id, so both merge.
    pub(super) fn begin_gesture(&mut self, kind: EditKind, pos: Position) {
        self.end_gesture();
        log::debug!("{} gesture started at {pos} ({})", kind.description(), self.action_id);
        self.gesture = Some(Gesture {
            kind,
            anchor: pos,
            last: pos,
            pre: self.grid.snapshot(),
        });
    }

    /// Release: record the gesture and close the action.
    pub(super) fn release_gesture(&mut self) {
        if self.end_gesture() {
            self.finish_action();
        }
    }

    fn gesture_step(&mut self, kind: EditKind, phase: PointerPhase, pos: Position, modifiers: Modifiers) {
        match phase {
            PointerPhase::Press => {
                self.begin_gesture(kind, pos);
                if modifiers.contains(Modifiers::STRAIGHT) {
                    self.axis_lock.begin(pos);
                }
                self.apply_paint(kind, pos, pos, modifiers);
            }
            PointerPhase::Move => {
                let Some((anchor, last)) = self.gesture.as_ref().map(|g| (g.anchor, g.last)) else {
                    log::debug!("move at {pos} without press, ignored");
                    return;
                };
                if !modifiers.contains(Modifiers::STRAIGHT) {
                    self.axis_lock.reset();
                } else if !self.axis_lock.is_armed() {
                    self.axis_lock.begin(pos);
                }
                let pos = self.axis_lock.constrain(pos);
                if pos == last {
                    return;
                }
                self.apply_paint(kind, anchor, pos, modifiers);
                if let Some(gesture) = self.gesture.as_mut() {
                    gesture.last = pos;
                }
            }
            PointerPhase::Release => self.release_gesture(),
        }
    }

    fn apply_paint(&mut self, kind: EditKind, anchor: Position, pos: Position, modifiers: Modifiers) {
        let surface = self.editable_surface();
        let smart_possible = surface.supports_smart_path() && self.pattern.is_smart_path_capable();
        let use_smart = match kind {
            EditKind::SmartPaint => true,
            _ => self.smart_paths_enabled != modifiers.contains(Modifiers::SMART_PATH) && smart_possible,
        };

        if use_smart {
            if surface.supports_smart_path() {
                smart_path_apply(&mut self.grid, &self.pattern, pos, true);
            }
        } else {
            let origin = aligned_origin(anchor, pos, &self.pattern);
            paint_pattern(&mut self.grid, surface, &self.pattern, origin, true);
        }
        self.flush_notifications();
    }
}

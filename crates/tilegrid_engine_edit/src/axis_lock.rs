//! Straight-line constraint for drag gestures.

use tilegrid_engine::Position;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisLockState {
    #[default]
    Unlocked,
    /// The x coordinate is pinned, the drag moves vertically.
    LockedX,
    /// The y coordinate is pinned, the drag moves horizontally.
    LockedY,
}

/// Once armed, locks the axis with the smaller movement as soon as the
/// pointer leaves its start cell and pins that coordinate to the start value.
#[derive(Clone, Copy, Debug, Default)]
pub struct AxisLock {
    origin: Option<Position>,
    state: AxisLockState,
}

impl AxisLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the lock at the drag start.
    pub fn begin(&mut self, pos: Position) {
        self.origin = Some(pos);
        self.state = AxisLockState::Unlocked;
    }

    pub fn reset(&mut self) {
        self.origin = None;
        self.state = AxisLockState::Unlocked;
    }

    pub fn is_armed(&self) -> bool {
        self.origin.is_some()
    }

    pub fn state(&self) -> AxisLockState {
        self.state
    }

    /// Returns the coordinate a paint operation should use.
    pub fn constrain(&mut self, pos: Position) -> Position {
        let Some(origin) = self.origin else {
            return pos;
        };

        if self.state == AxisLockState::Unlocked && pos != origin {
            let dx = (pos.x - origin.x).abs();
            let dy = (pos.y - origin.y).abs();
            // equal deltas keep the horizontal axis free
            self.state = if dx < dy { AxisLockState::LockedX } else { AxisLockState::LockedY };
            log::debug!("axis lock engaged: {:?} at {}", self.state, origin);
        }

        match self.state {
            AxisLockState::Unlocked => pos,
            AxisLockState::LockedX => pos.with_x(origin.x),
            AxisLockState::LockedY => pos.with_y(origin.y),
        }
    }
}

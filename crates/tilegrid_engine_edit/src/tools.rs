//! Tool definitions for tile grid editing
//!
//! `EditState::pointer` routes pointer events to the operation of a tool.

use bitflags::bitflags;

/// Available editing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Stamp the current pattern
    #[default]
    Paint,
    /// Stamp auto-tiled smart path pieces
    SmartPaint,
    /// Flood fill a connected region
    Fill,
    /// Flood fill a region with smart path pieces
    SmartFill,
    /// Replace every cell matching the clicked one
    MagicFill,
    /// Drag the whole grid with wraparound
    Shift,
    /// Pick cells into the current pattern
    Pick,
}

/// Pointer gesture phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Press,
    Move,
    Release,
}

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Constrain the drag to a straight horizontal or vertical line
        const STRAIGHT = 1 << 0;
        /// Invert the session's smart path setting for direct painting
        const SMART_PATH = 1 << 1;
    }
}

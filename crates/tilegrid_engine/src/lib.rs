#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]
//! Core data model for 2D tile map editing.
//!
//! - `BlockGrid` - fixed size, row-major grid of `Cell`s
//! - `Cell` - tile id plus passability and height
//! - `GridLimits` - value ranges a grid accepts
//! - `Pattern` - the rectangular stamp used by paint and fill tools

mod error;
pub use error::*;

mod position;
pub use position::*;

mod cell;
pub use cell::*;

mod block_grid;
pub use block_grid::*;

mod pattern;
pub use pattern::*;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Modulo that never returns a negative value for a positive divisor.
///
/// `floor_mod(-1, 3) == 2`, unlike the `%` operator which yields `-1`.
#[inline]
pub fn floor_mod(value: i32, divisor: i32) -> i32 {
    value.rem_euclid(divisor)
}

/// Number of cells of a `width` x `height` area.
///
/// Fails for non-positive dimensions and for areas whose cell count does not
/// fit an `i32`, since positions are indexed with `y * width + x`.
pub(crate) fn cell_count(width: i32, height: i32) -> Result<usize> {
    if width <= 0 || height <= 0 {
        return Err(EngineError::InvalidDimensions { width, height });
    }
    match width.checked_mul(height) {
        Some(count) => Ok(count as usize),
        None => Err(EngineError::InvalidDimensions { width, height }),
    }
}

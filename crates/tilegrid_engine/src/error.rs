//! Unified error types for tilegrid_engine

use thiserror::Error;

/// Error type for the few fallible grid operations.
///
/// Routine bounds violations are not errors: reads return `None` and writes
/// are dropped. Only construction and snapshot restore can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Pattern data length mismatch: expected {expected}, got {actual}")]
    PatternSizeMismatch { expected: usize, actual: usize },

    #[error("Snapshot length mismatch: expected {expected}, got {actual}")]
    SnapshotSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid grid limits: {message}")]
    InvalidGridLimits { message: String },
}

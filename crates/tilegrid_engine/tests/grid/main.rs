//! Tests for the grid data model
//!
//! These tests verify that:
//! 1. Reads and writes are bounds safe
//! 2. Shifts are full permutations of the grid
//! 3. Limits and patterns behave at their edges

mod block_grid_tests;
mod pattern_tests;

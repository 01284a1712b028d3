//! Spatial data structures for layer grids
//!
//! This module contains spatial-related functionality including:
//! - Bounds-checked grid storage with explicit occupancy
//! - Rectangular regions and positional variant classification

/// Grid storage, positions and cells
pub mod grid;
/// Rectangles and the 3x3 variant scheme
pub mod region;

pub use grid::{Cell, Grid, Position};
pub use region::{Rect, Variant};

//! Layered stochastic tile map generation
//!
//! A configuration stacks layers over a fixed grid. Each layer samples cells
//! from a probability-weighted distribution tree and lays rectangular
//! occurrences whose cells are tagged as corners, edges or centers, so a tile
//! sheet can draw bordered features. Finished grids are composited in layer
//! order by the renderer.

#![forbid(unsafe_code)]

/// Generation core: weighted selection, distribution fill, occurrence placement
pub mod algorithm;
/// Coverage statistics of generated grids
pub mod analysis;
/// Configuration loading, asset resolution, rendering and error handling
pub mod io;
/// Injectable random sources
pub mod math;
/// Distributions, occurrences, layers and configurations
pub mod model;
/// Grid storage, positions, rectangles and variants
pub mod spatial;

pub use algorithm::executor::{GenerationConfig, Generator, generate};
pub use io::error::{AssetError, ConfigurationError, GenerationError, Result, TileError};

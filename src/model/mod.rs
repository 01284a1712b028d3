//! In-memory generation model
//!
//! A [`Configuration`] is an ordered list of [`Layer`]s over a fixed grid size.
//! Each layer may sample cells from a [`Distribution`] tree and may lay
//! rectangular [`Occurrence`]s. The model is generic over the cell value; the
//! renderer works with [`TileValue`].

/// Probability-weighted distribution trees
pub mod distribution;
/// Layers, occurrences and whole configurations with validation
pub mod layer;
/// Tile sheet references used as cell values by the renderer
pub mod tile;

pub use distribution::{Distribution, DistributionNode};
pub use layer::{Configuration, Layer, Occurrence};
pub use tile::TileValue;

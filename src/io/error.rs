//! Error types for configuration validation, generation, asset resolution and file I/O

use std::path::PathBuf;
use thiserror::Error;

/// Rejected configuration, reported before any grid is allocated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// Grid width or height is zero
    #[error("grid dimensions must be positive (got {width}x{height})")]
    EmptyDimensions {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
    },

    /// Grid width or height exceeds the allocation limit
    #[error("grid dimensions {width}x{height} exceed the maximum of {max} cells per side")]
    DimensionsTooLarge {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
        /// Largest accepted side length
        max: usize,
    },

    /// Distribution probability is negative, above one or not a number
    #[error("layer {layer}: probability {probability} at distribution {path} is outside [0, 1]")]
    InvalidProbability {
        /// Layer index
        layer: usize,
        /// Dotted sibling indices from the root list, e.g. `0.2`
        path: String,
        /// Offending probability
        probability: f64,
    },

    /// Occurrence ratio is negative, above one or not a number
    #[error("layer {layer}: occurrence {occurrence} ratio {ratio} is outside [0, 1]")]
    InvalidRatio {
        /// Layer index
        layer: usize,
        /// Occurrence index within the layer
        occurrence: usize,
        /// Offending ratio
        ratio: f64,
    },

    /// Occurrences need room for at least one minimal rectangle
    #[error(
        "layer {layer}: occurrences need a grid of at least {min_side}x{min_side} cells (got {width}x{height})"
    )]
    GridTooSmallForOccurrences {
        /// Layer index
        layer: usize,
        /// Grid width in cells
        width: usize,
        /// Grid height in cells
        height: usize,
        /// Minimum rectangle side length
        min_side: usize,
    },

    /// Tile value names neither a sheet position nor an edged block
    #[error(
        "tile of '{image}' needs both `row` and `column`, or `\"type\": \"edgedTiles\"`"
    )]
    UnplacedTile {
        /// Asset identifier of the sheet
        image: String,
    },
}

/// Failure while generating the grids of a configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// Configuration failed validation
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Occurrence placement ran out of attempts before reaching its target area
    #[error(
        "layer {layer}: occurrence {occurrence} placed {placed} of {target} cells before exhausting {attempts} attempts"
    )]
    PlacementExhausted {
        /// Layer index
        layer: usize,
        /// Occurrence index within the layer
        occurrence: usize,
        /// Cells covered when placement gave up
        placed: usize,
        /// Cells the occurrence should cover
        target: usize,
        /// Consecutive rejected candidates
        attempts: usize,
    },

    /// Cancellation was requested while a layer was being generated
    #[error("generation cancelled during layer {layer}")]
    Cancelled {
        /// Layer index
        layer: usize,
    },
}

/// Failure while resolving or sampling tile sheet images
#[derive(Debug, Error)]
pub enum AssetError {
    /// Image could not be read or decoded
    #[error("failed to load asset '{identifier}': {source}")]
    Load {
        /// Asset identifier as written in the configuration
        identifier: String,
        /// Underlying image error
        source: image::ImageError,
    },

    /// Identifier is not known to the resolver
    #[error("unknown asset '{identifier}'")]
    Missing {
        /// Asset identifier as written in the configuration
        identifier: String,
    },

    /// Requested tile lies outside the sheet
    #[error(
        "tile ({row}, {column}) of '{identifier}' lies outside the {sheet_width}x{sheet_height} sheet"
    )]
    TileOutOfBounds {
        /// Asset identifier
        identifier: String,
        /// Tile row inside the sheet
        row: u32,
        /// Tile column inside the sheet
        column: u32,
        /// Sheet width in pixels
        sheet_width: u32,
        /// Sheet height in pixels
        sheet_height: u32,
    },
}

/// Main error type for the command-line pipeline
#[derive(Debug, Error)]
pub enum TileError {
    /// Grid generation failed
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Rendering could not resolve its assets
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Configuration file is not valid JSON for the expected shape
    #[error("failed to parse configuration '{}': {source}", .path.display())]
    ConfigurationParse {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Failed to save a generated image to disk
    #[error("failed to export image to '{}': {source}", .path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("file system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Command-line parameter validation failed
    #[error("invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl From<ConfigurationError> for TileError {
    fn from(err: ConfigurationError) -> Self {
        Self::Generation(GenerationError::Configuration(err))
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, TileError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileError {
    TileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to the path it occurred on
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> TileError {
    TileError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}


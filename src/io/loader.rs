//! JSON configuration loading

use crate::io::error::{Result, TileError, file_system_error};
use crate::model::layer::Configuration;
use crate::model::tile::TileValue;
use std::path::Path;

/// Parse a configuration from JSON text
///
/// Leaf distributions carry a `value`, branches carry `children`; layers may
/// omit either `distributions` or `occurrences`.
///
/// # Errors
///
/// Returns the `serde_json` error if the text does not match the expected shape
pub fn parse_configuration(json: &str) -> serde_json::Result<Configuration<TileValue>> {
    serde_json::from_str(json)
}

/// Read, parse and validate a configuration file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The content is not a valid configuration document
/// - The configuration fails validation
pub fn load_configuration(path: &Path) -> Result<Configuration<TileValue>> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| file_system_error(path, "read configuration", e))?;

    let configuration = parse_configuration(&json).map_err(|e| TileError::ConfigurationParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    configuration.validate()?;
    Ok(configuration)
}

//! Layers, occurrences and whole configurations with validation

use crate::io::configuration::{MAX_GRID_DIMENSION, MIN_OCCURRENCE_SIDE};
use crate::io::error::ConfigurationError;
use crate::model::distribution::Distribution;
use serde::{Deserialize, Serialize};

/// A rectangular feature laid until it covers a share of the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence<V> {
    /// Target fraction of the grid area to cover
    pub ratio: f64,
    /// Content written into every covered cell
    pub value: V,
}

impl<V> Occurrence<V> {
    /// Create an occurrence covering `ratio` of the grid with `value`
    pub const fn new(ratio: f64, value: V) -> Self {
        Self { ratio, value }
    }

    /// Number of cells this occurrence should cover on a `width` x `height` grid
    pub fn target_cells(&self, width: usize, height: usize) -> usize {
        let target = ((width * height) as f64 * self.ratio).round();
        if target.is_finite() && target > 0.0 {
            target as usize
        } else {
            0
        }
    }
}

/// One independently generated grid of a configuration
///
/// The distribution fill runs before occurrence placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer<V> {
    /// Root sibling list sampled for every empty cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributions: Option<Vec<Distribution<V>>>,
    /// Rectangular features laid after the fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<Vec<Occurrence<V>>>,
}

impl<V> Default for Layer<V> {
    fn default() -> Self {
        Self {
            distributions: None,
            occurrences: None,
        }
    }
}

impl<V> Layer<V> {
    /// Layer that only samples distributions
    pub const fn with_distributions(distributions: Vec<Distribution<V>>) -> Self {
        Self {
            distributions: Some(distributions),
            occurrences: None,
        }
    }

    /// Layer that only places occurrences
    pub const fn with_occurrences(occurrences: Vec<Occurrence<V>>) -> Self {
        Self {
            distributions: None,
            occurrences: Some(occurrences),
        }
    }

    /// Occurrences of this layer, empty when absent
    pub fn occurrence_list(&self) -> &[Occurrence<V>] {
        self.occurrences.as_deref().unwrap_or(&[])
    }

    /// Check probabilities, ratios and room for occurrences
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found in this layer
    pub fn validate(
        &self,
        index: usize,
        width: usize,
        height: usize,
    ) -> Result<(), ConfigurationError> {
        if let Some(distributions) = &self.distributions {
            validate_distributions(index, distributions, "")?;
        }

        for (occurrence_index, occurrence) in self.occurrence_list().iter().enumerate() {
            if !is_unit_interval(occurrence.ratio) {
                return Err(ConfigurationError::InvalidRatio {
                    layer: index,
                    occurrence: occurrence_index,
                    ratio: occurrence.ratio,
                });
            }
        }

        let needs_room = self
            .occurrence_list()
            .iter()
            .any(|occurrence| occurrence.target_cells(width, height) > 0);
        if needs_room && (width < MIN_OCCURRENCE_SIDE || height < MIN_OCCURRENCE_SIDE) {
            return Err(ConfigurationError::GridTooSmallForOccurrences {
                layer: index,
                width,
                height,
                min_side: MIN_OCCURRENCE_SIDE,
            });
        }

        Ok(())
    }
}

fn validate_distributions<V>(
    layer: usize,
    distributions: &[Distribution<V>],
    prefix: &str,
) -> Result<(), ConfigurationError> {
    for (index, distribution) in distributions.iter().enumerate() {
        let path = if prefix.is_empty() {
            index.to_string()
        } else {
            format!("{prefix}.{index}")
        };

        if !is_unit_interval(distribution.probability) {
            return Err(ConfigurationError::InvalidProbability {
                layer,
                path,
                probability: distribution.probability,
            });
        }

        if let Some(children) = distribution.children() {
            validate_distributions(layer, children, &path)?;
        }
    }

    Ok(())
}

fn is_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Grid size and ordered layers of one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration<V> {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Layers generated and composed in order
    pub layers: Vec<Layer<V>>,
}

impl<V> Configuration<V> {
    /// Create a configuration
    pub const fn new(width: usize, height: usize, layers: Vec<Layer<V>>) -> Self {
        Self {
            width,
            height,
            layers,
        }
    }

    /// Number of cells in each layer grid
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Validate dimensions and every layer
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found, checking dimensions
    /// before layers and layers in order
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigurationError::EmptyDimensions {
                width: self.width,
                height: self.height,
            });
        }

        if self.width > MAX_GRID_DIMENSION || self.height > MAX_GRID_DIMENSION {
            return Err(ConfigurationError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_GRID_DIMENSION,
            });
        }

        for (index, layer) in self.layers.iter().enumerate() {
            layer.validate(index, self.width, self.height)?;
        }

        Ok(())
    }
}

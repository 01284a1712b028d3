//! Layer-by-layer generation of a configuration
//!
//! Validates the configuration, then produces one grid per layer: the
//! distribution fill runs first, occurrence placement second. Layers share
//! nothing but the random source, which is consumed in layer order.

use crate::algorithm::cancellation::{CancellationToken, Checkpoint};
use crate::algorithm::fill::{FillSummary, fill_layer};
use crate::algorithm::placement::{PlacementOutcome, place_occurrence};
use crate::io::configuration::DEFAULT_MAX_PLACEMENT_ATTEMPTS;
use crate::io::error::GenerationError;
use crate::math::random::RandomSource;
use crate::model::layer::{Configuration, Layer};
use crate::spatial::grid::Grid;
use tracing::debug;

/// Generation parameters independent of the configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Consecutive rejected candidates before an occurrence gives up
    pub max_placement_attempts: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// What happened while generating one layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerReport {
    /// Layer index within the configuration
    pub index: usize,
    /// Fill counts, `None` when the layer has no distributions
    pub fill: Option<FillSummary>,
    /// One outcome per occurrence, in layer order
    pub placements: Vec<PlacementOutcome>,
}

/// Generates grids from configurations with an injected random source
pub struct Generator<R> {
    config: GenerationConfig,
    random: R,
    cancellation: Option<CancellationToken>,
}

impl<R: RandomSource> Generator<R> {
    /// Create a generator drawing from `random`
    pub const fn new(random: R, config: GenerationConfig) -> Self {
        Self {
            config,
            random,
            cancellation: None,
        }
    }

    /// Observe `token` at every cell and placement attempt
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Generation parameters in use
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Give back the random source, e.g. to continue a sequence elsewhere
    pub fn into_random(self) -> R {
        self.random
    }

    /// Generate one grid per layer, in layer order
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Configuration`] before any grid is allocated
    /// if the configuration is invalid, otherwise the first placement or
    /// cancellation error of any layer
    pub fn generate<V: Clone>(
        &mut self,
        configuration: &Configuration<V>,
    ) -> Result<Vec<Grid<V>>, GenerationError> {
        self.generate_with(configuration, |_, _| {})
    }

    /// Generate one grid per layer, calling `on_layer` as each layer completes
    ///
    /// # Errors
    ///
    /// Same conditions as [`Generator::generate`]
    pub fn generate_with<V, F>(
        &mut self,
        configuration: &Configuration<V>,
        mut on_layer: F,
    ) -> Result<Vec<Grid<V>>, GenerationError>
    where
        V: Clone,
        F: FnMut(&Grid<V>, &LayerReport),
    {
        configuration.validate()?;

        let mut grids = Vec::with_capacity(configuration.layers.len());
        for (index, layer) in configuration.layers.iter().enumerate() {
            let (grid, report) =
                self.generate_layer(layer, index, configuration.width, configuration.height)?;
            on_layer(&grid, &report);
            grids.push(grid);
        }

        Ok(grids)
    }

    /// Generate the grid of a single layer without validating it
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::PlacementExhausted`] or
    /// [`GenerationError::Cancelled`]
    pub fn generate_layer<V: Clone>(
        &mut self,
        layer: &Layer<V>,
        index: usize,
        width: usize,
        height: usize,
    ) -> Result<(Grid<V>, LayerReport), GenerationError> {
        let checkpoint = Checkpoint::new(index, self.cancellation.as_ref());
        let mut grid = Grid::new(width, height);
        let mut report = LayerReport {
            index,
            ..LayerReport::default()
        };

        if let Some(distributions) = &layer.distributions {
            let summary = fill_layer(&mut grid, distributions, &mut self.random, &checkpoint)?;
            debug!(
                layer = index,
                filled = summary.filled,
                left_empty = summary.left_empty,
                "distribution fill complete"
            );
            report.fill = Some(summary);
        }

        for (occurrence_index, occurrence) in layer.occurrence_list().iter().enumerate() {
            let outcome = place_occurrence(
                &mut grid,
                occurrence,
                occurrence_index,
                &mut self.random,
                self.config.max_placement_attempts,
                &checkpoint,
            )?;
            debug!(
                layer = index,
                occurrence = occurrence_index,
                rectangles = outcome.rectangles.len(),
                placed = outcome.placed,
                target = outcome.target,
                rejected = outcome.rejected,
                "occurrence placement complete"
            );
            report.placements.push(outcome);
        }

        Ok((grid, report))
    }
}

/// Generate one grid per layer with default parameters
///
/// # Errors
///
/// Same conditions as [`Generator::generate`]
pub fn generate<V, R>(
    configuration: &Configuration<V>,
    random: &mut R,
) -> Result<Vec<Grid<V>>, GenerationError>
where
    V: Clone,
    R: RandomSource + ?Sized,
{
    Generator::new(random, GenerationConfig::default()).generate(configuration)
}

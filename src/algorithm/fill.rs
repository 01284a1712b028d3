//! Distribution fill of every empty grid cell

use crate::algorithm::cancellation::Checkpoint;
use crate::algorithm::selection::select_value;
use crate::io::error::GenerationError;
use crate::math::random::RandomSource;
use crate::model::distribution::Distribution;
use crate::spatial::grid::{Cell, Grid};

/// Counts produced by one fill pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillSummary {
    /// Cells that received a sampled value
    pub filled: usize,
    /// Empty cells whose walk ended in a gap
    pub left_empty: usize,
    /// Cells skipped because they already held content
    pub skipped: usize,
}

/// Sample a value for every empty cell in row-major order
///
/// Occupied cells are never overwritten, so repeating the pass only touches
/// cells a previous walk left empty.
///
/// # Errors
///
/// Returns [`GenerationError::Cancelled`] if the checkpoint trips between cells
pub fn fill_layer<V, R>(
    grid: &mut Grid<V>,
    distributions: &[Distribution<V>],
    random: &mut R,
    checkpoint: &Checkpoint<'_>,
) -> Result<FillSummary, GenerationError>
where
    V: Clone,
    R: RandomSource + ?Sized,
{
    let mut summary = FillSummary::default();

    for position in grid.positions() {
        checkpoint.check()?;

        if grid.is_occupied(position) {
            summary.skipped += 1;
            continue;
        }

        match select_value(distributions, random) {
            Some(value) => {
                grid.set(position, Cell::plain(value.clone()));
                summary.filled += 1;
            }
            None => summary.left_empty += 1,
        }
    }

    Ok(summary)
}

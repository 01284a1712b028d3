//! Stochastic placement of non-overlapping occurrence rectangles
//!
//! Each occurrence draws candidate rectangles at random top-left corners and
//! keeps those that land entirely on empty cells, until the covered area
//! reaches the occurrence's share of the grid. Covered cells are tagged with
//! their [`Variant`] so the renderer can pick corner, edge and center tiles.

use crate::algorithm::cancellation::Checkpoint;
use crate::io::configuration::MIN_OCCURRENCE_SIDE;
use crate::io::error::GenerationError;
use crate::math::random::RandomSource;
use crate::model::layer::Occurrence;
use crate::spatial::grid::{Cell, Grid, Position};
use crate::spatial::region::{Rect, Variant};
use tracing::warn;

/// Result of placing one occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementOutcome {
    /// Cells the occurrence had to cover
    pub target: usize,
    /// Cells actually covered (may exceed the target by part of one rectangle)
    pub placed: usize,
    /// Accepted rectangles in placement order
    pub rectangles: Vec<Rect>,
    /// Candidates discarded because they overlapped content
    pub rejected: usize,
}

impl PlacementOutcome {
    const fn new(target: usize) -> Self {
        Self {
            target,
            placed: 0,
            rectangles: Vec::new(),
            rejected: 0,
        }
    }
}

/// Draw a candidate rectangle for the `remaining` uncovered target cells
///
/// The top-left corner leaves room for a 2x2 rectangle. The width is capped
/// by half the remaining area and by the grid edge, the height by the area
/// left for that width and by the grid edge; neither cap goes below two.
/// Consumes four draws: row, column, width, height.
pub fn propose_candidate<R>(width: usize, height: usize, remaining: usize, random: &mut R) -> Rect
where
    R: RandomSource + ?Sized,
{
    let row = random.next_in_range(0, height.saturating_sub(MIN_OCCURRENCE_SIDE));
    let column = random.next_in_range(0, width.saturating_sub(MIN_OCCURRENCE_SIDE));

    let max_width = (remaining / MIN_OCCURRENCE_SIDE)
        .min(width.saturating_sub(column))
        .max(MIN_OCCURRENCE_SIDE);
    let rect_width = random.next_in_range(MIN_OCCURRENCE_SIDE, max_width);

    let max_height = (remaining / rect_width)
        .min(height.saturating_sub(row))
        .max(MIN_OCCURRENCE_SIDE);
    let rect_height = random.next_in_range(MIN_OCCURRENCE_SIDE, max_height);

    Rect::new(Position::new(row, column), rect_width, rect_height)
}

/// Write `value` into every cell of `rect`, tagged with its variant
pub fn stamp_rect<V: Clone>(grid: &mut Grid<V>, rect: &Rect, value: &V) {
    for position in rect.positions() {
        if let Some(variant) = Variant::classify(rect, position) {
            grid.set(position, Cell::edged(value.clone(), variant));
        }
    }
}

/// Lay rectangles for `occurrence` until its target area is covered
///
/// `max_attempts` bounds the number of consecutive rejected candidates; every
/// accepted rectangle resets the count.
///
/// # Errors
///
/// Returns [`GenerationError::PlacementExhausted`] when the attempt budget runs
/// out, and [`GenerationError::Cancelled`] if the checkpoint trips between
/// attempts. Rectangles accepted before the error stay in the grid.
pub fn place_occurrence<V, R>(
    grid: &mut Grid<V>,
    occurrence: &Occurrence<V>,
    occurrence_index: usize,
    random: &mut R,
    max_attempts: usize,
    checkpoint: &Checkpoint<'_>,
) -> Result<PlacementOutcome, GenerationError>
where
    V: Clone,
    R: RandomSource + ?Sized,
{
    let (width, height) = (grid.width(), grid.height());
    let mut outcome = PlacementOutcome::new(occurrence.target_cells(width, height));
    let mut attempts = 0;

    while outcome.placed < outcome.target {
        checkpoint.check()?;

        if attempts >= max_attempts {
            warn!(
                layer = checkpoint.layer(),
                occurrence = occurrence_index,
                placed = outcome.placed,
                target = outcome.target,
                "occurrence placement exhausted its attempt budget"
            );
            return Err(GenerationError::PlacementExhausted {
                layer: checkpoint.layer(),
                occurrence: occurrence_index,
                placed: outcome.placed,
                target: outcome.target,
                attempts,
            });
        }

        let remaining = outcome.target - outcome.placed;
        let candidate = propose_candidate(width, height, remaining, random);

        if grid.is_region_free(&candidate) {
            stamp_rect(grid, &candidate, &occurrence.value);
            outcome.placed += candidate.area();
            outcome.rectangles.push(candidate);
            attempts = 0;
        } else {
            outcome.rejected += 1;
            attempts += 1;
        }
    }

    Ok(outcome)
}

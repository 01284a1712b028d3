//! Coverage statistics for generated layer grids

use crate::algorithm::executor::LayerReport;
use crate::spatial::grid::Grid;
use crate::spatial::region::Variant;
use serde::Serialize;

/// Cell counts of one grid
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GridStatistics {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Cells holding content
    pub occupied: usize,
    /// Cells left without content
    pub empty: usize,
    /// Cells sampled from distributions
    pub plain: usize,
    /// Cells covered by occurrences
    pub edged: usize,
    /// Occupied share of the grid area
    pub coverage: f64,
    /// Occurrence cells per variant, in [`Variant::ALL`] order
    pub variants: [usize; 9],
}

impl GridStatistics {
    /// Count the cells of `grid`
    pub fn from_grid<V>(grid: &Grid<V>) -> Self {
        let mut stats = Self {
            width: grid.width(),
            height: grid.height(),
            ..Self::default()
        };

        for (_, cell) in grid.occupied() {
            stats.occupied += 1;
            match cell.variant {
                Some(variant) => {
                    stats.edged += 1;
                    if let Some(count) = stats.variants.get_mut(variant_index(variant)) {
                        *count += 1;
                    }
                }
                None => stats.plain += 1,
            }
        }

        let area = stats.width * stats.height;
        stats.empty = area - stats.occupied;
        if area > 0 {
            stats.coverage = stats.occupied as f64 / area as f64;
        }

        stats
    }

    /// Occurrence cells tagged with `variant`
    pub fn variant_count(&self, variant: Variant) -> usize {
        self.variants
            .get(variant_index(variant))
            .copied()
            .unwrap_or(0)
    }
}

const fn variant_index(variant: Variant) -> usize {
    (variant.row() * 3 + variant.column()) as usize
}

/// Statistics and generation counters of one layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerStatistics {
    /// Layer index within the configuration
    pub index: usize,
    /// Cell counts of the finished grid
    pub cells: GridStatistics,
    /// Cells whose distribution walk ended in a gap
    pub left_empty: usize,
    /// Accepted occurrence rectangles across all occurrences
    pub rectangles: usize,
    /// Rejected occurrence candidates across all occurrences
    pub rejected_candidates: usize,
}

impl LayerStatistics {
    /// Combine a finished grid with the report of its generation
    pub fn new<V>(grid: &Grid<V>, report: &LayerReport) -> Self {
        Self {
            index: report.index,
            cells: GridStatistics::from_grid(grid),
            left_empty: report.fill.map_or(0, |fill| fill.left_empty),
            rectangles: report
                .placements
                .iter()
                .map(|outcome| outcome.rectangles.len())
                .sum(),
            rejected_candidates: report
                .placements
                .iter()
                .map(|outcome| outcome.rejected)
                .sum(),
        }
    }
}

/// Per-layer statistics of one generation run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Seed the run was generated with
    pub seed: u64,
    /// Layers in configuration order
    pub layers: Vec<LayerStatistics>,
}

impl AnalysisReport {
    /// Empty report for a run seeded with `seed`
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            layers: Vec::new(),
        }
    }

    /// Append the statistics of the next layer
    pub fn record<V>(&mut self, grid: &Grid<V>, report: &LayerReport) {
        self.layers.push(LayerStatistics::new(grid, report));
    }

    /// Pretty-printed JSON rendering of the report
    ///
    /// # Errors
    ///
    /// Returns the serializer error; plain counters never fail in practice
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

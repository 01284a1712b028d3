//! Bounds-checked row-major grid of optional cell content
//!
//! One grid exists per layer. Empty cells are `None`; occupancy never depends
//! on the value itself, so any value (including defaults) counts as content.

use crate::spatial::region::{Rect, Variant};
use ndarray::Array2;

/// Zero-based grid-relative coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Row index from the top
    pub row: usize,
    /// Column index from the left
    pub column: usize,
}

impl Position {
    /// Create a position
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Content of an occupied cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell<V> {
    /// Content identity
    pub value: V,
    /// Positional variant for occurrence cells, `None` for sampled content
    pub variant: Option<Variant>,
}

impl<V> Cell<V> {
    /// Cell sampled from a distribution
    pub const fn plain(value: V) -> Self {
        Self {
            value,
            variant: None,
        }
    }

    /// Cell covered by an occurrence
    pub const fn edged(value: V, variant: Variant) -> Self {
        Self {
            value,
            variant: Some(variant),
        }
    }
}

/// Row-major matrix of optional cells owned by one layer pass
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<V> {
    cells: Array2<Option<Cell<V>>>,
}

impl<V: Clone> Grid<V> {
    /// Create an empty grid of `width` columns and `height` rows
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), None),
        }
    }
}

impl<V> Grid<V> {
    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Check if a position lies inside the grid
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.height() && position.column < self.width()
    }

    /// Cell at `position`, `None` when empty or out of bounds
    pub fn get(&self, position: Position) -> Option<&Cell<V>> {
        self.cells
            .get([position.row, position.column])
            .and_then(Option::as_ref)
    }

    /// Check if `position` holds content
    pub fn is_occupied(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    /// Write `cell` at `position`
    ///
    /// Returns `false` without writing when the position is out of bounds.
    pub fn set(&mut self, position: Position, cell: Cell<V>) -> bool {
        if let Some(slot) = self.cells.get_mut([position.row, position.column]) {
            *slot = Some(cell);
            true
        } else {
            false
        }
    }

    /// Check if every cell of `rect` lies inside the grid and is empty
    pub fn is_region_free(&self, rect: &Rect) -> bool {
        rect.row_end() <= self.height()
            && rect.column_end() <= self.width()
            && rect.positions().all(|position| !self.is_occupied(position))
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<V> {
        let width = self.width();
        (0..self.height())
            .flat_map(move |row| (0..width).map(move |column| Position::new(row, column)))
    }

    /// Occupied cells with their positions in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &Cell<V>)> {
        self.cells
            .indexed_iter()
            .filter_map(|((row, column), cell)| {
                cell.as_ref().map(|cell| (Position::new(row, column), cell))
            })
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check if no cell holds content
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Check if every cell holds content
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

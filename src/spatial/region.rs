//! Rectangular regions and the positional classification of their cells

use crate::spatial::grid::Position;

/// Axis-aligned rectangle of cells anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top-left cell
    pub origin: Position,
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
}

impl Rect {
    /// Create a rectangle
    pub const fn new(origin: Position, width: usize, height: usize) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Row just below the rectangle
    pub const fn row_end(&self) -> usize {
        self.origin.row + self.height
    }

    /// Column just right of the rectangle
    pub const fn column_end(&self) -> usize {
        self.origin.column + self.width
    }

    /// Check if a position is covered
    pub const fn contains(&self, position: Position) -> bool {
        position.row >= self.origin.row
            && position.row < self.row_end()
            && position.column >= self.origin.column
            && position.column < self.column_end()
    }

    /// Check if two rectangles share at least one cell
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.origin.row < other.row_end()
            && other.origin.row < self.row_end()
            && self.origin.column < other.column_end()
            && other.origin.column < self.column_end()
    }

    /// Covered positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let Self {
            origin,
            width,
            height,
        } = *self;
        (origin.row..origin.row + height).flat_map(move |row| {
            (origin.column..origin.column + width).map(move |column| Position::new(row, column))
        })
    }
}

/// Position of a cell within an occurrence rectangle
///
/// Nine regions of a 3x3 scheme. A 2x2 rectangle has only the four corners;
/// larger rectangles gain edges and then a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// Top-left corner
    TopLeft,
    /// Top edge between the corners
    Top,
    /// Top-right corner
    TopRight,
    /// Left edge between the corners
    Left,
    /// Interior
    Center,
    /// Right edge between the corners
    Right,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom edge between the corners
    Bottom,
    /// Bottom-right corner
    BottomRight,
}

/// Band of a cell along one axis
#[derive(Clone, Copy)]
enum Band {
    Start,
    Middle,
    End,
}

impl Band {
    const fn of(offset: usize, length: usize) -> Self {
        if offset == 0 {
            Self::Start
        } else if offset + 1 >= length {
            Self::End
        } else {
            Self::Middle
        }
    }
}

impl Variant {
    /// All variants in row-major order of the 3x3 scheme
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Center,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];

    /// Classify `position` by where it lies in `rect`
    ///
    /// Returns `None` for positions outside the rectangle. The first row and
    /// column win over the last ones when a side is a single cell long.
    pub const fn classify(rect: &Rect, position: Position) -> Option<Self> {
        if !rect.contains(position) {
            return None;
        }

        let vertical = Band::of(position.row - rect.origin.row, rect.height);
        let horizontal = Band::of(position.column - rect.origin.column, rect.width);

        Some(match (vertical, horizontal) {
            (Band::Start, Band::Start) => Self::TopLeft,
            (Band::Start, Band::Middle) => Self::Top,
            (Band::Start, Band::End) => Self::TopRight,
            (Band::Middle, Band::Start) => Self::Left,
            (Band::Middle, Band::Middle) => Self::Center,
            (Band::Middle, Band::End) => Self::Right,
            (Band::End, Band::Start) => Self::BottomLeft,
            (Band::End, Band::Middle) => Self::Bottom,
            (Band::End, Band::End) => Self::BottomRight,
        })
    }

    /// Row of this variant in the 3x3 scheme
    pub const fn row(self) -> u32 {
        match self {
            Self::TopLeft | Self::Top | Self::TopRight => 0,
            Self::Left | Self::Center | Self::Right => 1,
            Self::BottomLeft | Self::Bottom | Self::BottomRight => 2,
        }
    }

    /// Column of this variant in the 3x3 scheme
    pub const fn column(self) -> u32 {
        match self {
            Self::TopLeft | Self::Left | Self::BottomLeft => 0,
            Self::Top | Self::Center | Self::Bottom => 1,
            Self::TopRight | Self::Right | Self::BottomRight => 2,
        }
    }

    /// Check if this variant is one of the four corners
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }
}

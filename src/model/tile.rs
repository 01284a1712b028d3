//! Tile sheet references used as cell values by the renderer

use crate::io::configuration::EDGED_BLOCK_ORIGIN;
use crate::io::error::ConfigurationError;
use crate::spatial::region::Variant;
use serde::{Deserialize, Serialize};

/// A tile inside an image sheet, addressed in tile units
///
/// As a distribution value it names the exact tile to draw. As an occurrence
/// value it names the top-left tile of a 3x3 block of edged tiles; each
/// [`Variant`] picks its tile from that block.
///
/// Besides `{"image", "row", "column"}` the JSON form accepts
/// `{"image", "type": "edgedTiles"}`, which places the block at
/// [`EDGED_BLOCK_ORIGIN`]. An explicit `row` or `column` overrides that origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTileValue")]
pub struct TileValue {
    /// Asset identifier of the sheet, resolved relative to the asset directory
    pub image: String,
    /// Tile row inside the sheet
    pub row: u32,
    /// Tile column inside the sheet
    pub column: u32,
}

impl TileValue {
    /// Create a tile reference
    pub fn new(image: impl Into<String>, row: u32, column: u32) -> Self {
        Self {
            image: image.into(),
            row,
            column,
        }
    }

    /// Edged tile block of `image` at the conventional sheet position
    pub fn edged(image: impl Into<String>) -> Self {
        let (row, column) = EDGED_BLOCK_ORIGIN;
        Self::new(image, row, column)
    }

    /// Sheet coordinates `(row, column)` of the tile to draw for `variant`
    ///
    /// Saturates at `u32::MAX`, which no sheet can contain.
    pub const fn sheet_tile(&self, variant: Option<Variant>) -> (u32, u32) {
        match variant {
            Some(variant) => (
                self.row.saturating_add(variant.row()),
                self.column.saturating_add(variant.column()),
            ),
            None => (self.row, self.column),
        }
    }
}

#[derive(Deserialize)]
enum TileKind {
    #[serde(rename = "edgedTiles")]
    EdgedTiles,
}

#[derive(Deserialize)]
struct RawTileValue {
    image: String,
    #[serde(rename = "type")]
    kind: Option<TileKind>,
    row: Option<u32>,
    column: Option<u32>,
}

impl TryFrom<RawTileValue> for TileValue {
    type Error = ConfigurationError;

    fn try_from(raw: RawTileValue) -> Result<Self, Self::Error> {
        let (default_row, default_column) = EDGED_BLOCK_ORIGIN;
        match (raw.kind, raw.row, raw.column) {
            (_, Some(row), Some(column)) => Ok(Self::new(raw.image, row, column)),
            (Some(TileKind::EdgedTiles), row, column) => Ok(Self::new(
                raw.image,
                row.unwrap_or(default_row),
                column.unwrap_or(default_column),
            )),
            (None, _, _) => Err(ConfigurationError::UnplacedTile { image: raw.image }),
        }
    }
}

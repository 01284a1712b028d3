//! Layer compositing onto a tile canvas and PNG export
//!
//! Rendering happens in two phases. Planning resolves every sheet a grid
//! needs and checks every source tile against its sheet; drawing copies the
//! planned tiles. All layers are planned before the first one is drawn, so an
//! asset failure leaves the canvas untouched.

use crate::io::assets::AssetResolver;
use crate::io::configuration::MAX_CANVAS_PIXELS;
use crate::io::error::{AssetError, Result, TileError, file_system_error, invalid_parameter};
use crate::model::tile::TileValue;
use crate::spatial::grid::{Grid, Position};
use image::{RgbaImage, imageops};
use std::path::Path;
use std::sync::Arc;

/// Square pixel region of a tile sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Edge length in pixels
    pub length: u32,
}

/// Destination accepting tile copies at cell granularity
pub trait RenderSurface {
    /// Copy `source` of `sheet` onto the cell at `destination`
    fn blit(&mut self, sheet: &RgbaImage, source: TileRegion, destination: Position);
}

/// RGBA canvas sized in whole tiles
#[derive(Debug, Clone)]
pub struct TileCanvas {
    image: RgbaImage,
    tile_length: u32,
}

/// Pixel dimensions of a `width` x `height` cell canvas
///
/// # Errors
///
/// Returns [`TileError::InvalidParameter`] if a side overflows `u32` or the
/// canvas holds more than [`MAX_CANVAS_PIXELS`] pixels
pub fn canvas_size(width: usize, height: usize, tile_length: u32) -> Result<(u32, u32)> {
    let side = |cells: usize| {
        u64::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(u64::from(tile_length)))
            .and_then(|pixels| u32::try_from(pixels).ok())
    };

    let size = side(width).zip(side(height)).filter(|&(pixel_width, pixel_height)| {
        u64::from(pixel_width) * u64::from(pixel_height) <= MAX_CANVAS_PIXELS
    });

    size.ok_or_else(|| {
        invalid_parameter(
            "tile-length",
            &tile_length,
            &format!(
                "a {width}x{height} grid would exceed {MAX_CANVAS_PIXELS} canvas pixels"
            ),
        )
    })
}

impl TileCanvas {
    /// Transparent canvas of `width` x `height` cells
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas is too large, see [`canvas_size`]
    pub fn new(width: usize, height: usize, tile_length: u32) -> Result<Self> {
        let (pixel_width, pixel_height) = canvas_size(width, height, tile_length)?;
        Ok(Self {
            image: RgbaImage::new(pixel_width, pixel_height),
            tile_length,
        })
    }

    /// Edge length of one cell in pixels
    pub const fn tile_length(&self) -> u32 {
        self.tile_length
    }

    /// Current pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the finished pixels
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl RenderSurface for TileCanvas {
    fn blit(&mut self, sheet: &RgbaImage, source: TileRegion, destination: Position) {
        let tile = imageops::crop_imm(sheet, source.x, source.y, source.length, source.length)
            .to_image();
        let length = i64::from(self.tile_length);

        // Alpha-composited so upper layers only cover what they draw
        imageops::overlay(
            &mut self.image,
            &tile,
            destination.column as i64 * length,
            destination.row as i64 * length,
        );
    }
}

/// One resolved and bounds-checked tile copy
#[derive(Debug, Clone)]
pub struct Blit {
    /// Sheet the tile is copied from
    pub sheet: Arc<RgbaImage>,
    /// Tile region inside the sheet
    pub source: TileRegion,
    /// Destination cell
    pub destination: Position,
}

/// Pixel region of tile (`row`, `column`) in `sheet`
///
/// # Errors
///
/// Returns [`AssetError::TileOutOfBounds`] if the tile does not lie fully
/// inside the sheet
pub fn tile_region(
    identifier: &str,
    sheet: &RgbaImage,
    row: u32,
    column: u32,
    tile_length: u32,
) -> std::result::Result<TileRegion, AssetError> {
    let fits = |index: u32, extent: u32| {
        index
            .checked_add(1)
            .and_then(|end| end.checked_mul(tile_length))
            .is_some_and(|end| end <= extent)
    };

    if fits(row, sheet.height()) && fits(column, sheet.width()) {
        Ok(TileRegion {
            x: column * tile_length,
            y: row * tile_length,
            length: tile_length,
        })
    } else {
        Err(AssetError::TileOutOfBounds {
            identifier: identifier.to_owned(),
            row,
            column,
            sheet_width: sheet.width(),
            sheet_height: sheet.height(),
        })
    }
}

/// Resolve and check every occupied cell of `grid`
///
/// # Errors
///
/// Returns the first [`AssetError`] from resolution or tile bounds checking
pub async fn plan_layer<R: AssetResolver>(
    grid: &Grid<TileValue>,
    resolver: &mut R,
    tile_length: u32,
) -> std::result::Result<Vec<Blit>, AssetError> {
    let mut blits = Vec::with_capacity(grid.occupied_count());

    for (position, cell) in grid.occupied() {
        let sheet = resolver.resolve(&cell.value.image).await?;
        let (row, column) = cell.value.sheet_tile(cell.variant);
        let source = tile_region(&cell.value.image, &sheet, row, column, tile_length)?;
        blits.push(Blit {
            sheet,
            source,
            destination: position,
        });
    }

    Ok(blits)
}

/// Plan every grid in layer order
///
/// # Errors
///
/// Returns the first [`AssetError`] of any layer
pub async fn plan_grids<R: AssetResolver>(
    grids: &[Grid<TileValue>],
    resolver: &mut R,
    tile_length: u32,
) -> std::result::Result<Vec<Vec<Blit>>, AssetError> {
    let mut plans = Vec::with_capacity(grids.len());
    for grid in grids {
        plans.push(plan_layer(grid, resolver, tile_length).await?);
    }
    Ok(plans)
}

/// Draw planned tiles in order
pub fn apply_blits<S: RenderSurface + ?Sized>(surface: &mut S, blits: &[Blit]) {
    for blit in blits {
        surface.blit(&blit.sheet, blit.source, blit.destination);
    }
}

/// Plan every layer, then draw them in order
///
/// # Errors
///
/// Returns the first [`AssetError`] of any layer; nothing is drawn in that case
pub async fn render_grids<R, S>(
    grids: &[Grid<TileValue>],
    resolver: &mut R,
    surface: &mut S,
    tile_length: u32,
) -> std::result::Result<(), AssetError>
where
    R: AssetResolver,
    S: RenderSurface + ?Sized,
{
    let plans = plan_grids(grids, resolver, tile_length).await?;

    for plan in &plans {
        apply_blits(surface, plan);
    }

    Ok(())
}

/// Save `image` as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    image
        .save(output_path)
        .map_err(|e| TileError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

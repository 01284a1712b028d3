//! Generation constants and runtime configuration defaults

/// Side length in cells of the smallest occurrence rectangle
pub const MIN_OCCURRENCE_SIDE: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Consecutive rejected candidates before an occurrence gives up
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Edge length of one tile in pixels, both in sheets and in the output
pub const TILE_LENGTH: u32 = 32;

/// Sheet tile `(row, column)` of the top-left corner of an `edgedTiles` block
pub const EDGED_BLOCK_ORIGIN: (u32, u32) = (2, 0);

// Safety limit to prevent excessive memory allocation
/// Maximum number of pixels in a rendered canvas
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Extension of configuration files picked up from a directory
pub const CONFIGURATION_EXTENSION: &str = "json";
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Delay between GIF animation frames (one frame per layer)
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

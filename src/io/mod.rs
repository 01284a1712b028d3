/// Tile sheet resolution and caching
pub mod assets;
/// Command-line interface and batch processing
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types for every stage of the pipeline
pub mod error;
/// Layer compositing and PNG export
pub mod image;
/// JSON configuration loading
pub mod loader;
/// Progress display for batch runs
pub mod progress;
/// Per-layer GIF capture
pub mod visualization;

//! Command-line interface for batch rendering of layered tile map configurations

use crate::algorithm::executor::{GenerationConfig, Generator};
use crate::analysis::statistics::AnalysisReport;
use crate::io::assets::FileAssetResolver;
use crate::io::configuration::{
    CONFIGURATION_EXTENSION, DEFAULT_MAX_PLACEMENT_ATTEMPTS, DEFAULT_SEED, GIF_FRAME_DELAY_MS,
    OUTPUT_SUFFIX, TILE_LENGTH,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::image::{TileCanvas, apply_blits, export_png, plan_grids};
use crate::io::loader::load_configuration;
use crate::io::progress::ProgressManager;
use crate::io::visualization::LayerFrames;
use crate::math::random::SeededRandom;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "tilelayers")]
#[command(
    author,
    version,
    about = "Generate layered tile maps from JSON configurations"
)]
/// Command-line arguments for the tile map generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Configuration JSON file or directory of configurations to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Consecutive rejected candidates before an occurrence gives up
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_PLACEMENT_ATTEMPTS)]
    pub max_attempts: usize,

    /// Tile edge length in pixels, in sheets and output
    #[arg(short, long, default_value_t = TILE_LENGTH)]
    pub tile_length: u32,

    /// Directory asset identifiers resolve against (defaults to the configuration's directory)
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Export an animated GIF adding one layer per frame
    #[arg(short, long)]
    pub visualize: bool,

    /// Export per-layer statistics as JSON
    #[arg(short, long)]
    pub analysis: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation parameters selected on the command line
    pub const fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            max_placement_attempts: self.max_attempts,
        }
    }

    /// Check parameters clap cannot constrain on its own
    ///
    /// # Errors
    ///
    /// Returns [`crate::TileError::InvalidParameter`] for a zero tile length or
    /// a zero attempt budget
    pub fn validate(&self) -> Result<()> {
        if self.tile_length == 0 {
            return Err(invalid_parameter(
                "tile-length",
                &self.tile_length,
                &"must be at least one pixel",
            ));
        }
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max-attempts",
                &self.max_attempts,
                &"must allow at least one candidate",
            ));
        }
        Ok(())
    }
}

/// Orchestrates batch processing of configuration files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument or target validation fails, or if any
    /// file fails to load, generate, render or export
    pub fn process(&mut self) -> Result<()> {
        self.cli.validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Configuration files selected by the target, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a JSON file nor a readable
    /// directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !is_configuration(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a JSON configuration",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target)
                .map_err(|e| file_system_error(target, "read directory", e))?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| file_system_error(target, "read directory entry", e))?
                    .path();
                if path.is_file() && is_configuration(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a JSON file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if output_path(input_path).exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let configuration = load_configuration(input_path)?;
        let tile_length = self.cli.tile_length;
        let mut canvas = TileCanvas::new(configuration.width, configuration.height, tile_length)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, configuration.layers.len());
        }

        let mut generator =
            Generator::new(SeededRandom::new(self.cli.seed), self.cli.generation_config());
        let mut analysis = self
            .cli
            .analysis
            .then(|| AnalysisReport::new(self.cli.seed));
        let progress = &mut self.progress_manager;
        let mut layers_done = 0;

        let grids = generator.generate_with(&configuration, |grid, report| {
            layers_done += 1;
            if let Some(pm) = progress.as_mut() {
                pm.update_layer(index, layers_done);
            }
            if let Some(report_out) = analysis.as_mut() {
                report_out.record(grid, report);
            }
        })?;

        let mut resolver = FileAssetResolver::new(self.asset_dir(input_path));
        let plans = pollster::block_on(plan_grids(&grids, &mut resolver, tile_length))?;

        let mut frames = self.cli.visualize.then(|| LayerFrames::new(plans.len()));
        for plan in &plans {
            apply_blits(&mut canvas, plan);
            if let Some(ref mut recorder) = frames {
                recorder.capture(canvas.image());
            }
        }

        export_png(canvas.image(), &output_path(input_path))?;

        if let Some(recorder) = frames.filter(|recorder| !recorder.is_empty()) {
            recorder.export_gif(&visualization_path(input_path), GIF_FRAME_DELAY_MS)?;
        }

        if let Some(report) = analysis {
            let analysis_path = analysis_path(input_path);
            let json = report.to_json().map_err(|e| {
                file_system_error(&analysis_path, "serialize analysis", e.into())
            })?;
            std::fs::write(&analysis_path, json)
                .map_err(|e| file_system_error(&analysis_path, "write analysis", e))?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn asset_dir(&self, input_path: &Path) -> PathBuf {
        self.cli.assets.clone().unwrap_or_else(|| {
            input_path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        })
    }
}

fn is_configuration(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(CONFIGURATION_EXTENSION)
}

fn sibling_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

/// Rendered map path: `<stem>_result.png` next to the configuration
pub fn output_path(input_path: &Path) -> PathBuf {
    sibling_path(input_path, OUTPUT_SUFFIX, "png")
}

/// Layer animation path: `<stem>_visualization.gif` next to the configuration
pub fn visualization_path(input_path: &Path) -> PathBuf {
    sibling_path(input_path, "_visualization", "gif")
}

/// Statistics path: `<stem>_analysis.json` next to the configuration
pub fn analysis_path(input_path: &Path) -> PathBuf {
    sibling_path(input_path, "_analysis", "json")
}

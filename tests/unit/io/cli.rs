//! Tests for command-line parsing and batch file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use std::ffi::OsString;
    use std::path::{Path, PathBuf};
    use tilelayers::TileError;
    use tilelayers::io::cli::{Cli, FileProcessor, analysis_path, output_path, visualization_path};
    use tilelayers::io::configuration::{DEFAULT_MAX_PLACEMENT_ATTEMPTS, DEFAULT_SEED, TILE_LENGTH};

    const MAP: &str = r#"{
        "width": 6,
        "height": 4,
        "layers": [
            {"distributions": [{"probability": 1.0, "value": {"image": "sheet.png", "row": 0, "column": 1}}]},
            {"occurrences": [{"ratio": 0.25, "value": {"image": "sheet.png", "row": 0, "column": 0}}]}
        ]
    }"#;

    fn args(target: &Path, extra: &[&str]) -> Vec<OsString> {
        let mut args = vec![OsString::from("tilelayers"), target.as_os_str().to_owned()];
        args.extend(extra.iter().map(OsString::from));
        args
    }

    /// Directory holding `map.json` and a 3x3 sheet of 4-pixel tiles
    fn workspace() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        RgbaImage::from_fn(12, 12, |x, y| Rgba([(x / 4 * 80) as u8, (y / 4 * 80) as u8, 0, 255]))
            .save(dir.path().join("sheet.png"))
            .expect("write sheet");
        std::fs::write(dir.path().join("map.json"), MAP).expect("write configuration");
        dir
    }

    // Tests CLI parsing with only the required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "map.json"]);

        assert_eq!(cli.target, PathBuf::from("map.json"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.max_attempts, DEFAULT_MAX_PLACEMENT_ATTEMPTS);
        assert_eq!(cli.tile_length, TILE_LENGTH);
        assert!(cli.assets.is_none());
        assert!(!cli.visualize && !cli.analysis && !cli.quiet && !cli.no_skip);
    }

    // Tests CLI parsing with all available arguments
    // Verified by swapping long flag names
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "maps",
            "--seed",
            "123",
            "--max-attempts",
            "50",
            "--tile-length",
            "16",
            "--assets",
            "sheets",
            "--visualize",
            "--analysis",
            "--quiet",
            "--no-skip",
        ]);

        assert_eq!(cli.seed, 123);
        assert_eq!(cli.generation_config().max_placement_attempts, 50);
        assert_eq!(cli.tile_length, 16);
        assert_eq!(cli.assets, Some(PathBuf::from("sheets")));
        assert!(cli.visualize && cli.analysis && cli.quiet);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "map.json", "-s", "7", "-m", "9", "-t", "8", "-vaqn"]);

        assert_eq!((cli.seed, cli.max_attempts, cli.tile_length), (7, 9, 8));
        assert!(cli.visualize && cli.analysis && cli.quiet && cli.no_skip);
    }

    // Tests rejection of parameters clap accepts but generation cannot use
    // Verified by skipping argument validation
    #[test]
    fn test_cli_validate_rejects_zero_values() {
        let zero_tile = Cli::parse_from(["program", "map.json", "--tile-length", "0"]);
        assert!(matches!(
            zero_tile.validate(),
            Err(TileError::InvalidParameter {
                parameter: "tile-length",
                ..
            })
        ));

        let zero_attempts = Cli::parse_from(["program", "map.json", "--max-attempts", "0"]);
        assert!(zero_attempts.validate().is_err());

        assert!(Cli::parse_from(["program", "map.json"]).validate().is_ok());
    }

    // Tests names of the files written next to a configuration
    // Verified by keeping the configuration extension on the output
    #[test]
    fn test_output_paths() {
        let input = Path::new("maps/forest.json");

        assert_eq!(output_path(input), PathBuf::from("maps/forest_result.png"));
        assert_eq!(
            visualization_path(input),
            PathBuf::from("maps/forest_visualization.gif")
        );
        assert_eq!(
            analysis_path(input),
            PathBuf::from("maps/forest_analysis.json")
        );
    }

    // Tests directory scanning for configuration files
    // Verified by accepting every file in the directory
    #[test]
    fn test_collect_files_filters_and_sorts() {
        let dir = tempfile::tempdir().expect("temp dir");
        for name in ["b.json", "a.json", "notes.txt"] {
            std::fs::write(dir.path().join(name), "{}").expect("write file");
        }
        std::fs::create_dir(dir.path().join("nested.json")).expect("create dir");
        let processor = FileProcessor::new(Cli::parse_from(args(dir.path(), &["-q"])));

        let files = processor.collect_files().expect("readable directory");

        assert_eq!(
            files,
            vec![dir.path().join("a.json"), dir.path().join("b.json")]
        );
    }

    // Tests rejection of targets that are not configurations
    // Verified by accepting any existing file
    #[test]
    fn test_collect_files_rejects_invalid_targets() {
        let dir = tempfile::tempdir().expect("temp dir");
        let text = dir.path().join("notes.txt");
        std::fs::write(&text, "").expect("write file");

        let wrong_type = FileProcessor::new(Cli::parse_from(args(&text, &["-q"])));
        assert!(wrong_type.collect_files().is_err());

        let missing = FileProcessor::new(Cli::parse_from(args(&dir.path().join("gone"), &["-q"])));
        assert!(matches!(
            missing.collect_files(),
            Err(TileError::InvalidParameter {
                parameter: "target",
                ..
            })
        ));
    }

    // Tests the full pipeline from configuration to exported files
    // Verified by skipping the analysis export
    #[test]
    fn test_process_writes_all_outputs() {
        let dir = workspace();
        let config = dir.path().join("map.json");
        let mut processor = FileProcessor::new(Cli::parse_from(args(
            &config,
            &["--tile-length", "4", "--visualize", "--analysis", "--quiet"],
        )));

        assert!(processor.process().is_ok());

        let rendered = image::open(output_path(&config))
            .expect("rendered map")
            .to_rgba8();
        assert_eq!(rendered.dimensions(), (24, 16));
        assert!(rendered.pixels().all(|pixel| pixel[3] == 255));
        assert!(visualization_path(&config).exists());

        let analysis = std::fs::read_to_string(analysis_path(&config)).expect("analysis json");
        let parsed: serde_json::Value = serde_json::from_str(&analysis).expect("valid json");
        assert_eq!(parsed["seed"], DEFAULT_SEED);
        assert_eq!(parsed["layers"].as_array().map(Vec::len), Some(2));
    }

    // Tests that existing outputs are skipped unless requested otherwise
    // Verified by inverting the skip check
    #[test]
    fn test_existing_output_is_skipped() {
        let dir = workspace();
        let config = dir.path().join("map.json");
        std::fs::write(output_path(&config), b"placeholder").expect("write placeholder");

        let skipping = FileProcessor::new(Cli::parse_from(args(&config, &["-q"])));
        assert_eq!(skipping.collect_files().map(|files| files.len()).ok(), Some(0));

        let forced = FileProcessor::new(Cli::parse_from(args(&config, &["-q", "-n"])));
        assert_eq!(forced.collect_files().map(|files| files.len()).ok(), Some(1));
    }

    // Tests that asset errors abort processing without writing a map
    // Verified by rendering layers whose sheets failed to load
    #[test]
    fn test_process_missing_asset_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = dir.path().join("map.json");
        std::fs::write(&config, MAP).expect("write configuration");
        let mut processor = FileProcessor::new(Cli::parse_from(args(&config, &["-q"])));

        let result = processor.process();

        assert!(matches!(result, Err(TileError::Asset(_))));
        assert!(!output_path(&config).exists());
    }

    // Tests that an oversized canvas is rejected before generation starts
    // Verified by multiplying the canvas size unchecked
    #[test]
    fn test_process_rejects_oversized_canvas() {
        let dir = workspace();
        let config = dir.path().join("map.json");
        let mut processor = FileProcessor::new(Cli::parse_from(args(
            &config,
            &["--tile-length", "1000000000", "--quiet"],
        )));

        let result = processor.process();

        assert!(matches!(
            result,
            Err(TileError::InvalidParameter {
                parameter: "tile-length",
                ..
            })
        ));
        assert!(!output_path(&config).exists());
    }
}

//! CLI entry point for layered tile map generation

use clap::Parser;
use tilelayers::io::cli::{Cli, FileProcessor};

fn main() -> tilelayers::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}

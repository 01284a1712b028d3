//! Layer progress bars for batch runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static LAYER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>24} [{bar:30.green/white}] {pos}/{len} layers")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
});

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] maps [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Layers generated for one configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileProgress {
    /// File name shown next to the bar
    pub name: String,
    /// Layers generated so far
    pub layers_done: usize,
    /// Layers in the configuration
    pub layers: usize,
    /// Whether the file was rendered and exported
    pub complete: bool,
}

impl FileProgress {
    fn label(&self) -> String {
        if self.complete {
            format!("✓ {}", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Shows one bar per recent file, plus a file counter for large batches
///
/// Only the most recently started files get a bar; earlier ones scroll out.
pub struct ProgressManager {
    display: MultiProgress,
    file_counter: Option<ProgressBar>,
    layer_bars: Vec<ProgressBar>,
    files: Vec<FileProgress>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars
    pub fn new() -> Self {
        Self {
            display: MultiProgress::new(),
            file_counter: None,
            layer_bars: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Create the bars for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let counter = ProgressBar::new(file_count as u64).with_style(FILE_STYLE.clone());
            self.file_counter = Some(self.display.add(counter));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0).with_style(LAYER_STYLE.clone());
            self.layer_bars.push(self.display.add(bar));
        }
    }

    /// Begin tracking file `index` with `layers` layers
    pub fn start_file(&mut self, index: usize, path: &Path, layers: usize) {
        if self.files.len() <= index {
            self.files.resize_with(index + 1, FileProgress::default);
        }
        if let Some(file) = self.files.get_mut(index) {
            *file = FileProgress {
                name: path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                layers_done: 0,
                layers,
                complete: false,
            };
        }
        self.redraw();
    }

    /// Record that `layers_done` layers of file `index` are generated
    pub fn update_layer(&mut self, index: usize, layers_done: usize) {
        if let Some(file) = self.files.get_mut(index) {
            file.layers_done = layers_done;
            self.redraw();
        }
    }

    /// Mark file `index` as exported
    pub fn complete_file(&mut self, index: usize) {
        if let Some(counter) = &self.file_counter {
            counter.inc(1);
        }
        if let Some(file) = self.files.get_mut(index) {
            file.layers_done = file.layers;
            file.complete = true;
            self.redraw();
        }
    }

    /// Remove all bars from the terminal
    pub fn finish(&self) {
        if let Some(counter) = &self.file_counter {
            counter.finish();
        }
        let _ = self.display.clear();
    }

    /// Progress of file `index`, if it was started
    pub fn file(&self, index: usize) -> Option<&FileProgress> {
        self.files.get(index).filter(|file| !file.name.is_empty())
    }

    fn redraw(&self) {
        let started: Vec<&FileProgress> = self
            .files
            .iter()
            .filter(|file| !file.name.is_empty())
            .collect();
        let shown = started
            .get(started.len().saturating_sub(self.layer_bars.len())..)
            .unwrap_or_default();

        for (slot, bar) in self.layer_bars.iter().enumerate() {
            match shown.get(slot) {
                Some(file) => {
                    bar.set_length(file.layers as u64);
                    bar.set_position(file.layers_done as u64);
                    bar.set_prefix(file.label());
                }
                None => {
                    bar.set_length(0);
                    bar.set_prefix(String::new());
                }
            }
        }
    }
}

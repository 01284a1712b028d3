//! Frame capture and GIF generation showing layers being composited

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{Result, TileError, file_system_error, invalid_parameter};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Snapshots of the canvas, one per drawn layer
///
/// Records the canvas after each layer so the export replays the
/// composition order.
#[derive(Debug, Default, Clone)]
pub struct LayerFrames {
    frames: Vec<RgbaImage>,
}

impl LayerFrames {
    /// Reserve room for `layer_count` snapshots
    pub fn new(layer_count: usize) -> Self {
        Self {
            frames: Vec::with_capacity(layer_count),
        }
    }

    /// Record the canvas as it looks after the latest layer
    pub fn capture(&mut self, canvas: &RgbaImage) {
        self.frames.push(canvas.clone());
    }

    /// Number of captured snapshots
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if nothing was captured
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Export the snapshots as an animated GIF
    ///
    /// Delays below what viewers reliably honour are raised to that minimum.
    /// The final frame is held longer so the finished map stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "visualization",
                &"empty",
                &"No layer snapshots captured for visualization",
            ));
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let last = self.frames.len() - 1;
        let frames = self.frames.iter().enumerate().map(|(index, image)| {
            let delay = if index == last { delay_ms * 5 } else { delay_ms };
            Frame::from_parts(
                image.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(delay, 1),
            )
        });

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| TileError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }
}

//! Tile sheet resolution with per-identifier caching
//!
//! Resolution is asynchronous so the renderer can be driven by any executor;
//! the generation core never touches assets.

use crate::io::error::AssetError;
use image::RgbaImage;
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

/// Capability turning an asset identifier into a decoded tile sheet
pub trait AssetResolver {
    /// Resolve `identifier`, reusing earlier results for the same identifier
    fn resolve(
        &mut self,
        identifier: &str,
    ) -> impl Future<Output = Result<Arc<RgbaImage>, AssetError>>;
}

/// Loads tile sheets from files below a base directory
#[derive(Debug, Default)]
pub struct FileAssetResolver {
    base_dir: PathBuf,
    cache: HashMap<String, Arc<RgbaImage>>,
}

impl FileAssetResolver {
    /// Resolve identifiers as paths relative to `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            cache: HashMap::new(),
        }
    }

    /// Directory identifiers are resolved against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Number of sheets decoded so far
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}

impl AssetResolver for FileAssetResolver {
    async fn resolve(&mut self, identifier: &str) -> Result<Arc<RgbaImage>, AssetError> {
        if let Some(sheet) = self.cache.get(identifier) {
            return Ok(Arc::clone(sheet));
        }

        let path = self.base_dir.join(identifier);
        trace!(identifier, path = %path.display(), "loading tile sheet");

        let sheet = image::open(&path)
            .map_err(|source| AssetError::Load {
                identifier: identifier.to_owned(),
                source,
            })?
            .to_rgba8();

        let sheet = Arc::new(sheet);
        self.cache.insert(identifier.to_owned(), Arc::clone(&sheet));
        Ok(sheet)
    }
}

/// Serves tile sheets registered up front, e.g. embedded or generated ones
#[derive(Debug, Default, Clone)]
pub struct MemoryAssetResolver {
    sheets: HashMap<String, Arc<RgbaImage>>,
}

impl MemoryAssetResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `sheet` under `identifier`, replacing any earlier sheet
    pub fn insert(&mut self, identifier: impl Into<String>, sheet: RgbaImage) {
        self.sheets.insert(identifier.into(), Arc::new(sheet));
    }

    /// Builder form of [`MemoryAssetResolver::insert`]
    #[must_use]
    pub fn with_sheet(mut self, identifier: impl Into<String>, sheet: RgbaImage) -> Self {
        self.insert(identifier, sheet);
        self
    }
}

impl AssetResolver for MemoryAssetResolver {
    async fn resolve(&mut self, identifier: &str) -> Result<Arc<RgbaImage>, AssetError> {
        self.sheets
            .get(identifier)
            .cloned()
            .ok_or_else(|| AssetError::Missing {
                identifier: identifier.to_owned(),
            })
    }
}

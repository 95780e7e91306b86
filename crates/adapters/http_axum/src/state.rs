//! Shared state for axum handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the exported site lives on disk.
///
/// `Clone` is cheap: paths are shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SiteState {
    dist_dir: Arc<PathBuf>,
    index: Arc<PathBuf>,
}

impl SiteState {
    /// Serve `dist_dir`, using `index` (relative to `dist_dir`) as the entry
    /// document.
    pub fn new(dist_dir: impl Into<PathBuf>, index: impl AsRef<Path>) -> Self {
        let dist_dir = dist_dir.into();
        let index = dist_dir.join(index);
        Self {
            dist_dir: Arc::new(dist_dir),
            index: Arc::new(index),
        }
    }

    #[must_use]
    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Full path of the entry document.
    #[must_use]
    pub fn index_path(&self) -> &Path {
        &self.index
    }
}

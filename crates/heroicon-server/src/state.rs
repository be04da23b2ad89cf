//! Shared request state

use heroicon_codec::PublicPathConfig;
use heroicon_index::DEFAULT_EXTENSION;
use std::path::{Path, PathBuf};

/// Everything a request handler needs to know about the filesystem layout
#[derive(Debug, Clone)]
pub struct ServerState {
    custom_dir: PathBuf,
    indexes_dir: PathBuf,
    extension: String,
    public_path: PublicPathConfig,
}

impl ServerState {
    /// Create state for a custom icon directory and an index directory
    #[must_use]
    pub fn new(custom_dir: impl Into<PathBuf>, indexes_dir: impl Into<PathBuf>) -> Self {
        Self {
            custom_dir: custom_dir.into(),
            indexes_dir: indexes_dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            public_path: PublicPathConfig::default(),
        }
    }

    /// With icon file extension
    #[inline]
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// With public base path for bundled icon URLs
    #[inline]
    #[must_use]
    pub fn with_public_path(mut self, public_path: PublicPathConfig) -> Self {
        self.public_path = public_path;
        self
    }

    /// Directory custom icons are uploaded to
    #[inline]
    #[must_use]
    pub fn custom_dir(&self) -> &Path {
        &self.custom_dir
    }

    /// Directory holding the bundled style indexes
    #[inline]
    #[must_use]
    pub fn indexes_dir(&self) -> &Path {
        &self.indexes_dir
    }

    /// Icon file extension
    #[inline]
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Public base path for bundled icon URLs
    #[inline]
    #[must_use]
    pub fn public_path(&self) -> &PublicPathConfig {
        &self.public_path
    }
}

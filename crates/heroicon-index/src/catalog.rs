//! In-memory catalog of available icons
//!
//! Loaded from the index files written by [`IndexBuilder`](crate::IndexBuilder),
//! with custom icons attached from a directory listing. Searching mirrors the
//! picker: a trimmed, case-insensitive substring match that keeps index order.

use crate::builder::INDEX_EXTENSION;
use crate::error::{IndexError, IndexResult};
use heroicon_codec::IconStyle;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Icon names per style
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconCatalog {
    styles: BTreeMap<IconStyle, Vec<String>>,
}

impl IconCatalog {
    /// Create empty catalog
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the bundled style indexes from `indexes_dir`
    ///
    /// A style without an index file gets an empty list.
    ///
    /// # Errors
    /// - [`IndexError::Access`] if an index exists but cannot be read
    /// - [`IndexError::Decode`] if an index is not a JSON array of strings
    pub fn load(indexes_dir: &Path) -> IndexResult<Self> {
        let mut catalog = Self::new();
        for style in IconStyle::BUNDLED {
            let path = indexes_dir.join(format!("{style}.{INDEX_EXTENSION}"));
            let names = match fs::read(&path) {
                Ok(bytes) => serde_json::from_slice(&bytes)
                    .map_err(|source| IndexError::Decode { path, source })?,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!("No index for {} at {}", style, path.display());
                    Vec::new()
                }
                Err(e) => return Err(IndexError::access(path, e)),
            };
            catalog.insert(style, names);
        }
        Ok(catalog)
    }

    /// Replace the names for a style
    pub fn insert(&mut self, style: IconStyle, names: Vec<String>) {
        self.styles.insert(style, names);
    }

    /// With custom icon names attached
    #[inline]
    #[must_use]
    pub fn with_custom(mut self, names: Vec<String>) -> Self {
        self.insert(IconStyle::Custom, names);
        self
    }

    /// Names for a style, empty if unknown
    #[must_use]
    pub fn icons(&self, style: IconStyle) -> &[String] {
        self.styles
            .get(&style)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Names for a style matching `query`
    #[must_use]
    pub fn search(&self, style: IconStyle, query: &str) -> Vec<&str> {
        filter_names(self.icons(style), query)
    }

    /// Total names across all styles
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.values().map(Vec::len).sum()
    }

    /// Check if the catalog holds no names
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Names containing `query`, case-insensitively
///
/// The query is trimmed first; a blank query matches everything.
#[must_use]
pub fn filter_names<'a>(names: &'a [String], query: &str) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    names
        .iter()
        .map(String::as_str)
        .filter(|name| query.is_empty() || name.to_lowercase().contains(&query))
        .collect()
}

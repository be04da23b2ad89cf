//! Directory scanning
//!
//! Collects icon names from the files directly inside a directory.

use crate::error::{IndexError, IndexResult};
use std::fs;
use std::path::Path;

/// Extension scanned for when none is configured
pub const DEFAULT_EXTENSION: &str = "svg";

/// Sorted icon names of the files in `dir` with the given extension
///
/// Only regular files directly inside `dir` are considered; hidden files and
/// subdirectories are ignored. The extension match is case-insensitive and a
/// leading `.` on `extension` is accepted. Names are sorted by codepoint,
/// case-sensitive.
///
/// # Errors
/// Returns [`IndexError::Access`] if the directory cannot be read
pub fn scan_icon_names(dir: &Path, extension: &str) -> IndexResult<Vec<String>> {
    let extension = extension.trim_start_matches('.');
    let entries = fs::read_dir(dir).map_err(|e| IndexError::access(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IndexError::access(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            tracing::warn!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };
        if file_name.starts_with('.') {
            continue;
        }

        if let Some(name) = icon_name(file_name, extension) {
            names.push(name.to_string());
        }
    }

    names.sort_unstable();
    Ok(names)
}

/// Icon name of a file name, if its extension matches
///
/// ```rust
/// use heroicon_index::icon_name;
///
/// assert_eq!(icon_name("bell.SVG", "svg"), Some("bell"));
/// assert_eq!(icon_name("bell.png", "svg"), None);
/// ```
#[must_use]
pub fn icon_name<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    (!stem.is_empty() && ext.eq_ignore_ascii_case(extension)).then_some(stem)
}

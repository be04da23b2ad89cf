//! On-demand listing of the custom icon directory

use crate::error::{IndexError, IndexResult};
use crate::scan::scan_icon_names;
use serde::Serialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Icon names found in a directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryListing {
    /// Sorted icon names without extension
    pub names: Vec<String>,
    /// Whether the directory had to be created for this call
    pub created: bool,
}

/// List icons in `dir`, creating it first if it does not exist
///
/// Safe to call repeatedly and concurrently: creating a directory that
/// appeared in the meantime is not an error.
///
/// # Errors
/// Returns [`IndexError::Access`] if the directory cannot be created or read
pub fn list_directory(dir: &Path, extension: &str) -> IndexResult<DirectoryListing> {
    let created = ensure_directory(dir)?;
    let names = scan_icon_names(dir, extension)?;
    Ok(DirectoryListing { names, created })
}

/// Create `dir` and its parents unless it already exists
///
/// Returns `true` if the directory was missing.
///
/// # Errors
/// Returns [`IndexError::Access`] if creation fails
pub fn ensure_directory(dir: &Path) -> IndexResult<bool> {
    if dir.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(dir).map_err(|e| IndexError::access(dir, e))?;
    tracing::debug!("Created directory {}", dir.display());
    Ok(true)
}

/// Join `relative` onto `root`, refusing anything that could leave `root`
///
/// Absolute paths and `..` components are rejected. `.` components are
/// allowed.
///
/// # Errors
/// Returns [`IndexError::OutsideRoot`]
pub fn resolve_within(root: &Path, relative: &Path) -> IndexResult<PathBuf> {
    let escapes = relative
        .components()
        .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(IndexError::outside_root(relative, root));
    }
    Ok(root.join(relative))
}

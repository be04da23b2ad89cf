//! Publishing the bundled icon tree into the public web root

use crate::error::{IndexError, IndexResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Counts from a publish run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Files written to the destination
    pub copied: usize,
    /// Existing destination files left untouched
    pub skipped: usize,
}

/// Copy every file under `source` into `destination`
///
/// Directory structure is mirrored. Files already present at the destination
/// are only overwritten when `force` is set. A missing `source` is logged and
/// publishes nothing.
///
/// # Errors
/// Returns [`IndexError::Access`] if a directory cannot be read or created, or
/// a file cannot be copied
pub fn publish(source: &Path, destination: &Path, force: bool) -> IndexResult<PublishReport> {
    let mut report = PublishReport::default();
    if !source.is_dir() {
        tracing::warn!("Can't locate path: {} (nothing published)", source.display());
        return Ok(report);
    }

    let mut pending: Vec<(PathBuf, PathBuf)> =
        vec![(source.to_path_buf(), destination.to_path_buf())];

    while let Some((from_dir, to_dir)) = pending.pop() {
        fs::create_dir_all(&to_dir).map_err(|e| IndexError::access(&to_dir, e))?;

        let entries = fs::read_dir(&from_dir).map_err(|e| IndexError::access(&from_dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| IndexError::access(&from_dir, e))?;
            let from = entry.path();
            let to = to_dir.join(entry.file_name());

            if from.is_dir() {
                pending.push((from, to));
                continue;
            }

            if to.exists() && !force {
                report.skipped += 1;
                continue;
            }

            fs::copy(&from, &to).map_err(|e| IndexError::access(&to, e))?;
            report.copied += 1;
        }
    }

    tracing::info!(
        "Published {} into {} ({} copied, {} skipped)",
        source.display(),
        destination.display(),
        report.copied,
        report.skipped
    );
    Ok(report)
}

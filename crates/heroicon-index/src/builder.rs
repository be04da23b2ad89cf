//! Index generation
//!
//! Scans one source directory per style and writes the sorted icon names of
//! each as a JSON array to `<output>/<style>.json`.
//!
//! # Behavior
//! - Styles are processed in the order the caller provides them
//! - A missing source directory skips that style with a warning
//! - Index files are replaced whole, never written in place
//! - Unchanged sources produce byte-identical index files

use crate::error::{IndexError, IndexResult};
use crate::scan::scan_icon_names;
use heroicon_codec::IconStyle;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Extension of written index files
pub const INDEX_EXTENSION: &str = "json";

/// Directory, relative to the bundled icon root, that holds index files
pub const INDEXES_DIR: &str = "indexes";

/// One style to index and where its icons live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSource {
    /// Style name, used as the index file stem
    pub style: String,
    /// Directory holding the style's icon files
    pub dir: PathBuf,
}

impl StyleSource {
    /// Create new style source
    #[inline]
    #[must_use]
    pub fn new(style: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            style: style.into(),
            dir: dir.into(),
        }
    }
}

/// Standard sources for the bundled library under `root`
///
/// Yields solid, outline, mini and micro, each pointing at its size/fill
/// directory (for example `<root>/20/solid` for mini).
#[must_use]
pub fn bundled_style_sources(root: &Path) -> Vec<StyleSource> {
    IconStyle::BUNDLED
        .into_iter()
        .filter_map(|style| {
            style
                .folder()
                .map(|folder| StyleSource::new(style.as_str(), root.join(folder)))
        })
        .collect()
}

/// Why a style was not indexed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Source directory does not exist
    MissingSourceDirectory(PathBuf),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSourceDirectory(dir) => {
                write!(f, "missing directory: {}", dir.display())
            }
        }
    }
}

/// Result of indexing a single style
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleOutcome {
    /// Index written
    Written {
        /// Index file path
        path: PathBuf,
        /// Number of icon names in the index
        count: usize,
    },
    /// Style skipped
    Skipped(SkipReason),
}

/// Outcome for one style of a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleReport {
    /// Style name
    pub style: String,
    /// What happened
    pub outcome: StyleOutcome,
}

/// Per-style results of an index build, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    styles: Vec<StyleReport>,
}

impl BuildReport {
    /// All per-style reports
    #[inline]
    #[must_use]
    pub fn styles(&self) -> &[StyleReport] {
        &self.styles
    }

    /// Report for a style
    #[must_use]
    pub fn get(&self, style: &str) -> Option<&StyleOutcome> {
        self.styles
            .iter()
            .find(|report| report.style == style)
            .map(|report| &report.outcome)
    }

    /// Styles that were skipped, with their reasons
    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.styles.iter().filter_map(|report| match &report.outcome {
            StyleOutcome::Skipped(reason) => Some((report.style.as_str(), reason)),
            StyleOutcome::Written { .. } => None,
        })
    }

    /// Number of indexes written
    #[must_use]
    pub fn written_count(&self) -> usize {
        self.styles
            .iter()
            .filter(|report| matches!(report.outcome, StyleOutcome::Written { .. }))
            .count()
    }

    /// Total icon names across written indexes
    #[must_use]
    pub fn total_icons(&self) -> usize {
        self.styles
            .iter()
            .map(|report| match report.outcome {
                StyleOutcome::Written { count, .. } => count,
                StyleOutcome::Skipped(_) => 0,
            })
            .sum()
    }

    /// Check if every style was written
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped().next().is_none()
    }

    fn push(&mut self, style: String, outcome: StyleOutcome) {
        self.styles.push(StyleReport { style, outcome });
    }
}

/// Writes style indexes into an output directory
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    output_dir: PathBuf,
    extension: String,
}

impl IndexBuilder {
    /// Create builder writing into `output_dir`, scanning for `.svg` files
    #[inline]
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            extension: crate::scan::DEFAULT_EXTENSION.to_string(),
        }
    }

    /// With source file extension
    #[inline]
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Output directory
    #[inline]
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the index file for a style
    #[inline]
    #[must_use]
    pub fn index_path(&self, style: &str) -> PathBuf {
        self.output_dir.join(format!("{style}.{INDEX_EXTENSION}"))
    }

    /// Build indexes for every source, in order
    ///
    /// # Errors
    /// Returns [`IndexError::Access`] if the output directory cannot be
    /// created or a present source directory cannot be read or written.
    /// Missing source directories are reported, not returned as errors.
    pub fn build<I>(&self, sources: I) -> IndexResult<BuildReport>
    where
        I: IntoIterator<Item = StyleSource>,
    {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| IndexError::access(&self.output_dir, e))?;

        let mut report = BuildReport::default();
        for source in sources {
            let outcome = self.build_style(&source.style, &source.dir)?;
            report.push(source.style, outcome);
        }
        Ok(report)
    }

    /// Build the index for a single style
    ///
    /// # Errors
    /// Same as [`IndexBuilder::build`]
    pub fn build_style(&self, style: &str, dir: &Path) -> IndexResult<StyleOutcome> {
        if !dir.is_dir() {
            tracing::warn!("Missing directory: {} (skipping {})", dir.display(), style);
            return Ok(StyleOutcome::Skipped(SkipReason::MissingSourceDirectory(
                dir.to_path_buf(),
            )));
        }

        let names = scan_icon_names(dir, &self.extension)?;
        let path = self.index_path(style);
        write_index(&path, &names)?;

        tracing::info!("Wrote index: {} ({} icons)", path.display(), names.len());
        Ok(StyleOutcome::Written {
            path,
            count: names.len(),
        })
    }
}

/// Build indexes for `sources` into `output_dir`
///
/// Convenience wrapper around [`IndexBuilder`].
///
/// # Errors
/// Same as [`IndexBuilder::build`]
pub fn build_indexes<I>(sources: I, output_dir: &Path, extension: &str) -> IndexResult<BuildReport>
where
    I: IntoIterator<Item = StyleSource>,
{
    IndexBuilder::new(output_dir)
        .with_extension(extension)
        .build(sources)
}

/// Render names as a pretty-printed JSON array with four-space indentation
///
/// Non-ASCII characters are written as lowercase `\uXXXX` escapes. Slashes
/// are left unescaped.
///
/// # Errors
/// Returns the serializer error (practically unreachable for strings)
pub fn render_index(names: &[String]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = AsciiFormatter(PrettyFormatter::with_indent(b"    "));
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    names.serialize(&mut serializer)?;
    Ok(buf)
}

/// Pretty formatter that keeps string output ASCII-only
struct AsciiFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut units = [0u16; 2];
        let mut ascii = [0u8; 4];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(c.encode_utf8(&mut ascii).as_bytes())?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Replace the index at `path` with `names`
///
/// Writes to a temporary file next to `path` and renames it into place.
///
/// # Errors
/// Returns [`IndexError::Encode`] or [`IndexError::Access`]
pub fn write_index(path: &Path, names: &[String]) -> IndexResult<()> {
    let body = render_index(names).map_err(|source| IndexError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| IndexError::access(dir, e))?;
    tmp.write_all(&body)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| IndexError::access(tmp.path(), e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|e| IndexError::access(tmp.path(), e))?;
    }

    tmp.persist(path)
        .map_err(|e| IndexError::access(path, e.error))?;
    Ok(())
}

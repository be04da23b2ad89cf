//! Heroicon index builder
//!
//! Filesystem side of the icon picker: everything that reads or writes icon
//! directories.
//!
//! # Core Operations
//!
//! - **Build**: [`build_indexes`] scans one directory per style and writes a
//!   sorted JSON array of icon names for each
//! - **List**: [`list_directory`] lists the custom icon directory, creating it
//!   on first use
//! - **Publish**: [`publish`] copies the bundled tree into the public web root
//! - **Search**: [`IconCatalog`] loads written indexes and filters them
//!
//! # Layout
//!
//! ```text
//! resources/icons/
//! ├── 24/solid/*.svg      solid
//! ├── 24/outline/*.svg    outline
//! ├── 20/solid/*.svg      mini
//! ├── 16/solid/*.svg      micro
//! └── indexes/<style>.json
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use heroicon_index::{bundled_style_sources, build_indexes, INDEXES_DIR};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), heroicon_index::IndexError> {
//! let root = Path::new("resources/icons");
//! let report = build_indexes(bundled_style_sources(root), &root.join(INDEXES_DIR), "svg")?;
//! for (style, reason) in report.skipped() {
//!     eprintln!("{style}: {reason}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod builder;
pub mod catalog;
pub mod error;
pub mod listing;
pub mod publish;
mod scan;

// Re-exports for convenience
pub use builder::{
    build_indexes, bundled_style_sources, render_index, write_index, BuildReport, IndexBuilder,
    SkipReason, StyleOutcome, StyleReport, StyleSource, INDEXES_DIR, INDEX_EXTENSION,
};
pub use catalog::{filter_names, IconCatalog};
pub use error::{IndexError, IndexResult};
pub use listing::{ensure_directory, list_directory, resolve_within, DirectoryListing};
pub use publish::{publish, PublishReport};
pub use scan::{icon_name, scan_icon_names, DEFAULT_EXTENSION};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Testing utilities for the Heroicon Plus workspace
//!
//! Temporary icon trees laid out the way the bundled library and a public web
//! root are.

#![allow(missing_docs)]

use heroicon_codec::IconStyle;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SVG_BODY: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"/>"#;

/// Temporary workspace holding a bundled icon tree and a public root
pub struct IconTree {
    dir: TempDir,
}

impl IconTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Bundled icon root (`resources/icons`)
    pub fn source_dir(&self) -> PathBuf {
        self.root().join("resources/icons")
    }

    /// Public web root (`public`)
    pub fn public_dir(&self) -> PathBuf {
        self.root().join("public")
    }

    pub fn style_dir(&self, style: IconStyle) -> PathBuf {
        let folder = style.folder().expect("bundled style");
        self.source_dir().join(folder)
    }

    /// Write files into a bundled style directory, creating it
    pub fn with_style(self, style: IconStyle, files: &[&str]) -> Self {
        let dir = self.style_dir(style);
        write_files(&dir, files);
        self
    }

    /// Write files into `public/<relative>`
    pub fn with_public_files(self, relative: &str, files: &[&str]) -> Self {
        write_files(&self.public_dir().join(relative), files);
        self
    }
}

impl Default for IconTree {
    fn default() -> Self {
        Self::new()
    }
}

pub fn write_files(dir: &Path, files: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for file in files {
        fs::write(dir.join(file), SVG_BODY).unwrap();
    }
}

/// Tree with every bundled style populated
pub fn full_icon_tree() -> IconTree {
    IconTree::new()
        .with_style(IconStyle::Solid, &["bell.svg", "academic-cap.svg"])
        .with_style(IconStyle::Outline, &["bell.svg", "bolt.svg", "README.md"])
        .with_style(IconStyle::Mini, &["x-mark.svg"])
        .with_style(IconStyle::Micro, &["check.svg", "Check.SVG"])
}

//! Error types for index generation and directory listing
//!
//! A missing source directory during an index build is not an error; it is
//! reported per style in the build report. Everything here is a failure of
//! the operation that raised it.

use std::path::{Path, PathBuf};

/// Errors raised by filesystem-backed icon operations
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Directory creation, listing, read or write failed
    #[error("filesystem access failed for {path}: {source}")]
    Access {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configured path would leave its allowed root
    #[error("path '{path}' escapes allowed root '{root}'")]
    OutsideRoot {
        /// Offending path
        path: PathBuf,
        /// Root the path must stay inside
        root: PathBuf,
    },

    /// Index could not be encoded
    #[error("failed to encode index {path}: {source}")]
    Encode {
        /// Index file being written
        path: PathBuf,
        /// Serializer error
        #[source]
        source: serde_json::Error,
    },

    /// Index file is not a JSON array of strings
    #[error("malformed index {path}: {source}")]
    Decode {
        /// Index file being read
        path: PathBuf,
        /// Parse error
        #[source]
        source: serde_json::Error,
    },
}

impl IndexError {
    /// Create access error for path
    pub fn access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Access {
            path: path.into(),
            source,
        }
    }

    /// Create error for a path escaping its root
    pub fn outside_root(path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self::OutsideRoot {
            path: path.into(),
            root: root.into(),
        }
    }

    /// Check if this is a filesystem access failure
    #[inline]
    #[must_use]
    pub fn is_access(&self) -> bool {
        matches!(self, Self::Access { .. } | Self::OutsideRoot { .. })
    }

    /// Path the error refers to
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Access { path, .. }
            | Self::OutsideRoot { path, .. }
            | Self::Encode { path, .. }
            | Self::Decode { path, .. } => path,
        }
    }
}

/// Result type alias for index operations
pub type IndexResult<T> = Result<T, IndexError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn access_error_display() {
        let err = IndexError::access(
            "/srv/icons",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "filesystem access failed for /srv/icons: denied"
        );
        assert!(err.is_access());
    }

    #[test]
    fn outside_root_is_access_kind() {
        let err = IndexError::outside_root("../etc", "/srv/public");
        assert!(err.is_access());
        assert_eq!(err.path(), Path::new("../etc"));
    }

    #[test]
    fn decode_error_keeps_path() {
        let source = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err = IndexError::Decode {
            path: PathBuf::from("indexes/solid.json"),
            source,
        };
        assert!(!err.is_access());
        assert_eq!(err.path(), Path::new("indexes/solid.json"));
        assert!(err.to_string().starts_with("malformed index indexes/solid.json"));
    }
}

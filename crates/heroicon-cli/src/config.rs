//! CLI configuration
//!
//! Loaded from a TOML file; every key is optional.
//!
//! ```toml
//! namespace = "heroicon-plus"
//! public_path = "/vendor/heroicon-plus"
//! source_dir = "resources/icons"
//! public_dir = "public"
//! custom_icons_dir = "assets/icons"
//! extension = "svg"
//!
//! [server]
//! bind = "127.0.0.1:8080"
//! ```

use heroicon_codec::{PublicPathConfig, DEFAULT_NAMESPACE};
use heroicon_index::{resolve_within, IndexResult, DEFAULT_EXTENSION, INDEXES_DIR};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Workspace configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroiconConfig {
    /// Vendor namespace bundled icons are published under
    pub namespace: String,
    /// Public base path for bundled icon URLs, `/vendor/<namespace>` if unset
    pub public_path: Option<PublicPathConfig>,
    /// Bundled icon tree
    pub source_dir: PathBuf,
    /// Public web root
    pub public_dir: PathBuf,
    /// Custom icon directory, relative to `public_dir`
    pub custom_icons_dir: PathBuf,
    /// Icon file extension
    pub extension: String,
    /// HTTP server settings
    pub server: ServerConfig,
}

impl HeroiconConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns the TOML deserialization error
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// With namespace
    #[inline]
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// With explicit public base path
    #[inline]
    #[must_use]
    pub fn with_public_path(mut self, public_path: impl Into<PublicPathConfig>) -> Self {
        self.public_path = Some(public_path.into());
        self
    }

    /// With bundled icon tree
    #[inline]
    #[must_use]
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// With public web root
    #[inline]
    #[must_use]
    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = dir.into();
        self
    }

    /// Effective public base path
    #[must_use]
    pub fn public_path(&self) -> PublicPathConfig {
        self.public_path
            .clone()
            .unwrap_or_else(|| PublicPathConfig::for_namespace(&self.namespace))
    }

    /// Directory index files are written to
    #[must_use]
    pub fn indexes_dir(&self) -> PathBuf {
        self.source_dir.join(INDEXES_DIR)
    }

    /// Directory the bundled tree is published to
    #[must_use]
    pub fn publish_dir(&self) -> PathBuf {
        self.public_dir.join("vendor").join(&self.namespace)
    }

    /// Absolute custom icon directory
    ///
    /// # Errors
    /// Returns [`heroicon_index::IndexError::OutsideRoot`] if the configured
    /// directory would leave `public_dir`
    pub fn custom_dir(&self) -> IndexResult<PathBuf> {
        resolve_within(&self.public_dir, &self.custom_icons_dir)
    }
}

impl Default for HeroiconConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            public_path: None,
            source_dir: PathBuf::from("resources/icons"),
            public_dir: PathBuf::from("public"),
            custom_icons_dir: PathBuf::from("assets/icons"),
            extension: DEFAULT_EXTENSION.to_string(),
            server: ServerConfig::default(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Listen address
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

/// Errors loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("io error reading {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid configuration
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// TOML error
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config = HeroiconConfig::from_toml("").unwrap();
        assert_eq!(config, HeroiconConfig::default());
        assert_eq!(config.public_path().base(), "/vendor/heroicon-plus");
        assert_eq!(config.publish_dir(), Path::new("public/vendor/heroicon-plus"));
        assert_eq!(config.indexes_dir(), Path::new("resources/icons/indexes"));
    }

    #[test]
    fn namespace_drives_default_public_path() {
        let config = HeroiconConfig::from_toml(r#"namespace = "acme-icons""#).unwrap();
        assert_eq!(config.public_path().base(), "/vendor/acme-icons");
    }

    #[test]
    fn explicit_public_path_wins() {
        let config = HeroiconConfig::from_toml(
            r#"
            namespace = "acme-icons"
            public_path = "/static/icons/"

            [server]
            bind = "0.0.0.0:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.public_path().trimmed_base(), "/static/icons");
        assert_eq!(config.server.bind.port(), 9000);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(HeroiconConfig::from_toml("colour = \"blue\"").is_err());
    }

    #[test]
    fn custom_dir_stays_inside_public_root() {
        let config = HeroiconConfig::new().with_public_dir("/srv/public");
        assert_eq!(config.custom_dir().unwrap(), Path::new("/srv/public/assets/icons"));

        let escaping = HeroiconConfig::from_toml(r#"custom_icons_dir = "../uploads""#).unwrap();
        assert!(escaping.custom_dir().is_err());
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let err = HeroiconConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

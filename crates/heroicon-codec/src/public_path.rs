//! Public path configuration
//!
//! Base path that published bundled icons are served from.

use serde::{Deserialize, Serialize};

/// Namespace used when none is configured
pub const DEFAULT_NAMESPACE: &str = "heroicon-plus";

/// Fixed public mount point for custom (uploaded) icons
pub const CUSTOM_ICONS_MOUNT: &str = "/assets/icons";

/// Public base path for bundled icon URLs
///
/// Defaults to `/vendor/<namespace>`. Serialized as a bare string so it can sit
/// directly under a `public_path` configuration key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicPathConfig {
    base: String,
}

impl PublicPathConfig {
    /// Create config with an explicit base path
    #[inline]
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Default layout for a namespace: `/vendor/<namespace>`
    #[inline]
    #[must_use]
    pub fn for_namespace(namespace: &str) -> Self {
        Self::new(format!("/vendor/{namespace}"))
    }

    /// Base path as configured
    #[inline]
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Base path without trailing slashes
    #[inline]
    #[must_use]
    pub fn trimmed_base(&self) -> &str {
        self.base.trim_end_matches('/')
    }
}

impl Default for PublicPathConfig {
    fn default() -> Self {
        Self::for_namespace(DEFAULT_NAMESPACE)
    }
}

impl From<&str> for PublicPathConfig {
    fn from(base: &str) -> Self {
        Self::new(base)
    }
}

impl From<String> for PublicPathConfig {
    fn from(base: String) -> Self {
        Self::new(base)
    }
}

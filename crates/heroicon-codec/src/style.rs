//! Icon styles and their directory layout
//!
//! Provides [`IconStyle`] and the fixed style → directory mapping used for
//! bundled icons.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Visual variant of an icon
///
/// The four bundled variants live under size/fill directories
/// (see [`IconStyle::folder`]). [`IconStyle::Custom`] refers to user uploaded
/// SVGs and has no bundled directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    /// 24x24 stroke icons
    Outline,
    /// 24x24 filled icons
    Solid,
    /// 20x20 filled icons
    Mini,
    /// 16x16 filled icons
    Micro,
    /// User uploaded icons
    Custom,
}

impl IconStyle {
    /// All styles in picker order
    pub const ALL: [Self; 5] = [
        Self::Outline,
        Self::Solid,
        Self::Mini,
        Self::Micro,
        Self::Custom,
    ];

    /// Styles shipped with the bundled library, in index build order
    pub const BUNDLED: [Self; 4] = [Self::Solid, Self::Outline, Self::Mini, Self::Micro];

    /// Style used when none is given or the given one is unknown
    pub const DEFAULT: Self = Self::Solid;

    /// Canonical lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Solid => "solid",
            Self::Mini => "mini",
            Self::Micro => "micro",
            Self::Custom => "custom",
        }
    }

    /// Relative directory of a bundled style, `None` for [`IconStyle::Custom`]
    #[inline]
    #[must_use]
    pub const fn folder(self) -> Option<&'static str> {
        match self {
            Self::Solid => Some("24/solid"),
            Self::Outline => Some("24/outline"),
            Self::Mini => Some("20/solid"),
            Self::Micro => Some("16/solid"),
            Self::Custom => None,
        }
    }

    /// Look up a style by its exact name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == name)
    }

    /// Resolve a raw style name, falling back to [`IconStyle::DEFAULT`]
    #[inline]
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Self::DEFAULT)
    }

    /// Check if icons of this style ship with the bundled library
    #[inline]
    #[must_use]
    pub const fn is_bundled(self) -> bool {
        !matches!(self, Self::Custom)
    }
}

impl Default for IconStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for IconStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| StyleError::Unknown(s.to_string()))
    }
}

/// Errors related to icon styles
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// Name does not match any style
    #[error("unknown icon style: '{0}' (expected outline, solid, mini, micro or custom)")]
    Unknown(String),
}

//! Stored icon references
//!
//! An [`IconReference`] is the decoded form of the value a content entry stores
//! for an icon field: `"<style>:<name>"`, or an empty string when nothing is
//! selected.

use crate::public_path::{PublicPathConfig, CUSTOM_ICONS_MOUNT};
use crate::style::IconStyle;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt::{self, Display, Formatter};

/// Delimiter between style and name in the stored form
pub const DELIMITER: char = ':';

/// File extension of every served icon
pub const ICON_EXTENSION: &str = "svg";

/// Reference to a single icon
///
/// The style is kept exactly as stored so that unknown styles survive a
/// parse/encode cycle; it is only mapped onto an [`IconStyle`] at resolution
/// time. An empty style becomes `solid` and an empty name becomes `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconReference {
    style: String,
    name: Option<String>,
}

impl IconReference {
    /// Create reference from a raw style and name
    #[must_use]
    pub fn new(style: impl Into<String>, name: impl Into<String>) -> Self {
        let style = style.into();
        let name = name.into();
        Self {
            style: if style.is_empty() {
                IconStyle::DEFAULT.as_str().to_string()
            } else {
                style
            },
            name: (!name.is_empty()).then_some(name),
        }
    }

    /// Create reference for a known style
    #[inline]
    #[must_use]
    pub fn with_style(style: IconStyle, name: impl Into<String>) -> Self {
        Self::new(style.as_str(), name)
    }

    /// Reference with no icon selected
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            style: IconStyle::DEFAULT.as_str().to_string(),
            name: None,
        }
    }

    /// Decode a stored value
    ///
    /// `None`, empty and whitespace-only input decode to [`IconReference::empty`].
    /// Only the first `:` separates style from name; a value without one is a
    /// bare name in the default style. Styles are not validated here.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
            return Self::empty();
        };

        match raw.split_once(DELIMITER) {
            Some((style, name)) => Self::new(style, name),
            None => Self::with_style(IconStyle::DEFAULT, raw),
        }
    }

    /// Decode a loosely typed stored value
    ///
    /// Anything other than a JSON string decodes to an empty reference.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self::parse(value.as_str())
    }

    /// Style exactly as stored
    #[inline]
    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Stored style mapped onto a known style, unknown ones becoming `solid`
    #[inline]
    #[must_use]
    pub fn icon_style(&self) -> IconStyle {
        IconStyle::resolve(&self.style)
    }

    /// Icon name, `None` when nothing is selected
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check if no icon is selected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Encode into the stored form
    ///
    /// Returns an empty string when no icon is selected.
    #[must_use]
    pub fn encode(&self) -> String {
        match &self.name {
            Some(name) => format!("{}{DELIMITER}{name}", self.style),
            None => String::new(),
        }
    }

    /// Public URL of the referenced SVG
    ///
    /// Custom icons always live under `/assets/icons`. Bundled icons live
    /// under the configured base path in their style's folder. Names are
    /// passed through unescaped. Returns `None` when no icon is selected.
    #[must_use]
    pub fn resolve_url(&self, config: &PublicPathConfig) -> Option<String> {
        let name = self.name.as_deref()?;

        let style = self.icon_style();
        match style.folder() {
            Some(folder) => Some(format!(
                "{}/{folder}/{name}.{ICON_EXTENSION}",
                config.trimmed_base()
            )),
            None => Some(format!("{CUSTOM_ICONS_MOUNT}/{name}.{ICON_EXTENSION}")),
        }
    }
}

impl Default for IconReference {
    fn default() -> Self {
        Self::empty()
    }
}

impl Display for IconReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<&str> for IconReference {
    fn from(raw: &str) -> Self {
        Self::parse(Some(raw))
    }
}

impl From<Option<&str>> for IconReference {
    fn from(raw: Option<&str>) -> Self {
        Self::parse(raw)
    }
}

impl Serialize for IconReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for IconReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn cfg(base: &str) -> PublicPathConfig {
        PublicPathConfig::new(base)
    }

    #[test]
    fn parse_style_and_name() {
        let reference = IconReference::from("outline:academic-cap");
        assert_eq!(reference.style(), "outline");
        assert_eq!(reference.name(), Some("academic-cap"));
    }

    #[test]
    fn parse_bare_name_defaults_to_solid() {
        let reference = IconReference::from("academic-cap");
        assert_eq!(reference, IconReference::new("solid", "academic-cap"));
    }

    #[test]
    fn parse_splits_on_first_colon_only() {
        let reference = IconReference::from("a:b:c");
        assert_eq!(reference.style(), "a");
        assert_eq!(reference.name(), Some("b:c"));
    }

    #[test]
    fn parse_empty_parts() {
        assert_eq!(IconReference::from(":bolt"), IconReference::new("solid", "bolt"));

        let no_name = IconReference::from("mini:");
        assert_eq!(no_name.style(), "mini");
        assert!(no_name.is_empty());
    }

    #[test]
    fn parse_blank_input_is_empty() {
        assert_eq!(IconReference::parse(None), IconReference::empty());
        assert_eq!(IconReference::from(""), IconReference::empty());
        assert_eq!(IconReference::from("   "), IconReference::empty());
    }

    #[test]
    fn encode_empty_is_empty_string() {
        assert_eq!(IconReference::from("").encode(), "");
        assert_eq!(IconReference::from("micro:").encode(), "");
    }

    #[test]
    fn encode_keeps_unknown_style() {
        let reference = IconReference::from("sparkly:star");
        assert_eq!(reference.encode(), "sparkly:star");
        assert_eq!(reference.to_string(), "sparkly:star");
    }

    #[test]
    fn resolve_custom_ignores_config() {
        let reference = IconReference::with_style(IconStyle::Custom, "logo");
        assert_eq!(
            reference.resolve_url(&cfg("/anything")).as_deref(),
            Some("/assets/icons/logo.svg")
        );
        assert_eq!(
            reference.resolve_url(&PublicPathConfig::default()).as_deref(),
            Some("/assets/icons/logo.svg")
        );
    }

    #[test]
    fn resolve_bundled_styles() {
        let base = cfg("/vendor/foo");
        let url = |raw: &str| IconReference::from(raw).resolve_url(&base);

        assert_eq!(url("mini:x").as_deref(), Some("/vendor/foo/20/solid/x.svg"));
        assert_eq!(url("micro:x").as_deref(), Some("/vendor/foo/16/solid/x.svg"));
        assert_eq!(url("outline:x").as_deref(), Some("/vendor/foo/24/outline/x.svg"));
        assert_eq!(url("solid:x").as_deref(), Some("/vendor/foo/24/solid/x.svg"));
    }

    #[test]
    fn resolve_unknown_style_uses_solid_folder() {
        let reference = IconReference::new("unknown", "x");
        assert_eq!(
            reference.resolve_url(&cfg("/v")).as_deref(),
            Some("/v/24/solid/x.svg")
        );
    }

    #[test]
    fn resolve_trims_trailing_slashes() {
        let reference = IconReference::from("solid:home");
        assert_eq!(
            reference.resolve_url(&cfg("/v//")).as_deref(),
            Some("/v/24/solid/home.svg")
        );
    }

    #[test]
    fn resolve_without_name_is_none() {
        assert_eq!(IconReference::from("").resolve_url(&cfg("/v")), None);
        assert_eq!(IconReference::from("custom:").resolve_url(&cfg("/v")), None);
    }

    #[test]
    fn resolve_passes_special_characters_through() {
        let reference = IconReference::from("custom:../a b");
        assert_eq!(
            reference.resolve_url(&cfg("/v")).as_deref(),
            Some("/assets/icons/../a b.svg")
        );
    }

    #[test]
    fn non_string_values_decode_to_empty() {
        for value in [json!(null), json!(42), json!(true), json!(["solid:x"]), json!({"a": 1})] {
            assert_eq!(IconReference::from_value(&value), IconReference::empty());
        }
        assert_eq!(
            IconReference::from_value(&json!("outline:bell")),
            IconReference::new("outline", "bell")
        );
    }

    #[test]
    fn serde_uses_stored_form() {
        let reference = IconReference::new("outline", "bell");
        assert_eq!(serde_json::to_value(&reference).unwrap(), json!("outline:bell"));

        let back: IconReference = serde_json::from_value(json!("outline:bell")).unwrap();
        assert_eq!(back, reference);

        let lenient: IconReference = serde_json::from_value(json!(7)).unwrap();
        assert!(lenient.is_empty());
    }
}

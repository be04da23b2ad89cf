//! Heroicon reference codec
//!
//! Decodes the compact value an icon field stores and resolves it to the
//! public URL of the SVG.
//!
//! # Core Concepts
//!
//! - [`IconReference`]: decoded `(style, name)` pair of a stored value
//! - [`IconStyle`]: the icon variants and their bundled directories
//! - [`PublicPathConfig`]: base path bundled icons are published under
//!
//! # Example
//!
//! ```rust
//! use heroicon_codec::{IconReference, PublicPathConfig};
//!
//! let reference = IconReference::from("mini:bolt");
//! let config = PublicPathConfig::new("/vendor/foo");
//!
//! assert_eq!(
//!     reference.resolve_url(&config).as_deref(),
//!     Some("/vendor/foo/20/solid/bolt.svg")
//! );
//! assert_eq!(reference.encode(), "mini:bolt");
//! ```

#![warn(unreachable_pub)]

mod public_path;
mod reference;
mod style;

pub use public_path::{PublicPathConfig, CUSTOM_ICONS_MOUNT, DEFAULT_NAMESPACE};
pub use reference::{IconReference, DELIMITER, ICON_EXTENSION};
pub use style::{IconStyle, StyleError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

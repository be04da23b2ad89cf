//! Properties of the stored value codec.
//!
//! The stored string is the only thing the host CMS persists, so decoding an
//! encoded reference must give the same reference back, and a blank value must
//! never resolve to an icon URL.

use heroicon_codec::{IconReference, IconStyle, PublicPathConfig};
use proptest::prelude::*;

fn style_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(IconStyle::ALL.to_vec()).prop_map(|s| s.as_str().to_string()),
        "[a-z][a-z0-9-]{0,12}",
    ]
}

proptest! {
    #[test]
    fn parse_encode_roundtrip(style in style_strategy(), name in "[^\\s][^\\n]{0,24}") {
        let reference = IconReference::new(style, name);
        let decoded = IconReference::from(reference.encode().as_str());
        prop_assert_eq!(decoded, reference);
    }

    #[test]
    fn resolved_urls_end_with_name(style in style_strategy(), name in "[a-z0-9-]{1,20}") {
        let reference = IconReference::new(style, name.clone());
        let url = reference.resolve_url(&PublicPathConfig::default()).unwrap();
        let suffix = format!("/{name}.svg");
        prop_assert!(url.ends_with(&suffix));
    }

    #[test]
    fn blank_values_never_resolve(raw in "\\s{0,8}") {
        let reference = IconReference::from(raw.as_str());
        prop_assert_eq!(reference.encode(), "");
        prop_assert_eq!(reference.resolve_url(&PublicPathConfig::new("/v")), None);
    }
}

#[test]
fn empty_string_roundtrips_to_empty() {
    let reference = IconReference::from("");
    assert_eq!(reference.encode(), "");
    assert_eq!(reference.resolve_url(&PublicPathConfig::default()), None);
}

#[test]
fn default_config_resolves_under_vendor_namespace() {
    let reference = IconReference::from("outline:academic-cap");
    assert_eq!(
        reference.resolve_url(&PublicPathConfig::default()).as_deref(),
        Some("/vendor/heroicon-plus/24/outline/academic-cap.svg")
    );
}

//! Command tests
//!
//! Runs the command implementations against temporary icon trees.

use heroicon_cli::{run_publish, run_resolve, run_search, HeroiconConfig};
use heroicon_codec::IconStyle;
use heroicon_index::{PublishReport, StyleOutcome};
use heroicon_test_utils::{full_icon_tree, IconTree};
use pretty_assertions::assert_eq;
use std::fs;

fn config_for(tree: &IconTree) -> HeroiconConfig {
    HeroiconConfig::new()
        .with_source_dir(tree.source_dir())
        .with_public_dir(tree.public_dir())
}

#[test]
fn test_publish_builds_indexes_and_copies_assets() {
    let tree = full_icon_tree();
    let config = config_for(&tree);

    let outcome = run_publish(&config, false).unwrap();

    assert!(outcome.indexes.is_complete());
    assert_eq!(outcome.indexes.total_icons(), 7);

    let published = config.publish_dir();
    assert!(published.join("24/solid/bell.svg").is_file());
    assert!(published.join("20/solid/x-mark.svg").is_file());
    assert_eq!(
        fs::read_to_string(published.join("indexes/mini.json")).unwrap(),
        "[\n    \"x-mark\"\n]"
    );
}

#[test]
fn test_publish_respects_force_flag() {
    let tree = full_icon_tree();
    let config = config_for(&tree);
    run_publish(&config, false).unwrap();

    let target = config.publish_dir().join("24/solid/bell.svg");
    fs::write(&target, "edited").unwrap();

    let outcome = run_publish(&config, false).unwrap();
    assert_eq!(outcome.assets.copied, 0);
    assert_eq!(fs::read_to_string(&target).unwrap(), "edited");

    let outcome = run_publish(&config, true).unwrap();
    assert!(outcome.assets.copied > 0);
    assert_ne!(fs::read_to_string(&target).unwrap(), "edited");
}

#[test]
fn test_publish_with_missing_style_still_succeeds() {
    let tree = IconTree::new().with_style(IconStyle::Solid, &["bell.svg"]);
    let config = config_for(&tree);

    let outcome = run_publish(&config, false).unwrap();

    assert_eq!(outcome.indexes.skipped().count(), 3);
    assert!(matches!(
        outcome.indexes.get("solid"),
        Some(StyleOutcome::Written { count: 1, .. })
    ));
}

#[test]
fn test_publish_without_bundled_tree_skips_every_style() {
    let tree = IconTree::new();
    let config = config_for(&tree);

    let outcome = run_publish(&config, false).unwrap();

    assert_eq!(outcome.indexes.skipped().count(), 4);
    assert_eq!(outcome.indexes.written_count(), 0);
    assert_eq!(outcome.assets, PublishReport::default());
    assert!(config.indexes_dir().is_dir());
}

#[test]
fn test_resolve_uses_configured_public_path() {
    let config = HeroiconConfig::new().with_public_path("/static/heroicons/");

    assert_eq!(
        run_resolve(&config, "micro:check").as_deref(),
        Some("/static/heroicons/16/solid/check.svg")
    );
    assert_eq!(run_resolve(&config, "custom:logo").as_deref(), Some("/assets/icons/logo.svg"));
    assert_eq!(run_resolve(&config, ""), None);
}

#[test]
fn test_search_bundled_and_custom() {
    let tree = full_icon_tree().with_public_files("assets/icons", &["Brand.svg", "brand-dark.svg"]);
    let config = config_for(&tree);
    run_publish(&config, false).unwrap();

    assert_eq!(run_search(&config, "micro", "").unwrap(), vec!["Check", "check"]);
    assert_eq!(run_search(&config, "outline", "BEL").unwrap(), vec!["bell"]);
    assert_eq!(run_search(&config, "custom", "brand").unwrap(), vec!["Brand", "brand-dark"]);
    assert!(run_search(&config, "bold", "").is_err());
}

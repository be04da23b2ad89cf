//! Custom icon directory listing tests

use heroicon_index::{list_directory, resolve_within, DirectoryListing, IndexError};
use heroicon_test_utils::{write_files, IconTree};
use pretty_assertions::assert_eq;
use std::path::Path;
use std::thread;

#[test]
fn test_missing_directory_created_then_reused() {
    let tree = IconTree::new();
    let dir = tree.public_dir().join("assets/icons");

    let first = list_directory(&dir, "svg").unwrap();
    assert_eq!(first, DirectoryListing { names: vec![], created: true });
    assert!(dir.is_dir());

    let second = list_directory(&dir, "svg").unwrap();
    assert_eq!(second, DirectoryListing { names: vec![], created: false });
}

#[test]
fn test_lists_sorted_names() {
    let tree = IconTree::new().with_public_files(
        "assets/icons",
        &["zeta.svg", "Logo.svg", "alpha.SVG", "photo.png"],
    );

    let listing = list_directory(&tree.public_dir().join("assets/icons"), "svg").unwrap();
    assert_eq!(listing.names, vec!["Logo", "alpha", "zeta"]);
    assert!(!listing.created);
}

#[test]
fn test_concurrent_listing_tolerates_creation_race() {
    let tree = IconTree::new();
    let dir = tree.public_dir().join("assets/icons");

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| list_directory(&dir, "svg")))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.iter().all(Result::is_ok));
    assert!(results.iter().flatten().any(|listing| listing.created));
    assert!(dir.is_dir());
}

#[test]
fn test_listing_under_file_fails_with_access_error() {
    let tree = IconTree::new();
    write_files(&tree.public_dir(), &[]);
    std::fs::write(tree.public_dir().join("assets"), "not a dir").unwrap();

    let err = list_directory(&tree.public_dir().join("assets/icons"), "svg").unwrap_err();
    assert!(matches!(err, IndexError::Access { .. }));
}

#[test]
fn test_custom_dir_cannot_escape_public_root() {
    let root = Path::new("/srv/www/public");
    assert!(resolve_within(root, Path::new("assets/icons")).is_ok());
    assert!(resolve_within(root, Path::new("../private")).unwrap_err().is_access());
}

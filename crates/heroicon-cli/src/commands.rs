//! Command implementations
//!
//! Each command takes the loaded [`HeroiconConfig`] and returns what it did,
//! leaving printing to the binary.

use crate::config::HeroiconConfig;
use anyhow::Context;
use heroicon_codec::{IconReference, IconStyle};
use heroicon_index::{
    build_indexes, bundled_style_sources, list_directory, publish, BuildReport, IconCatalog,
    PublishReport,
};
use heroicon_server::ServerState;
use std::future::Future;

/// Result of `heroicon publish`
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    /// Index build results per style
    pub indexes: BuildReport,
    /// Files copied into the public root
    pub assets: PublishReport,
}

/// Build the style indexes, then publish the bundled tree
///
/// Indexes are built first so the published copy carries fresh ones. Missing
/// style directories, or a missing bundled tree, are reported in the outcome
/// and logged, not returned as errors.
///
/// # Errors
/// Fails on any filesystem access error
pub fn run_publish(config: &HeroiconConfig, force: bool) -> anyhow::Result<PublishOutcome> {
    tracing::info!("Building indexes from {}", config.source_dir.display());
    let indexes = build_indexes(
        bundled_style_sources(&config.source_dir),
        &config.indexes_dir(),
        &config.extension,
    )
    .context("failed to build icon indexes")?;

    tracing::info!("Publishing icons (force: {})", force);
    let assets = publish(&config.source_dir, &config.publish_dir(), force)
        .context("failed to publish icons")?;

    Ok(PublishOutcome { indexes, assets })
}

/// Resolve a stored value to its public URL
#[must_use]
pub fn run_resolve(config: &HeroiconConfig, value: &str) -> Option<String> {
    IconReference::from(value).resolve_url(&config.public_path())
}

/// Icons of a style matching `query`
///
/// Bundled styles are read from the written indexes; `custom` lists the
/// custom icon directory, creating it if needed.
///
/// # Errors
/// Fails on an unknown style or a filesystem access error
pub fn run_search(
    config: &HeroiconConfig,
    style: &str,
    query: &str,
) -> anyhow::Result<Vec<String>> {
    let style: IconStyle = style.parse()?;

    let catalog = if style == IconStyle::Custom {
        let listing = list_directory(&config.custom_dir()?, &config.extension)
            .context("failed to list custom icons")?;
        if listing.created {
            tracing::info!("Created custom icon directory");
        }
        IconCatalog::new().with_custom(listing.names)
    } else {
        IconCatalog::load(&config.indexes_dir()).context("failed to load icon indexes")?
    };

    Ok(catalog
        .search(style, query)
        .into_iter()
        .map(ToString::to_string)
        .collect())
}

/// Serve the HTTP endpoints until `shutdown` resolves
///
/// # Errors
/// Fails if the custom icon directory is misconfigured or the listener
/// cannot be bound
pub async fn run_serve(
    config: &HeroiconConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let state = ServerState::new(config.custom_dir()?, config.indexes_dir())
        .with_extension(config.extension.clone())
        .with_public_path(config.public_path());

    heroicon_server::serve(state, config.server.bind, shutdown).await?;
    Ok(())
}

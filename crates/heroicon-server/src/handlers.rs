//! Request handlers
//!
//! Filesystem work runs on the blocking pool; handlers themselves never fail,
//! errors are turned into JSON responses.

use crate::error::ApiError;
use crate::state::ServerState;
use heroicon_codec::{IconReference, IconStyle, CUSTOM_ICONS_MOUNT};
use heroicon_index::{list_directory, DirectoryListing, IconCatalog};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

/// Body of `GET /heroicons/custom-icons`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomIconsResponse {
    /// Sorted custom icon names
    pub icons: Vec<String>,
    /// Whether the directory was created by this request
    pub created: bool,
    /// Public mount point of custom icons
    pub path: String,
}

/// Body of `GET /heroicons/icons/<style>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconsResponse {
    /// Style listed
    pub style: IconStyle,
    /// Matching icon names
    pub icons: Vec<String>,
}

/// Body of `GET /heroicons/resolve`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveResponse {
    /// Normalized stored value
    pub value: String,
    /// Public URL, `null` when no icon is selected
    pub url: Option<String>,
}

/// Query of the icon search route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring filter
    #[serde(default)]
    pub q: String,
}

/// Query of the resolve route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolveQuery {
    /// Stored field value
    #[serde(default)]
    pub value: Option<String>,
}

/// List the custom icon directory, creating it if needed
pub async fn custom_icons(state: Arc<ServerState>) -> Result<Response, Infallible> {
    Ok(match list_custom(&state).await {
        Ok(listing) => {
            tracing::debug!(
                "Listed {} custom icons (created: {})",
                listing.names.len(),
                listing.created
            );
            json(&CustomIconsResponse {
                icons: listing.names,
                created: listing.created,
                path: CUSTOM_ICONS_MOUNT.to_string(),
            })
        }
        Err(e) => e.into_response(),
    })
}

/// List icons of one style, optionally filtered
pub async fn icons(
    style: String,
    query: SearchQuery,
    state: Arc<ServerState>,
) -> Result<Response, Infallible> {
    Ok(match search(&style, &query.q, &state).await {
        Ok(body) => json(&body),
        Err(e) => e.into_response(),
    })
}

/// Resolve a stored value to its public URL
pub async fn resolve(query: ResolveQuery, state: Arc<ServerState>) -> Result<Response, Infallible> {
    let reference = IconReference::parse(query.value.as_deref());
    let url = reference.resolve_url(state.public_path());
    Ok(json(&ResolveResponse {
        value: reference.encode(),
        url,
    }))
}

async fn list_custom(state: &Arc<ServerState>) -> Result<DirectoryListing, ApiError> {
    let state = Arc::clone(state);
    let listing =
        tokio::task::spawn_blocking(move || list_directory(state.custom_dir(), state.extension()))
            .await??;
    Ok(listing)
}

async fn search(
    style: &str,
    query: &str,
    state: &Arc<ServerState>,
) -> Result<IconsResponse, ApiError> {
    let style: IconStyle = style.parse()?;

    let catalog = if style == IconStyle::Custom {
        IconCatalog::new().with_custom(list_custom(state).await?.names)
    } else {
        let state = Arc::clone(state);
        tokio::task::spawn_blocking(move || IconCatalog::load(state.indexes_dir())).await??
    };

    let icons = catalog
        .search(style, query)
        .into_iter()
        .map(ToString::to_string)
        .collect();
    Ok(IconsResponse { style, icons })
}

fn json<T: Serialize>(body: &T) -> Response {
    warp::reply::with_status(warp::reply::json(body), StatusCode::OK).into_response()
}

//! Route table

use crate::handlers;
use crate::state::ServerState;
use std::convert::Infallible;
use std::sync::Arc;
use warp::{Filter, Rejection, Reply};

/// All routes
///
/// - `GET /heroicons/custom-icons`
/// - `GET /heroicons/icons/<style>?q=<query>`
/// - `GET /heroicons/resolve?value=<stored value>`
pub fn routes(
    state: Arc<ServerState>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let custom_icons = warp::path!("heroicons" / "custom-icons")
        .and(warp::get())
        .and(with_state(Arc::clone(&state)))
        .and_then(handlers::custom_icons);

    let icons = warp::path!("heroicons" / "icons" / String)
        .and(warp::get())
        .and(warp::query::<handlers::SearchQuery>())
        .and(with_state(Arc::clone(&state)))
        .and_then(handlers::icons);

    let resolve = warp::path!("heroicons" / "resolve")
        .and(warp::get())
        .and(warp::query::<handlers::ResolveQuery>())
        .and(with_state(state))
        .and_then(handlers::resolve);

    custom_icons
        .or(icons)
        .unify()
        .or(resolve)
        .unify()
        .with(warp::trace::request())
}

fn with_state(
    state: Arc<ServerState>,
) -> impl Filter<Extract = (Arc<ServerState>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&state))
}

//! Heroicon HTTP endpoints
//!
//! Serves the custom icon listing the picker polls, plus icon search and
//! stored value resolution, as JSON over warp.
//!
//! # Example
//!
//! ```rust,no_run
//! use heroicon_server::{serve, ServerState};
//!
//! # async fn example() -> Result<(), heroicon_server::ServerError> {
//! let state = ServerState::new("public/assets/icons", "resources/icons/indexes");
//! serve(state, ([127, 0, 0, 1], 8080).into(), async {
//!     let _ = tokio::signal::ctrl_c().await;
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorBody, ServerError};
pub use handlers::{CustomIconsResponse, IconsResponse, ResolveResponse};
pub use routes::routes;
pub use state::ServerState;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

/// Serve all routes on `addr` until `shutdown` resolves
///
/// # Errors
/// Returns [`ServerError::Bind`] if the listener cannot be bound
pub async fn serve(
    state: ServerState,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let (bound, server) =
        warp::serve(routes(Arc::new(state))).try_bind_with_graceful_shutdown(addr, shutdown)?;
    tracing::info!("Listening on http://{}", bound);
    server.await;
    tracing::info!("Server stopped");
    Ok(())
}

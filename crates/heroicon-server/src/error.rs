//! Error types for the HTTP layer

use heroicon_codec::StyleError;
use heroicon_index::IndexError;
use serde::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

/// Errors a request handler can end with
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Requested style does not exist
    #[error(transparent)]
    UnknownStyle(#[from] StyleError),

    /// Filesystem operation failed
    #[error(transparent)]
    Index(#[from] IndexError),

    /// Blocking task panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownStyle(_) => StatusCode::NOT_FOUND,
            Self::Index(_) | Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Reply for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        warp::reply::with_status(warp::reply::json(&body), status).into_response()
    }
}

/// JSON body of an error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human readable message
    pub error: String,
}

/// Errors starting the server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Listener could not be bound
    #[error("failed to bind listener: {0}")]
    Bind(#[from] warp::Error),
}

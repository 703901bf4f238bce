//! HTTP boundary error translation.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use libris_model::OrderParseError;
use libris_store::StoreError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors a handler can surface to the client.
///
/// Absence is not represented here: a missing entity is an `Option::None`
/// in the query layer and becomes a bare 404 in the handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The sort-order parameter is not a recognized direction.
    #[error(transparent)]
    InvalidOrder(#[from] OrderParseError),

    /// A required query parameter was not supplied.
    #[error("missing required query parameter: {0}")]
    MissingParam(&'static str),

    /// Any failure from the store, including duplicate keys on create.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidOrder(_) | Self::MissingParam(_) => StatusCode::BAD_REQUEST,
            Self::Store(e) if e.is_duplicate_key() => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

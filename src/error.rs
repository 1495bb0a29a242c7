//! Service Error Taxonomy
//!
//! Every fallible operation in the crate surfaces one of the variants below.
//! Handlers return `Result<_, ServiceError>` and the `IntoResponse` impl maps
//! each variant onto its HTTP status, so error wiring stays in one place.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Unified error type for storage, ingestion, search and ranking operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A document id was requested that no metadata record exists for.
    #[error("document not found: {id}")]
    NotFound { id: String },

    /// The uploaded or fetched bytes could not be parsed as PDF text.
    #[error("text extraction failed: {message}")]
    Extraction { message: String },

    /// A remote document could not be downloaded.
    #[error("fetch from {url} failed: {message}")]
    Fetch { url: String, message: String },

    /// A store rejected a read or write.
    #[error("storage failure: {message}")]
    Storage { message: String },

    /// The request itself was malformed (missing term, empty query, ...).
    #[error("invalid request: {message}")]
    Validation { message: String },
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Extraction { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Fetch { .. } => StatusCode::BAD_GATEWAY,
            ServiceError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Validation { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::warn!("request rejected: {}", self);
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

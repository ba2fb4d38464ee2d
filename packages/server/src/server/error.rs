//! API error envelope.
//!
//! Every route failure surfaces as one JSON object, `{"error": "<message>"}`,
//! with a status code matching the failure class. Internal errors are logged
//! and collapsed to a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::domains::buyer::models::DownloadError;
use crate::domains::listings::catalog::CatalogError;
use crate::domains::listings::models::ListingValidationError;
use crate::domains::seller::PayoutError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Validation(#[from] ListingValidationError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(id) => ApiError::NotFound(format!("listing {}", id)),
            CatalogError::Fetch(message) => ApiError::Internal(anyhow::anyhow!(message)),
        }
    }
}

impl From<DownloadError> for ApiError {
    fn from(e: DownloadError) -> Self {
        match e {
            DownloadError::RequestNotFound(id) => ApiError::NotFound(format!("request {}", id)),
            DownloadError::NotApproved { .. } => ApiError::Conflict(e.to_string()),
            DownloadError::Internal(inner) => ApiError::Internal(inner),
        }
    }
}

impl From<PayoutError> for ApiError {
    fn from(e: PayoutError) -> Self {
        match e {
            PayoutError::NothingPending => ApiError::Conflict(e.to_string()),
            PayoutError::Internal(inner) => ApiError::Internal(inner),
        }
    }
}

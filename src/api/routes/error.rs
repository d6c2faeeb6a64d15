//! API error handling utilities.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::storage::StorageError;

/// Handler failure.
///
/// `NotFound` and `BadRequest` carry no body, only the status code. Storage
/// failures surface as 500 with a small JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("bad request")]
    BadRequest,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Unreadable payloads (bad JSON, wrong content type, non-UUID ids) are client errors
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotFound | ApiError::BadRequest => status.into_response(),
            ApiError::Storage(e) => {
                error!("Storage operation failed: {}", e);
                let body = json!({
                    "error": e.to_string(),
                    "status": status.as_u16(),
                });

                (status, axum::Json(body)).into_response()
            }
        }
    }
}

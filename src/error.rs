//! Error types for the student registry
//!
//! A missing student is never an error here: lookups return `Option`.
//! Only storage faults surface as `StudentError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Student Error Enum ==
/// Unified error type for the student registry.
#[derive(Error, Debug)]
pub enum StudentError {
    /// Reading or writing the backing file failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The backing document could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);

        let body = Json(ErrorResponse::new(self.to_string()));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the student registry.
pub type Result<T> = std::result::Result<T, StudentError>;

//! API error type for album-service
//!
//! Each variant maps onto one fixed status/body pair of the album API.

use album_common::api::{ErrorResponse, MessageResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::{CompactJson, PrettyJson};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// GET lookup miss (404, `{"message": "album not found"}`)
    #[error("Album not found: {0}")]
    NotFound(String),

    /// PUT/DELETE lookup miss (404, `{"error": "Album not found"}`)
    #[error("Album not found: {0}")]
    AlbumNotFound(String),

    /// PUT body is not an album (400, `{"error": "Invalid JSON format"}`)
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),

    /// POST body is not an album (400, empty body)
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                PrettyJson(MessageResponse::new("album not found")),
            )
                .into_response(),
            ApiError::AlbumNotFound(_) => (
                StatusCode::NOT_FOUND,
                CompactJson(ErrorResponse::new("Album not found")),
            )
                .into_response(),
            ApiError::InvalidJson(_) => (
                StatusCode::BAD_REQUEST,
                CompactJson(ErrorResponse::new("Invalid JSON format")),
            )
                .into_response(),
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST.into_response(),
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

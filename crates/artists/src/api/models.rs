//! API request/response models

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::ArtistError;

/// Message returned when an identifier matches no record
pub const NOT_FOUND_MESSAGE: &str = "Artist not found";

/// Error body: `{"error": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub store: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Failures a handler can surface
#[derive(Debug)]
pub enum ApiError {
    /// No record matches the requested id (404)
    NotFound,
    /// The store call failed (500)
    Store(ArtistError),
    /// The body could not be read as an artist document (500)
    InvalidBody(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<ArtistError> for ApiError {
    fn from(e: ArtistError) -> Self {
        Self::Store(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::InvalidBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound => NOT_FOUND_MESSAGE.to_string(),
            Self::Store(e) => {
                error!(%e, "Artist store call failed");
                e.to_string()
            }
            Self::InvalidBody(message) => {
                error!(%message, "Rejected artist body");
                message
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

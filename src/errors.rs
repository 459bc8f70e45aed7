// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and JSON error body.
/// Records owned by another user are reported as `NotFound`, never `Forbidden`.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Internal server error")]
    InternalError,
}

impl GalleryError {
    /// Stable machine-readable code for the JSON body
    pub fn code(&self) -> &'static str {
        match self {
            GalleryError::NotFound(_) => "NOT_FOUND",
            GalleryError::AlreadyExists(_) => "ALREADY_EXISTS",
            GalleryError::DatabaseError(_) => "DATABASE_ERROR",
            GalleryError::InvalidInput(_) => "INVALID_INPUT",
            GalleryError::ValidationError(_) => "VALIDATION_ERROR",
            GalleryError::Unauthorized => "UNAUTHORIZED",
            GalleryError::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Log and wrap a sqlx failure
    pub fn database(context: &str, err: sqlx::Error) -> Self {
        log::error!("{}: {}", context, err);
        GalleryError::DatabaseError(format!("{}: {}", context, err))
    }
}

/// Convert GalleryError to HTTP response
impl ResponseError for GalleryError {
    fn error_response(&self) -> HttpResponse {
        // Never echo SQL details back to the client
        let message = match self {
            GalleryError::DatabaseError(_) => "Database error".to_string(),
            other => other.to_string(),
        };

        let body = json!({
            "error": {
                "code": self.code(),
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            GalleryError::NotFound(_) => StatusCode::NOT_FOUND,
            GalleryError::AlreadyExists(_) => StatusCode::CONFLICT,
            GalleryError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GalleryError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GalleryError::ValidationError(_) => StatusCode::BAD_REQUEST,
            GalleryError::Unauthorized => StatusCode::UNAUTHORIZED,
            GalleryError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = GalleryError::NotFound("Photo 7".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Photo 7 not found");
    }

    #[test]
    fn test_database_error_hides_details() {
        let err = GalleryError::DatabaseError("relation \"photos\" does not exist".to_string());
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unauthorized_code() {
        assert_eq!(GalleryError::Unauthorized.code(), "UNAUTHORIZED");
        assert_eq!(GalleryError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
    }
}

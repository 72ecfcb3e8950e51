use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Conflict(message) => {
                HttpResponse::Conflict().json(serde_json::json!({
                    "error": message,
                    "code": 409
                }))
            },
            ApiError::NotFound(message) => {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": message,
                    "code": 404
                }))
            },
            ApiError::ValidationError(message) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": message,
                    "code": 400
                }))
            },
            ApiError::InternalServerError(message) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": message,
                    "code": 500
                }))
            },
        }
    }
}

// ----------------------------- TESTS --------------------------------

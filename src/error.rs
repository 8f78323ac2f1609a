use std::error::Error as StdError;

use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Migration failed: {0}")]
    Migration(#[source] Box<dyn StdError + Send + Sync>),

    #[error("Failed to {operation}")]
    Persistence {
        operation: &'static str,
        #[source]
        source: diesel::result::Error,
    },

    #[error("Blocking task was cancelled")]
    Blocking(#[from] actix_web::error::BlockingError),

    #[error("Failed to render model: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Access denied: {0}")]
    Forbidden(String),
}

/// Deepest error in the `source` chain, or `err` itself when it has none.
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized(message) => HttpResponse::Unauthorized()
                .insert_header((header::WWW_AUTHENTICATE, r#"Basic realm="admin""#))
                .json(json!({"message": message})),
            AppError::Forbidden(message) => {
                HttpResponse::Forbidden().json(json!({"message": message}))
            }
            _ => {
                tracing::error!(error = %self, "request failed");
                HttpResponse::InternalServerError().json(json!({"message": "Internal server error"}))
            }
        }
    }
}

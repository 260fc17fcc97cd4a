//! errors.rs
//! Errores que cruzan la frontera HTTP.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Body inválido o campo requerido ausente.
    #[error("{0}")]
    Validation(String),

    #[error("storage failure: {0:#}")]
    Storage(anyhow::Error),

    #[error("Failed to send WhatsApp message: {0}")]
    NotificationDispatch(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Storage(_) | AppError::NotificationDispatch(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Los errores de storage no exponen detalles internos.
        let detail = match self {
            AppError::Storage(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "detail": detail }))
    }
}

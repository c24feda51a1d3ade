//! Error mapping for handlers.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::types::responses::ErrorResponse;
use crate::LexiError;

/// Message sent for any unexpected handler failure.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// A handler failure. Details are logged, never sent.
#[derive(Debug)]
pub struct ApiError(pub LexiError);

impl From<LexiError> for ApiError {
    fn from(error: LexiError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(INTERNAL_ERROR)),
        )
            .into_response()
    }
}

/// Turns a handler panic into the same 500 envelope as any other failure.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    };

    ApiError(LexiError::Internal(format!("handler panicked: {}", detail))).into_response()
}

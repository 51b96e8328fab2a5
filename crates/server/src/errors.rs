use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use serde::Serialize;
use service::errors::ServiceError;
use tracing::{error, warn};

/// `message` is a single string, or a list for itemized validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

/// JSON error envelope: `{"statusCode", "error", "message"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub message: ErrorMessage,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: ErrorMessage) -> Self {
        let error = status.canonical_reason().unwrap_or("Error").to_string();
        Self { status, error, message }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorMessage::One(msg.into()))
    }

    pub fn validation(msgs: Vec<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorMessage::Many(msgs))
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorMessage::One(msg.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), message = ?self.message, "request failed");
        } else {
            warn!(status = self.status.as_u16(), message = ?self.message, "request rejected");
        }
        let body = serde_json::json!({
            "statusCode": self.status.as_u16(),
            "error": self.error,
            "message": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msgs) => Self::validation(msgs),
            ServiceError::BadRequest(msg) => Self::bad_request(msg),
            ServiceError::NotFound(msg) => Self::not_found(msg),
        }
    }
}

impl From<ModelError> for JsonApiError {
    fn from(e: ModelError) -> Self {
        ServiceError::from(e).into()
    }
}

/// Malformed JSON, wrong content type, oversized body.
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

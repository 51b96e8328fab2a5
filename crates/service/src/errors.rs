use std::fmt::Display;

use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ServiceError {
    /// e.g. `not_found("Car", "sku", 7)` -> "Car with sku 7 not found"
    pub fn not_found(entity: &str, key: &str, value: impl Display) -> Self {
        Self::NotFound(format!("{entity} with {key} {value} not found"))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msgs) => Self::Validation(msgs),
        }
    }
}

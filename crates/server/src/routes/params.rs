//! Path parameter parsing with JSON error responses.

use uuid::Uuid;

use crate::errors::JsonApiError;

/// Any hyphenated UUID.
pub fn uuid(raw: &str) -> Result<Uuid, JsonApiError> {
    models::validate::parse_uuid(raw)
        .ok_or_else(|| JsonApiError::bad_request("Validation failed (uuid is expected)"))
}

/// Hyphenated UUID of version 4.
pub fn uuid_v4(raw: &str) -> Result<Uuid, JsonApiError> {
    models::validate::parse_uuid(raw)
        .filter(|id| id.get_version_num() == 4)
        .ok_or_else(|| JsonApiError::bad_request("Validation failed (uuid v4 is expected)"))
}

/// Integer in its plain decimal form, e.g. `42` or `-3`.
pub fn integer(raw: &str) -> Result<i64, JsonApiError> {
    raw.parse::<i64>()
        .map_err(|_| JsonApiError::bad_request("Validation failed (numeric string is expected)"))
}

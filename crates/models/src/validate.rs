//! Field checks shared by the create/update input shapes.
//!
//! Every helper pushes its messages into a caller-owned `Vec<String>` so a
//! single request can report all violations at once.

use serde_json::{Map, Value};
use uuid::Uuid;

pub const NOT_AN_OBJECT: &str = "request body must be a JSON object";

/// Borrow the body as a JSON object and flag every key outside `allowed`.
///
/// Returns `None` (with a message recorded) when the body is not an object.
pub fn whitelisted_object<'a>(
    body: &'a Value,
    allowed: &[&str],
    errors: &mut Vec<String>,
) -> Option<&'a Map<String, Value>> {
    let Some(obj) = body.as_object() else {
        errors.push(NOT_AN_OBJECT.to_string());
        return None;
    };
    for key in obj.keys() {
        if !allowed.contains(&key.as_str()) {
            errors.push(format!("property {key} should not exist"));
        }
    }
    Some(obj)
}

/// Required string field; `not_string` is recorded when the value is missing or of another type.
pub fn string(value: Option<&Value>, not_string: &str, errors: &mut Vec<String>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        _ => {
            errors.push(not_string.to_string());
            None
        }
    }
}

/// Required string of at least `min` characters.
///
/// A missing or non-string value violates both the type and the length rule.
pub fn string_min_len(
    value: Option<&Value>,
    field: &str,
    min: usize,
    errors: &mut Vec<String>,
) -> Option<String> {
    let too_short = format!("{field} must be longer than or equal to {min} characters");
    match value {
        Some(Value::String(s)) if s.chars().count() >= min => Some(s.clone()),
        Some(Value::String(_)) => {
            errors.push(too_short);
            None
        }
        _ => {
            errors.push(format!("{field} must be a string"));
            errors.push(too_short);
            None
        }
    }
}

/// Coerce a JSON number or numeric string into an integer.
///
/// Fractions, non-finite values, booleans and null do not coerce.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

// Exact i64 values take the integer path first. Here ±2^63 are the
// rounded images of out-of-range input, so both bounds are strict.
fn integral(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f > i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Required integer with coercion; `message` is recorded on failure.
pub fn integer(value: Option<&Value>, message: &str, errors: &mut Vec<String>) -> Option<i64> {
    match value.and_then(coerce_integer) {
        Some(n) => Some(n),
        None => {
            errors.push(message.to_string());
            None
        }
    }
}

/// Hyphenated UUID string, e.g. `1b4e28ba-2fa1-11d2-883f-0016d3cca427`.
pub fn parse_uuid(s: &str) -> Option<Uuid> {
    if s.len() != 36 {
        return None;
    }
    Uuid::parse_str(s).ok()
}

/// `id` field of an update body: must be a string holding a UUID.
pub fn uuid(value: &Value, field: &str, errors: &mut Vec<String>) -> Option<Uuid> {
    let Value::String(s) = value else {
        errors.push(format!("{field} must be a string"));
        errors.push(format!("{field} must be a UUID"));
        return None;
    };
    match parse_uuid(s) {
        Some(id) => Some(id),
        None => {
            errors.push(format!("{field} must be a UUID"));
            None
        }
    }
}

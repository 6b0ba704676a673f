//! Field rules for dog records.
//!
//! Age arrives as an arbitrary JSON value so that booleans, strings and other
//! non-numeric input can be rejected explicitly instead of being coerced.

use serde_json::{Number, Value};
use thiserror::Error;

use crate::modules::dogs::models::Gender;

pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 20;
pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Rejection of a single dog attribute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidAge(String),

    #[error("{message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    fn age(message: &str) -> Self {
        Self::InvalidAge(message.to_string())
    }

    fn field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }
}

/// Validate a standalone age value and return it truncated to whole years.
///
/// Absence (`null`) is an error here; use [`validate_nullable_age`] for the
/// optional attribute on a dog.
pub fn validate_age(value: &Value) -> Result<i64, ValidationError> {
    match value {
        Value::Null => Err(ValidationError::age("Age cannot be None")),
        // Checked on its own so it can never reach the numeric path.
        Value::Bool(_) => Err(ValidationError::age("Age must be a number")),
        Value::Number(number) => age_in_range(number),
        Value::String(_) | Value::Array(_) | Value::Object(_) => {
            Err(ValidationError::age("Age must be a number"))
        }
    }
}

/// Validate the optional age attribute of a dog. `null` passes through.
pub fn validate_nullable_age(value: &Value) -> Result<Option<i64>, ValidationError> {
    if value.is_null() {
        return Ok(None);
    }
    validate_age(value).map(Some)
}

/// `true` when [`validate_age`] accepts `value`.
pub fn is_valid_age(value: &Value) -> bool {
    validate_age(value).is_ok()
}

fn age_in_range(number: &Number) -> Result<i64, ValidationError> {
    let negative = || ValidationError::age("Age cannot be negative");
    let too_old = || ValidationError::age("Age cannot be greater than 20 years");

    if let Some(years) = number.as_i64() {
        return match years {
            y if y < MIN_AGE => Err(negative()),
            y if y > MAX_AGE => Err(too_old()),
            y => Ok(y),
        };
    }

    // u64 beyond i64::MAX
    if number.is_u64() {
        return Err(too_old());
    }

    match number.as_f64() {
        Some(years) if years < MIN_AGE as f64 => Err(negative()),
        Some(years) if years > MAX_AGE as f64 => Err(too_old()),
        Some(years) => Ok(years.trunc() as i64),
        None => Err(ValidationError::age("Age must be a number")),
    }
}

/// A dog name needs at least two characters.
pub fn validate_name(value: &str) -> Result<String, ValidationError> {
    if value.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::field(
            "name",
            format!("Dog name must be at least {MIN_NAME_CHARS} characters"),
        ));
    }
    Ok(value.to_string())
}

/// Exact, case-sensitive match against `Male`, `Female` or `Unknown`.
pub fn validate_gender(value: &str) -> Result<Gender, ValidationError> {
    match value {
        "Male" => Ok(Gender::Male),
        "Female" => Ok(Gender::Female),
        "Unknown" => Ok(Gender::Unknown),
        _ => Err(ValidationError::field(
            "gender",
            "Gender must be 'Male', 'Female', or 'Unknown'",
        )),
    }
}

/// Descriptions are optional, but a present one needs ten characters.
pub fn validate_description(value: Option<&str>) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(text) if text.chars().count() < MIN_DESCRIPTION_CHARS => {
            Err(ValidationError::field(
                "description",
                format!("Description must be at least {MIN_DESCRIPTION_CHARS} characters"),
            ))
        }
        Some(text) => Ok(Some(text.to_string())),
    }
}

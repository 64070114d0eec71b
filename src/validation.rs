//! Input validation for scoring calls.

use crate::error::{Result, VibefyError};
use crate::model::ScoreInput;

/// Maximum allowed length for an item ID.
pub const MAX_ID_LENGTH: usize = 100;

/// Validates an item ID.
pub fn validate_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(VibefyError::Validation("ID cannot be empty".to_string()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(VibefyError::Validation(format!(
            "ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }
    if id.chars().any(char::is_control) {
        return Err(VibefyError::Validation(
            "ID cannot contain control characters".to_string(),
        ));
    }
    Ok(())
}

/// Validates that a numeric input is a finite number.
pub fn validate_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(VibefyError::Validation(format!(
            "{} must be a finite number, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validates every number in a scoring payload.
pub fn validate_input(input: &ScoreInput) -> Result<()> {
    for (name, value) in input.fields() {
        validate_finite(name, value)?;
    }
    Ok(())
}

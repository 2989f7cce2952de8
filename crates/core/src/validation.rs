//! Field validators for project and task payloads.
//!
//! Each function follows the `validator` crate's custom-validator shape so
//! DTOs can reference them with `#[validate(custom(function = ...))]`.
//! Messages are user-facing and end up in the `fields` map of a 400
//! response.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::ValidationError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a project title or task name.
pub const MAX_TITLE_LENGTH: u64 = 200;

/// Maximum length of a project's client name.
pub const MAX_CLIENT_NAME_LENGTH: u64 = 100;

/// Total significant digits allowed in a budget (`NUMERIC(10, 2)`).
pub const BUDGET_MAX_DIGITS: u32 = 10;

/// Fraction digits allowed in a budget.
pub const BUDGET_DECIMAL_PLACES: u32 = 2;

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

fn error(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

/// Reject strings that are empty once surrounding whitespace is removed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "This field may not be blank.".to_string()));
    }
    Ok(())
}

fn validate_max_length(value: &str, max: u64) -> Result<(), ValidationError> {
    if value.chars().count() as u64 > max {
        return Err(error(
            "max_length",
            format!("Ensure this field has no more than {max} characters."),
        ));
    }
    Ok(())
}

/// Project titles and task names: non-blank, at most [`MAX_TITLE_LENGTH`].
pub fn validate_title(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)?;
    validate_max_length(value, MAX_TITLE_LENGTH)
}

/// Client names may be empty but not longer than [`MAX_CLIENT_NAME_LENGTH`].
pub fn validate_client_name(value: &str) -> Result<(), ValidationError> {
    validate_max_length(value, MAX_CLIENT_NAME_LENGTH)
}

/// Check a budget against the column's precision and reject negatives.
///
/// Trailing zeros are ignored, so `100.000` is accepted as `100.00`.
pub fn validate_budget(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(error(
            "min_value",
            "Ensure this value is greater than or equal to 0.".to_string(),
        ));
    }

    let normalized = value.normalize();
    if normalized.scale() > BUDGET_DECIMAL_PLACES {
        return Err(error(
            "max_decimal_places",
            format!("Ensure that there are no more than {BUDGET_DECIMAL_PLACES} decimal places."),
        ));
    }

    let max_whole_digits = BUDGET_MAX_DIGITS - BUDGET_DECIMAL_PLACES;
    let whole_limit = Decimal::from(10_i64.pow(max_whole_digits));
    if normalized.trunc().abs() >= whole_limit {
        return Err(error(
            "max_whole_digits",
            format!(
                "Ensure that there are no more than {max_whole_digits} digits before the decimal point."
            ),
        ));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

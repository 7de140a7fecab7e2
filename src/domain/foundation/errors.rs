//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur when validating operator input or wire values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be non-negative, got {actual}")]
    NegativeAmount { field: String, actual: f64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("'{value}' is not a valid {field}")]
    UnknownVariant { field: String, value: String },

    #[error("Start date {start} must be strictly before end date {end}")]
    InvalidDateWindow { start: String, end: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates a negative amount validation error.
    pub fn negative_amount(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NegativeAmount {
            field: field.into(),
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown enum variant validation error.
    pub fn unknown_variant(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::UnknownVariant {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("user");
        assert_eq!(format!("{}", err), "Field 'user' cannot be empty");
    }

    #[test]
    fn negative_amount_displays_correctly() {
        let err = ValidationError::negative_amount("total_amount", -1.5);
        assert_eq!(
            format!("{}", err),
            "Field 'total_amount' must be non-negative, got -1.5"
        );
    }

    #[test]
    fn unknown_variant_displays_correctly() {
        let err = ValidationError::unknown_variant("gateway", "PAYPAL");
        assert_eq!(format!("{}", err), "'PAYPAL' is not a valid gateway");
    }
}

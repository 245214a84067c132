// crates/core/src/error.rs
use chrono::NaiveDate;
use thiserror::Error;

/// Field-level validation failures for category and activity writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: This field is required.")]
    Required { field: &'static str },

    #[error("{field}: This field may not be blank.")]
    Blank { field: &'static str },

    #[error("{field}: Ensure this field has no more than {max} characters.")]
    TooLong { field: &'static str, max: usize },

    #[error("{field}: Ensure this value is greater than or equal to 0.")]
    Negative { field: &'static str },

    #[error("{field}: Ensure this value is less than or equal to {max}.")]
    TooLarge { field: &'static str, max: i64 },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::Blank { field }
            | Self::TooLong { field, .. }
            | Self::Negative { field }
            | Self::TooLarge { field, .. } => field,
        }
    }
}

/// Errors resolving a `date` query parameter into a day range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DayError {
    #[error("Missing 'date' query param YYYY-MM-DD.")]
    Missing,

    #[error("Invalid 'date' format. Use YYYY-MM-DD.")]
    Invalid(String),

    #[error("Local midnight of {0} does not exist in the configured timezone")]
    Unresolvable(NaiveDate),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 50,
        };
        assert_eq!(
            err.to_string(),
            "name: Ensure this field has no more than 50 characters."
        );
        assert_eq!(err.field(), "name");

        let err = ValidationError::Required { field: "category" };
        assert_eq!(err.to_string(), "category: This field is required.");
    }

    #[test]
    fn test_day_error_display() {
        assert_eq!(
            DayError::Missing.to_string(),
            "Missing 'date' query param YYYY-MM-DD."
        );
        assert_eq!(
            DayError::Invalid("nope".into()).to_string(),
            "Invalid 'date' format. Use YYYY-MM-DD."
        );
    }
}

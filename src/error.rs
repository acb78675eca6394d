//! Error types for validated fields and identity values.
//!
//! Errors come in two layers. [`ValidationError`] is the reason a validator
//! gives when it refuses a candidate value; it knows nothing about which field
//! was being set. [`ValueError`] is what callers see: it names the field and
//! distinguishes a rejected argument from reading a field that was never set.

/// Main error type for field and entity operations.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    /// A setter or constructor was given a value its validator rejected.
    ///
    /// The field keeps whatever value it held before the call.
    #[error("Invalid argument for '{field}': {reason}")]
    InvalidArgument {
        field: String,
        #[source]
        reason: ValidationError,
    },

    /// A field was read before any value was successfully assigned to it
    #[error("Field '{field}' was read before it was initialized")]
    UninitializedAccess { field: String },

    /// JSON deserialization errors while loading configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a validator refuses a candidate value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required value was absent
    #[error("Value is missing")]
    MissingValue,

    /// Text shorter than the configured minimum
    #[error("Must be at least {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    /// Number outside an inclusive range
    #[error("Value {value} is outside the range [{min}, {max}]")]
    OutOfRange {
        value: String,
        min: String,
        max: String,
    },

    /// Number below zero where only non-negative values are allowed
    #[error("Value {value} must not be negative")]
    Negative { value: String },

    /// A range whose bounds cannot contain any value
    #[error("Invalid range bounds: min {min} is not below or equal to max {max}")]
    InvalidBounds { min: String, max: String },

    /// General validation error with custom message
    #[error("Validation failed: {message}")]
    Custom { message: String },
}

impl ValueError {
    /// Create an invalid argument error for a named field
    pub fn invalid_argument(field: impl Into<String>, reason: ValidationError) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason,
        }
    }

    /// Create an uninitialized access error for a named field
    pub fn uninitialized(field: impl Into<String>) -> Self {
        Self::UninitializedAccess {
            field: field.into(),
        }
    }

    /// The rejection reason, if this is an invalid argument error.
    pub fn reason(&self) -> Option<&ValidationError> {
        match self {
            Self::InvalidArgument { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl ValidationError {
    /// Create an out of range error from any displayable bounds
    pub fn out_of_range(
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Create a negative value error
    pub fn negative(value: impl ToString) -> Self {
        Self::Negative {
            value: value.to_string(),
        }
    }

    /// Create a custom validation error
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}

// Result type aliases for convenience
pub type ValueResult<T> = Result<T, ValueError>;
pub type ValidationResult<T> = Result<T, ValidationError>;

//! # Error Types
//!
//! Structured error types for intake_core. The form core has no I/O, so the
//! surface here is small: bad field references and serialization failures.
//! Errors serialize to tagged JSON so the front-ends can report them
//! programmatically.
//!
//! ## Example
//!
//! ```rust
//! use intake_core::errors::{IntakeError, IntakeResult};
//! use intake_core::modes::is_known_field;
//!
//! fn require_field(field: &str) -> IntakeResult<()> {
//!     if !is_known_field(field) {
//!         return Err(IntakeError::unknown_field(field));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_field("patient_name").is_ok());
//! assert!(require_field("patient_nmae").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for intake_core operations
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Structured error type for form-core operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum IntakeError {
    /// A field id does not exist in any registered field group
    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl IntakeError {
    /// Create an UnknownField error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        IntakeError::UnknownField {
            field: field.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            IntakeError::UnknownField { .. } => "UNKNOWN_FIELD",
            IntakeError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = IntakeError::unknown_field("height_cm");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: IntakeError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            IntakeError::unknown_field("ros_cough").error_code(),
            "UNKNOWN_FIELD"
        );
        assert_eq!(
            IntakeError::SerializationError {
                reason: "truncated".into()
            }
            .error_code(),
            "SERIALIZATION_ERROR"
        );
    }
}

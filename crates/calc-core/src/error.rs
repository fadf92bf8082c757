//! # Error Types
//!
//! Domain-specific error types for calc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  calc-core errors (this file)                                          │
//! │  ├── CoreError        - Bad input handed to the accumulator            │
//! │  └── ValidationError  - Configuration values out of bounds             │
//! │                                                                         │
//! │  calc-desktop errors (app)                                             │
//! │  ├── ConfigError      - Config file / env failures                     │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → Front end                                │
//! │        ValidationError → ConfigError → startup failure                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Division by zero is a calculator *outcome*, not a Rust error. It is
//! recorded as data: an `Entry::Error` sentinel plus a history record ending in
//! `Error: Division by zero`. Likewise a second decimal separator, a leading
//! zero, or `=` with no pending operator are silently normalized away.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised when the accumulator is handed input it cannot represent.
///
/// These only happen when a caller bypasses the key map (e.g. a front end
/// sends `'z'` as a digit). Normal user input never produces them.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Token is neither `0`-`9` nor the decimal separator.
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),

    /// Character does not name one of the four operators.
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(char),

    /// Character is not bound to any calculator key.
    #[error("Unknown key: {0:?}")]
    UnknownKey(char),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Configuration validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },

    /// Invalid format (e.g. unparsable number, unknown enum value).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::InvalidDigit('x').to_string(), "Invalid digit: 'x'");
        assert_eq!(
            CoreError::UnknownOperator('%').to_string(),
            "Unknown operator: '%'"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "error_clear_ms".to_string(),
            min: 0,
            max: 60_000,
        };
        assert_eq!(err.to_string(), "error_clear_ms must be between 0 and 60000");
    }
}

//! # Error Types
//!
//! Structured error types for brew_core. The formula set is deliberately
//! permissive: only conditions that would break the arithmetic (a zero
//! denominator) or contradict the UK duty table are reported. Everything
//! else flows through the maths untouched.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::errors::{BrewError, BrewResult};
//!
//! fn per_litre(points: f64, volume_l: f64) -> BrewResult<f64> {
//!     if volume_l == 0.0 {
//!         return Err(BrewError::division_by_zero("volume_l"));
//!     }
//!     Ok(points / volume_l)
//! }
//!
//! assert!(per_litre(10.0, 0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for brew_core operations
pub type BrewResult<T> = Result<T, BrewError>;

/// Structured error type for brewing calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BrewError {
    /// A denominator was zero (empty grist, zero volume, OG of 1.775, ...)
    #[error("Division by zero: '{quantity}' is zero")]
    DivisionByZero { quantity: String },

    /// The tiered ABV result fell outside the matched bracket's bounds
    #[error("Sanity check failed: {abv} not in range [{abv_min}, {abv_max}]")]
    SanityCheckFailed { abv: f64, abv_min: f64, abv_max: f64 },

    /// A value could not be parsed (grist type names, settings)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl BrewError {
    /// Create a DivisionByZero error
    pub fn division_by_zero(quantity: impl Into<String>) -> Self {
        BrewError::DivisionByZero {
            quantity: quantity.into(),
        }
    }

    /// Create a SanityCheckFailed error
    pub fn sanity_check_failed(abv: f64, abv_min: f64, abv_max: f64) -> Self {
        BrewError::SanityCheckFailed {
            abv,
            abv_min,
            abv_max,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BrewError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        BrewError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BrewError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            BrewError::SanityCheckFailed { .. } => "SANITY_CHECK_FAILED",
            BrewError::InvalidInput { .. } => "INVALID_INPUT",
            BrewError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for BrewError {
    fn from(err: serde_json::Error) -> Self {
        BrewError::serialization(err.to_string())
    }
}

/// Divide, reporting a zero denominator as [`BrewError::DivisionByZero`].
pub(crate) fn checked_div(numerator: f64, denominator: f64, quantity: &str) -> BrewResult<f64> {
    if denominator == 0.0 {
        return Err(BrewError::division_by_zero(quantity));
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = BrewError::sanity_check_failed(0.8625, 0.0, 0.8);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("SanityCheckFailed"));
        let roundtrip: BrewError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(BrewError::division_by_zero("volume_l").error_code(), "DIVISION_BY_ZERO");
        assert_eq!(
            BrewError::invalid_input("grist_type", "Hops", "Unknown grist type").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_division_by_zero_message_names_quantity() {
        let err = BrewError::division_by_zero("total_mass_g");
        assert_eq!(err.to_string(), "Division by zero: 'total_mass_g' is zero");
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(checked_div(10.0, 4.0, "x").unwrap(), 2.5);
        assert_eq!(checked_div(10.0, 0.0, "x"), Err(BrewError::division_by_zero("x")));
    }

    #[test]
    fn test_from_serde_error() {
        let err: BrewError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}

// ============================================================================
// Numeric Errors
// Error types for rational arithmetic and rendering
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while constructing, combining or rendering rationals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Result exceeded i64::MAX
    Overflow,
    /// Result below i64::MIN
    Underflow,
    /// Attempted division by a rational whose numerator is zero
    DivisionByZero,
    /// A denominator of zero was supplied or produced
    ZeroDenominator,
    /// The render buffer could not be allocated
    AllocationFailure,
    /// Input string or value is invalid
    InvalidInput,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::ZeroDenominator => write!(f, "denominator is zero"),
            NumericError::AllocationFailure => {
                write!(f, "allocation failure: could not reserve render buffer")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(NumericError::ZeroDenominator.to_string(), "denominator is zero");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::DivisionByZero, NumericError::ZeroDenominator);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::AllocationFailure);
        assert!(err.to_string().starts_with("allocation failure"));
    }
}

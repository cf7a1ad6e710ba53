// ============================================================================
// Arithmetic Strategy Interface
// Defines the contract for pluggable overflow handling
// ============================================================================

use crate::domain::Operation;
use crate::numeric::{NumericResult, Rational};

/// Result of applying a strategy to two operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The computed value
    pub result: Rational,

    /// Whether any component wrapped around
    pub wrapped: bool,
}

impl Evaluation {
    pub fn exact(result: Rational) -> Self {
        Self {
            result,
            wrapped: false,
        }
    }
}

/// Strategy pattern interface for component arithmetic
/// Implementations: CheckedArithmetic, WrappingArithmetic
pub trait ArithmeticStrategy: Send + Sync {
    /// Combine two operands
    ///
    /// Zero-denominator policy is applied by the caller; a strategy only
    /// decides what happens when components leave i64 range. Divisors with a
    /// zero numerator never reach `apply` as `Operation::Divide`.
    fn apply(
        &self,
        operation: Operation,
        lhs: &Rational,
        rhs: &Rational,
    ) -> NumericResult<Evaluation>;

    /// Get the strategy name for logging
    fn name(&self) -> &str;
}

// ============================================================================
// Wrapping Arithmetic Strategy
// Two's-complement components, matching plain fixed-width fractions
// ============================================================================

use super::checked::checked;
use crate::domain::Operation;
use crate::interfaces::{ArithmeticStrategy, Evaluation};
use crate::numeric::{NumericError, NumericResult, Rational};

/// Wrapping arithmetic strategy
///
/// Tries the checked computation first so exact results are flagged as
/// such; on overflow it falls back to wraparound and marks the evaluation.
pub struct WrappingArithmetic;

impl WrappingArithmetic {
    pub fn new() -> Self {
        Self
    }

    fn wrap(operation: Operation, lhs: &Rational, rhs: &Rational) -> Rational {
        match operation {
            Operation::Add => lhs.wrapping_add(rhs),
            Operation::Subtract => lhs.wrapping_sub(rhs),
            Operation::Multiply => lhs.wrapping_mul(rhs),
            Operation::Divide => lhs.wrapping_div(rhs),
        }
    }
}

impl Default for WrappingArithmetic {
    fn default() -> Self {
        Self::new()
    }
}

impl ArithmeticStrategy for WrappingArithmetic {
    fn apply(
        &self,
        operation: Operation,
        lhs: &Rational,
        rhs: &Rational,
    ) -> NumericResult<Evaluation> {
        match checked(operation, lhs, rhs) {
            Ok(result) => Ok(Evaluation::exact(result)),
            Err(NumericError::Overflow | NumericError::Underflow) => Ok(Evaluation {
                result: Self::wrap(operation, lhs, rhs),
                wrapped: true,
            }),
            Err(e) => Err(e),
        }
    }

    fn name(&self) -> &str {
        "Wrapping"
    }
}

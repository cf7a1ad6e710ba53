// ============================================================================
// Checked Arithmetic Strategy
// Reports component overflow instead of wrapping
// ============================================================================

use crate::domain::Operation;
use crate::interfaces::{ArithmeticStrategy, Evaluation};
use crate::numeric::{NumericResult, Rational};

/// Dispatch an operation to the matching `checked_*` method.
pub(crate) fn checked(
    operation: Operation,
    lhs: &Rational,
    rhs: &Rational,
) -> NumericResult<Rational> {
    match operation {
        Operation::Add => lhs.checked_add(rhs),
        Operation::Subtract => lhs.checked_sub(rhs),
        Operation::Multiply => lhs.checked_mul(rhs),
        Operation::Divide => lhs.checked_div(rhs),
    }
}

/// Checked arithmetic strategy
///
/// Products are formed in i128 and narrowed back; anything outside i64
/// range is an `Overflow` or `Underflow` error.
///
/// # Example
/// ```text
/// i64::MAX/1 + 1/1  ->  Err(Overflow)
/// 1/2 + 1/3         ->  Ok(5/6)
/// ```
pub struct CheckedArithmetic;

impl CheckedArithmetic {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CheckedArithmetic {
    fn default() -> Self {
        Self::new()
    }
}

impl ArithmeticStrategy for CheckedArithmetic {
    fn apply(
        &self,
        operation: Operation,
        lhs: &Rational,
        rhs: &Rational,
    ) -> NumericResult<Evaluation> {
        checked(operation, lhs, rhs).map(Evaluation::exact)
    }

    fn name(&self) -> &str {
        "Checked"
    }
}

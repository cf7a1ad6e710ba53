// ============================================================================
// Arithmetic Context
// Applies zero-denominator policy around a pluggable overflow strategy
// ============================================================================

use crate::domain::{ArithmeticConfig, Operation, ZeroDenominatorPolicy};
use crate::interfaces::{ArithmeticEvent, ArithmeticStrategy, EventHandler};
use crate::numeric::{NumericError, NumericResult, Rational};
use std::sync::Arc;

/// Configured arithmetic over [`Rational`] values
///
/// Every evaluation emits its events to the handler in one batch: a
/// `Computed` or `Rejected` event, preceded by `OverflowWrapped` and
/// `ZeroDenominatorPreserved` when the policies let those through.
pub struct Arithmetic {
    /// Policies this context was created with
    config: ArithmeticConfig,

    /// Pluggable overflow handling
    strategy: Box<dyn ArithmeticStrategy>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Arithmetic {
    /// Create a new arithmetic context
    ///
    /// The strategy is taken as given; use
    /// [`create_from_config`](super::create_from_config) to derive it from
    /// the overflow policy.
    pub fn new(
        config: ArithmeticConfig,
        strategy: Box<dyn ArithmeticStrategy>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        tracing::debug!(
            "Arithmetic context: zero_denominator={:?} strategy={} render_capacity={}",
            config.zero_denominator,
            strategy.name(),
            config.render_capacity
        );
        Self {
            config,
            strategy,
            event_handler,
        }
    }

    /// `lhs + rhs`
    pub fn add(&self, lhs: &Rational, rhs: &Rational) -> NumericResult<Rational> {
        self.evaluate(Operation::Add, lhs, rhs)
    }

    /// `lhs - rhs`
    pub fn subtract(&self, lhs: &Rational, rhs: &Rational) -> NumericResult<Rational> {
        self.evaluate(Operation::Subtract, lhs, rhs)
    }

    /// `lhs * rhs`
    pub fn multiply(&self, lhs: &Rational, rhs: &Rational) -> NumericResult<Rational> {
        self.evaluate(Operation::Multiply, lhs, rhs)
    }

    /// `lhs / rhs`
    pub fn divide(&self, lhs: &Rational, rhs: &Rational) -> NumericResult<Rational> {
        self.evaluate(Operation::Divide, lhs, rhs)
    }

    /// Evaluate `lhs <operation> rhs` under this context's policies.
    ///
    /// # Errors
    /// - `ZeroDenominator` for a zero-denominator operand or result (Reject)
    /// - `DivisionByZero` for a divisor with a zero numerator (Reject)
    /// - `Overflow` / `Underflow` from the checked strategy
    pub fn evaluate(
        &self,
        operation: Operation,
        lhs: &Rational,
        rhs: &Rational,
    ) -> NumericResult<Rational> {
        let mut events = Vec::with_capacity(2);

        let outcome = self.evaluate_inner(operation, lhs, rhs, &mut events);
        match &outcome {
            Ok(result) => {
                tracing::trace!("{} {} {} = {}", lhs, operation.symbol(), rhs, result);
                events.push(ArithmeticEvent::Computed {
                    operation,
                    lhs: lhs.clone(),
                    rhs: rhs.clone(),
                    result: result.clone(),
                });
            },
            Err(error) => {
                tracing::debug!("{} {} {} rejected: {}", lhs, operation.symbol(), rhs, error);
                events.push(ArithmeticEvent::Rejected {
                    operation,
                    error: *error,
                });
            },
        }

        // Emit events
        self.event_handler.on_events(events);

        outcome
    }

    fn evaluate_inner(
        &self,
        operation: Operation,
        lhs: &Rational,
        rhs: &Rational,
        events: &mut Vec<ArithmeticEvent>,
    ) -> NumericResult<Rational> {
        let reject = self.config.zero_denominator == ZeroDenominatorPolicy::Reject;
        let zero_divisor = operation == Operation::Divide && rhs.is_zero();

        if reject {
            if lhs.denominator() == 0 || rhs.denominator() == 0 {
                return Err(NumericError::ZeroDenominator);
            }
            if zero_divisor {
                return Err(NumericError::DivisionByZero);
            }
        }

        // n/d ÷ 0/e is n/d × e/0, which puts the zero where the policy wants it
        let evaluation = if zero_divisor {
            let flipped = Rational::new(rhs.denominator(), rhs.numerator());
            self.strategy.apply(Operation::Multiply, lhs, &flipped)?
        } else {
            self.strategy.apply(operation, lhs, rhs)?
        };

        let zero_result = evaluation.result.denominator() == 0;
        if zero_result && reject {
            return Err(NumericError::ZeroDenominator);
        }

        if evaluation.wrapped {
            tracing::warn!(
                "{} {} {} wrapped to {}",
                lhs,
                operation.symbol(),
                rhs,
                evaluation.result
            );
            events.push(ArithmeticEvent::OverflowWrapped {
                operation,
                result: evaluation.result.clone(),
            });
        }

        if zero_result {
            tracing::warn!(
                "{} {} {} has a zero denominator: {}",
                lhs,
                operation.symbol(),
                rhs,
                evaluation.result
            );
            events.push(ArithmeticEvent::ZeroDenominatorPreserved {
                operation,
                result: evaluation.result.clone(),
            });
        }

        Ok(evaluation.result)
    }

    /// Render `value` using this context's buffer capacity
    pub fn render<'a>(&self, value: &'a mut Rational) -> NumericResult<&'a str> {
        value.render_with_capacity(self.config.render_capacity)
    }

    /// Get the configuration
    pub fn config(&self) -> &ArithmeticConfig {
        &self.config
    }

    /// Get the strategy name
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}

// ============================================================================
// Arithmetic Factory
// Creates arithmetic contexts with proper configuration
// ============================================================================

use crate::domain::config::{ArithmeticConfig, OverflowPolicy, ZeroDenominatorPolicy};
use crate::engine::{Arithmetic, CheckedArithmetic, WrappingArithmetic};
use crate::interfaces::{ArithmeticStrategy, EventHandler};
use crate::numeric::NumericResult;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an arithmetic context from configuration
///
/// # Arguments
/// * `config` - Arithmetic configuration
/// * `event_handler` - Event handler for arithmetic events
///
/// # Returns
/// * `NumericResult<Arithmetic>` - Configured context or `InvalidInput`
///
/// # Example
/// ```
/// use rational::prelude::*;
/// use rational::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let arith = create_from_config(ArithmeticConfig::strict(), Arc::new(NoOpEventHandler)).unwrap();
/// let sum = arith.add(&Rational::new(1, 2), &Rational::new(1, 3)).unwrap();
/// assert_eq!(sum.to_string(), "5/6");
/// ```
pub fn create_from_config(
    config: ArithmeticConfig,
    event_handler: Arc<dyn EventHandler>,
) -> NumericResult<Arithmetic> {
    // Validate configuration first
    config.validate()?;

    let strategy = create_strategy(config.overflow);

    Ok(Arithmetic::new(config, strategy, event_handler))
}

/// Creates the strategy for an overflow policy
fn create_strategy(policy: OverflowPolicy) -> Box<dyn ArithmeticStrategy> {
    match policy {
        OverflowPolicy::Checked => Box::new(CheckedArithmetic::new()),
        OverflowPolicy::Wrapping => Box::new(WrappingArithmetic::new()),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating arithmetic contexts with fluent API
///
/// # Example
/// ```
/// use rational::prelude::*;
/// use rational::engine::factory::ArithmeticBuilder;
/// use std::sync::Arc;
///
/// let arith = ArithmeticBuilder::new()
///     .preserve_zero_denominators()
///     .wrapping_overflow()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(arith.strategy_name(), "Wrapping");
/// ```
pub struct ArithmeticBuilder {
    config: ArithmeticConfig,
}

impl Default for ArithmeticBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArithmeticBuilder {
    /// Create a new builder starting from the strict configuration
    pub fn new() -> Self {
        Self {
            config: ArithmeticConfig::strict(),
        }
    }

    // ========================================================================
    // Zero Denominator Configuration
    // ========================================================================

    /// Report zero denominators and zero divisors as errors (default)
    pub fn reject_zero_denominators(mut self) -> Self {
        self.config.zero_denominator = ZeroDenominatorPolicy::Reject;
        self
    }

    /// Let zero denominators through
    pub fn preserve_zero_denominators(mut self) -> Self {
        self.config.zero_denominator = ZeroDenominatorPolicy::Preserve;
        self
    }

    // ========================================================================
    // Overflow Configuration
    // ========================================================================

    /// Report component overflow as errors (default)
    pub fn checked_overflow(mut self) -> Self {
        self.config.overflow = OverflowPolicy::Checked;
        self
    }

    /// Wrap components on overflow
    pub fn wrapping_overflow(mut self) -> Self {
        self.config.overflow = OverflowPolicy::Wrapping;
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Set render buffer capacity
    pub fn with_render_capacity(mut self, capacity: usize) -> Self {
        self.config.render_capacity = capacity;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Start from the strict preset
    pub fn strict() -> Self {
        Self {
            config: ArithmeticConfig::strict(),
        }
    }

    /// Start from the legacy preset
    pub fn legacy() -> Self {
        Self {
            config: ArithmeticConfig::legacy(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the arithmetic context
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> NumericResult<Arithmetic> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ArithmeticConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;
    use crate::numeric::NumericError;

    #[test]
    fn test_create_strict_context() {
        let arith =
            create_from_config(ArithmeticConfig::strict(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(arith.strategy_name(), "Checked");
        assert_eq!(arith.config(), &ArithmeticConfig::strict());
    }

    #[test]
    fn test_create_legacy_context() {
        let arith =
            create_from_config(ArithmeticConfig::legacy(), Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(arith.strategy_name(), "Wrapping");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ArithmeticConfig::strict().with_render_capacity(0);
        let result = create_from_config(config, Arc::new(NoOpEventHandler));
        assert!(matches!(result, Err(NumericError::InvalidInput)));
    }

    #[test]
    fn test_builder() {
        let builder = ArithmeticBuilder::new()
            .preserve_zero_denominators()
            .with_render_capacity(64);

        let config = builder.get_config();
        assert_eq!(config.zero_denominator, ZeroDenominatorPolicy::Preserve);
        assert_eq!(config.overflow, OverflowPolicy::Checked);
        assert_eq!(config.render_capacity, 64);

        let arith = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(arith.strategy_name(), "Checked");
    }

    #[test]
    fn test_builder_presets() {
        assert_eq!(
            ArithmeticBuilder::legacy().get_config(),
            &ArithmeticConfig::legacy()
        );
        assert_eq!(
            ArithmeticBuilder::legacy()
                .reject_zero_denominators()
                .checked_overflow()
                .get_config(),
            &ArithmeticConfig::strict()
        );
    }
}

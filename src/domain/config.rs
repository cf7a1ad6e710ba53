// ============================================================================
// Arithmetic Configuration
// Policies deciding how zero denominators and overflow are handled
// ============================================================================

use crate::numeric::{NumericError, NumericResult, DEFAULT_RENDER_CAPACITY, MAX_RENDER_CAPACITY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Zero Denominator Policy
// ============================================================================

/// What an arithmetic context does with zero denominators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroDenominatorPolicy {
    /// Report `ZeroDenominator` for operands, `DivisionByZero` for divisors
    /// with a zero numerator, and `ZeroDenominator` for results
    #[default]
    Reject,

    /// Compute the result anyway and let a zero denominator through
    /// - Division by `0/d` yields `n/0`
    /// - A warning is logged and a `ZeroDenominatorPreserved` event emitted
    Preserve,
}

// ============================================================================
// Overflow Policy
// ============================================================================

/// How component overflow is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// i128 intermediates, `Overflow`/`Underflow` when narrowing fails
    #[default]
    Checked,

    /// Two's-complement wraparound, as fixed-width machine integers behave
    Wrapping,
}

// ============================================================================
// Complete Arithmetic Configuration
// ============================================================================

/// Configuration for creating an arithmetic context
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArithmeticConfig {
    /// Zero denominator handling
    pub zero_denominator: ZeroDenominatorPolicy,

    /// Overflow handling
    pub overflow: OverflowPolicy,

    /// Bytes reserved when a render buffer is first allocated
    pub render_capacity: usize,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl ArithmeticConfig {
    /// Create a new configuration with explicit policies
    pub fn new(zero_denominator: ZeroDenominatorPolicy, overflow: OverflowPolicy) -> Self {
        Self {
            zero_denominator,
            overflow,
            render_capacity: DEFAULT_RENDER_CAPACITY,
        }
    }

    /// Builder method: Set zero denominator policy
    pub fn with_zero_denominator(mut self, policy: ZeroDenominatorPolicy) -> Self {
        self.zero_denominator = policy;
        self
    }

    /// Builder method: Set overflow policy
    pub fn with_overflow(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    /// Builder method: Set render buffer capacity
    pub fn with_render_capacity(mut self, capacity: usize) -> Self {
        self.render_capacity = capacity;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns `InvalidInput` for a render capacity of zero or above
    /// `MAX_RENDER_CAPACITY`.
    pub fn validate(&self) -> NumericResult<()> {
        if self.render_capacity == 0 || self.render_capacity > MAX_RENDER_CAPACITY {
            return Err(NumericError::InvalidInput);
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields take their `strict()` defaults.
    ///
    /// # Errors
    /// Returns `InvalidInput` for malformed JSON or an invalid configuration.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> NumericResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            tracing::debug!("Rejected arithmetic config: {}", e);
            NumericError::InvalidInput
        })?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ArithmeticConfig {
    /// Hardened arithmetic
    /// - Zero denominators rejected
    /// - Overflow reported
    pub fn strict() -> Self {
        Self::new(ZeroDenominatorPolicy::Reject, OverflowPolicy::Checked)
    }

    /// Unchecked arithmetic for parity with plain fixed-width fractions
    /// - Zero denominators let through
    /// - Components wrap on overflow
    pub fn legacy() -> Self {
        Self::new(ZeroDenominatorPolicy::Preserve, OverflowPolicy::Wrapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = ArithmeticConfig::new(
            ZeroDenominatorPolicy::Preserve,
            OverflowPolicy::Checked,
        );

        assert_eq!(config.zero_denominator, ZeroDenominatorPolicy::Preserve);
        assert_eq!(config.overflow, OverflowPolicy::Checked);
        assert_eq!(config.render_capacity, DEFAULT_RENDER_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(ArithmeticConfig::default(), ArithmeticConfig::strict());

        let legacy = ArithmeticConfig::legacy();
        assert_eq!(legacy.zero_denominator, ZeroDenominatorPolicy::Preserve);
        assert_eq!(legacy.overflow, OverflowPolicy::Wrapping);
    }

    #[test]
    fn test_builder_methods() {
        let config = ArithmeticConfig::strict()
            .with_overflow(OverflowPolicy::Wrapping)
            .with_render_capacity(32);

        assert_eq!(config.zero_denominator, ZeroDenominatorPolicy::Reject);
        assert_eq!(config.overflow, OverflowPolicy::Wrapping);
        assert_eq!(config.render_capacity, 32);
    }

    #[test]
    fn test_validation_failures() {
        let config = ArithmeticConfig::strict().with_render_capacity(0);
        assert_eq!(config.validate(), Err(NumericError::InvalidInput));

        let config = ArithmeticConfig::strict().with_render_capacity(usize::MAX);
        assert_eq!(config.validate(), Err(NumericError::InvalidInput));

        let config = ArithmeticConfig::strict().with_render_capacity(MAX_RENDER_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = ArithmeticConfig::from_json(
            r#"{ "zero_denominator": "Preserve", "render_capacity": 48 }"#,
        )
        .unwrap();
        assert_eq!(config.zero_denominator, ZeroDenominatorPolicy::Preserve);
        assert_eq!(config.overflow, OverflowPolicy::Checked);
        assert_eq!(config.render_capacity, 48);

        assert_eq!(
            ArithmeticConfig::from_json("{ not json"),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            ArithmeticConfig::from_json(r#"{ "render_capacity": 0 }"#),
            Err(NumericError::InvalidInput)
        );
    }
}

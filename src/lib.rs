// ============================================================================
// Rational Library
// Unreduced signed fractions with lazy rendering and configurable arithmetic
// ============================================================================

//! # Rational
//!
//! An exact fraction value type that keeps what it was given.
//!
//! ## Features
//!
//! - **No automatic reduction**: `2/3 * 3/4` is `6/12`, and `1/2 != 2/4`
//! - **Lazy rendering** into an owned buffer allocated once per value
//! - **Checked arithmetic** through i128 intermediates
//! - **Configurable contexts** that reject or preserve zero denominators and
//!   check or wrap on overflow, reporting every outcome to an event handler
//!
//! ## Example
//!
//! ```rust
//! use rational::prelude::*;
//! use std::sync::Arc;
//!
//! let arith = ArithmeticBuilder::strict()
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! let mut sum = arith.add(&Rational::new(1, 2), &Rational::new(1, 3)).unwrap();
//! assert_eq!(sum.render().unwrap(), "5/6");
//!
//! let err = arith.divide(&sum, &Rational::ZERO).unwrap_err();
//! assert_eq!(err, NumericError::DivisionByZero);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ArithmeticConfig, Operation, OverflowPolicy, ZeroDenominatorPolicy};
    pub use crate::engine::{
        create_from_config, Arithmetic, ArithmeticBuilder, CheckedArithmetic, WrappingArithmetic,
    };
    pub use crate::interfaces::{
        ArithmeticEvent, ArithmeticStrategy, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{NumericError, NumericResult, Rational};
}

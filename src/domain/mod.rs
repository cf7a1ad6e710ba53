// ============================================================================
// Domain Models Module
// Configuration and operation vocabulary for arithmetic contexts
// ============================================================================

pub mod config;
pub mod operation;

pub use config::{ArithmeticConfig, OverflowPolicy, ZeroDenominatorPolicy};
pub use operation::Operation;

// ============================================================================
// Engine Module
// Arithmetic contexts and the strategies they are built from
// ============================================================================

mod arithmetic;
mod checked;
mod wrapping;

pub mod factory;

pub use arithmetic::Arithmetic;
pub use checked::CheckedArithmetic;
pub use factory::{create_from_config, ArithmeticBuilder};
pub use wrapping::WrappingArithmetic;

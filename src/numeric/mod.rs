// ============================================================================
// Numeric Module
// Exact fraction arithmetic with an owned, lazily allocated render cache
// ============================================================================
//
// This module provides:
// - Rational: unreduced signed fraction over i64 components
// - RenderBuffer: the owned text storage behind Rational::render
// - NumericError: Error types for arithmetic, parsing and rendering
//
// Design principles:
// - No automatic reduction (1/2 and 2/4 are distinct values)
// - checked_* arithmetic returns Result via i128 intermediates
// - Rendering reuses one allocation per value until reset

mod errors;
mod rational;
mod render_buffer;

pub use errors::{NumericError, NumericResult};
pub use rational::Rational;
pub use render_buffer::{RenderBuffer, DEFAULT_RENDER_CAPACITY, MAX_RENDER_CAPACITY};

// ============================================================================
// Utilities Module
// Helper functions for binaries embedding the crate
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;

// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod arithmetic_strategy;
mod event_handler;

pub use arithmetic_strategy::{ArithmeticStrategy, Evaluation};
pub use event_handler::{
    ArithmeticEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
};

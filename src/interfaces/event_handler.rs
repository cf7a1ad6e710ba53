// ============================================================================
// Event Handler Interface
// Defines the contract for observing arithmetic outcomes
// ============================================================================

use crate::domain::Operation;
use crate::numeric::{NumericError, Rational};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by an arithmetic context
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithmeticEvent {
    /// Operation produced a result
    Computed {
        operation: Operation,
        lhs: Rational,
        rhs: Rational,
        result: Rational,
    },

    /// Operation refused with an error
    Rejected {
        operation: Operation,
        error: NumericError,
    },

    /// Result carries a zero denominator that the policy let through
    ZeroDenominatorPreserved {
        operation: Operation,
        result: Rational,
    },

    /// Result components wrapped around
    OverflowWrapped {
        operation: Operation,
        result: Rational,
    },
}

/// Event handler trait for processing arithmetic events
/// Implementations can handle logging, auditing, assertions in tests, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an arithmetic event
    fn on_event(&self, event: ArithmeticEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ArithmeticEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ArithmeticEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ArithmeticEvent) {
        tracing::debug!("Arithmetic event: {:?}", event);
    }
}

/// Keeps every event in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<ArithmeticEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far
    pub fn events(&self) -> Vec<ArithmeticEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the recorded events
    pub fn drain(&self) -> Vec<ArithmeticEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: ArithmeticEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<ArithmeticEvent>) {
        self.events.lock().extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected() -> ArithmeticEvent {
        ArithmeticEvent::Rejected {
            operation: Operation::Divide,
            error: NumericError::DivisionByZero,
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(rejected());
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_events(vec![rejected(), rejected()]);
    }

    #[test]
    fn test_recording_handler() {
        let handler = RecordingEventHandler::new();
        assert!(handler.is_empty());

        handler.on_event(rejected());
        handler.on_events(vec![ArithmeticEvent::ZeroDenominatorPreserved {
            operation: Operation::Divide,
            result: Rational::new(1, 0),
        }]);

        assert_eq!(handler.len(), 2);
        assert_eq!(handler.events()[0], rejected());

        let drained = handler.drain();
        assert_eq!(drained.len(), 2);
        assert!(handler.is_empty());
    }
}

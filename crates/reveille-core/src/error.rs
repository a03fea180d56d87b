//! Error types for the alarm scheduler.
//!
//! Every variant is a recoverable notice: callers report it and carry on.
//! No scheduler error terminates the process.

use thiserror::Error;

/// Scheduler error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// Index outside the current collection bounds.
    #[error("Index {index} out of bounds for alarms (length: {len})")]
    InvalidIndex { index: usize, len: usize },

    /// Snooze requested with no budget remaining. No state change.
    #[error("Alarm {index} cannot be snoozed anymore. No snoozes left.")]
    SnoozeExhausted { index: usize },

    /// Dismiss requested on an alarm that is not ringing. No state change.
    #[error("Alarm {index} is not ringing.")]
    NotRinging { index: usize },
}

/// Result type alias for SchedulerError
pub type Result<T, E = SchedulerError> = std::result::Result<T, E>;

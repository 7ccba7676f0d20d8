//! Error types for the Beacon event emitter.

use thiserror::Error;
use uuid::Uuid;

/// Result type used throughout the crate and by listener callbacks.
pub type Result<T> = std::result::Result<T, EmitterError>;

/// A single listener's failure during a publish, identified by listener id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFailure {
    /// Id of the listener whose callback returned an error.
    pub listener_id: Uuid,
    /// The error message the callback produced.
    pub message: String,
}

impl std::fmt::Display for ListenerFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener {}: {}", self.listener_id, self.message)
    }
}

/// Errors produced by the emitter or by listener callbacks.
#[derive(Error, Debug)]
pub enum EmitterError {
    /// A listener callback failed while handling a payload.
    #[error("Listener error: {0}")]
    Listener(String),

    /// One or more listeners failed during a publish. Every listener in the
    /// dispatch was still attempted; `failures` records each one that failed,
    /// in invocation order.
    #[error("Publish to '{event}' finished with {} failed listener(s)", failures.len())]
    Publish {
        /// Debug rendering of the event name that was published.
        event: String,
        /// One entry per failed listener, in invocation order.
        failures: Vec<ListenerFailure>,
    },
}

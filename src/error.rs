//! Errors raised while binding machines and firing transitions.

use thiserror::Error;

/// Boxed foreign error, used for loader and operation failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, MachineError>;

/// Every way a bind or a transition can be rejected.
///
/// Each variant is a distinct failure cause so callers can match on it
/// rather than inspect message text.
#[derive(Debug, Error)]
pub enum MachineError {
    /// The binder was never given a state loader.
    #[error("No state loader configured for this machine")]
    LoaderNotFound,

    /// The state loader failed, either at bind time or while reconciling
    /// a transition.
    #[error("State loader failed: {source}")]
    Loader {
        #[source]
        source: BoxError,
    },

    /// A state (initial, source or destination) is not declared on the machine.
    #[error("{state} is not a valid state. Valid states are {}", .valid.join(", "))]
    InvalidState { state: String, valid: Vec<String> },

    /// A transition was fired against something that holds no bound machine.
    #[error("Transition '{transition}' can only be fired on a bound machine")]
    MachineNotFound { transition: String },

    /// The machine's current state is not among the transition's sources.
    #[error("Current state - {current} is not in source states - {}", .sources.join(", "))]
    InvalidMove {
        transition: String,
        current: String,
        sources: Vec<String>,
    },

    /// The operation ran but the loader does not report the declared destination.
    #[error(
        "Transition '{transition}' didn't update the state to intended destination \
         '{expected}' (loader reported '{actual}')"
    )]
    UnintendedOperation {
        transition: String,
        expected: String,
        actual: String,
    },

    /// The guarded operation itself returned an error.
    #[error("Transition '{transition}' operation failed: {source}")]
    OperationFailed {
        transition: String,
        #[source]
        source: BoxError,
    },
}

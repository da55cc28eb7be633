//! Build errors for binders and transition builders.

use thiserror::Error;

/// Errors that can occur while assembling transitions and configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition '{name}' has no destination. Call .to(state) before .build()")]
    MissingDestination { name: String },

    #[error("Invalid machine configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

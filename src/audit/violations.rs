//! Findings reported by an audit.

use std::fmt;
use thiserror::Error;

/// Where in a transition declaration a state appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateRole {
    Source,
    Destination,
}

impl fmt::Display for StateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// A transition names a state the machine does not declare.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Transition '{transition}' uses unknown {role} state '{state}'")]
pub struct UnknownState {
    pub transition: String,
    pub state: String,
    pub role: StateRole,
}

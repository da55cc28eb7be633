//! The fixed list of states a machine accepts.

use super::state::State;
use crate::error::{MachineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered, immutable list of the states a machine accepts.
///
/// The list is fixed when a binder is created and shared by every machine
/// that binder produces. It may be empty, in which case no machine can ever
/// be bound from it.
///
/// # Example
///
/// ```rust
/// use stateguard::core::StateSet;
///
/// let states = StateSet::new(["A".to_string(), "B".to_string()]);
///
/// assert!(states.contains(&"A".to_string()));
/// assert!(states.validate(&"C".to_string()).is_err());
/// assert_eq!(states.to_string(), "A, B");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateSet<S: State> {
    states: Vec<S>,
}

impl<S: State> StateSet<S> {
    /// Declare the valid states, in order. Duplicates are kept as given.
    pub fn new<I>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self {
            states: states.into_iter().collect(),
        }
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }

    /// Names of every declared state, in declaration order.
    pub fn names(&self) -> Vec<String> {
        self.states.iter().map(|s| s.name().to_string()).collect()
    }

    /// Fail with [`MachineError::InvalidState`] unless `state` is declared.
    pub fn validate(&self, state: &S) -> Result<()> {
        validate_state(state, self)
    }
}

impl<S: State> fmt::Display for StateSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}

/// Check that `state` is one of `valid_states`.
///
/// The error names the offending state and the full valid list.
pub fn validate_state<S: State>(state: &S, valid_states: &StateSet<S>) -> Result<()> {
    if valid_states.contains(state) {
        Ok(())
    } else {
        Err(MachineError::InvalidState {
            state: state.name().to_string(),
            valid: valid_states.names(),
        })
    }
}

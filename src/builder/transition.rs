//! Builder for declaring transitions.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::machine::{GuardedOperation, Transition};

/// Builder for declaring transitions with a fluent API.
pub struct TransitionBuilder<S: State> {
    name: String,
    sources: Vec<S>,
    destination: Option<S>,
}

impl<S: State> TransitionBuilder<S> {
    /// Start a transition called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sources: Vec::new(),
            destination: None,
        }
    }

    /// Add a source state. Sources are checked in the order they are added.
    pub fn from(mut self, state: S) -> Self {
        self.sources.push(state);
        self
    }

    /// Add several source states at once.
    pub fn from_any<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.sources.extend(states);
        self
    }

    /// Set the destination state (required).
    pub fn to(mut self, state: S) -> Self {
        self.destination = Some(state);
        self
    }

    /// Build the transition.
    ///
    /// A transition with no sources is legal; it can never fire.
    pub fn build(self) -> Result<Transition<S>, BuildError> {
        let destination = self
            .destination
            .ok_or_else(|| BuildError::MissingDestination {
                name: self.name.clone(),
            })?;

        Ok(Transition::new(self.name, self.sources, destination))
    }

    /// Build the transition and wrap `operation` behind it.
    pub fn guard<T, A, R, F>(self, operation: F) -> Result<GuardedOperation<T, S, A, R>, BuildError>
    where
        F: Fn(&mut T, A) -> R + Send + Sync + 'static,
    {
        Ok(self.build()?.guard(operation))
    }
}

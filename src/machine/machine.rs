//! A host object bound to a fixed set of states.

use crate::config::Reconciliation;
use crate::core::{State, StateSet};
use crate::error::{BoxError, MachineError, Result};
use crate::machine::loader::Loader;
use crate::machine::transition::Transition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Bookkeeping kept alongside a machine's current state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MachineMetadata {
    /// When the machine was bound
    pub bound_at: DateTime<Utc>,

    /// When the current state was last committed
    pub updated_at: DateTime<Utc>,

    /// Number of committed transitions
    pub transitions: usize,
}

impl MachineMetadata {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            bound_at: now,
            updated_at: now,
            transitions: 0,
        }
    }

    fn record_commit(&mut self) {
        self.updated_at = Utc::now();
        self.transitions += 1;
    }
}

/// A host object whose state is tracked against a fixed list of valid states.
///
/// Machines are only produced by [`Binder::bind`](crate::builder::Binder::bind),
/// so every machine has passed initial-state validation. The current state
/// is owned by the machine: host code can reach its own data through
/// [`host_mut`](Self::host_mut) but only a successful transition moves
/// [`current_state`](Self::current_state).
///
/// Each machine is an independent state holder. Firing transitions on the
/// same machine from several threads needs external synchronization.
pub struct Machine<T, S: State> {
    id: Uuid,
    host: T,
    states: Arc<StateSet<S>>,
    current: S,
    loader: Loader<T, S>,
    reconciliation: Reconciliation,
    metadata: MachineMetadata,
}

impl<T, S: State> Machine<T, S> {
    /// Caller must already have validated `current` against `states`.
    pub(crate) fn new(
        host: T,
        states: Arc<StateSet<S>>,
        current: S,
        loader: Loader<T, S>,
        reconciliation: Reconciliation,
    ) -> Self {
        let machine = Self {
            id: Uuid::new_v4(),
            host,
            states,
            current,
            loader,
            reconciliation,
            metadata: MachineMetadata::new(),
        };
        tracing::debug!(
            machine_id = %machine.id,
            state = machine.current.name(),
            "Machine bound"
        );
        machine
    }

    /// Unique identifier of this machine instance.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn valid_states(&self) -> &StateSet<S> {
        &self.states
    }

    pub fn host(&self) -> &T {
        &self.host
    }

    /// Mutable access for non-transition host operations.
    ///
    /// Changes made here are not reflected in the current state until a
    /// transition commits.
    pub fn host_mut(&mut self) -> &mut T {
        &mut self.host
    }

    /// Release the host, discarding the machine.
    pub fn into_inner(self) -> T {
        self.host
    }

    pub fn reconciliation(&self) -> Reconciliation {
        self.reconciliation
    }

    pub fn metadata(&self) -> &MachineMetadata {
        &self.metadata
    }

    /// Fire `transition` on this machine, running `operation` on the host.
    ///
    /// See [`Transition::fire`] for the full sequence of checks.
    pub fn fire<R, F>(&mut self, transition: &Transition<S>, operation: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        transition.fire(self, operation)
    }

    /// Fire `transition` with a fallible operation.
    ///
    /// See [`Transition::try_fire`].
    pub fn try_fire<R, E, F>(&mut self, transition: &Transition<S>, operation: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> std::result::Result<R, E>,
        E: Into<BoxError>,
    {
        transition.try_fire(self, operation)
    }

    /// Reconcile and commit once the transition's operation has returned.
    ///
    /// Under strict reconciliation the loader must report the declared
    /// destination; otherwise the current state is left untouched.
    pub(crate) fn settle(&mut self, transition: &Transition<S>) -> Result<()> {
        let destination = transition.destination();

        if self.reconciliation == Reconciliation::Strict {
            let actual =
                (self.loader)(&self.host).map_err(|source| MachineError::Loader { source })?;

            if actual != *destination {
                tracing::warn!(
                    machine_id = %self.id,
                    transition = transition.name(),
                    expected = destination.name(),
                    actual = actual.name(),
                    "Operation did not reach the declared destination"
                );
                return Err(MachineError::UnintendedOperation {
                    transition: transition.name().to_string(),
                    expected: destination.name().to_string(),
                    actual: actual.name().to_string(),
                });
            }
        }

        let from = std::mem::replace(&mut self.current, destination.clone());
        self.metadata.record_commit();
        tracing::debug!(
            machine_id = %self.id,
            transition = transition.name(),
            from = from.name(),
            to = self.current.name(),
            "Transition committed"
        );
        Ok(())
    }
}

impl<T: fmt::Debug, S: State> fmt::Debug for Machine<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("id", &self.id)
            .field("host", &self.host)
            .field("states", &self.states)
            .field("current", &self.current)
            .field("reconciliation", &self.reconciliation)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

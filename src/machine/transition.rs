//! Guarded transitions.

use crate::core::{State, StateSet};
use crate::error::{BoxError, MachineError, Result};
use crate::machine::machine::Machine;
use crate::machine::operation::GuardedOperation;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// Anything a transition can be fired against.
///
/// A [`Machine`] is always bound. An `Option<Machine>` models a slot that
/// may not hold one; firing against an empty slot is rejected with
/// [`MachineError::MachineNotFound`] before any other check.
pub trait GuardTarget<S: State> {
    type Host;

    fn bound_machine(&mut self) -> Option<&mut Machine<Self::Host, S>>;
}

impl<T, S: State> GuardTarget<S> for Machine<T, S> {
    type Host = T;

    fn bound_machine(&mut self) -> Option<&mut Machine<T, S>> {
        Some(self)
    }
}

impl<T, S: State> GuardTarget<S> for Option<Machine<T, S>> {
    type Host = T;

    fn bound_machine(&mut self) -> Option<&mut Machine<T, S>> {
        self.as_mut()
    }
}

/// Declaration of a guarded state change: the states it may fire from and
/// the state it must leave the machine in.
///
/// The declaration is checked against the target machine's valid states on
/// every invocation, never cached, so the same transition can be shared by
/// machines declaring different state lists.
///
/// # Example
///
/// ```rust
/// use stateguard::builder::Binder;
/// use stateguard::machine::Transition;
///
/// struct Player {
///     airborne: bool,
/// }
///
/// let binder = Binder::new(["ground".to_string(), "sky".to_string()])
///     .state_from(|p: &Player| (if p.airborne { "sky" } else { "ground" }).to_string());
///
/// let jump = Transition::new("jump", ["ground".to_string()], "sky".to_string());
///
/// let mut player = binder.bind(Player { airborne: false }).unwrap();
/// player.fire(&jump, |p| p.airborne = true).unwrap();
/// assert_eq!(player.current_state(), "sky");
///
/// // Already in the sky: "sky" is not a source of `jump`.
/// assert!(player.fire(&jump, |p| p.airborne = true).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    name: String,
    sources: Vec<S>,
    destination: S,
}

impl<S: State> Transition<S> {
    pub fn new<I>(name: impl Into<String>, sources: I, destination: S) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self {
            name: name.into(),
            sources: sources.into_iter().collect(),
            destination,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sources(&self) -> &[S] {
        &self.sources
    }

    pub fn destination(&self) -> &S {
        &self.destination
    }

    /// Check if this transition may fire from `current` (pure).
    pub fn allows(&self, current: &S) -> bool {
        self.sources.contains(current)
    }

    /// Check every source, in declaration order, then the destination
    /// against `states`. Stops at the first unknown state.
    pub fn validate(&self, states: &StateSet<S>) -> Result<()> {
        for source in &self.sources {
            states.validate(source)?;
        }
        states.validate(&self.destination)
    }

    fn check_source(&self, current: &S) -> Result<()> {
        if self.allows(current) {
            Ok(())
        } else {
            Err(MachineError::InvalidMove {
                transition: self.name.clone(),
                current: current.name().to_string(),
                sources: self.sources.iter().map(|s| s.name().to_string()).collect(),
            })
        }
    }

    /// Fire this transition on `target`, running `operation` on its host.
    ///
    /// Checks run in a fixed order and the first failure stops everything
    /// after it:
    ///
    /// 1. `target` holds a bound machine ([`MachineError::MachineNotFound`])
    /// 2. sources then destination are valid states ([`MachineError::InvalidState`])
    /// 3. the current state is a source ([`MachineError::InvalidMove`])
    /// 4. `operation` runs
    /// 5. under strict reconciliation the loader must report the destination
    ///    ([`MachineError::UnintendedOperation`] or [`MachineError::Loader`])
    /// 6. the destination is committed and the operation's output returned
    ///
    /// The current state changes only in step 6.
    pub fn fire<G, R, F>(&self, target: &mut G, operation: F) -> Result<R>
    where
        G: GuardTarget<S> + ?Sized,
        F: FnOnce(&mut G::Host) -> R,
    {
        self.try_fire(target, |host| Ok::<R, Infallible>(operation(host)))
    }

    /// Like [`fire`](Self::fire), for operations that can fail.
    ///
    /// An `Err` from the operation aborts the transition with
    /// [`MachineError::OperationFailed`]; nothing is committed.
    pub fn try_fire<G, R, E, F>(&self, target: &mut G, operation: F) -> Result<R>
    where
        G: GuardTarget<S> + ?Sized,
        F: FnOnce(&mut G::Host) -> std::result::Result<R, E>,
        E: Into<BoxError>,
    {
        let result = self.run(target, operation);
        if let Err(err) = &result {
            tracing::debug!(transition = %self.name, error = %err, "Transition rejected");
        }
        result
    }

    fn run<G, R, E, F>(&self, target: &mut G, operation: F) -> Result<R>
    where
        G: GuardTarget<S> + ?Sized,
        F: FnOnce(&mut G::Host) -> std::result::Result<R, E>,
        E: Into<BoxError>,
    {
        let machine = target
            .bound_machine()
            .ok_or_else(|| MachineError::MachineNotFound {
                transition: self.name.clone(),
            })?;

        self.validate(machine.valid_states())?;
        self.check_source(machine.current_state())?;

        let output =
            operation(machine.host_mut()).map_err(|err| MachineError::OperationFailed {
                transition: self.name.clone(),
                source: err.into(),
            })?;

        machine.settle(self)?;
        Ok(output)
    }

    /// Wrap a reusable host operation behind this transition.
    pub fn guard<T, A, R, F>(self, operation: F) -> GuardedOperation<T, S, A, R>
    where
        F: Fn(&mut T, A) -> R + Send + Sync + 'static,
    {
        GuardedOperation::new(self, operation)
    }
}

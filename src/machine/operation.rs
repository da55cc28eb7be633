//! Reusable host operations bound to a transition.

use crate::core::State;
use crate::error::Result;
use crate::machine::transition::{GuardTarget, Transition};
use std::sync::Arc;

/// Type alias for wrapped host operations.
pub type Operation<T, A, R> = Arc<dyn Fn(&mut T, A) -> R + Send + Sync>;

/// A host operation that may only run through its transition's guard.
///
/// Created with [`Transition::guard`]. Every [`call`](Self::call) goes
/// through the full guard sequence of [`Transition::fire`].
///
/// # Example
///
/// ```rust
/// use stateguard::builder::Binder;
/// use stateguard::machine::Transition;
///
/// #[derive(Debug)]
/// struct Account {
///     balance: i64,
/// }
///
/// let binder = Binder::new(["empty".to_string(), "funded".to_string()]).state_from(
///     |a: &Account| (if a.balance > 0 { "funded" } else { "empty" }).to_string(),
/// );
///
/// let deposit = Transition::new("deposit", ["empty".to_string()], "funded".to_string())
///     .guard(|account: &mut Account, amount: i64| {
///         account.balance += amount;
///         account.balance
///     });
///
/// let mut account = binder.bind(Account { balance: 0 }).unwrap();
/// assert_eq!(deposit.call(&mut account, 50).unwrap(), 50);
/// assert_eq!(account.current_state(), "funded");
/// ```
pub struct GuardedOperation<T, S: State, A, R> {
    transition: Transition<S>,
    operation: Operation<T, A, R>,
}

impl<T, S: State, A, R> GuardedOperation<T, S, A, R> {
    pub fn new<F>(transition: Transition<S>, operation: F) -> Self
    where
        F: Fn(&mut T, A) -> R + Send + Sync + 'static,
    {
        Self {
            transition,
            operation: Arc::new(operation),
        }
    }

    pub fn transition(&self) -> &Transition<S> {
        &self.transition
    }

    /// Run the operation on `target` with `args`, returning its output once
    /// the transition has committed.
    pub fn call<G>(&self, target: &mut G, args: A) -> Result<R>
    where
        G: GuardTarget<S, Host = T> + ?Sized,
    {
        self.transition
            .fire(target, |host| (self.operation)(host, args))
    }
}

impl<T, S: State, A, R> Clone for GuardedOperation<T, S, A, R> {
    fn clone(&self) -> Self {
        Self {
            transition: self.transition.clone(),
            operation: Arc::clone(&self.operation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Binder;
    use crate::error::MachineError;
    use crate::machine::Machine;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Location {
        Earth,
        Space,
    }

    impl State for Location {
        fn name(&self) -> &str {
            match self {
                Self::Earth => "earth",
                Self::Space => "space",
            }
        }
    }

    #[derive(Debug)]
    struct Rocket {
        name: String,
        altitude: u32,
    }

    fn launch() -> GuardedOperation<Rocket, Location, u32, String> {
        Transition::new("launch", [Location::Earth], Location::Space).guard(
            |rocket: &mut Rocket, altitude: u32| {
                rocket.altitude = altitude;
                format!("{} launched", rocket.name)
            },
        )
    }

    fn rocket(name: &str) -> Machine<Rocket, Location> {
        Binder::new([Location::Earth, Location::Space])
            .state_from(|r: &Rocket| {
                if r.altitude > 0 {
                    Location::Space
                } else {
                    Location::Earth
                }
            })
            .bind(Rocket {
                name: name.to_string(),
                altitude: 0,
            })
            .unwrap()
    }

    #[test]
    fn call_passes_arguments_and_returns_output() {
        let mut machine = rocket("Rocket");

        let message = launch().call(&mut machine, 400).unwrap();

        assert_eq!(message, "Rocket launched");
        assert_eq!(machine.host().altitude, 400);
        assert_eq!(machine.current_state(), &Location::Space);
    }

    #[test]
    fn second_call_is_an_invalid_move() {
        let mut machine = rocket("Rocket");
        let launch = launch();

        launch.call(&mut machine, 400).unwrap();
        let result = launch.call(&mut machine, 800);

        assert!(matches!(result, Err(MachineError::InvalidMove { .. })));
        assert_eq!(machine.host().altitude, 400);
    }

    #[test]
    fn clones_share_the_operation() {
        let launch = launch();
        let copy = launch.clone();
        let mut a = rocket("A");
        let mut b = rocket("B");

        launch.call(&mut a, 1).unwrap();
        copy.call(&mut b, 2).unwrap();

        assert_eq!(copy.transition().name(), "launch");
        assert_eq!(a.current_state(), &Location::Space);
        assert_eq!(b.current_state(), &Location::Space);
    }
}

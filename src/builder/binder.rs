//! The machine binder: turns host objects into machines.

use crate::audit::{self, UnknownState};
use crate::config::{MachineConfig, Reconciliation};
use crate::core::{State, StateSet};
use crate::error::{BoxError, MachineError, Result};
use crate::machine::{LoadState, Loader, Machine, Transition};
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Binds host objects to a fixed list of valid states.
///
/// A binder holds the declared states, the loader that reads a host's state,
/// and the machine configuration. It can be reused: every
/// [`bind`](Self::bind) produces an independent machine sharing the same
/// state list.
///
/// # Example
///
/// ```rust
/// use stateguard::builder::Binder;
/// use stateguard::MachineError;
///
/// #[derive(Debug)]
/// struct Door {
///     open: bool,
/// }
///
/// let binder = Binder::new(["open".to_string(), "closed".to_string()])
///     .state_from(|d: &Door| (if d.open { "open" } else { "closed" }).to_string());
///
/// let door = binder.bind(Door { open: false }).unwrap();
/// assert_eq!(door.current_state(), "closed");
///
/// let no_loader = Binder::<Door, String>::new(["open".to_string()]);
/// assert!(matches!(
///     no_loader.bind(Door { open: true }),
///     Err(MachineError::LoaderNotFound)
/// ));
/// ```
pub struct Binder<T, S: State> {
    states: Arc<StateSet<S>>,
    loader: Option<Loader<T, S>>,
    config: MachineConfig,
}

impl<T: 'static, S: State + 'static> Binder<T, S> {
    /// Create a binder for the given valid states, with no loader yet.
    pub fn new<I>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let states = StateSet::new(states);
        if states.is_empty() {
            tracing::warn!("Binder declared with no valid states; no host can ever be bound");
        }

        Self {
            states: Arc::new(states),
            loader: None,
            config: MachineConfig::default(),
        }
    }

    /// Use a fallible loader to read the host's state.
    pub fn loader<F, E>(mut self, loader: F) -> Self
    where
        F: Fn(&T) -> std::result::Result<S, E> + Send + Sync + 'static,
        E: Into<BoxError> + 'static,
    {
        let loader: Loader<T, S> =
            Arc::new(move |host: &T| -> std::result::Result<S, BoxError> {
                loader(host).map_err(Into::into)
            });
        self.loader = Some(loader);
        self
    }

    /// Use an infallible loader to read the host's state.
    pub fn state_from<F>(mut self, loader: F) -> Self
    where
        F: Fn(&T) -> S + Send + Sync + 'static,
    {
        let loader: Loader<T, S> =
            Arc::new(move |host: &T| -> std::result::Result<S, BoxError> { Ok(loader(host)) });
        self.loader = Some(loader);
        self
    }

    /// Use the host's own [`LoadState`] implementation as the loader.
    pub fn load_state(mut self) -> Self
    where
        T: LoadState<S>,
    {
        let loader: Loader<T, S> = Arc::new(|host: &T| -> std::result::Result<S, BoxError> {
            host.load_state().map_err(Into::into)
        });
        self.loader = Some(loader);
        self
    }

    /// Set the reconciliation policy for every machine this binder produces.
    pub fn reconciliation(mut self, policy: Reconciliation) -> Self {
        self.config.reconciliation = policy;
        self
    }

    /// Replace the whole machine configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn valid_states(&self) -> &StateSet<S> {
        &self.states
    }

    /// Bind `host` as a machine.
    ///
    /// Runs the loader once and requires its result to be a declared state.
    /// Fails with [`MachineError::LoaderNotFound`] when no loader was
    /// configured, [`MachineError::Loader`] when the loader fails, and
    /// [`MachineError::InvalidState`] when it reports an undeclared state.
    pub fn bind(&self, host: T) -> Result<Machine<T, S>> {
        let loader = self
            .loader
            .clone()
            .ok_or(MachineError::LoaderNotFound)?;

        let current = loader(&host).map_err(|source| MachineError::Loader { source })?;
        self.states.validate(&current)?;

        Ok(Machine::new(
            host,
            Arc::clone(&self.states),
            current,
            loader,
            self.config.reconciliation,
        ))
    }

    /// Turn a host constructor into a machine constructor.
    ///
    /// The returned function builds the host from its arguments and binds it.
    pub fn constructor<A, C>(self, construct: C) -> impl Fn(A) -> Result<Machine<T, S>>
    where
        C: Fn(A) -> T,
    {
        move |args| self.bind(construct(args))
    }

    /// Report every unknown state named by `transitions` in one pass.
    ///
    /// See [`audit::audit`].
    pub fn audit<'a, I>(&self, transitions: I) -> Validation<(), NonEmptyVec<UnknownState>>
    where
        I: IntoIterator<Item = &'a Transition<S>>,
    {
        audit::audit(&self.states, transitions)
    }
}

impl<T, S: State> Clone for Binder<T, S> {
    fn clone(&self) -> Self {
        Self {
            states: Arc::clone(&self.states),
            loader: self.loader.clone(),
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::error::Error as _;

    #[derive(Debug)]
    struct Rocket {
        name: String,
        launched: bool,
    }

    impl LoadState<String> for Rocket {
        type Error = Infallible;

        fn load_state(&self) -> std::result::Result<String, Infallible> {
            Ok((if self.launched { "space" } else { "earth" }).to_string())
        }
    }

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn missing_loader_is_reported() {
        let binder = Binder::<Rocket, String>::new([s("A"), s("B")]);

        let result = binder.bind(Rocket {
            name: s("r"),
            launched: false,
        });

        assert!(matches!(result, Err(MachineError::LoaderNotFound)));
    }

    #[test]
    fn failing_loader_is_wrapped() {
        let binder = Binder::<Rocket, String>::new([s("A"), s("B")])
            .loader(|_: &Rocket| Err::<String, _>("Haha! You caught me."));

        match binder.bind(Rocket {
            name: s("r"),
            launched: false,
        }) {
            Err(err @ MachineError::Loader { .. }) => {
                assert_eq!(err.source().unwrap().to_string(), "Haha! You caught me.");
            }
            other => panic!("Expected Loader error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_initial_state_is_rejected() {
        let binder = Binder::<Rocket, String>::new(Vec::new()).state_from(|_| s("STATE"));

        let result = binder.bind(Rocket {
            name: s("r"),
            launched: false,
        });

        assert!(matches!(result, Err(MachineError::InvalidState { .. })));
    }

    #[test]
    fn conventional_loader_is_used() {
        let binder = Binder::<Rocket, String>::new([s("earth"), s("space")]).load_state();

        let machine = binder
            .bind(Rocket {
                name: s("Rocket"),
                launched: false,
            })
            .unwrap();

        assert_eq!(machine.current_state(), "earth");
        assert_eq!(machine.host().name, "Rocket");
    }

    #[test]
    fn constructor_builds_then_binds() {
        let new_rocket = Binder::<Rocket, String>::new([s("earth"), s("space")])
            .load_state()
            .constructor(|name: &str| Rocket {
                name: name.to_string(),
                launched: false,
            });

        let machine = new_rocket("Rocket").unwrap();

        assert_eq!(machine.host().name, "Rocket");
        assert_eq!(machine.current_state(), "earth");
    }

    #[test]
    fn config_sets_reconciliation() {
        let config = MachineConfig {
            reconciliation: Reconciliation::Lenient,
        };
        let binder = Binder::<Rocket, String>::new([s("earth"), s("space")])
            .load_state()
            .config(config);

        let machine = binder
            .bind(Rocket {
                name: s("r"),
                launched: true,
            })
            .unwrap();

        assert_eq!(machine.reconciliation(), Reconciliation::Lenient);
        assert_eq!(machine.current_state(), "space");
    }

    #[test]
    fn machines_from_one_binder_are_independent() {
        let binder = Binder::<Rocket, String>::new([s("earth"), s("space")]).load_state();
        let launch = Transition::new("launch", [s("earth")], s("space"));
        let mut first = binder
            .bind(Rocket {
                name: s("first"),
                launched: false,
            })
            .unwrap();
        let second = binder
            .clone()
            .bind(Rocket {
                name: s("second"),
                launched: false,
            })
            .unwrap();

        first.fire(&launch, |r| r.launched = true).unwrap();

        assert_eq!(first.current_state(), "space");
        assert_eq!(second.current_state(), "earth");
    }

    #[test]
    fn audit_uses_binder_states() {
        let binder = Binder::<Rocket, String>::new([s("earth"), s("space")]);
        let good = Transition::new("launch", [s("earth")], s("space"));
        let bad = Transition::new("dock", [s("orbit")], s("station"));

        assert!(binder.audit([&good]).is_success());
        assert!(binder.audit([&good, &bad]).is_failure());
    }
}

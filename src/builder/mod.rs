//! Builder API for binding machines and declaring transitions.
//!
//! This module provides the binder, a fluent transition builder and the
//! `state_enum!` macro, plus two shorthand constructors.

pub mod binder;
pub mod error;
pub mod macros;
pub mod transition;

pub use binder::Binder;
pub use error::BuildError;
pub use transition::TransitionBuilder;

use crate::core::State;
use crate::machine::Transition;

/// Start a binder for the given valid states.
///
/// # Example
///
/// ```
/// use stateguard::builder::machine;
/// use stateguard::state_enum;
///
/// state_enum! {
///     enum Light {
///         Off,
///         On,
///     }
/// }
///
/// struct Switch {
///     on: bool,
/// }
///
/// let binder = machine(Light::ALL.iter().copied())
///     .state_from(|s: &Switch| if s.on { Light::On } else { Light::Off });
///
/// let switch = binder.bind(Switch { on: true }).unwrap();
/// assert_eq!(switch.current_state(), &Light::On);
/// ```
pub fn machine<T, S, I>(states: I) -> Binder<T, S>
where
    T: 'static,
    S: State + 'static,
    I: IntoIterator<Item = S>,
{
    Binder::new(states)
}

/// Declare a transition from any of `sources` to `destination`.
///
/// # Example
///
/// ```
/// use stateguard::builder::transition;
///
/// let fall = transition(
///     "fall",
///     ["tree".to_string(), "sky".to_string()],
///     "ground".to_string(),
/// );
///
/// assert!(fall.allows(&"sky".to_string()));
/// ```
pub fn transition<S, I>(name: &str, sources: I, destination: S) -> Transition<S>
where
    S: State,
    I: IntoIterator<Item = S>,
{
    Transition::new(name, sources, destination)
}

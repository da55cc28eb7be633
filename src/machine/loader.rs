//! State loaders: how a machine reads its state back out of its host.

use crate::core::State;
use crate::error::BoxError;
use std::sync::Arc;

/// Type-erased loader stored on a binder and on every machine it binds.
///
/// Loaders are shared (`Arc`) because the same loader runs at bind time and
/// again after each strict transition.
pub type Loader<T, S> = Arc<dyn Fn(&T) -> Result<S, BoxError> + Send + Sync>;

/// Conventional loader implemented on the host itself.
///
/// Hosts implementing this trait can be bound with
/// [`Binder::load_state`](crate::builder::Binder::load_state) instead of
/// supplying a loader closure.
///
/// # Example
///
/// ```rust
/// use stateguard::machine::LoadState;
/// use std::convert::Infallible;
///
/// struct Rocket {
///     altitude: u32,
/// }
///
/// impl LoadState<String> for Rocket {
///     type Error = Infallible;
///
///     fn load_state(&self) -> Result<String, Infallible> {
///         Ok((if self.altitude == 0 { "earth" } else { "space" }).to_string())
///     }
/// }
///
/// assert_eq!(Rocket { altitude: 0 }.load_state().unwrap(), "earth");
/// ```
pub trait LoadState<S: State> {
    type Error: Into<BoxError>;

    /// Inspect the host and report which state it is in.
    fn load_state(&self) -> Result<S, Self::Error>;
}

//! The State trait implemented by every machine state.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// A state is a plain value naming one position in a machine's lifecycle.
/// Closed sets of states are usually declared as enums (see
/// [`state_enum!`](crate::state_enum)); `String` also implements the trait
/// for states that are only known at runtime.
///
/// # Required Traits
///
/// - `Clone`: machines hand out and record copies of states
/// - `PartialEq`: membership and reconciliation compare states by value
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: state sets and transitions are plain data
///
/// # Example
///
/// ```rust
/// use stateguard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert_eq!("Closed".to_string().name(), "Closed");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in error messages and logs.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

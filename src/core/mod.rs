//! Core state types.
//!
//! This module contains the data every machine is built from:
//! - State definitions via the `State` trait
//! - The fixed list of valid states and its membership check
//!
//! Nothing here touches a host object; binding and guarding live in
//! [`crate::machine`] and [`crate::builder`].

mod state;
mod states;

pub use state::State;
pub use states::{validate_state, StateSet};

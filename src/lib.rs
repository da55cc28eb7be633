//! Stateguard: bind host objects to a fixed set of states and guard every
//! transition against it.
//!
//! A host object is bound once, through a [`Binder`](builder::Binder) that
//! knows the valid states and a loader reading the host's current state.
//! After that the machine's state only moves through guarded
//! [`Transition`](machine::Transition)s, each declaring the states it may
//! fire from and the state it must leave the host in.
//!
//! # Core Concepts
//!
//! - **State**: a named value from a machine's fixed, immutable list
//! - **Loader**: reads the host's current state; runs at bind time and, under
//!   strict reconciliation, after every transition
//! - **Transition**: checks machine, declared states and current state, runs
//!   the host operation, then commits the destination
//!
//! # Example
//!
//! ```rust
//! use stateguard::builder::Binder;
//! use stateguard::machine::Transition;
//! use stateguard::{state_enum, MachineError};
//!
//! state_enum! {
//!     enum Place {
//!         Ground => "ground",
//!         Sky => "sky",
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Bird {
//!     height: u32,
//! }
//!
//! let binder = Binder::new(Place::ALL.iter().copied())
//!     .state_from(|b: &Bird| if b.height > 0 { Place::Sky } else { Place::Ground });
//! let fly = Transition::new("fly", [Place::Ground], Place::Sky);
//!
//! let mut bird = binder.bind(Bird { height: 0 }).unwrap();
//! assert_eq!(bird.current_state(), &Place::Ground);
//!
//! bird.fire(&fly, |b| b.height = 10).unwrap();
//! assert_eq!(bird.current_state(), &Place::Sky);
//!
//! let again = bird.fire(&fly, |b| b.height = 20);
//! assert!(matches!(again, Err(MachineError::InvalidMove { .. })));
//! ```

pub mod audit;
pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use builder::{Binder, BuildError};
pub use config::{MachineConfig, Reconciliation};
pub use crate::core::{State, StateSet};
pub use error::{BoxError, MachineError, Result};
pub use machine::{GuardTarget, GuardedOperation, LoadState, Machine, Transition};

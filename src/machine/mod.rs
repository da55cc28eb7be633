//! Bound machines and the transition guard.
//!
//! # Key Concepts
//!
//! - **Machine**: a host object plus its valid states and current state
//! - **Loader**: reads the current state back out of the host
//! - **Transition**: guarded state change declared as sources and a destination
//! - **GuardedOperation**: a reusable host operation that only runs through
//!   its transition

mod loader;
#[allow(clippy::module_inception)]
mod machine;
mod operation;
mod transition;

pub use loader::{LoadState, Loader};
pub use machine::{Machine, MachineMetadata};
pub use operation::{GuardedOperation, Operation};
pub use transition::{GuardTarget, Transition};

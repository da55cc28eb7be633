//! Up-front checking of transition declarations.
//!
//! The guard validates a transition against the target machine every time it
//! fires and stops at the first unknown state. Auditing walks a whole set of
//! declarations at once and reports ALL unknown states using Stillwater's
//! `Validation`, so a misspelled state list can be fixed in one pass.
//!
//! Auditing is advisory: a clean audit does not skip any check at fire time.
//!
//! # Example
//!
//! ```rust
//! use stateguard::audit::audit;
//! use stateguard::core::StateSet;
//! use stateguard::machine::Transition;
//! use stillwater::validation::Validation;
//!
//! let states = StateSet::new(["A".to_string(), "B".to_string()]);
//! let transitions = [
//!     Transition::new("move", ["A".to_string(), "C".to_string()], "B".to_string()),
//!     Transition::new("back", ["B".to_string()], "D".to_string()),
//! ];
//!
//! match audit(&states, &transitions) {
//!     Validation::Failure(unknown) => assert_eq!(unknown.len(), 2),
//!     Validation::Success(_) => panic!("expected unknown states"),
//! }
//! ```

pub mod violations;

pub use violations::{StateRole, UnknownState};

use crate::core::{State, StateSet};
use crate::machine::Transition;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check every source and destination of `transitions` against `states`,
/// accumulating every unknown state instead of stopping at the first.
pub fn audit<'a, S, I>(
    states: &StateSet<S>,
    transitions: I,
) -> Validation<(), NonEmptyVec<UnknownState>>
where
    S: State + 'a,
    I: IntoIterator<Item = &'a Transition<S>>,
{
    let mut checks: Vec<Validation<(), NonEmptyVec<UnknownState>>> = Vec::new();

    for transition in transitions {
        for source in transition.sources() {
            checks.push(check(states, transition, source, StateRole::Source));
        }
        checks.push(check(
            states,
            transition,
            transition.destination(),
            StateRole::Destination,
        ));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check<S: State>(
    states: &StateSet<S>,
    transition: &Transition<S>,
    state: &S,
    role: StateRole,
) -> Validation<(), NonEmptyVec<UnknownState>> {
    if states.contains(state) {
        Validation::success(())
    } else {
        Validation::fail(UnknownState {
            transition: transition.name().to_string(),
            state: state.name().to_string(),
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> String {
        name.to_string()
    }

    fn states() -> StateSet<String> {
        StateSet::new([s("sky"), s("tree"), s("ground")])
    }

    #[test]
    fn audit_succeeds_when_every_state_is_declared() {
        let transitions = [
            Transition::new("fall_on_tree", [s("sky")], s("tree")),
            Transition::new("fall", [s("tree"), s("sky")], s("ground")),
        ];

        assert!(audit(&states(), &transitions).is_success());
    }

    #[test]
    fn audit_accumulates_all_unknown_states() {
        let transitions = [
            Transition::new("swim", [s("water"), s("sky")], s("sea")),
            Transition::new("fall", [s("cloud")], s("ground")),
        ];

        match audit(&states(), &transitions) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                let has_water = errors.iter().any(|e| {
                    e.state == "water" && e.role == StateRole::Source && e.transition == "swim"
                });
                let has_sea = errors
                    .iter()
                    .any(|e| e.state == "sea" && e.role == StateRole::Destination);
                let has_cloud = errors
                    .iter()
                    .any(|e| e.state == "cloud" && e.transition == "fall");

                assert!(has_water);
                assert!(has_sea);
                assert!(has_cloud);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn audit_of_nothing_succeeds() {
        let transitions: [Transition<String>; 0] = [];
        assert!(audit(&states(), &transitions).is_success());
    }
}

//! Delivery Route
//!
//! This example contrasts strict and lenient reconciliation with states
//! declared at runtime as strings.
//!
//! Key concepts:
//! - Hosts implementing `LoadState` as their conventional loader
//! - Strict reconciliation catching operations that miss their destination
//! - Lenient reconciliation trusting the declaration
//! - Auditing declarations up front
//!
//! Run with: cargo run --example delivery_route

use stateguard::builder::Binder;
use stateguard::machine::{LoadState, Transition};
use stateguard::{MachineConfig, Reconciliation};
use std::convert::Infallible;
use stillwater::validation::Validation;

#[derive(Debug)]
struct Van {
    city: String,
}

impl LoadState<String> for Van {
    type Error = Infallible;

    fn load_state(&self) -> Result<String, Infallible> {
        Ok(self.city.clone())
    }
}

fn route() -> Binder<Van, String> {
    Binder::new(["delhi".to_string(), "gurgaon".to_string()]).load_state()
}

fn main() {
    tracing_subscriber::fmt().init();

    println!("=== Delivery Route Example ===\n");

    let run = Transition::new("run", ["delhi".to_string()], "gurgaon".to_string());
    let detour = Transition::new("detour", ["delhi".to_string()], "noida".to_string());

    // Audit: every unknown state across all declarations at once.
    match route().audit([&run, &detour]) {
        Validation::Success(_) => println!("All transitions use declared states"),
        Validation::Failure(unknown) => {
            for finding in unknown.iter() {
                println!("Audit: {}", finding);
            }
        }
    }

    // Strict: the van never leaves delhi, so the transition is refused.
    let mut strict = route()
        .bind(Van {
            city: "delhi".to_string(),
        })
        .expect("delhi is a declared state");
    match strict.fire(&run, |_van| ()) {
        Ok(()) => println!("strict:  now in {}", strict.current_state()),
        Err(err) => println!("strict:  {} (still in {})", err, strict.current_state()),
    }

    // Lenient, configured from JSON: the declaration is trusted.
    let config = MachineConfig::from_json(r#"{ "reconciliation": "lenient" }"#)
        .unwrap_or_default();
    let mut lenient = route()
        .config(config)
        .bind(Van {
            city: "delhi".to_string(),
        })
        .expect("delhi is a declared state");
    match lenient.fire(&run, |_van| ()) {
        Ok(()) => println!("lenient: now in {}", lenient.current_state()),
        Err(err) => println!("lenient: {}", err),
    }
    assert_eq!(lenient.reconciliation(), Reconciliation::Lenient);

    println!("\n=== Example Complete ===");
}

//! Light Switch
//!
//! This example binds a plain struct as a machine and drives it through
//! guarded transitions.
//!
//! Key concepts:
//! - Closed state enums via `state_enum!`
//! - Loader closure reading the host's state
//! - Guarded operations with arguments and return values
//! - Rejected moves leave the state untouched
//!
//! Run with: cargo run --example light_switch

use stateguard::builder::Binder;
use stateguard::machine::Transition;
use stateguard::state_enum;

state_enum! {
    enum Light {
        Off => "off",
        On => "on",
    }
}

#[derive(Debug)]
struct Switch {
    watts: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Light Switch Example ===\n");

    let binder = Binder::new(Light::ALL.iter().copied()).state_from(|s: &Switch| {
        if s.watts > 0 {
            Light::On
        } else {
            Light::Off
        }
    });

    let turn_on = Transition::new("turn_on", [Light::Off], Light::On).guard(
        |switch: &mut Switch, watts: u32| {
            switch.watts = watts;
            format!("drawing {} W", watts)
        },
    );
    let turn_off = Transition::new("turn_off", [Light::On], Light::Off)
        .guard(|switch: &mut Switch, ()| switch.watts = 0);

    let mut switch = match binder.bind(Switch { watts: 0 }) {
        Ok(machine) => machine,
        Err(err) => {
            eprintln!("Could not bind switch: {}", err);
            return;
        }
    };
    println!("Initial state: {:?}", switch.current_state());

    match turn_on.call(&mut switch, 60) {
        Ok(status) => println!("turn_on  -> {:?} ({})", switch.current_state(), status),
        Err(err) => println!("turn_on rejected: {}", err),
    }

    // Already on: the guard rejects before the operation runs.
    match turn_on.call(&mut switch, 100) {
        Ok(status) => println!("turn_on  -> {:?} ({})", switch.current_state(), status),
        Err(err) => println!("turn_on rejected: {}", err),
    }

    match turn_off.call(&mut switch, ()) {
        Ok(()) => println!("turn_off -> {:?}", switch.current_state()),
        Err(err) => println!("turn_off rejected: {}", err),
    }

    println!(
        "\nCommitted transitions: {}",
        switch.metadata().transitions
    );
    println!("\n=== Example Complete ===");
}

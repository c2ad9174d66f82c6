//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine with undo/redo.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Event-driven transitions plus a direct maintenance override
//! - Stepping back and forward through history
//!
//! Run with: RUST_LOG=fsmkit=debug cargo run --example traffic_light

use fsmkit::{MachineError, StateMachineBuilder};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), MachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut light = StateMachineBuilder::new()
        .initial("red")
        .transitions([
            ("red", "timer", "green"),
            ("green", "timer", "yellow"),
            ("yellow", "timer", "red"),
        ])
        .state("flashing")
        .transition("flashing", "restore", "red")
        .build()?;

    println!("Initial state: {}", light.state());
    println!("States reacting to 'timer': {:?}\n", light.states(Some("timer")));

    println!("Transition sequence:");
    for _ in 0..4 {
        light.trigger("timer")?;
        println!("  -> {}", light.state());
    }

    println!("\nMaintenance override:");
    light.change_state("flashing")?;
    println!("  -> {}", light.state());

    if let Err(err) = light.trigger("timer") {
        println!("  rejected: {err}");
    }

    println!("\nStepping back through history:");
    while light.undo() {
        println!("  <- {}", light.state());
    }

    println!("\nAnd forward again:");
    while light.redo() {
        println!("  -> {}", light.state());
    }

    light.reset()?;
    println!("\nAfter reset: {}", light.state());

    println!("\n=== Example Complete ===");
    Ok(())
}

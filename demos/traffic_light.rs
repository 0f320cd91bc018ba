//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic state machine driven by a single
//! event, with a global transition observer.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - One event meaning different things in different states
//! - No termination states
//!
//! Run with: cargo run --example traffic_light

use eventfsm::builder::{simple_transition, StateMachineBuilder};
use eventfsm::visualize::mermaid_state_diagram;
use eventfsm::{event_enum, state_enum};

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

event_enum! {
    enum Timer {
        Elapsed,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut machine = StateMachineBuilder::<TrafficLight, Timer>::new()
        .initial(TrafficLight::Red)
        .transitions(vec![
            simple_transition(TrafficLight::Red, TrafficLight::Green, Timer::Elapsed),
            simple_transition(TrafficLight::Green, TrafficLight::Yellow, Timer::Elapsed),
            simple_transition(TrafficLight::Yellow, TrafficLight::Red, Timer::Elapsed),
        ])
        .on_transition(|last, current| println!("  {last:?} -> {current:?}"))
        .build()
        .unwrap();

    println!("Initial state: {:?}\n", machine.current());

    println!("Transition sequence:");
    for _ in 0..6 {
        machine.submit(Timer::Elapsed, ()).unwrap();
    }

    println!("\nTermination states: {:?}", machine.terminations());
    println!("\n{}", mermaid_state_diagram(&machine));

    println!("=== Example Complete ===");
}

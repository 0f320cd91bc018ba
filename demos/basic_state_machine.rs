//! Basic State Machine
//!
//! This example demonstrates guarded transitions, lifecycle callbacks and
//! a chained event.
//!
//! Key concepts:
//! - Actions that veto a transition
//! - Per-state and global enter/exit callbacks
//! - Chaining a follow-up event from inside an action
//!
//! Run with: cargo run --example basic_state_machine

use eventfsm::machine::{StateMachine, Transition};
use eventfsm::{event_enum, state_enum};

state_enum! {
    enum ConnectionState {
        Disconnected,
        Connecting,
        Connected,
    }
}

event_enum! {
    enum ConnectionEvent {
        Dial,
        Handshake,
        HangUp,
    }
}

fn main() {
    println!("=== Basic State Machine Example ===\n");

    let mut machine: StateMachine<ConnectionState, ConnectionEvent, u16> = StateMachine::new();
    machine.set_current(ConnectionState::Disconnected);

    // Dialing port 0 is refused; any other port dials and handshakes at once.
    Transition::new(
        ConnectionState::Disconnected,
        ConnectionState::Connecting,
        ConnectionEvent::Dial,
    )
    .with_action(|machine, port: &u16| {
        if *port == 0 {
            return false;
        }
        machine.set_event(ConnectionEvent::Handshake, *port);
        true
    })
    .add_to(&mut machine);
    Transition::new(
        ConnectionState::Connecting,
        ConnectionState::Connected,
        ConnectionEvent::Handshake,
    )
    .add_to(&mut machine);
    Transition::new(
        ConnectionState::Connected,
        ConnectionState::Disconnected,
        ConnectionEvent::HangUp,
    )
    .add_to(&mut machine);

    machine.on_enter(|s| println!("  enter {s:?}"));
    machine.on_exit(|s| println!("  exit  {s:?}"));
    machine.on_enter_state(ConnectionState::Connected, |_| println!("  link is up"));

    println!("Dial port 0:");
    if let Err(err) = machine.submit(ConnectionEvent::Dial, 0) {
        println!("  {err}");
    }

    println!("Dial port 8080:");
    machine.submit(ConnectionEvent::Dial, 8080).unwrap();
    println!("Current state: {:?}", machine.current());

    println!("Can hang up: {}", machine.test_event(&ConnectionEvent::HangUp));

    println!("\n=== Example Complete ===");
}

//! eventfsm: an embeddable, event-driven finite state machine.
//!
//! A machine holds a current state and a table of
//! `(source, event) -> target` rules. Submitting an event looks up the
//! rule for the current state, lets its optional action veto the change,
//! and fires the registered enter/exit/transition callbacks. Actions can
//! chain a follow-up event that is dispatched within the same call.
//!
//! # Core Concepts
//!
//! - **State / Event**: opaque, non-empty labels via the `State` and `Event` traits
//! - **Transition**: a rule with an optional guard/side-effect action
//! - **StateMachine**: the dispatch engine and callback registry
//! - **Builder**: fluent configuration of machines and transitions
//!
//! # Example
//!
//! ```rust
//! use eventfsm::machine::{StateMachine, Transition};
//! use eventfsm::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Phase { Foo, Bar }
//! }
//!
//! event_enum! {
//!     enum Signal { Foo, Bar }
//! }
//!
//! let mut machine: StateMachine<Phase, Signal> = StateMachine::new();
//! machine.set_current(Phase::Bar);
//!
//! Transition::new(Phase::Foo, Phase::Bar, Signal::Bar).add_to(&mut machine);
//! Transition::new(Phase::Bar, Phase::Foo, Signal::Foo)
//!     .with_action(|machine, _| {
//!         machine.set_event(Signal::Bar, ());
//!         true
//!     })
//!     .add_to(&mut machine);
//!
//! // Bar -> Foo, then the chained event takes it back: Foo -> Bar.
//! assert!(machine.submit(Signal::Foo, ()).is_ok());
//! assert_eq!(machine.current(), Some(&Phase::Bar));
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod pool;
pub mod visualize;

// Re-export commonly used types
pub use crate::core::{Event, State, StateHistory, StateTransition};
pub use crate::machine::{StateMachine, Transition, TransitionError};

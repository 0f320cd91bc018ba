//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for creating state
//! machines with little boilerplate. The builder is also where a machine is
//! configured: initial state, history limit and callbacks.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, State};
use crate::machine::Transition;

/// Create an unconditional transition.
///
/// # Example
///
/// ```
/// use eventfsm::builder::simple_transition;
/// use eventfsm::machine::Transition;
/// use eventfsm::{event_enum, state_enum};
///
/// state_enum! {
///     enum MyState { Start, End }
/// }
///
/// event_enum! {
///     enum MyEvent { Finish }
/// }
///
/// let transition: Transition<MyState, MyEvent> =
///     simple_transition(MyState::Start, MyState::End, MyEvent::Finish);
/// assert!(transition.action.is_none());
/// ```
pub fn simple_transition<S, E, D>(from: S, to: S, event: E) -> Transition<S, E, D>
where
    S: State,
    E: Event,
{
    Transition::new(from, to, event)
}

/// Create a transition guarded by a pure predicate over the payload.
///
/// # Example
///
/// ```
/// use eventfsm::builder::{guarded_transition, StateMachineBuilder};
/// use eventfsm::{event_enum, state_enum};
///
/// state_enum! {
///     enum Account { Open, Closed }
/// }
///
/// event_enum! {
///     enum Request { Close }
/// }
///
/// let mut machine = StateMachineBuilder::<Account, Request, u64>::new()
///     .initial(Account::Open)
///     .add_transition(guarded_transition(
///         Account::Open,
///         Account::Closed,
///         Request::Close,
///         |balance: &u64| *balance == 0,
///     ))
///     .build()
///     .unwrap();
///
/// assert!(machine.submit(Request::Close, 10).unwrap_err().is_suspended());
/// assert!(machine.submit(Request::Close, 0).is_ok());
/// ```
pub fn guarded_transition<S, E, D, F>(from: S, to: S, event: E, guard: F) -> Transition<S, E, D>
where
    S: State + 'static,
    E: Event + 'static,
    D: 'static,
    F: Fn(&D) -> bool + Send + Sync + 'static,
{
    Transition::new(from, to, event).with_action(move |_, data| guard(data))
}

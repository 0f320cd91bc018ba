//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State};
use crate::machine::{StateMachine, Transition};

/// Builder for constructing state machines with a fluent API.
///
/// Callbacks registered on the builder are installed on the machine it
/// builds. Transitions are added at [`build`](Self::build) time, in the
/// order they were given, with the usual replace-in-place rule.
///
/// # Example
///
/// ```rust
/// use eventfsm::builder::{simple_transition, StateMachineBuilder};
/// use eventfsm::{event_enum, state_enum};
///
/// state_enum! {
///     enum Door { Open, Closed }
/// }
///
/// event_enum! {
///     enum Action { Close, Open }
/// }
///
/// let mut machine = StateMachineBuilder::<Door, Action>::new()
///     .initial(Door::Open)
///     .transitions(vec![
///         simple_transition(Door::Open, Door::Closed, Action::Close),
///         simple_transition(Door::Closed, Door::Open, Action::Open),
///     ])
///     .history_limit(16)
///     .build()
///     .unwrap();
///
/// machine.submit(Action::Close, ()).unwrap();
/// assert_eq!(machine.current(), Some(&Door::Closed));
/// assert_eq!(machine.history().map(|h| h.len()), Some(1));
/// ```
pub struct StateMachineBuilder<S: State + 'static, E: Event + 'static, D: 'static = ()> {
    initial: Option<S>,
    transitions: Vec<Transition<S, E, D>>,
    history_limit: Option<usize>,
    machine: StateMachine<S, E, D>,
}

impl<S: State + 'static, E: Event + 'static, D: 'static> StateMachineBuilder<S, E, D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            history_limit: None,
            machine: StateMachine::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, E, D>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E, D>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E, D>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Record the last `limit` committed transitions.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn on_enter<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.machine.on_enter(callback);
        self
    }

    pub fn on_exit<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.machine.on_exit(callback);
        self
    }

    pub fn on_enter_state<F>(mut self, state: S, callback: F) -> Self
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.machine.on_enter_state(state, callback);
        self
    }

    pub fn on_exit_state<F>(mut self, state: S, callback: F) -> Self
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.machine.on_exit_state(state, callback);
        self
    }

    pub fn on_transition<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&S, &S) + Send + 'static,
    {
        self.machine.on_transition(callback);
        self
    }

    /// Build the state machine.
    ///
    /// Returns an error if the initial state is missing.
    ///
    /// # Panics
    ///
    /// Panics if the initial state or any transition label is empty.
    pub fn build(self) -> Result<StateMachine<S, E, D>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = self.machine;
        if let Some(limit) = self.history_limit {
            machine.enable_history(limit);
        }
        machine.add_transitions(self.transitions);
        machine.set_initial(initial.clone());
        machine.set_current(initial);

        Ok(machine)
    }
}

impl<S: State + 'static, E: Event + 'static, D: 'static> Default for StateMachineBuilder<S, E, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    crate::state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    crate::event_enum! {
        enum TestEvent {
            Begin,
            Finish,
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = StateMachineBuilder::<TestState, TestEvent>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_allows_an_empty_table() {
        let machine = StateMachineBuilder::<TestState, TestEvent>::new()
            .initial(TestState::Initial)
            .build()
            .unwrap();

        assert_eq!(machine.initial(), Some(&TestState::Initial));
        assert_eq!(machine.current(), Some(&TestState::Initial));
        assert!(machine.transitions().is_empty());
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::<TestState, TestEvent>::new()
            .initial(TestState::Initial)
            .add_transition(Transition::new(
                TestState::Initial,
                TestState::Processing,
                TestEvent::Begin,
            ))
            .transition(
                TransitionBuilder::new()
                    .from(TestState::Processing)
                    .to(TestState::Complete)
                    .on(TestEvent::Finish),
            )
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(machine.transitions().len(), 2);
        assert_eq!(machine.terminations(), vec![TestState::Complete]);
    }

    #[test]
    fn invalid_transition_builder_is_rejected() {
        let result = StateMachineBuilder::<TestState, TestEvent>::new()
            .transition(TransitionBuilder::new().from(TestState::Initial));

        assert!(matches!(result, Err(BuildError::MissingTargetState)));
    }

    #[test]
    fn callbacks_are_installed_on_the_machine() {
        let entered = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&entered);
        let mut machine = StateMachineBuilder::<TestState, TestEvent>::new()
            .initial(TestState::Initial)
            .add_transition(Transition::new(
                TestState::Initial,
                TestState::Processing,
                TestEvent::Begin,
            ))
            .on_enter_state(TestState::Processing, move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        machine.submit(TestEvent::Begin, ()).unwrap();

        assert_eq!(entered.load(Ordering::SeqCst), 1);
    }
}

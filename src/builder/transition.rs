//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::{Event, State};
use crate::machine::{Action, StateMachine, Transition};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, E: Event, D = ()> {
    from: Option<S>,
    to: Option<S>,
    event: Option<E>,
    action: Option<Action<S, E, D>>,
}

impl<S: State + 'static, E: Event + 'static, D: 'static> TransitionBuilder<S, E, D> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            event: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the action (optional).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut StateMachine<S, E, D>, &D) -> bool + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Guard the transition with a pure predicate over the payload.
    ///
    /// Replaces any action set earlier.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&D) -> bool + Send + Sync + 'static,
    {
        self.action(move |_, data| predicate(data))
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, E, D>, BuildError> {
        let source = self.from.ok_or(BuildError::MissingSourceState)?;
        let target = self.to.ok_or(BuildError::MissingTargetState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;

        Ok(Transition {
            event,
            source,
            target,
            action: self.action,
        })
    }
}

impl<S: State + 'static, E: Event + 'static, D: 'static> Default for TransitionBuilder<S, E, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum TestState {
            Initial,
            Processing,
        }
    }

    crate::event_enum! {
        enum TestEvent {
            Begin,
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = TransitionBuilder::<TestState, TestEvent>::new()
            .from(TestState::Initial)
            .build();

        assert!(matches!(result, Err(BuildError::MissingTargetState)));
    }

    #[test]
    fn builder_requires_an_event() {
        let result = TransitionBuilder::<TestState, TestEvent>::new()
            .from(TestState::Initial)
            .to(TestState::Processing)
            .build();

        assert!(matches!(result, Err(BuildError::MissingEvent)));
    }

    #[test]
    fn action_is_optional() {
        let transition = TransitionBuilder::<TestState, TestEvent>::new()
            .from(TestState::Initial)
            .to(TestState::Processing)
            .on(TestEvent::Begin)
            .build()
            .unwrap();

        assert_eq!(transition.source, TestState::Initial);
        assert_eq!(transition.target, TestState::Processing);
        assert!(transition.action.is_none());
    }

    #[test]
    fn when_guards_on_the_payload() {
        let transition = TransitionBuilder::<TestState, TestEvent, i32>::new()
            .from(TestState::Initial)
            .to(TestState::Processing)
            .on(TestEvent::Begin)
            .when(|amount| *amount > 0)
            .build()
            .unwrap();

        let mut machine = StateMachine::new();
        machine.set_current(TestState::Initial);
        machine.add_transitions([transition]);

        assert!(machine.submit(TestEvent::Begin, 0).unwrap_err().is_suspended());
        assert!(machine.submit(TestEvent::Begin, 5).is_ok());
        assert_eq!(machine.current(), Some(&TestState::Processing));
    }
}

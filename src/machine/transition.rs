//! Transition rules and dispatch errors.

use crate::core::{Event, State};
use crate::machine::engine::StateMachine;
use std::fmt;
use std::sync::Arc;

/// Guard and side effect run before a matched transition commits.
///
/// The action receives the machine, so it can schedule a follow-up event
/// with [`StateMachine::set_event`], and the payload passed to `submit`.
/// Returning `false` vetoes the transition.
pub type Action<S, E, D> = Arc<dyn Fn(&mut StateMachine<S, E, D>, &D) -> bool + Send + Sync>;

/// Errors reported by [`StateMachine::submit`].
///
/// Both kinds are ordinary outcomes. Branch on them with
/// [`is_no_transition`](Self::is_no_transition) and
/// [`is_suspended`](Self::is_suspended).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransitionError<S: State, E: Event> {
    /// No rule exists for the current state and the event.
    #[error("no transition for the event '{}'", .event.name())]
    NoTransition { event: E },

    /// A rule matched but its action vetoed the change.
    #[error(
        "source state '{}' transition for the event '{}' is suspended",
        .from.name(),
        .event.name()
    )]
    Suspended { event: E, from: S, to: S },
}

impl<S: State, E: Event> TransitionError<S, E> {
    /// The event that was being dispatched.
    pub fn event(&self) -> &E {
        match self {
            Self::NoTransition { event } | Self::Suspended { event, .. } => event,
        }
    }

    /// Source state of the vetoed rule, `None` when no rule matched.
    pub fn source_state(&self) -> Option<&S> {
        match self {
            Self::NoTransition { .. } => None,
            Self::Suspended { from, .. } => Some(from),
        }
    }

    /// Target state of the vetoed rule, `None` when no rule matched.
    pub fn target_state(&self) -> Option<&S> {
        match self {
            Self::NoTransition { .. } => None,
            Self::Suspended { to, .. } => Some(to),
        }
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self, Self::Suspended { .. })
    }

    pub fn is_no_transition(&self) -> bool {
        matches!(self, Self::NoTransition { .. })
    }
}

/// A rule moving the machine from `source` to `target` on `event`.
///
/// Without an action the transition commits unconditionally. With one, it
/// commits only when the action returns `true`.
///
/// # Example
///
/// ```rust
/// use eventfsm::machine::{StateMachine, Transition};
/// use eventfsm::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light { Off, On }
/// }
///
/// event_enum! {
///     enum Switch { Flip }
/// }
///
/// let mut machine: StateMachine<Light, Switch> = StateMachine::new();
/// machine.set_current(Light::Off);
///
/// Transition::new(Light::Off, Light::On, Switch::Flip).add_to(&mut machine);
/// Transition::new(Light::On, Light::Off, Switch::Flip)
///     .with_action(|_machine, _payload| false)
///     .add_to(&mut machine);
///
/// assert!(machine.submit(Switch::Flip, ()).is_ok());
/// assert!(machine.submit(Switch::Flip, ()).unwrap_err().is_suspended());
/// assert_eq!(machine.current(), Some(&Light::On));
/// ```
pub struct Transition<S: State, E: Event, D = ()> {
    pub event: E,
    pub source: S,
    pub target: S,
    pub action: Option<Action<S, E, D>>,
}

impl<S: State, E: Event, D> Transition<S, E, D> {
    /// Create an unconditional transition.
    pub fn new(source: S, target: S, event: E) -> Self {
        Self {
            event,
            source,
            target,
            action: None,
        }
    }

    pub fn with_source(mut self, source: S) -> Self {
        self.source = source;
        self
    }

    pub fn with_target(mut self, target: S) -> Self {
        self.target = target;
        self
    }

    pub fn with_event(mut self, event: E) -> Self {
        self.event = event;
        self
    }

    /// Attach an action, replacing any previous one.
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut StateMachine<S, E, D>, &D) -> bool + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Add this transition to `machine`.
    pub fn add_to(self, machine: &mut StateMachine<S, E, D>) {
        machine.add_transitions([self]);
    }

    /// Check whether this rule applies to `event` in state `source` (pure).
    pub fn matches(&self, source: &S, event: &E) -> bool {
        self.source == *source && self.event == *event
    }

    /// Check that none of the labels is empty.
    pub fn is_well_formed(&self) -> bool {
        !self.source.is_empty() && !self.target.is_empty() && !self.event.is_empty()
    }
}

impl<S: State, E: Event, D> Clone for Transition<S, E, D> {
    fn clone(&self) -> Self {
        Self {
            event: self.event.clone(),
            source: self.source.clone(),
            target: self.target.clone(),
            action: self.action.as_ref().map(Arc::clone),
        }
    }
}

impl<S: State, E: Event, D> fmt::Debug for Transition<S, E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("event", &self.event)
            .field("source", &self.source)
            .field("target", &self.target)
            .field("action", &self.action.as_ref().map(|_| "<action>"))
            .finish()
    }
}

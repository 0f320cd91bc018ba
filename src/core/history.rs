//! State transition history tracking.
//!
//! A machine can keep a bounded log of the transitions it committed. Each
//! link of a chained dispatch is recorded on its own, so the log shows every
//! state the machine actually passed through.

use super::event::Event;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use eventfsm::core::StateTransition;
/// use eventfsm::{event_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum TaskState { Pending, Running }
/// }
///
/// event_enum! {
///     enum TaskEvent { Start }
/// }
///
/// let transition = StateTransition {
///     from: TaskState::Pending,
///     to: TaskState::Running,
///     event: TaskEvent::Start,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, TaskState::Running);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, E: Event> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that triggered the transition
    pub event: E,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of committed transitions.
///
/// Once `limit` records are held, recording another drops the oldest.
///
/// # Example
///
/// ```rust
/// use eventfsm::core::{StateHistory, StateTransition};
/// use eventfsm::{event_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum WorkState { Start, Middle, End }
/// }
///
/// event_enum! {
///     enum WorkEvent { Next }
/// }
///
/// let mut history = StateHistory::with_limit(8);
/// history.record(StateTransition {
///     from: WorkState::Start,
///     to: WorkState::Middle,
///     event: WorkEvent::Next,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: WorkState::Middle,
///     to: WorkState::End,
///     event: WorkEvent::Next,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&WorkState::Start, &WorkState::Middle, &WorkState::End]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, E: Event> {
    limit: usize,
    transitions: VecDeque<StateTransition<S, E>>,
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create an empty history holding at most `limit` records.
    ///
    /// A limit of zero records nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            transitions: VecDeque::with_capacity(limit.min(64)),
        }
    }

    /// Maximum number of records kept.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Append a transition, evicting the oldest record when full.
    pub fn record(&mut self, transition: StateTransition<S, E>) {
        if self.limit == 0 {
            return;
        }
        while self.transitions.len() >= self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest record followed by the `to`
    /// state of every record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from the oldest to the newest record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Iterate over the records, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S, E>> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Drop every record, keeping the limit.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}

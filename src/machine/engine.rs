//! State machine that dispatches events against a transition table.

use crate::core::{Event, State, StateHistory, StateTransition};
use crate::machine::callbacks::Callbacks;
use crate::machine::table::TransitionTable;
use crate::machine::transition::{Transition, TransitionError};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Event-driven finite state machine.
///
/// The machine owns its transition table, its current state and its
/// callbacks. It is not synchronized; wrap it in a lock to share it.
///
/// `D` is the payload type handed to transition actions.
pub struct StateMachine<S: State, E: Event, D = ()> {
    initial: Option<S>,
    current: Option<S>,
    table: TransitionTable<S, E, D>,
    callbacks: Callbacks<S>,
    history: Option<StateHistory<S, E>>,
    pending: Option<(E, D)>,
    dispatching: Arc<AtomicBool>,
}

/// Marks a machine as dispatching until dropped, including on unwind.
struct DispatchGuard(Arc<AtomicBool>);

impl DispatchGuard {
    fn enter(flag: &Arc<AtomicBool>) -> Self {
        let already = flag.swap(true, Ordering::AcqRel);
        assert!(
            !already,
            "submit called from inside a transition action; use set_event to chain events"
        );
        Self(Arc::clone(flag))
    }
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: State, E: Event, D> StateMachine<S, E, D> {
    /// Create an empty machine with no current state.
    pub fn new() -> Self {
        Self {
            initial: None,
            current: None,
            table: TransitionTable::new(),
            callbacks: Callbacks::new(),
            history: None,
            pending: None,
            dispatching: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Return the machine to its just-constructed condition.
    ///
    /// Clears the initial and current states, the transition table, every
    /// callback, any pending chained event and the history, which is
    /// disabled again.
    pub fn reset(&mut self) {
        self.initial = None;
        self.current = None;
        self.table.clear();
        self.callbacks.clear();
        self.history = None;
        self.pending = None;
    }

    /// Record the state the machine started in.
    ///
    /// Only renderers read it; dispatch always starts from the current state.
    ///
    /// # Panics
    ///
    /// Panics if the state is empty.
    pub fn set_initial(&mut self, initial: S) {
        assert!(!initial.is_empty(), "the initial state must not be empty");
        self.initial = Some(initial);
    }

    pub fn initial(&self) -> Option<&S> {
        self.initial.as_ref()
    }

    /// Set the current state without firing any callback.
    ///
    /// # Panics
    ///
    /// Panics if the state is empty.
    pub fn set_current(&mut self, current: S) {
        assert!(!current.is_empty(), "the current state must not be empty");
        self.current = Some(current);
    }

    pub fn current(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// Keep the last `limit` committed transitions.
    pub fn enable_history(&mut self, limit: usize) {
        self.history = Some(StateHistory::with_limit(limit));
    }

    pub fn history(&self) -> Option<&StateHistory<S, E>> {
        self.history.as_ref()
    }

    /// All transitions in insertion order.
    pub fn transitions(&self) -> &[Transition<S, E, D>] {
        self.table.all()
    }

    pub fn get_transition(&self, source: &S, event: &E) -> Option<&Transition<S, E, D>> {
        self.table.lookup(source, event)
    }

    /// Add transitions, replacing rules with the same `(source, event)`.
    ///
    /// # Panics
    ///
    /// Panics if any transition has an empty source, target or event.
    pub fn add_transitions<I>(&mut self, transitions: I)
    where
        I: IntoIterator<Item = Transition<S, E, D>>,
    {
        self.table.add(transitions);
    }

    pub fn states(&self) -> Vec<S> {
        self.table.states()
    }

    pub fn events(&self) -> Vec<E> {
        self.table.events()
    }

    /// States that can be entered but never left.
    pub fn terminations(&self) -> Vec<S> {
        self.table.terminations()
    }

    /// Called after entering any state.
    pub fn on_enter<F>(&mut self, callback: F)
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.callbacks.set_enter(Box::new(callback));
    }

    /// Called before leaving any state.
    pub fn on_exit<F>(&mut self, callback: F)
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.callbacks.set_exit(Box::new(callback));
    }

    pub fn on_enter_state<F>(&mut self, state: S, callback: F)
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.callbacks.set_enter_state(state, Box::new(callback));
    }

    pub fn on_exit_state<F>(&mut self, state: S, callback: F)
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.callbacks.set_exit_state(state, Box::new(callback));
    }

    /// Called last on every committed transition with `(last, current)`.
    pub fn on_transition<F>(&mut self, callback: F)
    where
        F: FnMut(&S, &S) + Send + 'static,
    {
        self.callbacks.set_transition(Box::new(callback));
    }

    /// Check whether `event` has a rule in the current state.
    ///
    /// Never runs an action and never changes state.
    pub fn test_event(&self, event: &E) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| self.table.contains(current, event))
    }

    /// Schedule `event` to be dispatched once the current transition is done.
    ///
    /// Meant to be called from a transition action, where calling
    /// [`submit`](Self::submit) is not allowed. A later call overwrites an
    /// earlier one. Outside a dispatch the request is discarded by the next
    /// `submit`.
    ///
    /// # Panics
    ///
    /// Panics if the event is empty.
    pub fn set_event(&mut self, event: E, data: D) {
        assert!(!event.is_empty(), "the chained event must not be empty");
        self.pending = Some((event, data));
    }

    /// Dispatch `event` with `data`.
    ///
    /// Looks up the rule for the current state, runs its action, and on
    /// success fires exit, enter and transition callbacks in that order.
    /// Events chained by actions through [`set_event`](Self::set_event)
    /// are dispatched before returning; the result is that of the last one.
    ///
    /// # Panics
    ///
    /// Panics if the event is empty, or if called from inside an action.
    #[instrument(level = "debug", skip_all, fields(event = event.name()))]
    pub fn submit(&mut self, event: E, data: D) -> Result<(), TransitionError<S, E>> {
        assert!(!event.is_empty(), "the event must not be empty");
        let _guard = DispatchGuard::enter(&self.dispatching);

        let (mut event, mut data) = (event, data);
        loop {
            self.pending = None;
            let result = self.dispatch(&event, &data);

            let keep_chaining = result.as_ref().err().is_none_or(|err| err.is_suspended());
            match self.pending.take() {
                Some((next_event, next_data)) if keep_chaining => {
                    trace!(from = event.name(), to = next_event.name(), "chaining event");
                    event = next_event;
                    data = next_data;
                }
                _ => break result,
            }
        }
    }

    fn dispatch(&mut self, event: &E, data: &D) -> Result<(), TransitionError<S, E>> {
        let Some(current) = self.current.clone() else {
            trace!(event = event.name(), "no current state");
            return Err(TransitionError::NoTransition {
                event: event.clone(),
            });
        };

        let Some(transition) = self.table.lookup(&current, event) else {
            trace!(state = current.name(), event = event.name(), "no transition");
            return Err(TransitionError::NoTransition {
                event: event.clone(),
            });
        };
        let target = transition.target.clone();
        let action = transition.action.clone();

        if let Some(action) = action {
            if !action(self, data) {
                debug!(
                    from = current.name(),
                    to = target.name(),
                    event = event.name(),
                    "transition suspended"
                );
                return Err(TransitionError::Suspended {
                    event: event.clone(),
                    from: current,
                    to: target,
                });
            }
        }

        self.callbacks.fire_exit(&current);
        self.current = Some(target.clone());
        self.callbacks.fire_enter(&target);
        self.callbacks.fire_transition(&current, &target);

        debug!(
            from = current.name(),
            to = target.name(),
            event = event.name(),
            "transition committed"
        );
        if let Some(history) = self.history.as_mut() {
            history.record(StateTransition {
                from: current,
                to: target,
                event: event.clone(),
                timestamp: Utc::now(),
            });
        }

        Ok(())
    }
}

impl<S: State, E: Event, D> Default for StateMachine<S, E, D> {
    fn default() -> Self {
        Self::new()
    }
}

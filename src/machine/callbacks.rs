//! Lifecycle callback registry.

use crate::core::State;
use std::collections::HashMap;

/// Callback invoked with the state being entered or exited.
pub type StateCallback<S> = Box<dyn FnMut(&S) + Send>;

/// Callback invoked with the previous and the new state.
pub type TransitionCallback<S> = Box<dyn FnMut(&S, &S) + Send>;

/// Enter, exit and transition observers of one machine.
///
/// Every slot holds at most one callback. Registering again overwrites.
pub struct Callbacks<S: State> {
    enter: Option<StateCallback<S>>,
    exit: Option<StateCallback<S>>,
    transition: Option<TransitionCallback<S>>,
    enter_states: HashMap<S, StateCallback<S>>,
    exit_states: HashMap<S, StateCallback<S>>,
}

impl<S: State> Callbacks<S> {
    pub fn new() -> Self {
        Self {
            enter: None,
            exit: None,
            transition: None,
            enter_states: HashMap::new(),
            exit_states: HashMap::new(),
        }
    }

    pub fn set_enter(&mut self, callback: StateCallback<S>) {
        self.enter = Some(callback);
    }

    pub fn set_exit(&mut self, callback: StateCallback<S>) {
        self.exit = Some(callback);
    }

    pub fn set_transition(&mut self, callback: TransitionCallback<S>) {
        self.transition = Some(callback);
    }

    pub fn set_enter_state(&mut self, state: S, callback: StateCallback<S>) {
        self.enter_states.insert(state, callback);
    }

    pub fn set_exit_state(&mut self, state: S, callback: StateCallback<S>) {
        self.exit_states.insert(state, callback);
    }

    /// Run the per-state exit callback for `state`, then the global one.
    pub(crate) fn fire_exit(&mut self, state: &S) {
        if let Some(callback) = self.exit_states.get_mut(state) {
            callback(state);
        }
        if let Some(callback) = self.exit.as_mut() {
            callback(state);
        }
    }

    /// Run the per-state enter callback for `state`, then the global one.
    pub(crate) fn fire_enter(&mut self, state: &S) {
        if let Some(callback) = self.enter_states.get_mut(state) {
            callback(state);
        }
        if let Some(callback) = self.enter.as_mut() {
            callback(state);
        }
    }

    pub(crate) fn fire_transition(&mut self, last: &S, current: &S) {
        if let Some(callback) = self.transition.as_mut() {
            callback(last, current);
        }
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.enter = None;
        self.exit = None;
        self.transition = None;
        self.enter_states.clear();
        self.exit_states.clear();
    }
}

impl<S: State> Default for Callbacks<S> {
    fn default() -> Self {
        Self::new()
    }
}

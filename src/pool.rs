//! Reuse pool for state machines.

use crate::core::{Event, State};
use crate::machine::StateMachine;
use std::sync::{Mutex, PoisonError};

/// Free list of machines that can be shared between threads.
///
/// Released machines are [`reset`](StateMachine::reset) before they are
/// stored, so an acquired machine is always empty.
///
/// # Example
///
/// ```rust
/// use eventfsm::pool::MachinePool;
/// use eventfsm::{event_enum, state_enum};
///
/// state_enum! {
///     enum Phase { One }
/// }
///
/// event_enum! {
///     enum Tick { Next }
/// }
///
/// let pool: MachinePool<Phase, Tick> = MachinePool::new();
/// let mut machine = pool.acquire();
/// machine.set_current(Phase::One);
/// pool.release(machine);
///
/// assert_eq!(pool.len(), 1);
/// assert!(pool.acquire().current().is_none());
/// ```
pub struct MachinePool<S: State, E: Event, D = ()> {
    free: Mutex<Vec<StateMachine<S, E, D>>>,
}

impl<S: State, E: Event, D> MachinePool<S, E, D> {
    pub fn new() -> Self {
        Self {
            free: Mutex::new(Vec::new()),
        }
    }

    /// Take a machine from the pool, or create one if the pool is empty.
    pub fn acquire(&self) -> StateMachine<S, E, D> {
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_default()
    }

    /// Reset `machine` and return it to the pool.
    pub fn release(&self, mut machine: StateMachine<S, E, D>) {
        machine.reset();
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(machine);
    }

    /// Number of idle machines.
    pub fn len(&self) -> usize {
        self.free.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: State, E: Event, D> Default for MachinePool<S, E, D> {
    fn default() -> Self {
        Self::new()
    }
}

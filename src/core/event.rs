//! Event trait for the stimuli that drive a state machine.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine events.
///
/// Events share the label contract of [`State`](crate::core::State): they
/// are compared for equality and named, nothing more. Submitting an event
/// with an empty name panics.
///
/// # Example
///
/// ```rust
/// use eventfsm::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorEvent {
///     Push,
///     Pull,
/// }
///
/// impl Event for DoorEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Push => "Push",
///             Self::Pull => "Pull",
///         }
///     }
/// }
///
/// assert_eq!(DoorEvent::Pull.name(), "Pull");
/// ```
pub trait Event: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Get the event's name for display, logging and rendering.
    fn name(&self) -> &str;

    /// Check whether the label is empty.
    fn is_empty(&self) -> bool {
        self.name().is_empty()
    }
}

impl Event for String {
    fn name(&self) -> &str {
        self
    }
}

//! Transition tables and the dispatch engine.
//!
//! # Key Concepts
//!
//! - **Transitions**: `(source, event) -> target` rules with an optional action
//! - **Table**: ordered rules, unique per `(source, event)`, replaced in place
//! - **Callbacks**: per-state and global enter/exit hooks plus a transition hook
//! - **State Machine**: holds the current state and dispatches events
//!
//! # Dispatch
//!
//! `submit` is synchronous. Every callback and action runs on the caller's
//! thread before it returns. Actions chain follow-up events with
//! `set_event`; the machine dispatches them in a loop instead of recursing.

mod callbacks;
mod engine;
mod table;
mod transition;

pub use callbacks::{StateCallback, TransitionCallback};
pub use engine::StateMachine;
pub use table::TransitionTable;
pub use transition::{Action, Transition, TransitionError};

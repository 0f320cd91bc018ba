//! Core label types and history.
//!
//! This module contains the value types the engine operates on:
//! - State and event labels via the `State` and `Event` traits
//! - Bounded history of committed transitions
//!
//! Nothing in this module knows about transition tables or dispatch.

mod event;
mod history;
mod state;

pub use event::Event;
pub use history::{StateHistory, StateTransition};
pub use state::State;

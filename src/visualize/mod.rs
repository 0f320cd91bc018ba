//! Text renderers for transition tables.
//!
//! Renderers only read a machine: its transitions, its initial state and its
//! current state.
//! Output is sorted by label name so it is stable across insertion orders.

mod graphviz;
mod mermaid;

pub use graphviz::graphviz;
pub use mermaid::{mermaid_flow_chart, mermaid_state_diagram};

use crate::core::{Event, State};
use crate::machine::Transition;

/// Transitions sorted by source name, then event name.
pub fn sorted_transitions<S: State, E: Event, D>(
    transitions: &[Transition<S, E, D>],
) -> Vec<&Transition<S, E, D>> {
    let mut sorted: Vec<_> = transitions.iter().collect();
    sorted.sort_by(|a, b| {
        a.source
            .name()
            .cmp(b.source.name())
            .then_with(|| a.event.name().cmp(b.event.name()))
    });
    sorted
}

/// Distinct states of `transitions` sorted by name.
pub fn sorted_states<S: State, E: Event, D>(transitions: &[Transition<S, E, D>]) -> Vec<&S> {
    let mut states: Vec<&S> = Vec::with_capacity(transitions.len());
    for t in transitions {
        for state in [&t.source, &t.target] {
            if !states.contains(&state) {
                states.push(state);
            }
        }
    }
    states.sort_by(|a, b| a.name().cmp(b.name()));
    states
}

//! Graphviz DOT output.

use super::{sorted_states, sorted_transitions};
use crate::core::{Event, State};
use crate::machine::StateMachine;

/// Render the machine as a Graphviz `digraph`.
///
/// Edges leaving the initial state come first so layout engines place it
/// at the top.
pub fn graphviz<S: State, E: Event, D>(machine: &StateMachine<S, E, D>) -> String {
    let transitions = sorted_transitions(machine.transitions());
    let initial = machine.initial();

    let mut out = String::with_capacity(256);
    out.push_str("digraph fsm {\n");

    let (leading, rest): (Vec<_>, Vec<_>) = transitions
        .into_iter()
        .partition(|t| Some(&t.source) == initial);
    for t in leading.into_iter().chain(rest) {
        out.push_str(&format!(
            "    \"{}\" -> \"{}\" [ label = \"{}\" ];\n",
            t.source.name(),
            t.target.name(),
            t.event.name()
        ));
    }
    out.push('\n');

    for state in sorted_states(machine.transitions()) {
        out.push_str(&format!("    \"{}\";\n", state.name()));
    }
    out.push_str("}\n");

    out
}

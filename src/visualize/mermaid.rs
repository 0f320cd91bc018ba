//! Mermaid state diagram and flowchart output.

use super::{sorted_states, sorted_transitions};
use crate::core::{Event, State};
use crate::machine::StateMachine;

/// Render the machine as a Mermaid `stateDiagram-v2`.
///
/// The initial state, if any, is drawn as the entry point.
pub fn mermaid_state_diagram<S: State, E: Event, D>(machine: &StateMachine<S, E, D>) -> String {
    let mut out = String::with_capacity(256);
    out.push_str("stateDiagram-v2\n");
    if let Some(initial) = machine.initial() {
        out.push_str(&format!("    [*] --> {}\n", initial.name()));
    }
    for t in sorted_transitions(machine.transitions()) {
        out.push_str(&format!(
            "    {} --> {}: {}\n",
            t.source.name(),
            t.target.name(),
            t.event.name()
        ));
    }
    out
}

/// Render the machine as a Mermaid left-to-right flowchart.
///
/// States become nodes `id0`, `id1`, ... in name order. The initial state
/// is filled with `initial_fill` and the current state with `current_fill`
/// (any CSS colour); an empty fill skips its style line. When both are the
/// same state the current fill is written last and wins.
pub fn mermaid_flow_chart<S: State, E: Event, D>(
    machine: &StateMachine<S, E, D>,
    initial_fill: &str,
    current_fill: &str,
) -> String {
    let states = sorted_states(machine.transitions());
    let id = |state: &S| states.iter().position(|s| *s == state).map(|i| format!("id{i}"));

    let mut out = String::with_capacity(256);
    out.push_str("graph LR\n");
    for (i, state) in states.iter().enumerate() {
        out.push_str(&format!("    id{i}[{}]\n", state.name()));
    }
    out.push('\n');

    for t in sorted_transitions(machine.transitions()) {
        if let (Some(source), Some(target)) = (id(&t.source), id(&t.target)) {
            out.push_str(&format!("    {source} --> |{}| {target}\n", t.event.name()));
        }
    }
    out.push('\n');

    let highlights = [
        (machine.initial(), initial_fill),
        (machine.current(), current_fill),
    ];
    for (state, fill) in highlights {
        if fill.is_empty() {
            continue;
        }
        if let Some(node) = state.and_then(id) {
            out.push_str(&format!("    style {node} fill:{fill}\n"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::Transition;

    crate::state_enum! {
        enum TestState {
            Foo,
            Bar,
        }
    }

    crate::event_enum! {
        enum TestEvent {
            Ping,
            Pong,
        }
    }

    fn machine() -> StateMachine<TestState, TestEvent> {
        let mut machine = StateMachine::new();
        machine.set_initial(TestState::Foo);
        machine.set_current(TestState::Foo);
        machine.add_transitions([
            Transition::new(TestState::Foo, TestState::Bar, TestEvent::Pong),
            Transition::new(TestState::Bar, TestState::Foo, TestEvent::Ping),
        ]);
        machine
    }

    #[test]
    fn state_diagram_lists_sorted_edges() {
        let expected = concat!(
            "stateDiagram-v2\n",
            "    [*] --> Foo\n",
            "    Bar --> Foo: Ping\n",
            "    Foo --> Bar: Pong\n",
        );
        assert_eq!(mermaid_state_diagram(&machine()), expected);
    }

    #[test]
    fn state_diagram_entry_stays_on_the_initial_state() {
        let mut machine = machine();
        machine.submit(TestEvent::Pong, ()).unwrap();

        let diagram = mermaid_state_diagram(&machine);

        assert!(diagram.contains("    [*] --> Foo\n"));
        assert!(!diagram.contains("[*] --> Bar"));
    }

    #[test]
    fn state_diagram_without_initial_state_has_no_entry() {
        let mut machine: StateMachine<TestState, TestEvent> = StateMachine::new();
        machine.set_current(TestState::Foo);

        assert_eq!(mermaid_state_diagram(&machine), "stateDiagram-v2\n");
    }

    #[test]
    fn flow_chart_highlights_initial_and_current_states() {
        let mut machine = machine();
        machine.submit(TestEvent::Pong, ()).unwrap();

        let expected = concat!(
            "graph LR\n",
            "    id0[Bar]\n",
            "    id1[Foo]\n",
            "\n",
            "    id0 --> |Ping| id1\n",
            "    id1 --> |Pong| id0\n",
            "\n",
            "    style id1 fill:#aaaaaa\n",
            "    style id0 fill:#ff0000\n",
        );
        assert_eq!(mermaid_flow_chart(&machine, "#aaaaaa", "#ff0000"), expected);
    }

    #[test]
    fn flow_chart_skips_empty_fills() {
        assert!(!mermaid_flow_chart(&machine(), "", "").contains("style"));

        let current_only = mermaid_flow_chart(&machine(), "", "#ff0000");
        assert!(current_only.ends_with("\n\n    style id1 fill:#ff0000\n"));
    }
}

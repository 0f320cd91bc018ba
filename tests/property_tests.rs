//! Property-based tests for the transition table and dispatch engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated tables and event sequences.

use eventfsm::machine::{StateMachine, Transition, TransitionTable};
use eventfsm::{event_enum, state_enum};
use proptest::prelude::*;

state_enum! {
    enum TestState {
        Initial,
        Processing,
        Complete,
        Failed,
    }
}

event_enum! {
    enum TestEvent {
        Start,
        Finish,
        Fail,
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4u8) -> TestState {
        match variant {
            0 => TestState::Initial,
            1 => TestState::Processing,
            2 => TestState::Complete,
            _ => TestState::Failed,
        }
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..3u8) -> TestEvent {
        match variant {
            0 => TestEvent::Start,
            1 => TestEvent::Finish,
            _ => TestEvent::Fail,
        }
    }
}

prop_compose! {
    fn arbitrary_rule()(
        source in arbitrary_state(),
        event in arbitrary_event(),
        target in arbitrary_state(),
    ) -> (TestState, TestEvent, TestState) {
        (source, event, target)
    }
}

fn build_table(
    rules: &[(TestState, TestEvent, TestState)],
) -> TransitionTable<TestState, TestEvent> {
    let mut table = TransitionTable::new();
    table.add(
        rules
            .iter()
            .map(|&(source, event, target)| Transition::new(source, target, event)),
    );
    table
}

proptest! {
    #[test]
    fn table_keeps_one_rule_per_pair(rules in prop::collection::vec(arbitrary_rule(), 0..20)) {
        let table = build_table(&rules);

        for (i, a) in table.all().iter().enumerate() {
            for b in &table.all()[i + 1..] {
                prop_assert!(!(a.source == b.source && a.event == b.event));
            }
        }
    }

    #[test]
    fn last_rule_for_a_pair_wins(rules in prop::collection::vec(arbitrary_rule(), 1..20)) {
        let table = build_table(&rules);

        for &(source, event, _) in &rules {
            let expected = rules
                .iter()
                .rev()
                .find(|r| r.0 == source && r.1 == event)
                .map(|r| r.2);
            prop_assert_eq!(table.lookup(&source, &event).map(|t| t.target), expected);
        }
    }

    #[test]
    fn replaced_rules_keep_first_position(rules in prop::collection::vec(arbitrary_rule(), 1..20)) {
        let table = build_table(&rules);

        let mut first_seen: Vec<(TestState, TestEvent)> = Vec::new();
        for &(source, event, _) in &rules {
            if !first_seen.contains(&(source, event)) {
                first_seen.push((source, event));
            }
        }
        let order: Vec<_> = table.all().iter().map(|t| (t.source, t.event)).collect();
        prop_assert_eq!(order, first_seen);
    }

    #[test]
    fn terminations_are_never_sources(rules in prop::collection::vec(arbitrary_rule(), 0..20)) {
        let table = build_table(&rules);

        for state in table.terminations() {
            prop_assert!(table.all().iter().all(|t| t.source != state));
            prop_assert!(table.all().iter().any(|t| t.target == state));
        }
    }

    #[test]
    fn submit_follows_the_table(
        rules in prop::collection::vec(arbitrary_rule(), 0..20),
        initial in arbitrary_state(),
        events in prop::collection::vec(arbitrary_event(), 0..20),
    ) {
        let table = build_table(&rules);
        let mut machine: StateMachine<TestState, TestEvent> = StateMachine::new();
        machine.set_current(initial);
        machine.add_transitions(table.all().iter().cloned());

        for event in events {
            let before = *machine.current().unwrap();
            let expected = table.lookup(&before, &event).map(|t| t.target);
            let has_rule = machine.test_event(&event);
            let result = machine.submit(event, ());

            prop_assert_eq!(has_rule, expected.is_some());
            match expected {
                Some(target) => {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(machine.current(), Some(&target));
                }
                None => {
                    prop_assert!(result.unwrap_err().is_no_transition());
                    prop_assert_eq!(machine.current(), Some(&before));
                }
            }
        }
    }

    #[test]
    fn vetoed_events_never_move_the_machine(
        rules in prop::collection::vec(arbitrary_rule(), 0..20),
        initial in arbitrary_state(),
        events in prop::collection::vec(arbitrary_event(), 0..20),
    ) {
        let mut machine: StateMachine<TestState, TestEvent> = StateMachine::new();
        machine.set_current(initial);
        machine.add_transitions(
            rules
                .iter()
                .map(|&(source, event, target)| {
                    Transition::new(source, target, event).with_action(|_, _| false)
                }),
        );

        for event in events {
            let err = machine.submit(event, ()).unwrap_err();
            prop_assert_eq!(err.is_suspended(), err.source_state() == Some(&initial));
            prop_assert_eq!(machine.current(), Some(&initial));
        }
    }
}

//! Ordered transition table keyed by `(source, event)`.

use crate::core::{Event, State};
use crate::machine::transition::Transition;

/// Ordered collection of transition rules.
///
/// At most one rule exists per `(source, event)` pair. Adding a rule for a
/// pair that is already present replaces the old rule in its original
/// position, so [`all`](Self::all) always reflects first-insertion order.
pub struct TransitionTable<S: State, E: Event, D = ()> {
    transitions: Vec<Transition<S, E, D>>,
}

impl<S: State, E: Event, D> TransitionTable<S, E, D> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Add transitions left to right, replacing rules with the same
    /// `(source, event)` in place.
    ///
    /// # Panics
    ///
    /// Panics if any transition has an empty source, target or event. The
    /// whole batch is checked before anything is inserted.
    pub fn add<I>(&mut self, transitions: I)
    where
        I: IntoIterator<Item = Transition<S, E, D>>,
    {
        let transitions: Vec<_> = transitions.into_iter().collect();
        if let Some(bad) = transitions.iter().find(|t| !t.is_well_formed()) {
            panic!("invalid state transition: source, target, or event is empty: {bad:?}");
        }

        for transition in transitions {
            match self.index_of(&transition.source, &transition.event) {
                Some(index) => self.transitions[index] = transition,
                None => self.transitions.push(transition),
            }
        }
    }

    /// Find the rule for `(source, event)`.
    pub fn lookup(&self, source: &S, event: &E) -> Option<&Transition<S, E, D>> {
        self.transitions.iter().find(|t| t.matches(source, event))
    }

    pub fn contains(&self, source: &S, event: &E) -> bool {
        self.index_of(source, event).is_some()
    }

    /// All rules in insertion order.
    pub fn all(&self) -> &[Transition<S, E, D>] {
        &self.transitions
    }

    /// Distinct states in first-seen order, source before target.
    pub fn states(&self) -> Vec<S> {
        let mut states: Vec<S> = Vec::with_capacity(self.transitions.len());
        for t in &self.transitions {
            push_unique(&mut states, &t.source);
            push_unique(&mut states, &t.target);
        }
        states
    }

    /// Distinct events in first-seen order.
    pub fn events(&self) -> Vec<E> {
        let mut events: Vec<E> = Vec::with_capacity(self.transitions.len());
        for t in &self.transitions {
            push_unique(&mut events, &t.event);
        }
        events
    }

    /// States that are a target of some rule but the source of none.
    pub fn terminations(&self) -> Vec<S> {
        let mut terminations: Vec<S> = Vec::new();
        for t in &self.transitions {
            if !self.transitions.iter().any(|other| other.source == t.target) {
                push_unique(&mut terminations, &t.target);
            }
        }
        terminations
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    fn index_of(&self, source: &S, event: &E) -> Option<usize> {
        self.transitions.iter().position(|t| t.matches(source, event))
    }
}

impl<S: State, E: Event, D> Default for TransitionTable<S, E, D> {
    fn default() -> Self {
        Self::new()
    }
}

fn push_unique<T: PartialEq + Clone>(items: &mut Vec<T>, item: &T) {
    if !items.contains(item) {
        items.push(item.clone());
    }
}

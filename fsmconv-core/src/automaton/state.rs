//! States and transitions

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use super::symbol::Symbol;

/// One edge of the transition graph.
///
/// Transitions are pure values: two edges with the same source, symbol and
/// target are the same edge, so sets of transitions deduplicate by content.
/// Source and target are state names, not references, which keeps the state
/// graph free of ownership cycles.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transition {
    pub source: String,
    pub symbol: Symbol,
    pub target: String,
}

impl Transition {
    pub fn new(source: impl Into<String>, symbol: Symbol, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            symbol,
            target: target.into(),
        }
    }
}

/// A named state owning its outgoing transitions.
///
/// Identity is the name: two states are equal iff their names are equal,
/// regardless of their transition sets.
#[derive(Clone, Debug)]
pub struct State {
    name: String,
    transitions: BTreeSet<Transition>,
}

impl State {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transitions(&self) -> &BTreeSet<Transition> {
        &self.transitions
    }

    pub(crate) fn insert_transition(&mut self, transition: Transition) {
        self.transitions.insert(transition);
    }

    pub(crate) fn set_transitions(&mut self, transitions: BTreeSet<Transition>) {
        self.transitions = transitions;
    }

    /// Names of the states reachable from here on `symbol`.
    ///
    /// More than one target is possible in a nondeterministic automaton.
    pub fn next_states(&self, symbol: &Symbol) -> BTreeSet<&str> {
        self.transitions
            .iter()
            .filter(|t| t.symbol == *symbol)
            .map(|t| t.target.as_str())
            .collect()
    }

    /// Targets of this state's epsilon edges.
    pub fn epsilon_targets(&self) -> impl Iterator<Item = &str> {
        self.transitions
            .iter()
            .filter(|t| t.symbol.is_epsilon())
            .map(|t| t.target.as_str())
    }

    /// Characters on which this state has at least one non-epsilon edge.
    pub fn symbols(&self) -> BTreeSet<char> {
        self.transitions
            .iter()
            .filter_map(|t| match t.symbol {
                Symbol::Char(c) => Some(c),
                Symbol::Epsilon => None,
            })
            .collect()
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_identity_is_the_name() {
        let mut a = State::new("q1");
        let b = State::new("q1");
        a.insert_transition(Transition::new("q1", Symbol::Char('x'), "q2"));
        assert_eq!(a, b);

        let c = State::new("q2");
        assert_ne!(a, c);
    }

    #[test]
    fn test_transitions_deduplicate_by_value() {
        let mut state = State::new("q1");
        state.insert_transition(Transition::new("q1", Symbol::Char('a'), "q2"));
        state.insert_transition(Transition::new("q1", Symbol::Char('a'), "q2"));
        assert_eq!(state.transitions().len(), 1);
    }

    #[test]
    fn test_next_states_collects_all_targets() {
        let mut state = State::new("q1");
        state.insert_transition(Transition::new("q1", Symbol::Char('a'), "q2"));
        state.insert_transition(Transition::new("q1", Symbol::Char('a'), "q3"));
        state.insert_transition(Transition::new("q1", Symbol::Char('b'), "q4"));
        state.insert_transition(Transition::new("q1", Symbol::Epsilon, "q5"));

        let on_a = state.next_states(&Symbol::Char('a'));
        assert_eq!(on_a.into_iter().collect::<Vec<_>>(), vec!["q2", "q3"]);

        let on_eps = state.next_states(&Symbol::Epsilon);
        assert_eq!(on_eps.into_iter().collect::<Vec<_>>(), vec!["q5"]);
    }

    #[test]
    fn test_symbols_skips_epsilon() {
        let mut state = State::new("q1");
        state.insert_transition(Transition::new("q1", Symbol::Epsilon, "q2"));
        state.insert_transition(Transition::new("q1", Symbol::Char('b'), "q2"));
        state.insert_transition(Transition::new("q1", Symbol::Char('a'), "q3"));

        let symbols: Vec<char> = state.symbols().into_iter().collect();
        assert_eq!(symbols, vec!['a', 'b']);
    }

    #[test]
    fn test_epsilon_targets() {
        let mut state = State::new("q1");
        state.insert_transition(Transition::new("q1", Symbol::Epsilon, "q3"));
        state.insert_transition(Transition::new("q1", Symbol::Char('a'), "q2"));
        state.insert_transition(Transition::new("q1", Symbol::Epsilon, "q2"));

        let targets: Vec<&str> = state.epsilon_targets().collect();
        assert_eq!(targets, vec!["q2", "q3"]);
    }
}

//! Automaton model
//!
//! States are registered by name, transitions are value triples held by
//! their source state, and every reference is validated when the automaton
//! is assembled.

mod state;
mod symbol;

pub use state::{State, Transition};
pub use symbol::Symbol;

use indexmap::IndexMap;
use std::collections::BTreeSet;

use crate::error::SemanticError;

/// A finite automaton over single-character symbols.
#[derive(Clone, Debug)]
pub struct Automaton {
    states: IndexMap<String, State>,
    alphabet: BTreeSet<char>,
    start: String,
    finals: BTreeSet<String>,
}

impl Automaton {
    /// Assemble an automaton and validate every reference in it.
    ///
    /// Duplicate state names, alphabet characters and final names collapse
    /// silently. Any reference to an undeclared state or symbol is rejected
    /// here, not at use time.
    pub fn new(
        state_names: Vec<String>,
        alphabet: Vec<char>,
        transitions: Vec<Transition>,
        start: String,
        finals: Vec<String>,
    ) -> Result<Self, SemanticError> {
        if state_names.is_empty() {
            return Err(SemanticError::EmptyStates);
        }

        let mut states: IndexMap<String, State> = IndexMap::new();
        for name in state_names {
            states.entry(name.clone()).or_insert_with(|| State::new(name));
        }

        let alphabet: BTreeSet<char> = alphabet.into_iter().collect();
        if alphabet.is_empty() {
            return Err(SemanticError::EmptyAlphabet);
        }

        for transition in transitions {
            if !states.contains_key(&transition.source) {
                return Err(SemanticError::UnknownTransitionState(transition.source));
            }
            if !states.contains_key(&transition.target) {
                return Err(SemanticError::UnknownTransitionState(transition.target));
            }
            if let Symbol::Char(c) = transition.symbol {
                if !alphabet.contains(&c) {
                    return Err(SemanticError::UnknownTransitionSymbol(c));
                }
            }
            if let Some(state) = states.get_mut(&transition.source) {
                state.insert_transition(transition);
            }
        }

        if !states.contains_key(&start) {
            return Err(SemanticError::UnknownStartState(start));
        }

        let mut final_set = BTreeSet::new();
        for name in finals {
            if !states.contains_key(&name) {
                return Err(SemanticError::UnknownFinalState(name));
            }
            final_set.insert(name);
        }

        Ok(Self {
            states,
            alphabet,
            start,
            finals: final_set,
        })
    }

    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }

    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.values()
    }

    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn finals(&self) -> &BTreeSet<String> {
        &self.finals
    }

    pub fn is_final(&self, name: &str) -> bool {
        self.finals.contains(name)
    }

    /// All transitions of the automaton, state by state.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.states.values().flat_map(|s| s.transitions().iter())
    }

    pub(crate) fn set_transitions(&mut self, name: &str, transitions: BTreeSet<Transition>) {
        if let Some(state) = self.states.get_mut(name) {
            state.set_transitions(transitions);
        }
    }
}

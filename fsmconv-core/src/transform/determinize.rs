//! Subset-construction determinization

use std::collections::BTreeSet;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::automaton::{Automaton, Symbol, Transition};
use crate::error::SemanticError;

/// Canonical name of a composite state: member names sorted and joined
/// with `_`. A singleton keeps the member's own name.
fn canonical_name(members: &BTreeSet<String>) -> String {
    members.iter().cloned().collect::<Vec<_>>().join("_")
}

/// Build a deterministic automaton over composite states.
///
/// The input is expected to be free of epsilon transitions. Composite
/// states are sets of input states keyed by their canonical name; the map
/// is seeded with the singleton start composite and scanned by index while
/// it grows, so every discovered composite is processed exactly once.
/// For each composite and each alphabet character the union of member
/// destinations either names an existing composite, creates a new one, or
/// is empty, in which case no transition is emitted and the resulting
/// automaton is partial on that character. A composite is final iff one of
/// its members is final.
///
/// Terminates because only previously unseen canonical names are inserted
/// and a finite state set has finitely many non-empty subsets.
pub fn determinize(automaton: &Automaton) -> Result<Automaton, SemanticError> {
    let start = automaton.start().to_owned();

    let mut composites: IndexMap<String, BTreeSet<String>> = IndexMap::new();
    composites.insert(start.clone(), BTreeSet::from([start.clone()]));

    let mut transitions: Vec<Transition> = Vec::new();
    let mut finals: Vec<String> = Vec::new();

    let mut index = 0;
    while let Some((name, members)) = composites
        .get_index(index)
        .map(|(n, m)| (n.clone(), m.clone()))
    {
        index += 1;

        for &c in automaton.alphabet() {
            let mut union: BTreeSet<String> = BTreeSet::new();
            for member in &members {
                if let Some(state) = automaton.state(member) {
                    union.extend(
                        state
                            .next_states(&Symbol::Char(c))
                            .into_iter()
                            .map(str::to_owned),
                    );
                }
            }
            if union.is_empty() {
                continue;
            }

            let target = canonical_name(&union);
            if !composites.contains_key(&target) {
                trace!(
                    target: "fsmconv::determinize",
                    composite = %target,
                    members = union.len(),
                    "new composite state"
                );
                composites.insert(target.clone(), union);
            }
            transitions.push(Transition::new(name.clone(), Symbol::Char(c), target));
        }

        if members.iter().any(|m| automaton.is_final(m)) {
            finals.push(name.clone());
        }
    }

    debug!(
        target: "fsmconv::determinize",
        composites = composites.len(),
        transitions = transitions.len(),
        "subset construction finished"
    );

    let state_names: Vec<String> = composites.keys().cloned().collect();
    let alphabet: Vec<char> = automaton.alphabet().iter().copied().collect();
    Automaton::new(state_names, alphabet, transitions, start, finals)
}

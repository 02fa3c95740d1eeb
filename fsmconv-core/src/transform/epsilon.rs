//! Epsilon closure and epsilon elimination

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::automaton::{Automaton, Transition};

/// States reachable from `state` over one or more epsilon edges.
///
/// `state` itself belongs to the result only when an epsilon cycle leads
/// back to it. The set is the least fixed point of following epsilon edges,
/// computed with a visited set so cycles terminate.
pub fn closure(automaton: &Automaton, state: &str) -> BTreeSet<String> {
    let mut reached: BTreeSet<String> = BTreeSet::new();
    let mut pending: Vec<String> = match automaton.state(state) {
        Some(s) => s.epsilon_targets().map(str::to_owned).collect(),
        None => return reached,
    };

    while let Some(name) = pending.pop() {
        if !reached.insert(name.clone()) {
            continue;
        }
        if let Some(s) = automaton.state(&name) {
            for target in s.epsilon_targets() {
                if !reached.contains(target) {
                    pending.push(target.to_owned());
                }
            }
        }
    }

    trace!(target: "fsmconv::epsilon", state, size = reached.len(), "closure computed");
    reached
}

/// Remove every epsilon edge while preserving reachability.
///
/// For each state `q`, every non-epsilon transition `(s, c, d)` of every
/// state `s` in `closure(q)` is re-sourced as `(q, c, d)`; the epsilon
/// edges of `q` are dropped and its own non-epsilon edges kept. All
/// closures are taken from the unmodified graph before any state is
/// rewritten, so the result does not depend on processing order.
///
/// A start state whose closure contains a final state does not become
/// final, so acceptance of the empty word can be lost here.
pub fn eliminate_epsilons(automaton: &mut Automaton) {
    let names: Vec<String> = automaton.state_names().map(str::to_owned).collect();

    let mut rewrites: Vec<(String, BTreeSet<Transition>)> = Vec::new();
    for name in &names {
        let reachable = closure(automaton, name);
        if reachable.is_empty() {
            continue;
        }

        let mut rewritten: BTreeSet<Transition> = match automaton.state(name) {
            Some(state) => state
                .transitions()
                .iter()
                .filter(|t| !t.symbol.is_epsilon())
                .cloned()
                .collect(),
            None => continue,
        };
        for member in &reachable {
            if let Some(state) = automaton.state(member) {
                for t in state.transitions().iter().filter(|t| !t.symbol.is_epsilon()) {
                    rewritten.insert(Transition::new(name.clone(), t.symbol, t.target.clone()));
                }
            }
        }
        rewrites.push((name.clone(), rewritten));
    }

    let touched = rewrites.len();
    for (name, transitions) in rewrites {
        automaton.set_transitions(&name, transitions);
    }

    debug!(
        target: "fsmconv::epsilon",
        states = names.len(),
        rewritten = touched,
        "epsilon elimination finished"
    );
}

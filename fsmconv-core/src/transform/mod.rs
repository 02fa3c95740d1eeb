//! Transformation passes over a parsed automaton

mod determinize;
mod epsilon;

pub use determinize::determinize;
pub use epsilon::{closure, eliminate_epsilons};

//! Test helpers
//!
//! End-to-end pipelines mirroring the CLI modes: pass-through, epsilon
//! elimination (`-e`), and determinization (`-d`).

use fsmconv_core::{
    determinize, eliminate_epsilons, parse_automaton, serialize_automaton, Automaton, ConvertError,
};

/// Parse and re-emit without transformation (the default mode).
pub fn run_passthrough(code: &str) -> Result<String, ConvertError> {
    let automaton = parse_automaton(code, false)?;
    Ok(serialize_automaton(&automaton))
}

/// Run epsilon elimination and serialize the result.
pub fn run_epsilon_elimination(code: &str) -> Result<String, ConvertError> {
    let mut automaton = parse_automaton(code, false)?;
    eliminate_epsilons(&mut automaton);
    Ok(serialize_automaton(&automaton))
}

/// Run epsilon elimination, then subset construction, and serialize.
pub fn run_determinization(code: &str) -> Result<String, ConvertError> {
    let dfa = determinized(code)?;
    Ok(serialize_automaton(&dfa))
}

/// The determinized automaton itself, for structural assertions.
pub fn determinized(code: &str) -> Result<Automaton, ConvertError> {
    let mut automaton = parse_automaton(code, false)?;
    eliminate_epsilons(&mut automaton);
    Ok(determinize(&automaton)?)
}

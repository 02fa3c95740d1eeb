//! Automaton text writer
//!
//! Prints the five-part tuple, pretty-printed: states, alphabet and finals
//! on one line each, transitions one per line, every section sorted. The
//! output parses back to the same automaton.

use tracing::debug;

use crate::automaton::{Automaton, Symbol};

/// Serialize an automaton into its pretty-printed tuple form.
///
/// States and finals sort by name, the alphabet sorts by the quoted
/// spelling of each symbol, transitions sort as whole lines. Epsilon edges
/// print as `''`, so only an automaton that went through epsilon
/// elimination serializes epsilon-free. No trailing newline.
pub fn serialize_automaton(automaton: &Automaton) -> String {
    let mut states: Vec<&str> = automaton.state_names().collect();
    states.sort_unstable();

    let mut alphabet: Vec<String> = automaton
        .alphabet()
        .iter()
        .map(|&c| Symbol::Char(c).quoted())
        .collect();
    alphabet.sort_unstable();

    let mut lines: Vec<String> = automaton
        .transitions()
        .map(|t| format!("{} {} -> {}", t.source, t.symbol.quoted(), t.target))
        .collect();
    lines.sort_unstable();

    let mut finals: Vec<&str> = automaton.finals().iter().map(String::as_str).collect();
    finals.sort_unstable();

    let mut out = String::new();
    out.push_str("(\n{");
    out.push_str(&states.join(", "));
    out.push_str("},\n{");
    out.push_str(&alphabet.join(", "));
    out.push_str("},\n{");
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('\n');
        out.push_str(line);
    }
    out.push_str("\n},\n");
    out.push_str(automaton.start());
    out.push_str(",\n{");
    out.push_str(&finals.join(", "));
    out.push_str("}\n)");

    debug!(
        target: "fsmconv::writer",
        states = states.len(),
        transitions = lines.len(),
        "automaton serialized"
    );
    out
}

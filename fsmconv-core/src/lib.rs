//! fsmconv-core - Finite automaton conversion (pure logic, no IO)
//!
//! Contains the automaton model, the textual reader/writer, and the two
//! transformation passes: epsilon elimination and determinization.
//! Only operates on in-memory data structures; file handling and exit
//! codes live in the CLI.

pub mod automaton;
pub mod error;
pub mod format;
pub mod transform;

// Re-export common types
pub use automaton::{Automaton, State, Symbol, Transition};
pub use error::{ConvertError, SemanticError, SyntaxError};
pub use format::{parse_automaton, serialize_automaton};
pub use transform::{closure, determinize, eliminate_epsilons};

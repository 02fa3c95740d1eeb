//! Textual wire format
//!
//! One parenthesized five-part tuple per automaton:
//! `({states},{alphabet},{transitions},start,{finals})`. The reader turns
//! the text into an [`Automaton`](crate::Automaton), the writer prints one
//! back in the sorted, pretty-printed form.

mod reader;
mod writer;

pub use reader::parse_automaton;
pub use writer::serialize_automaton;

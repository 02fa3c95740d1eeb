//! Transition labels

use std::fmt;

/// A transition label: the empty string or a single input character.
///
/// Epsilon marks edges that consume no input. It never appears in an
/// automaton's alphabet, only on transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Epsilon,
    Char(char),
}

impl Symbol {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// The quoted spelling used by the wire format.
    ///
    /// Epsilon is `''`, a plain character `c` is `'c'`, and a literal
    /// apostrophe doubles to `''''`.
    pub fn quoted(&self) -> String {
        match self {
            Symbol::Epsilon => "''".to_string(),
            Symbol::Char('\'') => "''''".to_string(),
            Symbol::Char(c) => format!("'{c}'"),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.quoted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_spellings() {
        assert_eq!(Symbol::Epsilon.quoted(), "''");
        assert_eq!(Symbol::Char('a').quoted(), "'a'");
        assert_eq!(Symbol::Char('\'').quoted(), "''''");
        assert_eq!(Symbol::Char(',').quoted(), "','");
        assert_eq!(Symbol::Char(' ').quoted(), "' '");
    }

    #[test]
    fn test_epsilon_check() {
        assert!(Symbol::Epsilon.is_epsilon());
        assert!(!Symbol::Char('x').is_epsilon());
    }

    #[test]
    fn test_ordering_puts_epsilon_first() {
        assert!(Symbol::Epsilon < Symbol::Char('\0'));
        assert!(Symbol::Char('a') < Symbol::Char('b'));
    }
}

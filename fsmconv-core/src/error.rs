//! Error types for automaton parsing and conversion

use thiserror::Error;

/// Lexical and structural errors in the input text.
///
/// Anything that keeps the text from matching the automaton grammar at all:
/// malformed structure, an over-long quoted literal, a state declared with a
/// leading or trailing underscore, characters left over after the closing
/// parenthesis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("more than one character between quotes")]
    OverlongQuotedSymbol,

    #[error("input is not a finite automaton: expected {expected} at position {position}")]
    Unexpected {
        expected: &'static str,
        position: usize,
    },

    #[error("input is not a finite automaton: expected {expected}, got end of input")]
    UnexpectedEnd { expected: &'static str },

    #[error("state name '{0}' starts or ends with an underscore")]
    UnderscoredStateName(String),

    #[error("the input alphabet contains the sequence '''")]
    TripleQuoteSymbol,

    #[error("'{0}' is not a single-character symbol")]
    MalformedSymbol(String),

    #[error("characters remain after the automaton definition")]
    TrailingCharacters,
}

/// Referential errors in a structurally valid automaton.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("the set of states is empty")]
    EmptyStates,

    #[error("the input alphabet is empty")]
    EmptyAlphabet,

    #[error("transition state '{0}' is not in the set of states")]
    UnknownTransitionState(String),

    #[error("transition symbol '{0}' is not in the input alphabet")]
    UnknownTransitionSymbol(char),

    #[error("start state '{0}' is not in the set of states")]
    UnknownStartState(String),

    #[error("final state '{0}' is not in the set of states")]
    UnknownFinalState(String),
}

/// Top-level error for one conversion run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("semantic error: {0}")]
    Semantic(#[from] SemanticError),
}

impl ConvertError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::Syntax(_) => 40,
            ConvertError::Semantic(_) => 41,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = SyntaxError::OverlongQuotedSymbol;
        assert_eq!(err.to_string(), "more than one character between quotes");

        let err = SyntaxError::UnderscoredStateName("_q1".to_string());
        assert_eq!(
            err.to_string(),
            "state name '_q1' starts or ends with an underscore"
        );

        let err = SyntaxError::Unexpected {
            expected: "'{'",
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "input is not a finite automaton: expected '{' at position 3"
        );

        let err = SyntaxError::MalformedSymbol("ab".to_string());
        assert_eq!(err.to_string(), "'ab' is not a single-character symbol");
    }

    #[test]
    fn test_semantic_error_display() {
        let err = SemanticError::EmptyAlphabet;
        assert_eq!(err.to_string(), "the input alphabet is empty");

        let err = SemanticError::UnknownTransitionState("q9".to_string());
        assert_eq!(
            err.to_string(),
            "transition state 'q9' is not in the set of states"
        );
    }

    #[test]
    fn test_convert_error_wraps_and_prefixes() {
        let err: ConvertError = SyntaxError::TrailingCharacters.into();
        assert_eq!(
            err.to_string(),
            "syntax error: characters remain after the automaton definition"
        );

        let err: ConvertError = SemanticError::UnknownStartState("s0".to_string()).into();
        assert_eq!(
            err.to_string(),
            "semantic error: start state 's0' is not in the set of states"
        );
    }

    #[test]
    fn test_exit_codes() {
        let syntax: ConvertError = SyntaxError::TripleQuoteSymbol.into();
        assert_eq!(syntax.exit_code(), 40);

        let semantic: ConvertError = SemanticError::EmptyAlphabet.into();
        assert_eq!(semantic.exit_code(), 41);
    }
}

//! Automaton text reader
//!
//! Reads the five-part tuple form `({states},{alphabet},{transitions},start,{finals})`.
//! The text is preprocessed first (comment stripping, quoted-literal length
//! check, whitespace normalization), then parsed structurally as a whole,
//! and only then decoded and checked referentially. Structural deviations
//! are syntax errors; reference problems in a well-formed tuple are
//! semantic errors.

use tracing::{debug, trace};

use crate::automaton::{Automaton, Symbol, Transition};
use crate::error::{ConvertError, SemanticError, SyntaxError};

/// Parse an automaton description.
///
/// With `case_insensitive` the whole input is lowercased before anything
/// else, so state names, bare symbols and quoted literals all fold.
pub fn parse_automaton(source: &str, case_insensitive: bool) -> Result<Automaton, ConvertError> {
    let trimmed = source.trim();
    let lowered;
    let text: &str = if case_insensitive {
        lowered = trimmed.to_lowercase();
        &lowered
    } else {
        trimmed
    };

    let stripped = strip_comments(text);
    let chars: Vec<char> = stripped.chars().collect();
    check_quoted_length(&chars)?;
    let normalized = normalize_spacing(&chars);
    trace!(target: "fsmconv::reader", chars = normalized.len(), "input normalized");

    let raw = parse_structure(&normalized)?;
    let automaton = assemble(raw)?;
    debug!(
        target: "fsmconv::reader",
        states = automaton.states().count(),
        symbols = automaton.alphabet().len(),
        transitions = automaton.transitions().count(),
        "automaton parsed"
    );
    Ok(automaton)
}

// ===== preprocessing =====

/// Remove `#` comments through the end of their line, newline included.
///
/// A `#` directly preceded or followed by an apostrophe is a symbol
/// character, not a comment start.
fn strip_comments(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let preceded = i > 0 && chars[i - 1] == '\'';
        let followed = i + 1 < chars.len() && chars[i + 1] == '\'';
        if chars[i] == '#' && !preceded && !followed {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            i += 1;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// Reject an apostrophe flanked by two or more non-apostrophe characters
/// on both sides. That shape only arises from an over-long quoted literal
/// such as `'ab'`.
fn check_quoted_length(chars: &[char]) -> Result<(), SyntaxError> {
    for (i, &c) in chars.iter().enumerate() {
        if c != '\'' {
            continue;
        }
        let clear_left = i >= 2 && chars[i - 1] != '\'' && chars[i - 2] != '\'';
        let clear_right =
            i + 2 < chars.len() && chars[i + 1] != '\'' && chars[i + 2] != '\'';
        if clear_left && clear_right {
            return Err(SyntaxError::OverlongQuotedSymbol);
        }
    }
    Ok(())
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Collapse or delete whitespace runs outside quoted literals.
///
/// A run framed by apostrophes on both sides is quoted content and stays.
/// A run between two word characters collapses to the single space that
/// separates a state name from a bare transition symbol. Every other run,
/// including one touching an apostrophe on one side, is dropped.
fn normalize_spacing(chars: &[char]) -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_whitespace() {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let run_start = i;
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        let prev = run_start.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i).copied();
        if prev == Some('\'') && next == Some('\'') {
            out.extend_from_slice(&chars[run_start..i]);
        } else if prev.is_some_and(is_word) && next.is_some_and(is_word) {
            out.push(' ');
        }
    }
    out
}

// ===== structural parsing =====

/// Raw pieces of the five-part tuple: shapes validated, nothing decoded.
struct RawAutomaton {
    state_names: Vec<String>,
    alphabet_inner: String,
    transitions: Vec<RawTransition>,
    start: String,
    final_names: Vec<String>,
}

struct RawTransition {
    source: String,
    symbol_text: String,
    target: String,
}

/// Character cursor over the normalized text.
struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self { chars, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn skip(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.chars.len());
    }

    fn take(&mut self, count: usize) -> String {
        let end = (self.pos + count).min(self.chars.len());
        let taken: String = self.chars[self.pos..end].iter().collect();
        self.pos = end;
        taken
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char, what: &'static str) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(SyntaxError::Unexpected {
                expected: what,
                position: self.pos,
            }),
            None => Err(SyntaxError::UnexpectedEnd { expected: what }),
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// An identifier: a letter or underscore, then letters, digits or
    /// underscores.
    fn identifier(&mut self, what: &'static str) -> Result<String, SyntaxError> {
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            Some(_) => {
                return Err(SyntaxError::Unexpected {
                    expected: what,
                    position: self.pos,
                })
            }
            None => return Err(SyntaxError::UnexpectedEnd { expected: what }),
        }
        let start = self.pos;
        while matches!(self.peek(), Some(c) if is_word(c)) {
            self.pos += 1;
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }
}

/// Characters allowed unquoted as a symbol.
fn is_bare_symbol(c: char) -> bool {
    !c.is_whitespace()
        && !matches!(c, '(' | ')' | '{' | '}' | '-' | '>' | ',' | '.' | '|' | '#')
}

fn parse_structure(chars: &[char]) -> Result<RawAutomaton, SyntaxError> {
    let mut cursor = Cursor::new(chars);
    cursor.expect('(', "'('")?;

    let state_names = parse_state_section(&mut cursor)?;
    cursor.expect(',', "','")?;
    let alphabet_inner = parse_alphabet_section(&mut cursor)?;
    cursor.expect(',', "','")?;
    let transitions = parse_transition_section(&mut cursor)?;
    cursor.expect(',', "','")?;
    let start = cursor.identifier("the start state")?;
    cursor.expect(',', "','")?;
    let final_names = parse_final_section(&mut cursor)?;
    cursor.expect(')', "')'")?;

    if !cursor.at_end() {
        return Err(SyntaxError::TrailingCharacters);
    }

    Ok(RawAutomaton {
        state_names,
        alphabet_inner,
        transitions,
        start,
        final_names,
    })
}

/// `{name, name, ...}` with at least one name.
fn parse_state_section(cursor: &mut Cursor) -> Result<Vec<String>, SyntaxError> {
    cursor.expect('{', "'{'")?;
    let mut names = vec![cursor.identifier("a state name")?];
    while cursor.match_char(',') {
        names.push(cursor.identifier("a state name")?);
    }
    cursor.expect('}', "'}'")?;
    Ok(names)
}

/// `{symbol, symbol, ...}` or `{}`. Returns the raw section text between
/// the braces; decoding happens later so that an empty alphabet is
/// reported before any symbol-level problem inside it.
fn parse_alphabet_section(cursor: &mut Cursor) -> Result<String, SyntaxError> {
    cursor.expect('{', "'{'")?;
    if cursor.match_char('}') {
        return Ok(String::new());
    }
    let inner_start = cursor.pos;
    loop {
        parse_alphabet_item(cursor)?;
        if !cursor.match_char(',') {
            break;
        }
    }
    let inner: String = cursor.chars[inner_start..cursor.pos].iter().collect();
    cursor.expect('}', "'}'")?;
    Ok(inner)
}

/// One alphabet entry: a bare character, a quoted character, the doubled
/// apostrophe spelling, or a bare apostrophe. Longest spelling wins.
fn parse_alphabet_item(cursor: &mut Cursor) -> Result<(), SyntaxError> {
    if cursor.peek() == Some('\'') {
        if cursor.peek_at(1) == Some('\'')
            && cursor.peek_at(2) == Some('\'')
            && cursor.peek_at(3) == Some('\'')
        {
            cursor.skip(4);
        } else if cursor.peek_at(2) == Some('\'') {
            cursor.skip(3);
        } else {
            cursor.skip(1);
        }
        return Ok(());
    }
    match cursor.peek() {
        Some(c) if is_bare_symbol(c) => {
            cursor.skip(1);
            Ok(())
        }
        Some(_) => Err(SyntaxError::Unexpected {
            expected: "an alphabet symbol",
            position: cursor.pos,
        }),
        None => Err(SyntaxError::UnexpectedEnd {
            expected: "an alphabet symbol",
        }),
    }
}

/// `{entry, entry, ...}` or `{}`.
fn parse_transition_section(cursor: &mut Cursor) -> Result<Vec<RawTransition>, SyntaxError> {
    cursor.expect('{', "'{'")?;
    if cursor.match_char('}') {
        return Ok(Vec::new());
    }
    let mut entries = vec![parse_transition_entry(cursor)?];
    while cursor.match_char(',') {
        entries.push(parse_transition_entry(cursor)?);
    }
    cursor.expect('}', "'}'")?;
    Ok(entries)
}

/// One transition entry: source, symbol spelling, `->`, target.
fn parse_transition_entry(cursor: &mut Cursor) -> Result<RawTransition, SyntaxError> {
    let source = cursor.identifier("a state name")?;
    let symbol_text = parse_transition_symbol(cursor)?;
    cursor.expect('-', "'->'")?;
    cursor.expect('>', "'->'")?;
    let target = cursor.identifier("a state name")?;
    Ok(RawTransition {
        source,
        symbol_text,
        target,
    })
}

/// The symbol spelling between the source state and `->`: empty for an
/// epsilon edge, `''`, a quoted character, the doubled apostrophe, or a
/// space followed by a bare character. Without the separating space a
/// trailing character belongs to the state name, so `s1a->s2` is an
/// epsilon edge out of `s1a`.
fn parse_transition_symbol(cursor: &mut Cursor) -> Result<String, SyntaxError> {
    if cursor.peek() == Some('\'') {
        if cursor.peek_at(1) == Some('\'')
            && cursor.peek_at(2) == Some('\'')
            && cursor.peek_at(3) == Some('\'')
        {
            return Ok(cursor.take(4));
        }
        if cursor.peek_at(2) == Some('\'') {
            return Ok(cursor.take(3));
        }
        if cursor.peek_at(1) == Some('\'') {
            return Ok(cursor.take(2));
        }
        return Err(SyntaxError::Unexpected {
            expected: "a symbol",
            position: cursor.pos,
        });
    }
    if cursor.match_char(' ') {
        return match cursor.peek() {
            Some(c) if is_bare_symbol(c) => Ok(format!(" {}", cursor.take(1))),
            Some(_) => Err(SyntaxError::Unexpected {
                expected: "a symbol",
                position: cursor.pos,
            }),
            None => Err(SyntaxError::UnexpectedEnd { expected: "a symbol" }),
        };
    }
    Ok(String::new())
}

/// `{name, name, ...}` or `{}`; an automaton may have no final states.
fn parse_final_section(cursor: &mut Cursor) -> Result<Vec<String>, SyntaxError> {
    cursor.expect('{', "'{'")?;
    if cursor.match_char('}') {
        return Ok(Vec::new());
    }
    let mut names = vec![cursor.identifier("a final state name")?];
    while cursor.match_char(',') {
        names.push(cursor.identifier("a final state name")?);
    }
    cursor.expect('}', "'}'")?;
    Ok(names)
}

// ===== decoding and referential checks =====

fn assemble(raw: RawAutomaton) -> Result<Automaton, ConvertError> {
    for name in &raw.state_names {
        if name.starts_with('_') || name.ends_with('_') {
            return Err(SyntaxError::UnderscoredStateName(name.clone()).into());
        }
    }

    if raw.alphabet_inner.is_empty() {
        return Err(SemanticError::EmptyAlphabet.into());
    }
    let alphabet = decode_alphabet(&raw.alphabet_inner)?;

    let mut transitions = Vec::with_capacity(raw.transitions.len());
    for entry in raw.transitions {
        let symbol = decode_transition_symbol(&entry.symbol_text);
        transitions.push(Transition::new(entry.source, symbol, entry.target));
    }

    let automaton = Automaton::new(
        raw.state_names,
        alphabet,
        transitions,
        raw.start,
        raw.final_names,
    )?;
    Ok(automaton)
}

/// Decode the alphabet section, splitting on every comma.
///
/// The split does not look at quotes, so a quoted comma `','` falls apart
/// into two bare apostrophes, each of which reads as the comma symbol.
fn decode_alphabet(inner: &str) -> Result<Vec<char>, SyntaxError> {
    inner.split(',').map(decode_alphabet_piece).collect()
}

fn decode_alphabet_piece(piece: &str) -> Result<char, SyntaxError> {
    if piece == "'''" {
        return Err(SyntaxError::TripleQuoteSymbol);
    }
    if piece == "'" {
        return Ok(',');
    }
    let chars: Vec<char> = piece.chars().collect();
    match chars.as_slice() {
        ['\'', c, '\'', ..] => Ok(*c),
        [c] => Ok(*c),
        _ => Err(SyntaxError::MalformedSymbol(piece.to_string())),
    }
}

/// Decode a transition symbol spelling by its shape: nothing or `''` is
/// epsilon, a two- or three-character spelling carries its symbol at index
/// one, and the doubled apostrophe spelling is a literal apostrophe.
fn decode_transition_symbol(text: &str) -> Symbol {
    let chars: Vec<char> = text.chars().collect();
    match chars.as_slice() {
        [] | ['\'', '\''] => Symbol::Epsilon,
        [_, c] | [_, c, _] => Symbol::Char(*c),
        _ => Symbol::Char('\''),
    }
}

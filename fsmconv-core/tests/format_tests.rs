//! Wire-format round-trip tests
//!
//! Serialized output must parse back into a structurally identical
//! automaton, including the awkward quoted spellings.

mod common;

use common::run_passthrough;
use fsmconv_core::{parse_automaton, serialize_automaton};
use std::collections::BTreeSet;

#[test]
fn test_round_trip_cases() {
    let cases = vec![
        (
            "({s1,s2},{'a','b'},{s1 'a'->s2, s2 'b'->s1},s1,{s2})",
            "plain two-state automaton",
        ),
        ("({s1},{'a'},{},s1,{})", "no transitions, no finals"),
        (
            "({s1,s2},{'a'},{s1''->s2, s2 'a'->s1},s1,{s2})",
            "epsilon edge",
        ),
        (
            "({s1,s2},{''''},{s1''''->s2},s1,{s2})",
            "apostrophe symbol",
        ),
        ("({s1,s2},{','},{s1','->s2},s1,{s2})", "comma symbol"),
        ("({s1,s2},{' '},{s1' '->s2},s1,{s2})", "space symbol"),
        (
            "({s1,s2},{'#','a'},{s1'#'->s2, s2 'a'->s1},s1,{})",
            "hash symbol next to a comment-free line",
        ),
    ];

    for (code, desc) in cases {
        let automaton = parse_automaton(code, false)
            .unwrap_or_else(|e| panic!("failed to parse {}: {:?}", desc, e));
        let printed = serialize_automaton(&automaton);
        let reparsed = parse_automaton(&printed, false)
            .unwrap_or_else(|e| panic!("failed to reparse {}: {:?}\n{}", desc, e, printed));

        let original_states: BTreeSet<&str> = automaton.state_names().collect();
        let reparsed_states: BTreeSet<&str> = reparsed.state_names().collect();
        assert_eq!(original_states, reparsed_states, "states changed for {}", desc);
        assert_eq!(automaton.alphabet(), reparsed.alphabet(), "alphabet changed for {}", desc);
        assert_eq!(automaton.start(), reparsed.start(), "start changed for {}", desc);
        assert_eq!(automaton.finals(), reparsed.finals(), "finals changed for {}", desc);

        let original_edges: BTreeSet<_> = automaton.transitions().cloned().collect();
        let reparsed_edges: BTreeSet<_> = reparsed.transitions().cloned().collect();
        assert_eq!(original_edges, reparsed_edges, "transitions changed for {}", desc);

        assert_eq!(
            printed,
            serialize_automaton(&reparsed),
            "serialization not stable for {}",
            desc
        );
    }
}

#[test]
fn test_output_is_a_fixed_point() {
    // Feeding the tool its own output changes nothing.
    let once = run_passthrough("({s2,s1},{b,'a'},{s1 a->s2, s2 'b'->s1, s1''->s2},s1,{s1,s2})")
        .expect("first pass should succeed");
    let twice = run_passthrough(&once).expect("second pass should succeed");
    assert_eq!(once, twice);
}

#[test]
fn test_comments_do_not_round_trip() {
    let automaton = parse_automaton(
        "# an automaton\n({s1,s2},{'a'},{s1 'a'->s2},s1,{s2}) # done",
        false,
    )
    .expect("commented input should parse");
    let printed = serialize_automaton(&automaton);
    assert!(!printed.contains('#'));
    assert!(parse_automaton(&printed, false).is_ok());
}

#[test]
fn test_case_insensitive_parse_serializes_lowercased() {
    let automaton = parse_automaton("({S1,S2},{'A'},{S1 'A'->S2},S1,{S2})", true)
        .expect("input should parse case-insensitively");
    assert_eq!(
        serialize_automaton(&automaton),
        "(\n{s1, s2},\n{'a'},\n{\ns1 'a' -> s2\n},\ns1,\n{s2}\n)"
    );
}

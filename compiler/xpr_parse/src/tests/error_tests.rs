//! Structural failures.

use super::parse_default;
use crate::ParseError;

fn unexpected_end(text: &str) -> bool {
    matches!(parse_default(text), Err(ParseError::UnexpectedEnd { .. }))
}

#[test]
fn test_unmatched_bracket() {
    assert!(matches!(
        parse_default("(2+3"),
        Err(ParseError::UnmatchedBracket { position: 0, .. })
    ));
    assert!(matches!(
        parse_default("sqrt((4)"),
        Err(ParseError::UnmatchedBracket { .. })
    ));
}

#[test]
fn test_unmatched_outer_bracket() {
    // Depth counting pairs the only `)` with the inner `(`.
    assert!(matches!(
        parse_default("(1+(2)"),
        Err(ParseError::UnmatchedBracket { .. })
    ));
}

#[test]
fn test_empty_input() {
    assert!(unexpected_end(""));
    assert!(unexpected_end("   "));
}

#[test]
fn test_empty_multiplicative_operand() {
    assert!(unexpected_end("2**3"));
    assert!(unexpected_end("2*"));
    assert!(unexpected_end("**"));
}

#[test]
fn test_lone_operators() {
    assert!(unexpected_end("+"));
    assert!(unexpected_end("-"));
    assert!(unexpected_end("/"));
    assert!(unexpected_end(","));
    assert!(unexpected_end("2^"));
    assert!(unexpected_end("%3"));
}

#[test]
fn test_negative_operand_after_operator() {
    // `-` splits before `*`, leaving `2*` as a term.
    assert!(unexpected_end("2*-3"));
}

#[test]
fn test_malformed_tokens() {
    assert!(unexpected_end("2x"));
    assert!(unexpected_end("x y"));
    assert!(unexpected_end("_x"));
    assert!(unexpected_end("#"));
}

#[test]
fn test_invalid_placeholder() {
    assert!(matches!(
        parse_default("&7;"),
        Err(ParseError::InvalidPlaceholderIndex { .. })
    ));
    assert!(matches!(
        parse_default("&x;"),
        Err(ParseError::InvalidPlaceholderIndex { .. })
    ));
}

#[test]
fn test_function_name_alone() {
    assert!(unexpected_end("sqrt"));
}

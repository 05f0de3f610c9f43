//! Helpers over token sequences shared by the recognizers
use crate::token::{Token, TokenType};
use cssnest_shared::errors::{ErrorKind, ParseError, ParseResult};

/// Returns the position of the first token of the given type
pub fn find_first_index(tokens: &[Token], token_type: &TokenType) -> Option<usize> {
    tokens.iter().position(|t| t.is(token_type))
}

/// Removes every delimiter token in place. The order of the remaining tokens is kept.
pub fn clean_delimiters(tokens: &mut Vec<Token>) -> &mut Vec<Token> {
    tokens.retain(|t| !t.is_delimiter());
    tokens
}

/// Asserts that the tokens start with the given types. Only call this when a match is expected;
/// the error points at the first token that differs.
pub fn match_structure(tokens: &[Token], structure: &[TokenType]) -> ParseResult<()> {
    for (i, expected) in structure.iter().enumerate() {
        match tokens.get(i) {
            Some(t) if t.is(expected) => {}
            Some(t) => return Err(t.error(ErrorKind::StructuralMismatch)),
            None => {
                return Err(match tokens.last() {
                    Some(t) => t.error(ErrorKind::UnexpectedEndOfInput),
                    None => ParseError::detached(ErrorKind::UnexpectedEndOfInput),
                })
            }
        }
    }

    Ok(())
}

/// Scans for the end of a statement: stops right after the first semicolon or right before a
/// brace-open. Returns the number of tokens that make up the statement.
pub(crate) fn scan_to_terminator(tokens: &[Token]) -> ParseResult<usize> {
    let mut position = 1;
    while position < tokens.len()
        && !tokens[position - 1].is_semicolon()
        && !tokens[position].is_brace_open()
    {
        position += 1;
    }

    if position == tokens.len() {
        match tokens.last() {
            Some(t) if t.is_semicolon() => {}
            Some(t) => return Err(t.error(ErrorKind::UnexpectedEndOfInput)),
            None => return Err(ParseError::detached(ErrorKind::UnexpectedEndOfInput)),
        }
    }

    Ok(position)
}

/// Returns the position of the brace-close matching the brace-open at `open`
pub(crate) fn find_matching_brace(tokens: &[Token], open: usize) -> ParseResult<usize> {
    let mut opens = 1;

    for (position, t) in tokens.iter().enumerate().skip(open + 1) {
        if t.is_brace_open() {
            opens += 1;
        }
        if t.is_brace_close() {
            opens -= 1;
            if opens == 0 {
                return Ok(position);
            }
        }
    }

    Err(match tokens.last() {
        Some(t) => t.error(ErrorKind::UnmatchedBrace),
        None => ParseError::detached(ErrorKind::UnmatchedBrace),
    })
}

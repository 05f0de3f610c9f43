//! Minimal tokenizer for fixtures, benches and the command line front end.
//!
//! The parser itself never looks at characters. This tokenizer only exists so token sequences
//! don't have to be written out by hand; it knows nothing about CSS beyond the handful of
//! characters the parser cares about.
use crate::token::{Token, TokenType};
use cssnest_shared::source::SourceRef;

fn single_char_type(c: char) -> Option<TokenType> {
    match c {
        '@' => Some(TokenType::At),
        '{' => Some(TokenType::BraceOpen),
        '}' => Some(TokenType::BraceClose),
        ';' => Some(TokenType::Semicolon),
        ':' => Some(TokenType::Colon),
        ',' => Some(TokenType::Comma),
        '(' => Some(TokenType::ParenthesisOpen),
        ')' => Some(TokenType::ParenthesisClose),
        _ => None,
    }
}

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && single_char_type(c).is_none() && c != '"' && c != '\''
}

/// Splits `source` into tokens bound to a fresh source handle
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_source(&SourceRef::new(source))
}

/// Splits the text behind `source_ref` into tokens
pub fn tokenize_source(source_ref: &SourceRef) -> Vec<Token> {
    let chars: Vec<char> = source_ref.source().chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let start = i;
        let c = chars[i];

        let token_type = if c.is_whitespace() {
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            TokenType::Delimiter
        } else if let Some(t) = single_char_type(c) {
            i += 1;
            t
        } else if c == '"' || c == '\'' {
            i += 1;
            while i < chars.len() && chars[i] != c {
                if chars[i] == '\\' {
                    i += 1;
                }
                i += 1;
            }
            // closing quote, when there is one
            i = (i + 1).min(chars.len());
            TokenType::QuotedString
        } else {
            while i < chars.len() && is_word_char(chars[i]) {
                i += 1;
            }
            TokenType::Word
        };

        let text: String = chars[start..i].iter().collect();
        tokens.push(Token::new(token_type, &text, start, source_ref));
    }

    tokens
}

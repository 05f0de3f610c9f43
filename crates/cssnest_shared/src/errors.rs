//! Error results that can be returned from the cssnest parser
use crate::source::{Excerpt, Highlight, SourceRef};
use thiserror::Error;

/// Cause of a failed parse. Every kind is fatal: the whole parse call is aborted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A forward scan for a terminator ran past the available tokens
    #[error("unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A token's type did not match the type required at that position
    #[error("unexpected token.")]
    StructuralMismatch,
    /// An at-rule name was not followed by a value
    #[error("expected expression")]
    ExpectedExpression,
    /// A brace-open has no matching brace-close
    #[error("invalid nesting. No closing token was found")]
    UnmatchedBrace,
    /// No recognizer could make progress on the current token
    #[error("unknown token")]
    UnknownToken,
    /// Blocks are nested deeper than the configured maximum
    #[error("nesting too deep")]
    NestingTooDeep,
}

/// Parser error that defines an error (kind) on the given position, together with the
/// surrounding source text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Parse error, {kind}\nAt {index}\n\"{excerpt}\"")]
pub struct ParseError {
    /// What went wrong
    pub kind: ErrorKind,
    /// Character offset of the offending token in the original source
    pub index: usize,
    /// Source text of the offending token
    pub token: String,
    /// Window of source text around the offending token
    pub excerpt: Excerpt,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ErrorKind, index: usize, token: &str, source: &SourceRef) -> Self {
        Self {
            kind,
            index,
            token: token.to_string(),
            excerpt: source.excerpt(index),
        }
    }

    /// An error without any token to point at (only possible on empty input)
    #[must_use]
    pub fn detached(kind: ErrorKind) -> Self {
        Self {
            kind,
            index: 0,
            token: String::new(),
            excerpt: Excerpt::default(),
        }
    }

    /// Renders the full error message with the offending character marked in the given style
    #[must_use]
    pub fn render(&self, highlight: Highlight) -> String {
        format!(
            "Parse error, {}\nAt {}\n\"{}\"",
            self.kind,
            self.index,
            self.excerpt.render(highlight)
        )
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

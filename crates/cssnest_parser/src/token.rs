use cssnest_shared::errors::{ErrorKind, ParseError};
use cssnest_shared::source::SourceRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag of a token, as produced by the external tokenizer
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
    Word,
    /// Insignificant whitespace
    Delimiter,
    Semicolon,
    Colon,
    Comma,
    /// The `@` marker. The at-rule name follows as a separate `Word`.
    At,
    BraceOpen,
    BraceClose,
    ParenthesisOpen,
    ParenthesisClose,
    /// A quoted string, quotes included in the token source
    #[serde(rename = "string")]
    QuotedString,
    /// Any other tag the tokenizer emits. The parser never looks inside these.
    #[serde(untagged)]
    Other(String),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    /// Type of the token
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Exact text this token spans
    pub source: String,
    /// Character offset of the token in the original source
    pub index: usize,
    /// The original source, used for error excerpts only
    #[serde(skip)]
    pub source_ref: SourceRef,
}

impl Token {
    pub fn new(token_type: TokenType, source: &str, index: usize, source_ref: &SourceRef) -> Token {
        Token {
            token_type,
            source: source.to_string(),
            index,
            source_ref: source_ref.clone(),
        }
    }

    pub fn is(&self, token_type: &TokenType) -> bool {
        &self.token_type == token_type
    }

    pub fn is_delimiter(&self) -> bool {
        matches!(self.token_type, TokenType::Delimiter)
    }

    pub fn is_semicolon(&self) -> bool {
        matches!(self.token_type, TokenType::Semicolon)
    }

    pub fn is_comma(&self) -> bool {
        matches!(self.token_type, TokenType::Comma)
    }

    pub fn is_at(&self) -> bool {
        matches!(self.token_type, TokenType::At)
    }

    pub fn is_brace_open(&self) -> bool {
        matches!(self.token_type, TokenType::BraceOpen)
    }

    pub fn is_brace_close(&self) -> bool {
        matches!(self.token_type, TokenType::BraceClose)
    }

    /// Returns an error of the given kind pointing at this token
    pub fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.index, &self.source, &self.source_ref)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// A token as it is exchanged with external tokenizers (JSON), without the source handle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawToken {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub source: String,
    pub index: usize,
}

impl RawToken {
    /// Binds the raw token to the source it was produced from
    pub fn attach(self, source_ref: &SourceRef) -> Token {
        Token {
            token_type: self.token_type,
            source: self.source,
            index: self.index,
            source_ref: source_ref.clone(),
        }
    }
}

/// Reads a JSON array of raw tokens and binds them to the given source
pub fn tokens_from_json(json: &str, source_ref: &SourceRef) -> serde_json::Result<Vec<Token>> {
    let raw: Vec<RawToken> = serde_json::from_str(json)?;

    Ok(raw.into_iter().map(|t| t.attach(source_ref)).collect())
}

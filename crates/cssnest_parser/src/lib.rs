//! Recursive descent parser for CSS-like token sequences.
//!
//! The parser takes the tokens of an external tokenizer and builds a nested tree of blocks,
//! bare at-rules and statements. It does not look at characters and does not validate
//! property names or values. Any structural problem aborts the whole parse.
use crate::node::Node;
use crate::parser_config::ParserConfig;
use crate::token::Token;

use cssnest_shared::errors::ParseResult;

pub mod cursor;
pub mod node;
pub mod parser;
pub mod parser_config;
pub mod testing;
pub mod token;
pub mod walker;

pub struct CssNest<'t> {
    /// The complete token sequence given to the top level parse call
    tokens: &'t [Token],
    /// Position of the next token to consume
    position: usize,
    /// End (exclusive) of the token range this parser works on
    end: usize,
    /// Number of blocks this parser is nested in
    depth: usize,
    /// The parser configuration as given
    config: &'t ParserConfig,
    /// Nodes found so far, in source order
    ast: Vec<Node>,
}

impl<'t> CssNest<'t> {
    fn new(tokens: &'t [Token], config: &'t ParserConfig) -> Self {
        Self::nested(tokens, 0, tokens.len(), 0, config)
    }

    /// Creates a parser for the tokens between `start` and `end` only. Node spans keep pointing
    /// into the complete token sequence.
    fn nested(
        tokens: &'t [Token],
        start: usize,
        end: usize,
        depth: usize,
        config: &'t ParserConfig,
    ) -> Self {
        Self {
            tokens,
            position: start,
            end,
            depth,
            config,
            ast: Vec::new(),
        }
    }
}

/// Parses a token sequence with the default configuration
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Node>> {
    parse_with_config(tokens, &ParserConfig::default())
}

/// Parses a token sequence into a list of top level nodes. The tokens are not modified.
pub fn parse_with_config(tokens: &[Token], config: &ParserConfig) -> ParseResult<Vec<Node>> {
    log::debug!(
        "parsing {} tokens from {}",
        tokens.len(),
        config.source.as_deref().unwrap_or("<unknown>")
    );

    CssNest::new(tokens, config).parse_tokens()
}

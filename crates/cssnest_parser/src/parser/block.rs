use crate::cursor::{find_first_index, find_matching_brace};
use crate::node::{BlockHeader, Node, NodeType, Span};
use crate::parser::selector_list::parse_selector_list;
use crate::token::{Token, TokenType};
use crate::CssNest;
use cssnest_shared::errors::{ErrorKind, ParseResult};

impl<'t> CssNest<'t> {
    /// Consumes every block in the remaining tokens, including whatever precedes each opening
    /// brace. Does nothing when there is no opening brace left.
    pub(crate) fn parse_block(&mut self) -> ParseResult<()> {
        log::trace!("parse_block");

        loop {
            let remaining = self.remaining();
            let Some(open) = find_first_index(remaining, &TokenType::BraceOpen) else {
                return Ok(());
            };
            let close = find_matching_brace(remaining, open)?;

            let content = self.parse_block_content(
                self.position + open + 1,
                self.position + close,
                &remaining[open],
            )?;
            let header = parse_block_header(&remaining[..open])?;

            let span = Span::new(self.position, self.position + close + 1);
            log::debug!("block {:?} spanning tokens {:?}", header, span);

            self.ast
                .push(Node::new(NodeType::Block { header, content }, span));
            self.position += close + 1;
        }
    }

    /// Parses the tokens between a pair of braces as a complete, nested token sequence
    fn parse_block_content(
        &self,
        start: usize,
        end: usize,
        brace: &Token,
    ) -> ParseResult<Vec<Node>> {
        if self.depth >= self.config.max_nesting_depth {
            return Err(brace.error(ErrorKind::NestingTooDeep));
        }

        CssNest::nested(self.tokens, start, end, self.depth + 1, self.config).parse_tokens()
    }
}

/// A header holding an at-rule marker names the at-rule, anything else is a selector list
fn parse_block_header(tokens: &[Token]) -> ParseResult<BlockHeader> {
    let Some(at) = find_first_index(tokens, &TokenType::At) else {
        return Ok(BlockHeader::Selectors(
            parse_selector_list(tokens).unwrap_or_default(),
        ));
    };

    match tokens.get(at + 1) {
        Some(name) => Ok(BlockHeader::Kind(name.source.clone())),
        None => Err(tokens[at].error(ErrorKind::UnexpectedEndOfInput)),
    }
}

use crate::cursor::{clean_delimiters, match_structure, scan_to_terminator};
use crate::node::{Node, NodeType, Span};
use crate::token::TokenType;
use crate::CssNest;
use cssnest_shared::errors::{ErrorKind, ParseResult};

/// Smallest at-rule: marker, name, delimiter and terminator
const MIN_AT_RULE_TOKENS: usize = 4;

impl CssNest<'_> {
    /// Consumes a bare at-rule (`@import url("fonts.css");`). Does nothing unless the remaining
    /// tokens start with an `@` marker directly followed by a name.
    pub(crate) fn parse_at_rule(&mut self) -> ParseResult<()> {
        let remaining = self.remaining();
        if !remaining.first().is_some_and(|t| t.is_at()) {
            return Ok(());
        }
        if !remaining.get(1).is_some_and(|t| t.is(&TokenType::Word)) {
            return Ok(());
        }

        log::trace!("parse_at_rule");

        let end = scan_to_terminator(remaining)?;
        if end < MIN_AT_RULE_TOKENS {
            return Err(remaining[end - 1].error(ErrorKind::UnexpectedEndOfInput));
        }

        match_structure(
            remaining,
            &[TokenType::At, TokenType::Word, TokenType::Delimiter],
        )?;

        let mut child_tokens = remaining[..end].to_vec();
        clean_delimiters(&mut child_tokens);

        // the name must be followed by a value
        match child_tokens.get(2) {
            Some(t) if !t.is_semicolon() => {}
            Some(t) => return Err(t.error(ErrorKind::ExpectedExpression)),
            None => return Err(remaining[end - 1].error(ErrorKind::ExpectedExpression)),
        }

        let span = Span::new(self.position, self.position + end);
        log::debug!("at-rule @{} spanning tokens {:?}", child_tokens[1], span);

        self.ast.push(Node::new(NodeType::At { child_tokens }, span));
        self.position += end;

        Ok(())
    }
}

use crate::cursor::{clean_delimiters, scan_to_terminator};
use crate::node::{Node, NodeType, Span};
use crate::CssNest;
use cssnest_shared::errors::{ErrorKind, ParseResult};

impl CssNest<'_> {
    /// Consumes a `property: value;` statement. A lone trailing delimiter is consumed without
    /// producing a node.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<()> {
        let remaining = self.remaining();
        let Some(first) = remaining.first() else {
            return Ok(());
        };

        if remaining.len() == 1 && first.is_delimiter() {
            self.position += 1;
            return Ok(());
        }

        // left for the other recognizers, or for the unknown token check
        if first.is_at() || first.is_brace_open() || first.is_brace_close() {
            return Ok(());
        }

        log::trace!("parse_statement");

        let end = scan_to_terminator(remaining)?;

        let mut tokens = remaining[..end].to_vec();
        clean_delimiters(&mut tokens);
        if tokens.last().is_some_and(|t| t.is_semicolon()) {
            tokens.pop();
        }

        let Some(property) = tokens.first().map(|t| t.source.clone()) else {
            return Err(remaining[end - 1].error(ErrorKind::StructuralMismatch));
        };
        // skip the property and its separator
        let value_tokens = tokens.into_iter().skip(2).collect();

        let span = Span::new(self.position, self.position + end);
        log::debug!("statement {} spanning tokens {:?}", property, span);

        self.ast.push(Node::new(
            NodeType::Statement {
                property,
                value_tokens,
            },
            span,
        ));
        self.position += end;

        Ok(())
    }
}

use crate::node::Node;
use crate::token::Token;
use crate::CssNest;
use cssnest_shared::errors::{ErrorKind, ParseResult};

mod at_rule;
mod block;
pub mod selector_list;
mod statement;

type Recognizer<'t> = fn(&mut CssNest<'t>) -> ParseResult<()>;

impl<'t> CssNest<'t> {
    /// Recognizers in the order they are offered the remaining tokens. Blocks go first since an
    /// at-rule may open a block as well.
    const RECOGNIZERS: [Recognizer<'t>; 3] = [
        CssNest::parse_block,
        CssNest::parse_at_rule,
        CssNest::parse_statement,
    ];

    /// Runs the recognizers until all tokens are consumed
    pub(crate) fn parse_tokens(mut self) -> ParseResult<Vec<Node>> {
        log::trace!("parse_tokens (depth {})", self.depth);

        while !self.eof() {
            let before = self.position;

            for recognizer in Self::RECOGNIZERS {
                if self.eof() {
                    break;
                }
                recognizer(&mut self)?;
            }

            if self.position == before {
                return Err(self.tokens[self.position].error(ErrorKind::UnknownToken));
            }
        }

        Ok(self.ast)
    }

    /// Tokens that are not consumed yet
    pub(crate) fn remaining(&self) -> &'t [Token] {
        &self.tokens[self.position..self.end]
    }

    pub(crate) fn eof(&self) -> bool {
        self.position >= self.end
    }
}

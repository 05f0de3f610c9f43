use crate::token::Token;
use serde::Serialize;

/// Half-open range of input token indices a node was built from. Indices always refer to the
/// token sequence handed to the top-level parse call, also for nodes inside nested blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// What precedes the braces of a block
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockHeader {
    /// At-rule with a body, holds the name following the `@` marker (`media`, `keyframes`)
    Kind(String),
    /// Style rule, holds the trimmed selectors
    Selectors(Vec<String>),
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeType {
    Block {
        #[serde(flatten)]
        header: BlockHeader,
        content: Vec<Node>,
    },
    /// At-rule without a body. The tokens are kept as-is, the value is never interpreted.
    At {
        #[serde(rename = "childTokens")]
        child_tokens: Vec<Token>,
    },
    Statement {
        property: String,
        #[serde(rename = "valueTokens")]
        value_tokens: Vec<Token>,
    },
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub node_type: NodeType,
    pub span: Span,
}

impl Node {
    pub fn new(node_type: NodeType, span: Span) -> Self {
        Self { node_type, span }
    }

    pub fn is_block(&self) -> bool {
        matches!(self.node_type, NodeType::Block { .. })
    }

    pub fn is_at(&self) -> bool {
        matches!(self.node_type, NodeType::At { .. })
    }

    pub fn is_statement(&self) -> bool {
        matches!(self.node_type, NodeType::Statement { .. })
    }

    /// Returns the at-rule name of a block, if this is an at-rule block
    pub fn kind(&self) -> Option<&str> {
        match &self.node_type {
            NodeType::Block {
                header: BlockHeader::Kind(kind),
                ..
            } => Some(kind),
            _ => None,
        }
    }

    /// Returns the selectors of a block, if this is a style rule
    pub fn selectors(&self) -> Option<&[String]> {
        match &self.node_type {
            NodeType::Block {
                header: BlockHeader::Selectors(selectors),
                ..
            } => Some(selectors),
            _ => None,
        }
    }

    /// Returns the nested nodes of a block. Other nodes have no content.
    pub fn content(&self) -> &[Node] {
        match &self.node_type {
            NodeType::Block { content, .. } => content,
            _ => &[],
        }
    }

    /// Number of block levels below and including this node
    pub fn depth(&self) -> usize {
        match &self.node_type {
            NodeType::Block { content, .. } => {
                1 + content.iter().map(Node::depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }
}

use crate::node::{BlockHeader, Node, NodeType};
use itertools::Itertools;
use std::io::Write;

/// The walker is used to walk the AST and print it to stdout.
pub struct Walker<'a> {
    root: &'a [Node],
}

impl<'a> Walker<'a> {
    pub fn new(root: &'a [Node]) -> Self {
        Self { root }
    }

    pub fn walk_stdout(&self) {
        let _ = self.walk(&mut std::io::stdout());
    }

    pub fn walk_to_string(&self) -> String {
        let mut output: Vec<u8> = Vec::new();

        let _ = self.walk(&mut output);

        String::from_utf8_lossy(&output).into_owned()
    }

    pub fn walk(&self, f: &mut dyn Write) -> Result<(), std::io::Error> {
        for node in self.root {
            inner_walk(node, 0, f)?;
        }
        Ok(())
    }
}

fn inner_walk(node: &Node, depth: usize, f: &mut dyn Write) -> Result<(), std::io::Error> {
    let prefix = " ".repeat(depth * 2);

    match &node.node_type {
        NodeType::Block { header, content } => {
            match header {
                BlockHeader::Kind(kind) => writeln!(f, "{}[Block] kind: {}", prefix, kind)?,
                BlockHeader::Selectors(selectors) => writeln!(
                    f,
                    "{}[Block] selectors: {}",
                    prefix,
                    selectors.join(", ")
                )?,
            }
            for child in content {
                inner_walk(child, depth + 1, f)?;
            }
        }
        NodeType::At { child_tokens } => {
            // marker and name stick together, the value follows after a space
            let name = child_tokens.iter().take(2).map(|t| &t.source).join("");
            let value = child_tokens.iter().skip(2).map(|t| &t.source).join("");
            writeln!(f, "{}[At] {} {}", prefix, name, value)?;
        }
        NodeType::Statement {
            property,
            value_tokens,
        } => {
            writeln!(
                f,
                "{}[Statement] property: {} value: {}",
                prefix,
                property,
                value_tokens.iter().map(|t| &t.source).join(" ")
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use crate::testing::tokenize;

    #[test]
    fn walks_nested_blocks() {
        let tokens = tokenize("@media screen { a, b { x: 1 2; } } c { }");
        let ast = parse(&tokens).unwrap();

        assert_eq!(
            Walker::new(&ast).walk_to_string(),
            "[Block] kind: media\n  [Block] selectors: a, b\n    [Statement] property: x value: 1 2\n[Block] selectors: c\n"
        );
    }

    #[test]
    fn walks_nothing() {
        assert_eq!(Walker::new(&[]).walk_to_string(), "");
    }
}

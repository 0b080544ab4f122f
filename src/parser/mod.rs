pub mod literal;

use thiserror::Error;
use tree_sitter::{Node, Parser, Tree};

/// Syntax failure reported by [`parse`]. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description}")]
pub struct ParseError {
    pub description: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl ParseError {
    fn without_position(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            line: None,
            column: None,
        }
    }
}

/// A syntax-tree element copied out of the tree: its grammar kind, raw
/// source text and 1-based start position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNode {
    pub kind: &'static str,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

/// A successfully parsed JavaScript source.
pub struct SourceTree<'a> {
    tree: Tree,
    source: &'a str,
}

/// Parse JavaScript (JSX included). Any error or missing node in the tree
/// fails the whole parse.
pub fn parse(source: &str) -> Result<SourceTree<'_>, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_javascript::LANGUAGE.into())
        .map_err(|e| ParseError::without_position(format!("Failed to load grammar: {e}")))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParseError::without_position("Parser produced no syntax tree"))?;

    if let Some(err) = first_error(tree.root_node()).map(|node| error_at(node, source)) {
        return Err(err);
    }

    Ok(SourceTree { tree, source })
}

impl<'a> SourceTree<'a> {
    /// All nodes whose kind is one of `kinds`, in pre-order.
    pub fn nodes_of_kind(&self, kinds: &[&str]) -> Vec<SourceNode> {
        self.collect(|node| kinds.contains(&node.kind()))
    }

    /// Every comment, line and block, in document order.
    pub fn comments(&self) -> Vec<SourceNode> {
        self.collect(|node| node.kind() == "comment")
    }

    fn collect<F>(&self, keep: F) -> Vec<SourceNode>
    where
        F: Fn(&Node) -> bool,
    {
        let mut nodes = Vec::new();
        let mut cursor = self.tree.walk();

        loop {
            let node = cursor.node();
            if keep(&node) {
                if let Some(source_node) = self.source_node(node) {
                    nodes.push(source_node);
                }
            }

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return nodes;
                }
            }
        }
    }

    fn source_node(&self, node: Node) -> Option<SourceNode> {
        let text = node.utf8_text(self.source.as_bytes()).ok()?;
        let start = node.start_position();
        Some(SourceNode {
            kind: node.kind(),
            text: text.to_string(),
            line: start.row + 1,
            column: start.column + 1,
        })
    }
}

/// First error or missing node in document order.
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn error_at(node: Node, source: &str) -> ParseError {
    let start = node.start_position();
    let description = if node.is_missing() {
        format!("Missing {}", node.kind())
    } else {
        let token = first_leaf(node)
            .utf8_text(source.as_bytes())
            .unwrap_or("")
            .lines()
            .next()
            .unwrap_or("")
            .trim();
        if token.is_empty() {
            "Unexpected end of input".to_string()
        } else {
            format!("Unexpected token {token}")
        }
    };

    ParseError {
        description,
        line: Some(start.row + 1),
        column: Some(start.column + 1),
    }
}

fn first_leaf(mut node: Node) -> Node {
    while let Some(child) = node.child(0) {
        node = child;
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_in_order() {
        let tree = parse("var first = second.third;\nfunction fourth(fifth) {}").unwrap();
        let nodes = tree.nodes_of_kind(&["identifier", "property_identifier"]);
        let names: Vec<_> = nodes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third", "fourth", "fifth"]);
        assert_eq!(nodes[0].line, 1);
        assert_eq!(nodes[0].column, 5);
        assert_eq!(nodes[3].line, 2);
    }

    #[test]
    fn test_strings_and_comments() {
        let source = "// line one\nvar s = \"text\"; /* block */\nvar n = 42;";
        let tree = parse(source).unwrap();

        let strings = tree.nodes_of_kind(&["string"]);
        assert_eq!(strings.len(), 1);
        assert_eq!(strings[0].text, "\"text\"");
        assert_eq!(strings[0].line, 2);

        let comments = tree.comments();
        let texts: Vec<_> = comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["// line one", "/* block */"]);
    }

    #[test]
    fn test_hash_bang_is_valid() {
        let tree = parse("#!/usr/bin/env node\nvar x = 1;").unwrap();
        assert!(tree.comments().is_empty());
    }

    #[test]
    fn test_invalid_syntax() {
        let err = parse("#/env/node index.js").err().unwrap();
        assert_eq!(err.line, Some(1));
        assert!(!err.description.is_empty());
    }

    #[test]
    fn test_error_line() {
        let err = parse("var ok = 1;\nvar = ;\n").err().unwrap();
        assert_eq!(err.line, Some(2));
    }
}

use super::tokenizer::normalize;
use super::CheckContext;
use crate::parser::literal::string_value;
use crate::parser::{SourceNode, SourceTree};
use crate::{CheckKind, CheckResult};
use colored::*;

const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "property_identifier",
    "shorthand_property_identifier",
    "shorthand_property_identifier_pattern",
    "statement_identifier",
    "private_property_identifier",
];

const STRING_KINDS: &[&str] = &["string"];

/// How a checker finds its nodes in a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Kinds(&'static [&'static str]),
    Comments,
}

/// Per-category checking policy: node selection, text extraction, node
/// filtering and result formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeChecker {
    Identifier,
    StringLiteral,
    Comment,
}

impl NodeChecker {
    pub fn for_kind(kind: CheckKind) -> Self {
        match kind {
            CheckKind::Identifier => NodeChecker::Identifier,
            CheckKind::String => NodeChecker::StringLiteral,
            CheckKind::Comment => NodeChecker::Comment,
        }
    }

    pub fn kind(self) -> CheckKind {
        match self {
            NodeChecker::Identifier => CheckKind::Identifier,
            NodeChecker::StringLiteral => CheckKind::String,
            NodeChecker::Comment => CheckKind::Comment,
        }
    }

    pub fn selector(self) -> Selector {
        match self {
            NodeChecker::Identifier => Selector::Kinds(IDENTIFIER_KINDS),
            NodeChecker::StringLiteral => Selector::Kinds(STRING_KINDS),
            NodeChecker::Comment => Selector::Comments,
        }
    }

    pub fn select(self, tree: &SourceTree) -> Vec<SourceNode> {
        match self.selector() {
            Selector::Kinds(kinds) => tree.nodes_of_kind(kinds),
            Selector::Comments => tree.comments(),
        }
    }

    /// Text to split into words, or `None` when the node carries no text
    /// this checker handles (non-string literals, block comments).
    pub fn extract_text(self, node: &SourceNode) -> Option<String> {
        match self {
            NodeChecker::Identifier => Some(node.text.clone()),
            NodeChecker::StringLiteral => string_value(&node.text),
            NodeChecker::Comment => node.text.strip_prefix("//").map(str::to_string),
        }
    }

    /// A node is skipped entirely when any of its words is exempt;
    /// identifiers are also skipped when their whole name is.
    pub fn should_check(self, raw: &str, words: &[String], ctx: &CheckContext) -> bool {
        if self == NodeChecker::Identifier && ctx.skip_words.is_exempt_whole(raw) {
            return false;
        }
        !ctx.skip_words.intersects(words)
    }

    pub fn check(self, node: &SourceNode, ctx: &CheckContext) -> Vec<CheckResult> {
        let Some(raw) = self.extract_text(node) else {
            return Vec::new();
        };
        let words = normalize(&raw);
        if !self.should_check(&raw, &words, ctx) {
            return Vec::new();
        }

        let display = raw.trim();
        words
            .iter()
            .filter(|word| word.chars().count() >= ctx.settings.min_length)
            .filter_map(|word| {
                if !ctx.dictionary.check(word) {
                    Some(self.error_for(node, display, word, ctx.settings.color))
                } else if ctx.settings.show_successes {
                    Some(self.success_for(node, display, word))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Check every node this checker selects, in tree order.
    pub fn check_tree(self, tree: &SourceTree, ctx: &CheckContext) -> Vec<CheckResult> {
        self.select(tree)
            .iter()
            .flat_map(|node| self.check(node, ctx))
            .collect()
    }

    fn error_for(self, node: &SourceNode, display: &str, word: &str, color: bool) -> CheckResult {
        let label = self.kind().label();
        let mut message = if color {
            let label = match self {
                NodeChecker::Identifier => label.cyan(),
                NodeChecker::StringLiteral => label.green(),
                NodeChecker::Comment => label.yellow(),
            };
            format!("You have a misspelled {} {}", label, display.bold())
        } else {
            format!("You have a misspelled {} {}", label, display)
        };
        if display != word {
            if color {
                message.push_str(&format!(" misspelled: {}", word.bold()));
            } else {
                message.push_str(&format!(" misspelled: {}", word));
            }
        }

        CheckResult {
            misspelled: true,
            message,
            ..self.result_for(node, display, word)
        }
    }

    fn success_for(self, node: &SourceNode, display: &str, word: &str) -> CheckResult {
        CheckResult {
            message: "No misspelled word".to_string(),
            ..self.result_for(node, display, word)
        }
    }

    fn result_for(self, node: &SourceNode, display: &str, word: &str) -> CheckResult {
        CheckResult {
            kind: Some(self.kind()),
            word: word.to_string(),
            text: display.to_string(),
            line: Some(node.line),
            misspelled: false,
            message: String::new(),
        }
    }
}

pub mod dictionary;
pub mod globals;
pub mod node;
pub mod skip_words;
pub mod tokenizer;

use crate::parser::{self, ParseError};
use crate::{CheckKind, CheckResult, Config};
use anyhow::{Context, Result};
use colored::*;
use dictionary::Dictionary;
use node::NodeChecker;
use skip_words::SkipSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Options chosen once per [`SpellChecker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    /// Checkers to run, in order.
    pub checkers: Vec<CheckKind>,
    /// Words shorter than this are never reported.
    pub min_length: usize,
    /// Also report recognized words.
    pub show_successes: bool,
    /// Exempt words on top of the built-in skip list.
    pub skip_words: Vec<String>,
    /// Colorize messages for a terminal.
    pub color: bool,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            checkers: CheckKind::ALL.to_vec(),
            min_length: 0,
            show_successes: false,
            skip_words: Vec::new(),
            color: false,
        }
    }
}

/// Read-only state shared by the node checkers during one check.
pub struct CheckContext<'a> {
    pub dictionary: &'a Dictionary,
    pub skip_words: &'a SkipSet,
    pub settings: &'a CheckSettings,
}

pub struct SpellChecker {
    dictionary: Dictionary,
    skip_words: SkipSet,
    settings: CheckSettings,
    checkers: Vec<NodeChecker>,
}

impl SpellChecker {
    /// Checker with the built-in skip list extended by `settings.skip_words`.
    pub fn new(settings: CheckSettings, dictionary: Dictionary) -> Self {
        let skip_words = SkipSet::builtin().with_words(&settings.skip_words);
        Self::with_skip_words(settings, dictionary, skip_words)
    }

    /// Checker with an explicit skip set; `settings.skip_words` is not
    /// consulted.
    pub fn with_skip_words(settings: CheckSettings, dictionary: Dictionary, skip_words: SkipSet) -> Self {
        let mut checkers: Vec<NodeChecker> = Vec::new();
        for kind in &settings.checkers {
            let checker = NodeChecker::for_kind(*kind);
            if !checkers.contains(&checker) {
                checkers.push(checker);
            }
        }

        Self {
            dictionary,
            skip_words,
            settings,
            checkers,
        }
    }

    /// Build from a loaded [`Config`]; fails when a dictionary can't be read.
    pub fn from_config(config: &Config) -> Result<Self> {
        let dictionary = config.dictionary()?;
        Ok(Self::new(config.settings(), dictionary))
    }

    /// Check JavaScript source text. A source that doesn't parse yields a
    /// single result describing the failure instead of an error.
    pub fn check_source(&self, source: &str) -> Vec<CheckResult> {
        let tree = match parser::parse(source) {
            Ok(tree) => tree,
            Err(err) => {
                debug!(line = ?err.line, "parse failed: {}", err.description);
                return vec![self.parse_failure(&err)];
            }
        };

        let ctx = CheckContext {
            dictionary: &self.dictionary,
            skip_words: &self.skip_words,
            settings: &self.settings,
        };

        let mut results = Vec::new();
        for checker in &self.checkers {
            let found = checker.check_tree(&tree, &ctx);
            debug!(checker = %checker.kind(), results = found.len(), "checked tree");
            results.extend(found);
        }
        results
    }

    pub fn check_file(&self, path: &Path) -> Result<Vec<CheckResult>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(self.check_source(&content))
    }

    fn parse_failure(&self, err: &ParseError) -> CheckResult {
        let prefix = "Can't check spelling - parser error: ";
        let message = if self.settings.color {
            format!("{}{}", prefix.red().bold(), err.description)
        } else {
            format!("{}{}", prefix, err.description)
        };

        CheckResult {
            kind: None,
            word: String::new(),
            text: String::new(),
            line: err.line,
            misspelled: false,
            message,
        }
    }
}

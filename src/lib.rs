pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod parser;

pub use checker::{CheckSettings, SpellChecker};
pub use config::Config;
pub use error::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The syntactic categories words are extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Identifier,
    String,
    Comment,
}

impl CheckKind {
    pub const ALL: [CheckKind; 3] = [CheckKind::Identifier, CheckKind::String, CheckKind::Comment];

    /// Capitalized name used in messages.
    pub fn label(self) -> &'static str {
        match self {
            CheckKind::Identifier => "Identifier",
            CheckKind::String => "String",
            CheckKind::Comment => "Comment",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKind::Identifier => write!(f, "identifier"),
            CheckKind::String => write!(f, "string"),
            CheckKind::Comment => write!(f, "comment"),
        }
    }
}

/// One checked word, or the single synthetic entry produced for a source
/// that failed to parse (`kind` is `None` in that case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub kind: Option<CheckKind>,
    pub word: String,
    /// Display text of the node the word came from.
    pub text: String,
    pub line: Option<usize>,
    pub misspelled: bool,
    pub message: String,
}

use super::globals;
use std::collections::HashSet;

/// Jargon common enough in JavaScript sources to never be worth flagging.
const CURATED: &[&str] = &[
    "$http",
    "$httpBackend",
    "argc",
    "argv",
    "bool",
    "const",
    "ctrl",
    "dcl",
    "disney",
    "esprima",
    "esquery",
    "fs",
    "html",
    "http",
    "js",
    "jshint",
    "json",
    "lodash",
    "lint",
    "ng",
    "ngcookies",
    "nginject",
    "param",
    "ui",
    "url",
    "Vm",
    "vm",
    "wdpr",
    "_",
];

/// Case-insensitive set of words that are never reported.
#[derive(Debug, Clone, Default)]
pub struct SkipSet {
    words: HashSet<String>,
}

impl SkipSet {
    /// Curated jargon plus every known runtime and framework global.
    pub fn builtin() -> Self {
        Self::default().with_words(CURATED.iter().copied().chain(globals::all()))
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
        self
    }

    pub fn insert(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.words.insert(word.to_lowercase());
        }
    }

    /// Membership test for a single normalized word.
    pub fn is_exempt(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Membership test for an identifier's raw text, before it is split.
    pub fn is_exempt_whole(&self, raw: &str) -> bool {
        self.is_exempt(raw.trim())
    }

    /// True when any of `words` is exempt.
    pub fn intersects<S: AsRef<str>>(&self, words: &[S]) -> bool {
        words.iter().any(|w| self.is_exempt(w.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

use crate::error::{Error, Result};
use fst::Set;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// One dictionary input, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Hunspell affix rules plus the matching `.dic` word list.
    Hunspell { aff: String, dic: String },
    /// A word list without affix rules.
    WordList(String),
}

impl DictionarySource {
    /// Read a source from disk. Without an affix file the word list is taken
    /// as-is.
    pub fn read(aff: Option<&Path>, dic: &Path) -> Result<Self> {
        let dic = read_file(dic)?;
        match aff {
            Some(aff) => Ok(Self::Hunspell {
                aff: read_file(aff)?,
                dic,
            }),
            None => Ok(Self::WordList(dic)),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::DictionaryIo {
        path: path.to_path_buf(),
        source,
    })
}

/// Union of every configured source: a word is known if any source knows it.
pub struct Dictionary {
    hunspell: Vec<spellbook::Dictionary>,
    words: Set<Vec<u8>>,
}

impl Dictionary {
    /// Build the dictionary from its sources, in order.
    pub fn load(sources: Vec<DictionarySource>) -> Result<Self> {
        if sources.is_empty() {
            return Err(Error::NoDictionary);
        }

        let mut hunspell = Vec::new();
        let mut words = BTreeSet::new();

        for source in sources {
            match source {
                DictionarySource::Hunspell { aff, dic } => {
                    let dict = spellbook::Dictionary::new(&aff, &dic)
                        .map_err(|e| Error::DictionaryParse(e.to_string()))?;
                    hunspell.push(dict);
                }
                DictionarySource::WordList(text) => {
                    words.extend(parse_word_list(&text));
                }
            }
        }

        let words = Set::from_iter(words)?;
        info!(
            hunspell = hunspell.len(),
            words = words.len(),
            "loaded dictionaries"
        );

        Ok(Self { hunspell, words })
    }

    /// Dictionary backed only by the given words.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::load(vec![DictionarySource::WordList(text)])
    }

    /// Check if a word is recognized by any source
    pub fn check(&self, word: &str) -> bool {
        self.hunspell.iter().any(|dict| dict.check(word))
            || self.words.contains(word.to_lowercase().as_bytes())
    }
}

/// Entries of a plain or `.dic`-style word list: optional count header,
/// `/FLAGS` suffixes and `#` comments are ignored.
fn parse_word_list(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines().enumerate().filter_map(|(i, line)| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        if i == 0 && line.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let word = line.split('/').next().unwrap_or(line).trim();
        (!word.is_empty()).then(|| word.to_lowercase())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_word_list_dictionary() {
        let dict = Dictionary::from_words(["hello", "World", "test"]).unwrap();
        assert!(dict.check("hello"));
        assert!(dict.check("world"));
        assert!(dict.check("Test"));
        assert!(!dict.check("notfound"));
    }

    #[test]
    fn test_word_list_format() {
        let words: Vec<_> = parse_word_list("3\nalpha/MS\n# note\n\nBeta\n42\n").collect();
        assert_eq!(words, vec!["alpha", "beta", "42"]);
    }

    #[test]
    fn test_hunspell_source() {
        let dict = Dictionary::load(vec![DictionarySource::Hunspell {
            aff: "SET UTF-8\nSFX S Y 1\nSFX S 0 s .\n".to_string(),
            dic: "2\nvariable/S\nhello\n".to_string(),
        }])
        .unwrap();
        assert!(dict.check("variable"));
        assert!(dict.check("variables"));
        assert!(dict.check("hello"));
        assert!(!dict.check("variavle"));
    }

    #[test]
    fn test_sources_are_merged() {
        let dict = Dictionary::load(vec![
            DictionarySource::Hunspell {
                aff: "SET UTF-8\n".to_string(),
                dic: "1\nhello\n".to_string(),
            },
            DictionarySource::WordList("jquery\nlodash".to_string()),
            DictionarySource::WordList("treesitter".to_string()),
        ])
        .unwrap();
        assert!(dict.check("hello"));
        assert!(dict.check("lodash"));
        assert!(dict.check("treesitter"));
        assert!(!dict.check("world"));
    }

    #[test]
    fn test_no_sources_is_an_error() {
        assert!(matches!(Dictionary::load(Vec::new()), Err(Error::NoDictionary)));
    }

    #[test]
    fn test_read_from_disk() {
        let dir = tempdir().unwrap();
        let aff = dir.path().join("en.aff");
        let dic = dir.path().join("en.dic");
        fs::write(&aff, "SET UTF-8\n").unwrap();
        fs::write(&dic, "1\nspelling\n").unwrap();

        let source = DictionarySource::read(Some(&aff), &dic).unwrap();
        assert!(matches!(source, DictionarySource::Hunspell { .. }));
        let source = DictionarySource::read(None, &dic).unwrap();
        assert_eq!(source, DictionarySource::WordList("1\nspelling\n".to_string()));

        let missing = dir.path().join("missing.dic");
        let err = DictionarySource::read(None, &missing).unwrap_err();
        assert!(err.to_string().contains("missing.dic"));
    }
}

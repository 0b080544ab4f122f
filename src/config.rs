use crate::checker::dictionary::{Dictionary, DictionarySource};
use crate::checker::CheckSettings;
use crate::CheckKind;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".lintspell.toml";

/// A dictionary on disk: affix rules plus a word list, or a bare word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    #[serde(default)]
    pub aff: Option<PathBuf>,
    pub dic: PathBuf,
}

impl DictEntry {
    fn resolve(self, base: &Path) -> Self {
        Self {
            aff: self.aff.map(|aff| base.join(aff)),
            dic: base.join(self.dic),
        }
    }
}

/// Effective configuration after every layer is applied.
#[derive(Debug, Clone)]
pub struct Config {
    pub checkers: Vec<CheckKind>,
    pub min_length: usize,
    pub show_successes: bool,
    pub skip_words: Vec<String>,
    pub color: bool,
    pub dicts: Vec<DictEntry>,
}

/// One config file. Settings it doesn't mention are `None` and leave the
/// lower layers alone; `skip_words` accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLayer {
    pub checkers: Option<Vec<CheckKind>>,
    pub min_length: Option<usize>,
    pub show_successes: Option<bool>,
    #[serde(default)]
    pub skip_words: Vec<String>,
    pub color: Option<bool>,
    pub dicts: Option<Vec<DictEntry>>,
}

impl ConfigLayer {
    /// Parse a config file. Relative dictionary paths resolve against the
    /// file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut layer: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        layer.dicts = layer
            .dicts
            .map(|dicts| dicts.into_iter().map(|d| d.resolve(base)).collect());
        Ok(layer)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            checkers: CheckKind::ALL.to_vec(),
            min_length: 0,
            show_successes: false,
            skip_words: Vec::new(),
            color: true,
            dicts: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration with priority: local config > global config > defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            debug!(path = %local_path.display(), "loading local config");
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        if config.dicts.is_empty() {
            config.dicts = Self::default_dicts();
        }

        Ok(config)
    }

    pub fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(checkers) = layer.checkers {
            self.checkers = checkers;
        }
        if let Some(min_length) = layer.min_length {
            self.min_length = min_length;
        }
        if let Some(show_successes) = layer.show_successes {
            self.show_successes = show_successes;
        }
        self.skip_words.extend(layer.skip_words);
        if let Some(color) = layer.color {
            self.color = color;
        }
        if let Some(dicts) = layer.dicts {
            self.dicts = dicts;
        }
        self
    }

    pub fn settings(&self) -> CheckSettings {
        CheckSettings {
            checkers: self.checkers.clone(),
            min_length: self.min_length,
            show_successes: self.show_successes,
            skip_words: self.skip_words.clone(),
            color: self.color,
        }
    }

    /// Read and merge every configured dictionary.
    pub fn dictionary(&self) -> Result<Dictionary> {
        let sources = self
            .dicts
            .iter()
            .map(|entry| DictionarySource::read(entry.aff.as_deref(), &entry.dic))
            .collect::<crate::Result<Vec<_>>>()?;
        Dictionary::load(sources).context("Failed to load dictionaries")
    }

    fn default_dicts() -> Vec<DictEntry> {
        Self::data_dir()
            .map(|dir| DictEntry {
                aff: Some(dir.join("en_US.aff")),
                dic: dir.join("en_US.dic"),
            })
            .into_iter()
            .collect()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "lintspell").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "lintspell").map(|dirs| dirs.data_dir().to_path_buf())
    }
}

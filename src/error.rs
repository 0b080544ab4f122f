use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while building a checker. Spelling findings and parse failures
/// are never errors; they are reported as [`crate::CheckResult`]s.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read dictionary {}: {source}", .path.display())]
    DictionaryIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse dictionary: {0}")]
    DictionaryParse(String),

    #[error("No dictionary configured")]
    NoDictionary,

    #[error("Failed to build word list: {0}")]
    WordList(#[from] fst::Error),
}

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures at the edges of the game: files, directories and data loading.
///
/// The economy itself has no error paths; these only surface from the save
/// store, the sentence loader and logging setup.
#[derive(Debug, Error)]
pub enum ClickerError {
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save file {0} does not hold a JSON object")]
    NotAnObject(PathBuf),

    #[error("sentence list is empty")]
    EmptyCorpus,

    #[error("sentence {0} has no text to type")]
    EmptySentence(u32),
}

pub type Result<T> = std::result::Result<T, ClickerError>;

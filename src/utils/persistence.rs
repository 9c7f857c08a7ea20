//! JSON save file for the game state.
//!
//! [`SaveStore`] reports every failure as a [`ClickerError`]. The game itself
//! goes through [`restore_or_default`] and [`save_best_effort`], which log and
//! swallow those errors: an unreadable or unwritable save never stops play.

use crate::core::constants::{DATA_DIR_NAME, SAVE_FILE_NAME};
use crate::core::game_state::{GameState, Snapshot};
use crate::error::{ClickerError, Result};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Get the ~/.typing-clicker/ directory path, creating it if needed.
pub fn data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(ClickerError::NoHomeDir)?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store at ~/.typing-clicker/save.json.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(data_dir()?.join(SAVE_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot. A missing file is `Ok(None)`.
    pub fn load(&self) -> Result<Option<Snapshot>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<Value>(&json)? {
            Value::Object(snapshot) => Ok(Some(snapshot)),
            _ => Err(ClickerError::NotAnObject(self.path.clone())),
        }
    }

    /// Writes the snapshot through a temp file and an atomic rename.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let json = serde_json::to_string_pretty(snapshot)?;
        let mut temp_file = NamedTempFile::new_in(parent)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Starts from defaults and takes whatever the store holds.
///
/// Read or parse failures are logged and leave the defaults in place.
pub fn restore_or_default(store: &SaveStore) -> GameState {
    let mut state = GameState::new();
    match store.load() {
        Ok(Some(snapshot)) => {
            let applied = state.apply_snapshot(&snapshot);
            info!(path = %store.path().display(), applied, "save restored");
        }
        Ok(None) => debug!(path = %store.path().display(), "no save file, starting fresh"),
        Err(err) => warn!(path = %store.path().display(), %err, "ignoring unreadable save"),
    }
    state
}

/// Saves the state, logging instead of propagating failure.
///
/// Returns whether the write succeeded.
pub fn save_best_effort(store: &SaveStore, state: &GameState) -> bool {
    match store.save(&state.to_snapshot()) {
        Ok(()) => {
            info!(path = %store.path().display(), "game saved");
            true
        }
        Err(err) => {
            warn!(path = %store.path().display(), %err, "save failed, progress not written");
            false
        }
    }
}

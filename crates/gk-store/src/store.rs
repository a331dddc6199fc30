// store.rs — GoalStore: load/save a GoalCollection as one JSON file.
//
// The whole collection is rewritten on every save. That keeps the
// format trivially inspectable and matches the single-writer model:
// one load-mutate-save cycle per operation, arbitration left to the
// host.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use gk_core::{Goal, GoalCollection};

use crate::error::StoreError;

// On-disk envelope: {"goals": [...]}.
#[derive(Deserialize)]
struct StoreFile {
    #[serde(default)]
    goals: Vec<Goal>,
}

/// Handle to one goals file.
pub struct GoalStore {
    path: PathBuf,
}

impl GoalStore {
    /// Create a handle for the given file path. Nothing is touched on
    /// disk until [`load`](Self::load) or [`save`](Self::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection. A missing file is an empty collection, not
    /// an error — first run has nothing on disk yet.
    pub fn load(&self) -> Result<GoalCollection, StoreError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no goals file yet, starting empty");
            return Ok(GoalCollection::new());
        }
        let json = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let file: StoreFile = serde_json::from_str(&json)?;
        let collection = GoalCollection::from_goals(file.goals)?;
        tracing::debug!(
            path = %self.path.display(),
            goals = collection.len(),
            "loaded goals file"
        );
        Ok(collection)
    }

    /// Persist the collection, creating parent directories as needed.
    pub fn save(&self, collection: &GoalCollection) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(collection)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        tracing::debug!(
            path = %self.path.display(),
            goals = collection.len(),
            "saved goals file"
        );
        Ok(())
    }
}

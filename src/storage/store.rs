//! State document persistence.
//!
//! The whole application state is one JSON file. Reads never fail the app:
//! a missing, empty, or unparsable document is treated as "no prior data"
//! and replaced with zeroed defaults. Write failures are reported to the
//! caller, which logs and drops them.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::storage::config::get_data_dir;
use crate::storage::state::AppState;

/// Reads and writes the persisted state document.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the default platform data location.
    pub fn at_default_location() -> Self {
        Self::new(get_data_dir().join("state.json"))
    }

    /// The file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the state document, substituting defaults when it is missing or
    /// unreadable.
    pub fn load(&self) -> AppState {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("no saved state at {}, starting fresh", self.path.display());
                return AppState::default();
            }
            Err(err) => {
                tracing::warn!("failed to read saved state, starting fresh: {err}");
                return AppState::default();
            }
        };

        if content.trim().is_empty() {
            return AppState::default();
        }

        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!("saved state is unreadable, starting fresh: {err}");
                AppState::default()
            }
        }
    }

    /// Write the state document.
    pub fn save(&self, state: &AppState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content)?;

        tracing::debug!(
            workouts = state.workout_history.len(),
            "saved state to {}",
            self.path.display()
        );
        Ok(())
    }
}

/// Errors from the state store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to serialize the state document
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

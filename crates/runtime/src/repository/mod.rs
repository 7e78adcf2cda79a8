//! Repository contracts for saving and restoring planner state.
//!
//! Storage is an opaque key-value surface: the planner saves the full
//! selection (records included, so a restore needs no catalog round
//! trip) plus player stats under a caller-chosen key. The medium is the
//! implementation's choice.

mod file;
mod memory;

pub use file::FileBuildRepository;
pub use memory::MemoryBuildRepository;

use planner_core::{EquipmentSelection, PlayerStats};
use thiserror::Error;

/// What a repository persists per key.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StoredBuild {
    pub selection: EquipmentSelection,
    pub player_stats: PlayerStats,
}

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("build repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted build data: {0}")]
    CorruptedData(String),

    #[error("invalid build key `{0}`: keys are limited to [A-Za-z0-9._-]")]
    InvalidKey(String),

    #[error("no platform data directory available")]
    NoDataDir,
}

/// Key-value persistence for planner builds.
pub trait BuildRepository: Send + Sync {
    /// Save a build under a key, replacing any previous value.
    fn save(&self, key: &str, build: &StoredBuild) -> Result<(), RepositoryError>;

    /// Load the build stored under a key.
    fn load(&self, key: &str) -> Result<Option<StoredBuild>, RepositoryError>;

    /// Check whether a key has a stored build.
    fn exists(&self, key: &str) -> bool;

    /// Delete the build stored under a key.
    fn delete(&self, key: &str) -> Result<(), RepositoryError>;

    /// List all stored keys.
    fn list_keys(&self) -> Result<Vec<String>, RepositoryError> {
        Ok(vec![])
    }
}

/// Keys double as file names in the file-backed implementation, so the
/// character set is restricted for every implementation alike.
pub(crate) fn validate_key(key: &str) -> Result<(), RepositoryError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidKey(key.to_owned()))
    }
}

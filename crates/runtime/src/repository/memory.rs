//! In-memory BuildRepository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{BuildRepository, RepositoryError, StoredBuild, validate_key};

/// Keeps builds in a map. For tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryBuildRepository {
    builds: RwLock<HashMap<String, StoredBuild>>,
}

impl MemoryBuildRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BuildRepository for MemoryBuildRepository {
    fn save(&self, key: &str, build: &StoredBuild) -> Result<(), RepositoryError> {
        validate_key(key)?;
        let mut builds = self
            .builds
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        builds.insert(key.to_owned(), build.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<StoredBuild>, RepositoryError> {
        validate_key(key)?;
        let builds = self
            .builds
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(builds.get(key).cloned())
    }

    fn exists(&self, key: &str) -> bool {
        self.builds
            .read()
            .map(|builds| builds.contains_key(key))
            .unwrap_or(false)
    }

    fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        validate_key(key)?;
        let mut builds = self
            .builds
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        builds.remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>, RepositoryError> {
        let builds = self
            .builds
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut keys: Vec<String> = builds.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

//! File-based BuildRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::{BuildRepository, RepositoryError, StoredBuild, validate_key};

/// Stores each build as an individual JSON file named after its key.
///
/// JSON keeps saves debuggable by hand; a half-written file is prevented
/// by writing to a temp path and renaming over the target.
pub struct FileBuildRepository {
    base_dir: PathBuf,
}

impl FileBuildRepository {
    /// Create a repository rooted at `base_dir`, creating it if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Create a repository in the platform's per-user data directory.
    pub fn in_user_data_dir() -> Result<Self, RepositoryError> {
        let dirs = directories::ProjectDirs::from("", "", "loadout-planner")
            .ok_or(RepositoryError::NoDataDir)?;
        Self::new(dirs.data_dir().join("builds"))
    }

    fn build_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl BuildRepository for FileBuildRepository {
    fn save(&self, key: &str, build: &StoredBuild) -> Result<(), RepositoryError> {
        validate_key(key)?;
        let path = self.build_path(key);
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_vec_pretty(build)
            .map_err(|e| RepositoryError::CorruptedData(e.to_string()))?;

        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved build `{}` to {}", key, path.display());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<StoredBuild>, RepositoryError> {
        validate_key(key)?;
        let path = self.build_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let build = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::CorruptedData(e.to_string()))?;

        tracing::debug!("Loaded build `{}` from {}", key, path.display());
        Ok(Some(build))
    }

    fn exists(&self, key: &str) -> bool {
        validate_key(key).is_ok() && self.build_path(key).exists()
    }

    fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        validate_key(key)?;
        let path = self.build_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted build `{}`", key);
        }
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>, RepositoryError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                keys.push(stem.to_owned());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{EquipmentSelection, PlayerStats};

    fn stored() -> StoredBuild {
        StoredBuild {
            selection: EquipmentSelection::new(),
            player_stats: PlayerStats::new(3),
        }
    }

    #[test]
    fn save_load_delete_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileBuildRepository::new(dir.path()).unwrap();

        repo.save("my-build", &stored()).unwrap();
        assert!(repo.exists("my-build"));
        assert_eq!(repo.load("my-build").unwrap(), Some(stored()));
        assert_eq!(repo.list_keys().unwrap(), vec!["my-build"]);

        repo.delete("my-build").unwrap();
        assert!(!repo.exists("my-build"));
        assert_eq!(repo.load("my-build").unwrap(), None);
    }

    #[test]
    fn path_traversal_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileBuildRepository::new(dir.path()).unwrap();

        let err = repo.save("../escape", &stored()).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidKey(_)));
        assert!(matches!(
            repo.load("a/b").unwrap_err(),
            RepositoryError::InvalidKey(_)
        ));
    }

    #[test]
    fn corrupt_file_is_reported_not_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileBuildRepository::new(dir.path()).unwrap();
        std::fs::write(dir.path().join("bad.json"), b"{ not json").unwrap();

        assert!(matches!(
            repo.load("bad").unwrap_err(),
            RepositoryError::CorruptedData(_)
        ));
    }
}

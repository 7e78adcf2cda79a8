//! Name dictionary loader.

use std::collections::HashMap;
use std::path::Path;

use crate::loaders::{LoadResult, read_file};

/// Loader for the map-id -> display-name dictionary.
///
/// File format: `HashMap<String, String>`.
///
/// Example:
/// ```ron
/// {
///     "helm-01": "Crude Helm",
///     "sword-03": "Plagued Greatsword",
/// }
/// ```
pub struct DictionaryLoader;

impl DictionaryLoader {
    pub fn load(path: &Path) -> LoadResult<HashMap<String, String>> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse dictionary RON at {:?}: {}", path, e))
    }
}

//! Map-id to display-name dictionary with an explicit cache.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::loaders::{DictionaryLoader, LoadResult};

/// Lazily-loaded name dictionary.
///
/// The dictionary file is read once, on the first lookup, and the parsed
/// map is cached on this object. [`NameDictionary::reset`] drops the
/// cache (wired to the UI's "clear data" action) so the next lookup
/// re-reads the file. The cache lives here, on the collaborator that
/// owns the lookups, not in module state.
#[derive(Debug)]
pub struct NameDictionary {
    source: PathBuf,
    cache: Option<HashMap<String, String>>,
}

impl NameDictionary {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            cache: None,
        }
    }

    /// Display name for a map-id, populating the cache on first use.
    ///
    /// An unknown id is `Ok(None)`; only a failed file read or parse is
    /// an error.
    pub fn name_of(&mut self, map_id: &str) -> LoadResult<Option<&str>> {
        let entries = match &mut self.cache {
            Some(entries) => entries,
            cache @ None => cache.insert(DictionaryLoader::load(&self.source)?),
        };
        Ok(entries.get(map_id).map(String::as_str))
    }

    /// Drop the cached entries; the next lookup reloads from disk.
    pub fn reset(&mut self) {
        self.cache = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.is_some()
    }
}

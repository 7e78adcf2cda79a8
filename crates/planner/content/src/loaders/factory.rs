//! Content factory for building the catalog from data files.

use std::path::PathBuf;

use planner_core::{Armor, Mote, Pact, Weapon};

use crate::catalog::ContentCatalog;
use crate::dictionary::NameDictionary;
use crate::loaders::{DictionaryLoader, ItemLoader, LoadResult, MoteLoader};

/// Loads all planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── armors.ron
/// ├── weapons.ron
/// ├── pacts.ron
/// ├── motes.ron
/// └── dictionary.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the armor catalog from `armors.ron`.
    pub fn load_armors(&self) -> LoadResult<Vec<Armor>> {
        ItemLoader::load_armors(&self.data_dir.join("armors.ron"))
    }

    /// Load the weapon catalog from `weapons.ron`.
    pub fn load_weapons(&self) -> LoadResult<Vec<Weapon>> {
        ItemLoader::load_weapons(&self.data_dir.join("weapons.ron"))
    }

    /// Load the pact catalog from `pacts.ron`.
    pub fn load_pacts(&self) -> LoadResult<Vec<Pact>> {
        ItemLoader::load_pacts(&self.data_dir.join("pacts.ron"))
    }

    /// Load the mote catalog from `motes.ron`.
    pub fn load_motes(&self) -> LoadResult<Vec<Mote>> {
        MoteLoader::load(&self.data_dir.join("motes.ron"))
    }

    /// Build the full in-memory catalog from all four item files.
    pub fn load_catalog(&self) -> LoadResult<ContentCatalog> {
        Ok(ContentCatalog::new(
            self.load_armors()?,
            self.load_weapons()?,
            self.load_pacts()?,
            self.load_motes()?,
        ))
    }

    /// Name dictionary backed by `dictionary.ron`, loaded lazily on
    /// first lookup.
    pub fn name_dictionary(&self) -> NameDictionary {
        NameDictionary::new(self.data_dir.join("dictionary.ron"))
    }

    /// Eagerly load the dictionary file (bypasses the lazy cache).
    pub fn load_dictionary(&self) -> LoadResult<std::collections::HashMap<String, String>> {
        DictionaryLoader::load(&self.data_dir.join("dictionary.ron"))
    }
}

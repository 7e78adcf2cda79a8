//! Mote catalog loader.

use std::path::Path;

use planner_core::Mote;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Mote catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoteCatalog {
    pub motes: Vec<Mote>,
}

/// Loader for the mote catalog from RON files.
pub struct MoteLoader;

impl MoteLoader {
    /// Load the mote catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Mote>> {
        let content = read_file(path)?;
        let catalog: MoteCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse mote catalog RON: {}", e))?;
        Ok(catalog.motes)
    }
}

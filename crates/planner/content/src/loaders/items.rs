//! Item catalog loaders.

use std::path::Path;

use planner_core::{Armor, Pact, Weapon};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Armor catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmorCatalog {
    pub armors: Vec<Armor>,
}

/// Weapon catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: Vec<Weapon>,
}

/// Pact catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PactCatalog {
    pub pacts: Vec<Pact>,
}

/// Loader for item catalogs from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the armor catalog from a RON file.
    pub fn load_armors(path: &Path) -> LoadResult<Vec<Armor>> {
        let content = read_file(path)?;
        let catalog: ArmorCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse armor catalog RON: {}", e))?;
        Ok(catalog.armors)
    }

    /// Load the weapon catalog from a RON file.
    pub fn load_weapons(path: &Path) -> LoadResult<Vec<Weapon>> {
        let content = read_file(path)?;
        let catalog: WeaponCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon catalog RON: {}", e))?;
        Ok(catalog.weapons)
    }

    /// Load the pact catalog from a RON file.
    pub fn load_pacts(path: &Path) -> LoadResult<Vec<Pact>> {
        let content = read_file(path)?;
        let catalog: PactCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse pact catalog RON: {}", e))?;
        Ok(catalog.pacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn armor_catalog_round_trips_through_ron() {
        let ron_text = r#"(
            armors: [
                (
                    alias: "crude-helm",
                    map_id: "helm-01",
                    name: "Crude Helm",
                    stats: (
                        PhysicalDefence: Some("10"),
                        MagickDefence: Some("2"),
                        StabilityIncrease: None,
                        Virtue: None,
                    ),
                ),
            ],
        )"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ron_text.as_bytes()).unwrap();

        let armors = ItemLoader::load_armors(file.path()).unwrap();
        assert_eq!(armors.len(), 1);
        assert_eq!(armors[0].map_id, "helm-01");
        assert_eq!(armors[0].stats.physical_defence.as_deref(), Some("10"));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = ItemLoader::load_armors(Path::new("/does/not/exist.ron")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}

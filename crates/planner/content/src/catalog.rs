//! In-memory content catalog implementing the core lookup oracle.

use std::collections::HashMap;

use planner_core::{Armor, ContentOracle, ItemCategory, ItemRecord, Mote, MoteId, Pact, Weapon};

/// Indexed item and mote records.
///
/// Records are indexed twice: by map-id (the export/crafting key the
/// oracle contract uses) and by alias (the UI search key). The two key
/// spaces are independent; an alias never resolves through the map-id
/// index or vice versa.
#[derive(Debug, Default, Clone)]
pub struct ContentCatalog {
    by_map_id: HashMap<String, ItemRecord>,
    by_alias: HashMap<String, ItemRecord>,
    motes: HashMap<String, Mote>,
}

impl ContentCatalog {
    pub fn new(armors: Vec<Armor>, weapons: Vec<Weapon>, pacts: Vec<Pact>, motes: Vec<Mote>) -> Self {
        let mut catalog = Self::default();
        for armor in armors {
            catalog.insert(ItemRecord::Armor(armor));
        }
        for weapon in weapons {
            catalog.insert(ItemRecord::Weapon(weapon));
        }
        for pact in pacts {
            catalog.insert(ItemRecord::Pact(pact));
        }
        for mote in motes {
            catalog.motes.insert(mote.id.as_str().to_owned(), mote);
        }
        catalog
    }

    fn insert(&mut self, record: ItemRecord) {
        self.by_alias
            .insert(record.alias().to_owned(), record.clone());
        self.by_map_id.insert(record.map_id().to_owned(), record);
    }

    /// Look up an item by its UI alias.
    pub fn item_by_alias(&self, alias: &str, category: ItemCategory) -> Option<ItemRecord> {
        self.by_alias
            .get(alias)
            .filter(|record| record.category() == category)
            .cloned()
    }

    pub fn item_count(&self) -> usize {
        self.by_map_id.len()
    }

    pub fn mote_count(&self) -> usize {
        self.motes.len()
    }

    /// All motes, for UI listings.
    pub fn motes(&self) -> impl Iterator<Item = &Mote> {
        self.motes.values()
    }
}

impl ContentOracle for ContentCatalog {
    fn item(&self, map_id: &str, category: ItemCategory) -> Option<ItemRecord> {
        self.by_map_id
            .get(map_id)
            .filter(|record| record.category() == category)
            .cloned()
    }

    fn mote(&self, id: &MoteId) -> Option<Mote> {
        self.motes.get(id.as_str()).cloned()
    }
}

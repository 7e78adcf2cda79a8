//! Identifier resolution back into full records.

use crate::item::{ItemCategory, ItemRecord, Mote, MoteId, MoteSlots};
use crate::loadout::{EquipmentSelection, EquippedPact, EquippedWeapon};

use super::export::{SimplifiedBuild, SlotExport};

/// Read-only lookup into the content catalog.
///
/// Implementations resolve a map-id within a category, or a mote id, to
/// a full record. Any failure (unknown id, upstream error) is a plain
/// `None`; the rehydrator never distinguishes the two.
pub trait ContentOracle {
    fn item(&self, map_id: &str, category: ItemCategory) -> Option<ItemRecord>;

    fn mote(&self, id: &MoteId) -> Option<Mote>;
}

/// Reconstruct an equipment selection from a decoded build, best-effort.
///
/// Every slot resolves independently: a base-item miss leaves that slot
/// empty, a mote miss leaves a hole at that socket, and neither aborts
/// the rest. Callers must tolerate a selection with fewer populated
/// slots than the build referenced.
pub fn rehydrate(build: &SimplifiedBuild, oracle: &dyn ContentOracle) -> EquipmentSelection {
    EquipmentSelection {
        helm: armor_slot(build.helm.as_deref(), oracle),
        upper_body: armor_slot(build.upper_body.as_deref(), oracle),
        lower_body: armor_slot(build.lower_body.as_deref(), oracle),
        totem: armor_slot(build.totem.as_deref(), oracle),
        primary: weapon_slot(build.primary.as_ref(), oracle),
        sidearm: weapon_slot(build.sidearm.as_ref(), oracle),
        pact: pact_slot(build.pact.as_ref(), oracle),
    }
}

fn armor_slot(map_id: Option<&str>, oracle: &dyn ContentOracle) -> Option<crate::item::Armor> {
    match oracle.item(map_id?, ItemCategory::Armor)? {
        ItemRecord::Armor(armor) => Some(armor),
        // A record of the wrong shape is as good as a miss.
        _ => None,
    }
}

fn weapon_slot(slot: Option<&SlotExport>, oracle: &dyn ContentOracle) -> Option<EquippedWeapon> {
    let slot = slot?;
    let weapon = match oracle.item(&slot.item, ItemCategory::Weapon)? {
        ItemRecord::Weapon(weapon) => weapon,
        _ => return None,
    };
    Some(EquippedWeapon::with_motes(
        weapon,
        mote_slots(slot.motes.as_deref(), oracle),
    ))
}

fn pact_slot(slot: Option<&SlotExport>, oracle: &dyn ContentOracle) -> Option<EquippedPact> {
    let slot = slot?;
    let pact = match oracle.item(&slot.item, ItemCategory::Pact)? {
        ItemRecord::Pact(pact) => pact,
        _ => return None,
    };
    Some(EquippedPact::with_motes(
        pact,
        mote_slots(slot.motes.as_deref(), oracle),
    ))
}

/// Resolve each stored socket at its original index; misses become holes.
fn mote_slots(stored: Option<&[Option<String>]>, oracle: &dyn ContentOracle) -> MoteSlots {
    stored
        .unwrap_or_default()
        .iter()
        .map(|socket| {
            socket
                .as_deref()
                .and_then(|id| oracle.mote(&MoteId::new(id)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Armor, ArmorStats, Pact, PactStats, Weapon, WeaponStats};
    use std::collections::HashMap;

    struct MapOracle {
        items: HashMap<String, ItemRecord>,
        motes: HashMap<String, Mote>,
    }

    impl ContentOracle for MapOracle {
        fn item(&self, map_id: &str, category: ItemCategory) -> Option<ItemRecord> {
            self.items
                .get(map_id)
                .filter(|record| record.category() == category)
                .cloned()
        }

        fn mote(&self, id: &MoteId) -> Option<Mote> {
            self.motes.get(id.as_str()).cloned()
        }
    }

    fn oracle() -> MapOracle {
        let mut items = HashMap::new();
        items.insert(
            "helm-map".to_owned(),
            ItemRecord::Armor(Armor {
                alias: "helm".to_owned(),
                map_id: "helm-map".to_owned(),
                name: "Helm".to_owned(),
                stats: ArmorStats::default(),
            }),
        );
        items.insert(
            "sword-map".to_owned(),
            ItemRecord::Weapon(Weapon {
                alias: "sword".to_owned(),
                map_id: "sword-map".to_owned(),
                name: "Sword".to_owned(),
                stats: WeaponStats::default(),
            }),
        );
        items.insert(
            "pact-map".to_owned(),
            ItemRecord::Pact(Pact {
                alias: "pact".to_owned(),
                map_id: "pact-map".to_owned(),
                name: "Pact".to_owned(),
                stats: PactStats::default(),
            }),
        );
        let mut motes = HashMap::new();
        motes.insert(
            "mote-a".to_owned(),
            Mote {
                id: "mote-a".into(),
                name: "Mote A".to_owned(),
                effects: vec!["2 Grace".to_owned()],
            },
        );
        MapOracle { items, motes }
    }

    #[test]
    fn unknown_armor_id_leaves_the_slot_empty() {
        let build = SimplifiedBuild {
            helm: Some("helm-map".to_owned()),
            upper_body: Some("does-not-exist".to_owned()),
            ..SimplifiedBuild::default()
        };

        let selection = rehydrate(&build, &oracle());
        assert!(selection.helm.is_some());
        assert!(selection.upper_body.is_none());
    }

    #[test]
    fn mote_miss_leaves_a_positional_hole() {
        let build = SimplifiedBuild {
            primary: Some(SlotExport {
                item: "sword-map".to_owned(),
                motes: Some(vec![
                    Some("gone".to_owned()),
                    Some("mote-a".to_owned()),
                    None,
                ]),
            }),
            ..SimplifiedBuild::default()
        };

        let selection = rehydrate(&build, &oracle());
        let equipped = selection.primary.expect("weapon resolves");
        assert_eq!(equipped.motes.len(), 3);
        assert!(equipped.motes[0].is_none());
        assert_eq!(equipped.motes[1].as_ref().unwrap().id.as_str(), "mote-a");
        assert!(equipped.motes[2].is_none());
    }

    #[test]
    fn base_item_miss_drops_the_whole_slot() {
        let build = SimplifiedBuild {
            sidearm: Some(SlotExport {
                item: "gone".to_owned(),
                motes: Some(vec![Some("mote-a".to_owned())]),
            }),
            pact: Some(SlotExport {
                item: "pact-map".to_owned(),
                motes: None,
            }),
            ..SimplifiedBuild::default()
        };

        let selection = rehydrate(&build, &oracle());
        assert!(selection.sidearm.is_none());
        assert!(selection.pact.is_some());
    }

    #[test]
    fn category_mismatch_is_a_miss() {
        // A weapon map-id referenced from an armor slot must not resolve.
        let build = SimplifiedBuild {
            helm: Some("sword-map".to_owned()),
            ..SimplifiedBuild::default()
        };
        let selection = rehydrate(&build, &oracle());
        assert!(selection.helm.is_none());
    }

    #[test]
    fn over_limit_mote_lists_are_reflected_as_given() {
        let build = SimplifiedBuild {
            primary: Some(SlotExport {
                item: "sword-map".to_owned(),
                motes: Some(vec![Some("mote-a".to_owned()); 5]),
            }),
            ..SimplifiedBuild::default()
        };

        let selection = rehydrate(&build, &oracle());
        assert_eq!(selection.primary.unwrap().motes.len(), 5);
    }
}

//! Identifier-only build representation.

use crate::item::MoteSlots;
use crate::loadout::{EquipmentSelection, EquippedPact, EquippedWeapon, PlayerStats};

/// Weapon or pact slot reduced to identifiers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotExport {
    /// The item's map-id. The lookup alias would not round-trip.
    pub item: String,
    /// Per-socket mote ids, positions preserved including holes.
    /// Present only when at least one socket is filled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motes: Option<Vec<Option<String>>>,
}

impl SlotExport {
    fn from_weapon(equipped: &EquippedWeapon) -> Self {
        Self {
            item: equipped.weapon.map_id.clone(),
            motes: export_motes(&equipped.motes),
        }
    }

    fn from_pact(equipped: &EquippedPact) -> Self {
        Self {
            item: equipped.pact.map_id.clone(),
            motes: export_motes(&equipped.motes),
        }
    }
}

fn export_motes(motes: &MoteSlots) -> Option<Vec<Option<String>>> {
    if motes.iter().any(Option::is_some) {
        Some(
            motes
                .iter()
                .map(|socket| socket.as_ref().map(|mote| mote.id.0.clone()))
                .collect(),
        )
    } else {
        None
    }
}

/// The seven slots reduced to identifiers; `None` marks an empty slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedBuild {
    pub helm: Option<String>,
    pub upper_body: Option<String>,
    pub lower_body: Option<String>,
    pub totem: Option<String>,
    pub primary: Option<SlotExport>,
    pub sidearm: Option<SlotExport>,
    pub pact: Option<SlotExport>,
}

impl SimplifiedBuild {
    pub fn from_selection(selection: &EquipmentSelection) -> Self {
        let map_id = |armor: Option<&crate::item::Armor>| armor.map(|a| a.map_id.clone());
        Self {
            helm: map_id(selection.helm.as_ref()),
            upper_body: map_id(selection.upper_body.as_ref()),
            lower_body: map_id(selection.lower_body.as_ref()),
            totem: map_id(selection.totem.as_ref()),
            primary: selection.primary.as_ref().map(SlotExport::from_weapon),
            sidearm: selection.sidearm.as_ref().map(SlotExport::from_weapon),
            pact: selection.pact.as_ref().map(SlotExport::from_pact),
        }
    }

    /// Number of identifiers this build references (items and motes).
    ///
    /// Used after rehydration to tell how many references were dropped.
    pub fn referenced_ids(&self) -> usize {
        let armor = [&self.helm, &self.upper_body, &self.lower_body, &self.totem]
            .into_iter()
            .filter(|slot| slot.is_some())
            .count();
        let socketed = [&self.primary, &self.sidearm, &self.pact]
            .into_iter()
            .flatten()
            .map(|slot| {
                1 + slot
                    .motes
                    .iter()
                    .flatten()
                    .filter(|socket| socket.is_some())
                    .count()
            })
            .sum::<usize>();
        armor + socketed
    }
}

/// Full export payload: equipment identifiers plus player stats.
///
/// Field order is fixed by this struct, so two semantically equal builds
/// always encode to byte-identical strings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BuildExport {
    pub equipment: SimplifiedBuild,
    #[serde(rename = "playerStats")]
    pub player_stats: PlayerStats,
}

impl BuildExport {
    pub fn from_selection(selection: &EquipmentSelection, player_stats: &PlayerStats) -> Self {
        Self {
            equipment: SimplifiedBuild::from_selection(selection),
            player_stats: player_stats.clone(),
        }
    }
}

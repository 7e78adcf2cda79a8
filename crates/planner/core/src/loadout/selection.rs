use crate::item::{Armor, Mote, MoteSlots, Pact, Weapon};

use super::{SlotId, WeaponDisplay};

/// Weapon plus the motes socketed into it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EquippedWeapon {
    pub weapon: Weapon,
    #[serde(default)]
    pub motes: MoteSlots,
}

impl EquippedWeapon {
    pub fn new(weapon: Weapon) -> Self {
        Self {
            weapon,
            motes: MoteSlots::new(),
        }
    }

    pub fn with_motes(weapon: Weapon, motes: MoteSlots) -> Self {
        Self { weapon, motes }
    }

    /// Socketed motes, skipping empty sockets.
    pub fn socketed(&self) -> impl Iterator<Item = &Mote> {
        self.motes.iter().filter_map(Option::as_ref)
    }
}

/// Pact plus the motes socketed into it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EquippedPact {
    pub pact: Pact,
    #[serde(default)]
    pub motes: MoteSlots,
}

impl EquippedPact {
    pub fn new(pact: Pact) -> Self {
        Self {
            pact,
            motes: MoteSlots::new(),
        }
    }

    pub fn with_motes(pact: Pact, motes: MoteSlots) -> Self {
        Self { pact, motes }
    }

    pub fn socketed(&self) -> impl Iterator<Item = &Mote> {
        self.motes.iter().filter_map(Option::as_ref)
    }
}

/// One item per slot, all optional.
///
/// This is the single mutable piece of planner state. Aggregation and
/// serialization only ever read it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSelection {
    pub helm: Option<Armor>,
    pub upper_body: Option<Armor>,
    pub lower_body: Option<Armor>,
    pub totem: Option<Armor>,
    pub primary: Option<EquippedWeapon>,
    pub sidearm: Option<EquippedWeapon>,
    pub pact: Option<EquippedPact>,
}

impl EquipmentSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Armor slots in fixed aggregation order: helm, upper, lower, totem.
    pub fn armor_slots(&self) -> [(SlotId, Option<&Armor>); 4] {
        [
            (SlotId::Helm, self.helm.as_ref()),
            (SlotId::UpperBody, self.upper_body.as_ref()),
            (SlotId::LowerBody, self.lower_body.as_ref()),
            (SlotId::Totem, self.totem.as_ref()),
        ]
    }

    pub fn armor(&self, slot: SlotId) -> Option<&Armor> {
        match slot {
            SlotId::Helm => self.helm.as_ref(),
            SlotId::UpperBody => self.upper_body.as_ref(),
            SlotId::LowerBody => self.lower_body.as_ref(),
            SlotId::Totem => self.totem.as_ref(),
            _ => None,
        }
    }

    pub fn weapon(&self, display: WeaponDisplay) -> Option<&EquippedWeapon> {
        match display {
            WeaponDisplay::Primary => self.primary.as_ref(),
            WeaponDisplay::Sidearm => self.sidearm.as_ref(),
        }
    }

    /// Both weapon slots in fixed order (primary, sidearm).
    pub fn weapon_slots(&self) -> [(SlotId, Option<&EquippedWeapon>); 2] {
        [
            (SlotId::Primary, self.primary.as_ref()),
            (SlotId::Sidearm, self.sidearm.as_ref()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.helm.is_none()
            && self.upper_body.is_none()
            && self.lower_body.is_none()
            && self.totem.is_none()
            && self.primary.is_none()
            && self.sidearm.is_none()
            && self.pact.is_none()
    }
}

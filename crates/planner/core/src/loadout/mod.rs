//! Equipment selection state and player stat allocation.
//!
//! A selection holds at most one item per slot. It is created empty at
//! session start and only mutated through the runtime planner, which owns
//! the policy checks (mote uniqueness, virtue budget); the types here
//! carry no policy of their own.
mod player;
mod selection;

pub use player::PlayerStats;
pub use selection::{EquipmentSelection, EquippedPact, EquippedWeapon};

/// The seven equipment slots.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum SlotId {
    Helm,
    UpperBody,
    LowerBody,
    Totem,
    Primary,
    Sidearm,
    Pact,
}

impl SlotId {
    /// Armor slots in their fixed aggregation order.
    pub const ARMOR: [SlotId; 4] = [Self::Helm, Self::UpperBody, Self::LowerBody, Self::Totem];

    /// The two weapon hand slots.
    pub const WEAPONS: [SlotId; 2] = [Self::Primary, Self::Sidearm];

    pub fn is_armor(self) -> bool {
        matches!(
            self,
            Self::Helm | Self::UpperBody | Self::LowerBody | Self::Totem
        )
    }

    pub fn is_weapon(self) -> bool {
        matches!(self, Self::Primary | Self::Sidearm)
    }
}

/// Which weapon's combat stats the consolidated totals display.
///
/// Only attack, charged attack, and stagger are gated by this; virtue
/// bonuses from motes on the hidden weapon still count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WeaponDisplay {
    #[default]
    Primary,
    Sidearm,
}

impl WeaponDisplay {
    pub fn slot(self) -> SlotId {
        match self {
            Self::Primary => SlotId::Primary,
            Self::Sidearm => SlotId::Sidearm,
        }
    }
}

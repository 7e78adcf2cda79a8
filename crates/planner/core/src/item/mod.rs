//! Item records as served by the content catalog.
//!
//! Records follow the Base + Kind pattern: each category (armor, weapon,
//! pact) has its own typed stats shape, and [`ItemRecord`] discriminates
//! between them explicitly instead of shape-sniffing a loose bag. Stat
//! values stay raw strings as delivered upstream ("10", "3/50",
//! "10 Physical Defence"); [`crate::stats::extract`] turns them into
//! numbers at aggregation time.
mod armor;
mod mote;
mod pact;
mod weapon;

pub use armor::{Armor, ArmorStats};
pub use mote::{Mote, MoteId, MoteSlots};
pub use pact::{Pact, PactStats};
pub use weapon::{Weapon, WeaponLevelStats, WeaponStats};

/// Category discriminant threaded through every item lookup.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Armor,
    Weapon,
    Pact,
}

/// A full item record resolved from the content catalog.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ItemRecord {
    Armor(Armor),
    Weapon(Weapon),
    Pact(Pact),
}

impl ItemRecord {
    pub fn category(&self) -> ItemCategory {
        match self {
            Self::Armor(_) => ItemCategory::Armor,
            Self::Weapon(_) => ItemCategory::Weapon,
            Self::Pact(_) => ItemCategory::Pact,
        }
    }

    /// Stable lookup alias.
    pub fn alias(&self) -> &str {
        match self {
            Self::Armor(armor) => &armor.alias,
            Self::Weapon(weapon) => &weapon.alias,
            Self::Pact(pact) => &pact.alias,
        }
    }

    /// Cross-reference identifier used by crafting and build exports.
    ///
    /// Distinct from [`Self::alias`]; exports written with the alias do not
    /// round-trip through the catalog.
    pub fn map_id(&self) -> &str {
        match self {
            Self::Armor(armor) => &armor.map_id,
            Self::Weapon(weapon) => &weapon.map_id,
            Self::Pact(pact) => &pact.map_id,
        }
    }
}

/// Virtues granted by totems, pacts, and mote effects.
///
/// `AllVirtues` is the upstream sentinel meaning "add this value to all
/// three totals at once".
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, serde::Serialize, serde::Deserialize,
)]
pub enum Virtue {
    Grace,
    Spirit,
    Courage,
    #[strum(serialize = "All Virtues")]
    #[serde(rename = "All Virtues")]
    AllVirtues,
}

/// Virtue line on a totem or pact, exactly as served upstream.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VirtueBonus {
    #[serde(rename = "Type")]
    pub virtue: Virtue,
    /// Raw stat string; parsed with [`crate::stats::extract`].
    #[serde(rename = "Value")]
    pub value: String,
}

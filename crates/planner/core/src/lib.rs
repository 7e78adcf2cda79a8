//! Deterministic loadout-planner logic shared across clients.
//!
//! `planner-core` defines the canonical data model (items, motes, equipment
//! selection) and exposes pure APIs for stat aggregation, build
//! serialization, and the shareable build-string codec. All I/O lives in
//! supporting crates; everything here is a pure function of its inputs, so
//! the same selection always aggregates to the same stats and the same
//! build always encodes to the same string.
pub mod build;
pub mod config;
pub mod item;
pub mod loadout;
pub mod stats;

pub use build::{
    BuildExport, ContentOracle, DecodeError, SimplifiedBuild, SlotExport, decode, encode,
    rehydrate,
};
pub use config::PlannerConfig;
pub use item::{
    Armor, ArmorStats, ItemCategory, ItemRecord, Mote, MoteId, MoteSlots, Pact, PactStats, Virtue,
    VirtueBonus, Weapon, WeaponLevelStats, WeaponStats,
};
pub use loadout::{
    EquipmentSelection, EquippedPact, EquippedWeapon, PlayerStats, SlotId, WeaponDisplay,
};
pub use stats::{ConsolidatedStats, ParsedEffects, SmiteChance, WeaponEffectBonus, extract};

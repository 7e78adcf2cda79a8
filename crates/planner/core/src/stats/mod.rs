//! Stat extraction and aggregation.
//!
//! The upstream content API serves stat values as loosely-typed strings
//! ("10", "3/50", "10 Physical Defence") and mote effects as free text.
//! This module normalizes both into numbers and folds an equipment
//! selection into one [`ConsolidatedStats`] snapshot.
//!
//! # Principles
//!
//! 1. **Silent zero**: any unparseable value degrades to 0, never an
//!    error. A zero field means "no contribution" and the UI hides the
//!    row; turning that into an error would change observable behavior.
//! 2. **Pure**: aggregation is a function of the selection alone. Same
//!    selection, same snapshot.
//! 3. **Recomputed on demand**: [`ConsolidatedStats`] is never stored.
pub mod consolidated;
pub mod effects;
pub mod numeric;

pub use consolidated::ConsolidatedStats;
pub use effects::{ParsedEffects, WeaponEffectBonus};
pub use numeric::{SmiteChance, extract};

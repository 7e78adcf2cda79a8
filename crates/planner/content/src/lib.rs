//! Data-driven content catalogs and loaders.
//!
//! This crate houses the planner's view of the game's content API:
//! - Armor, weapon, pact, and mote catalogs (data-driven via RON)
//! - The map-id -> display-name dictionary, behind an explicit cache
//! - [`ContentCatalog`], an in-memory index implementing the core's
//!   [`planner_core::ContentOracle`] lookup contract
//!
//! Content is consumed by the runtime's providers and never appears in
//! planner state. All loaders use planner-core types directly with serde
//! for RON deserialization.

pub mod catalog;
pub mod dictionary;
pub mod loaders;

pub use catalog::ContentCatalog;
pub use dictionary::NameDictionary;
pub use loaders::{ContentFactory, DictionaryLoader, ItemLoader, MoteLoader};

//! Async planner runtime: content providers, concurrent rehydration,
//! local persistence, and the session service.
//!
//! `planner-core` stays pure; everything that touches the outside world
//! lives here. The [`Planner`] service owns the mutable selection,
//! enforces the equip-time policy (mote uniqueness, virtue budget), and
//! wires the codec, providers, and repositories together for
//! export/import/save/restore.
pub mod error;
pub mod provider;
pub mod rehydrate;
pub mod repository;
pub mod service;

pub use error::{PlannerError, ProviderError, RepositoryError, Result};
pub use provider::{CatalogProvider, ContentProvider};
pub use rehydrate::rehydrate;
pub use repository::{BuildRepository, FileBuildRepository, MemoryBuildRepository, StoredBuild};
pub use service::{ImportOutcome, Planner};

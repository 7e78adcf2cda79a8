//! Unified error types surfaced by the planner runtime.
//!
//! Wraps failures from the codec, providers, and repositories so clients
//! can bubble them up with consistent context. Policy violations
//! (duplicate motes, blown virtue budgets) are ordinary variants here,
//! not panics: they come straight from user input.

use planner_core::{DecodeError, MoteId, SlotId};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, PlannerError>;

/// Errors raised by planner mutations and boundary operations.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("slot {slot} does not hold {expected} items")]
    SlotCategoryMismatch {
        slot: SlotId,
        expected: &'static str,
    },

    #[error("no item equipped in slot {slot}")]
    EmptySlot { slot: SlotId },

    #[error("slot {slot} has no mote sockets")]
    SlotWithoutSockets { slot: SlotId },

    #[error("mote socket {index} is out of range (sockets 0..{max})")]
    SocketOutOfRange { index: usize, max: usize },

    #[error("mote `{id}` is already socketed on a weapon")]
    DuplicateWeaponMote { id: MoteId },

    #[error("mote `{id}` is already socketed on the pact")]
    DuplicatePactMote { id: MoteId },

    #[error("mastery rank {rank} exceeds the maximum of {max}")]
    MasteryRankOutOfRange { rank: u8, max: u8 },

    #[error("virtue allocation of {requested} exceeds the budget of {budget}")]
    VirtueBudgetExceeded { requested: u16, budget: u16 },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Error reported by a content provider's transport layer.
///
/// The rehydrator logs these and treats the lookup as a miss; they never
/// abort an import.
#[derive(Debug, Error)]
#[error("content provider error: {0}")]
pub struct ProviderError(pub String);

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

//! Build export, the shareable-string codec, and rehydration.
//!
//! A build leaves the planner as identifiers only: map-ids for items,
//! mote ids per socket, plus the player stats. The codec wraps that in
//! JSON -> percent-encoding -> base64 so it survives any transport that
//! can carry a string. Import reverses the codec and asks a
//! [`ContentOracle`] to resolve every identifier back into a full record,
//! best-effort: whatever no longer resolves is dropped, never fatal.
mod codec;
mod export;
mod rehydrate;

pub use codec::{DecodeError, decode, encode};
pub use export::{BuildExport, SimplifiedBuild, SlotExport};
pub use rehydrate::{ContentOracle, rehydrate};

//! Shareable build-string codec.
//!
//! Encoding is JSON -> percent-encoding -> base64. The percent-encoding
//! step keeps the JSON inside the ASCII subset that existing shared
//! strings were produced with (`encodeURIComponent` semantics), so
//! strings from older exports keep decoding and new exports keep working
//! in older importers.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use super::export::BuildExport;

/// Everything `encodeURIComponent` leaves unescaped besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Why a build string failed to decode.
///
/// Malformed input is an expected condition (hand-edited URLs, truncated
/// clipboard pastes); every failure mode surfaces here and none panics.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("invalid percent-encoding: {0}")]
    PercentEncoding(#[from] std::str::Utf8Error),
    /// Covers both unparseable JSON and JSON that lacks the mandatory
    /// `equipment` / `playerStats` fields; a payload missing either is
    /// invalid input, not a partially-usable build.
    #[error("malformed build payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Encode a build export into a transportable string.
pub fn encode(build: &BuildExport) -> String {
    // Serialization of a value type cannot fail.
    let json = serde_json::to_string(build).expect("build export serializes");
    let escaped = utf8_percent_encode(&json, URI_COMPONENT).to_string();
    STANDARD.encode(escaped)
}

/// Decode a shared build string back into a build export.
pub fn decode(encoded: &str) -> Result<BuildExport, DecodeError> {
    let escaped = String::from_utf8(STANDARD.decode(encoded.trim())?)?;
    let json = percent_decode_str(&escaped).decode_utf8()?;
    Ok(serde_json::from_str(&json)?)
}

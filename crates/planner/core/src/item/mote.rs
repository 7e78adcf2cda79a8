use core::fmt;

/// Unique, human-readable mote identifier (lookup key for the catalog).
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MoteId(pub String);

impl MoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MoteId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Socketable mote. Effects are free text as served upstream; the parsing
/// rules live in [`crate::stats::ParsedEffects`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Mote {
    pub id: MoteId,
    pub name: String,
    #[serde(default)]
    pub effects: Vec<String>,
}

/// Positional mote sockets of one weapon or pact.
///
/// Holes are meaningful: socket order survives export/import, so an empty
/// socket stays `None` rather than being compacted away. Policy limits the
/// length to [`crate::PlannerConfig::MAX_MOTE_SLOTS`] at equip time, but
/// decoded data is reflected as given, over-limit or not.
pub type MoteSlots = Vec<Option<Mote>>;

/// Player-side numbers that travel with an exported build.
///
/// The virtue budget invariant (`grace + spirit + courage <=
/// base + mastery_rank`) is enforced when points are allocated, not here
/// and not at decode time; decoded stats are trusted as given.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    /// Mastery rank, 0..=254.
    pub mastery_rank: u8,
    pub grace: u16,
    pub spirit: u16,
    pub courage: u16,
}

impl PlayerStats {
    pub fn new(mastery_rank: u8) -> Self {
        Self {
            mastery_rank,
            ..Self::default()
        }
    }

    /// Total virtue points currently allocated.
    pub fn allocated(&self) -> u16 {
        self.grace + self.spirit + self.courage
    }
}

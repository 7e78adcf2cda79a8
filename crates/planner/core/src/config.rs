/// Planner configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlannerConfig {
    /// Virtue points every character has before mastery ranks are counted.
    pub base_virtue_points: u16,
}

impl PlannerConfig {
    // ===== compile-time constants =====
    /// Mote sockets per weapon and per pact. Armor carries none.
    pub const MAX_MOTE_SLOTS: usize = 3;
    /// Highest reachable mastery rank.
    pub const MAX_MASTERY_RANK: u8 = 254;
    /// Number of armor slots (helm, upper body, lower body, totem).
    pub const ARMOR_SLOTS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BASE_VIRTUE_POINTS: u16 = 4;

    pub fn new() -> Self {
        Self {
            base_virtue_points: Self::DEFAULT_BASE_VIRTUE_POINTS,
        }
    }

    /// Total virtue points available at the given mastery rank.
    pub fn virtue_budget(&self, mastery_rank: u8) -> u16 {
        self.base_virtue_points + u16::from(mastery_rank)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

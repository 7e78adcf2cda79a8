use super::VirtueBonus;

/// Pact record for the dedicated pact slot.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pact {
    pub alias: String,
    pub map_id: String,
    pub name: String,
    pub stats: PactStats,
}

/// Pact stat bag, keys matching the upstream content API.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PactStats {
    #[serde(rename = "BonusHP", default)]
    pub bonus_hp: Option<String>,
    #[serde(rename = "PhysicalDefence", default)]
    pub physical_defence: Option<String>,
    #[serde(rename = "MagickDefence", default)]
    pub magick_defence: Option<String>,
    #[serde(rename = "StabilityIncrease", default)]
    pub stability_increase: Option<String>,
    #[serde(rename = "BonusVirtue", default)]
    pub bonus_virtue: Option<VirtueBonus>,
}

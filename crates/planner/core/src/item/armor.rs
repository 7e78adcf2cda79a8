use super::VirtueBonus;

/// Armor piece (helm, upper body, lower body, or totem).
///
/// Armor never carries mote sockets; totems are the only armor pieces with
/// a virtue line.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Armor {
    pub alias: String,
    pub map_id: String,
    pub name: String,
    pub stats: ArmorStats,
}

/// Armor stat bag, keys matching the upstream content API.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArmorStats {
    #[serde(rename = "PhysicalDefence", default)]
    pub physical_defence: Option<String>,
    #[serde(rename = "MagickDefence", default)]
    pub magick_defence: Option<String>,
    #[serde(rename = "StabilityIncrease", default)]
    pub stability_increase: Option<String>,
    #[serde(rename = "Virtue", default)]
    pub virtue: Option<VirtueBonus>,
}

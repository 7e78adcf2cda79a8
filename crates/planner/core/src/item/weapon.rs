/// Weapon record for either hand slot.
///
/// Weapons expose per-level stat blocks; aggregation prefers the level 30
/// block and falls back to level 0 when the upstream record has no
/// levelled data.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Weapon {
    pub alias: String,
    pub map_id: String,
    pub name: String,
    pub stats: WeaponStats,
}

/// Weapon stat blocks keyed by level, as served upstream.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WeaponStats {
    #[serde(rename = "Level0", default)]
    pub level0: Option<WeaponLevelStats>,
    #[serde(rename = "Level30", default)]
    pub level30: Option<WeaponLevelStats>,
}

impl WeaponStats {
    /// Stat block used for display totals: level 30 when present, else
    /// level 0, else nothing.
    pub fn displayed(&self) -> Option<&WeaponLevelStats> {
        self.level30.as_ref().or(self.level0.as_ref())
    }
}

/// Combat stats of one weapon level block.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WeaponLevelStats {
    #[serde(rename = "Attack", default)]
    pub attack: Option<String>,
    #[serde(rename = "ChargedAttack", default)]
    pub charged_attack: Option<String>,
    #[serde(rename = "Stagger", default)]
    pub stagger: Option<String>,
    /// Smite chance, usually "N/D" odds ("3/50"). Read with
    /// [`Self::smite_chance`], never with the generic extractor: the two
    /// read the same syntax differently.
    #[serde(rename = "Smite", default)]
    pub smite: Option<String>,
}

impl WeaponLevelStats {
    /// Smite odds as a percentage, when the block has a Smite line.
    pub fn smite_chance(&self) -> Option<crate::stats::SmiteChance> {
        self.smite
            .as_deref()
            .map(crate::stats::SmiteChance::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smite_line_reads_as_odds() {
        let block = WeaponLevelStats {
            smite: Some("3/50".to_owned()),
            ..WeaponLevelStats::default()
        };
        assert_eq!(block.smite_chance().unwrap().percent, 6.0);

        let bare = WeaponLevelStats::default();
        assert!(bare.smite_chance().is_none());
    }
}

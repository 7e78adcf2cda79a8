//! Consolidated stat snapshot over a full equipment selection.

use crate::item::{ArmorStats, PactStats, Virtue};
use crate::loadout::{EquipmentSelection, WeaponDisplay};

use super::effects::ParsedEffects;
use super::numeric::extract;

/// Derived totals for the whole selection.
///
/// Pure output: never stored, always recomputed from the selection. A
/// zero field means "no contribution" (the UI hides the row), not
/// "unknown".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsolidatedStats {
    pub physical_defence: i32,
    pub magick_defence: i32,
    pub stability: i32,
    pub bonus_hp: i32,

    /// Combat stats of the displayed weapon only.
    pub attack: i32,
    pub charged_attack: i32,
    pub stagger: i32,

    /// Virtue totals across totems, pact, and all equipped motes.
    pub grace: i32,
    pub spirit: i32,
    pub courage: i32,

    pub armor_pieces: u8,
    pub weapons_equipped: u8,
    pub has_pact: bool,
}

impl ConsolidatedStats {
    /// Fold the selection into one snapshot.
    ///
    /// `display` gates only the attack/charged-attack/stagger columns:
    /// the hidden weapon's combat stats are left out of the totals, but
    /// its motes' virtue bonuses still count.
    pub fn compute(selection: &EquipmentSelection, display: WeaponDisplay) -> Self {
        let mut stats = Self::default();

        for (_, armor) in selection.armor_slots() {
            let Some(armor) = armor else { continue };
            stats.armor_pieces += 1;
            stats.add_armor_stats(&armor.stats);
        }

        for (slot, equipped) in selection.weapon_slots() {
            let Some(equipped) = equipped else { continue };
            stats.weapons_equipped += 1;

            if slot == display.slot()
                && let Some(block) = equipped.weapon.stats.displayed()
            {
                stats.attack += extract(block.attack.as_deref());
                stats.charged_attack += extract(block.charged_attack.as_deref());
                stats.stagger += extract(block.stagger.as_deref());
            }

            for mote in equipped.socketed() {
                stats.add_mote_virtues(&ParsedEffects::parse(&mote.effects));
            }
        }

        if let Some(equipped) = &selection.pact {
            stats.has_pact = true;
            stats.add_pact_stats(&equipped.pact.stats);
            for mote in equipped.socketed() {
                stats.add_mote_virtues(&ParsedEffects::parse(&mote.effects));
            }
        }

        stats
    }

    fn add_armor_stats(&mut self, armor: &ArmorStats) {
        self.physical_defence += extract(armor.physical_defence.as_deref());
        self.magick_defence += extract(armor.magick_defence.as_deref());
        self.stability += extract(armor.stability_increase.as_deref());
        if let Some(bonus) = &armor.virtue {
            self.add_virtue(bonus.virtue, extract(Some(&bonus.value)));
        }
    }

    fn add_pact_stats(&mut self, pact: &PactStats) {
        self.bonus_hp += extract(pact.bonus_hp.as_deref());
        self.physical_defence += extract(pact.physical_defence.as_deref());
        self.magick_defence += extract(pact.magick_defence.as_deref());
        self.stability += extract(pact.stability_increase.as_deref());
        if let Some(bonus) = &pact.bonus_virtue {
            self.add_virtue(bonus.virtue, extract(Some(&bonus.value)));
        }
    }

    /// Mote virtue bonuses count regardless of which weapon is displayed.
    fn add_mote_virtues(&mut self, parsed: &ParsedEffects) {
        self.grace += parsed.grace;
        self.spirit += parsed.spirit;
        self.courage += parsed.courage;
    }

    fn add_virtue(&mut self, virtue: Virtue, value: i32) {
        match virtue {
            Virtue::Grace => self.grace += value,
            Virtue::Spirit => self.spirit += value,
            Virtue::Courage => self.courage += value,
            Virtue::AllVirtues => {
                self.grace += value;
                self.spirit += value;
                self.courage += value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{
        Armor, ArmorStats, Mote, Pact, PactStats, Virtue, VirtueBonus, Weapon, WeaponLevelStats,
        WeaponStats,
    };
    use crate::loadout::{EquippedPact, EquippedWeapon};

    fn armor(alias: &str, stats: ArmorStats) -> Armor {
        Armor {
            alias: alias.to_owned(),
            map_id: format!("{alias}-map"),
            name: alias.to_owned(),
            stats,
        }
    }

    fn weapon(alias: &str, stats: WeaponStats) -> Weapon {
        Weapon {
            alias: alias.to_owned(),
            map_id: format!("{alias}-map"),
            name: alias.to_owned(),
            stats,
        }
    }

    fn mote(id: &str, effects: &[&str]) -> Mote {
        Mote {
            id: id.into(),
            name: id.to_owned(),
            effects: effects.iter().map(|e| (*e).to_owned()).collect(),
        }
    }

    #[test]
    fn all_virtues_totem_feeds_every_total() {
        let mut selection = EquipmentSelection::new();
        selection.totem = Some(armor(
            "totem",
            ArmorStats {
                virtue: Some(VirtueBonus {
                    virtue: Virtue::AllVirtues,
                    value: "3".to_owned(),
                }),
                ..ArmorStats::default()
            },
        ));

        let stats = ConsolidatedStats::compute(&selection, WeaponDisplay::Primary);
        assert_eq!(stats.grace, 3);
        assert_eq!(stats.spirit, 3);
        assert_eq!(stats.courage, 3);
        assert_eq!(stats.armor_pieces, 1);
    }

    #[test]
    fn armor_defence_strings_are_summed() {
        let mut selection = EquipmentSelection::new();
        selection.helm = Some(armor(
            "helm",
            ArmorStats {
                physical_defence: Some("10 Physical Defence".to_owned()),
                magick_defence: Some("4".to_owned()),
                ..ArmorStats::default()
            },
        ));
        selection.upper_body = Some(armor(
            "chest",
            ArmorStats {
                physical_defence: Some("7".to_owned()),
                stability_increase: Some("2/10".to_owned()),
                ..ArmorStats::default()
            },
        ));

        let stats = ConsolidatedStats::compute(&selection, WeaponDisplay::Primary);
        assert_eq!(stats.physical_defence, 17);
        assert_eq!(stats.magick_defence, 4);
        assert_eq!(stats.stability, 2);
        assert_eq!(stats.armor_pieces, 2);
    }

    #[test]
    fn level_30_block_wins_over_level_0() {
        let mut selection = EquipmentSelection::new();
        selection.primary = Some(EquippedWeapon::new(weapon(
            "sword",
            WeaponStats {
                level0: Some(WeaponLevelStats {
                    attack: Some("10".to_owned()),
                    ..WeaponLevelStats::default()
                }),
                level30: Some(WeaponLevelStats {
                    attack: Some("42".to_owned()),
                    stagger: Some("5".to_owned()),
                    ..WeaponLevelStats::default()
                }),
            },
        )));

        let stats = ConsolidatedStats::compute(&selection, WeaponDisplay::Primary);
        assert_eq!(stats.attack, 42);
        assert_eq!(stats.stagger, 5);
        assert_eq!(stats.weapons_equipped, 1);
    }

    #[test]
    fn hidden_weapon_combat_stats_are_not_double_counted() {
        let mut selection = EquipmentSelection::new();
        selection.primary = Some(EquippedWeapon::new(weapon(
            "sword",
            WeaponStats {
                level0: Some(WeaponLevelStats {
                    attack: Some("10".to_owned()),
                    ..WeaponLevelStats::default()
                }),
                ..WeaponStats::default()
            },
        )));
        selection.sidearm = Some(EquippedWeapon::new(weapon(
            "dagger",
            WeaponStats {
                level0: Some(WeaponLevelStats {
                    attack: Some("99".to_owned()),
                    ..WeaponLevelStats::default()
                }),
                ..WeaponStats::default()
            },
        )));

        let stats = ConsolidatedStats::compute(&selection, WeaponDisplay::Primary);
        assert_eq!(stats.attack, 10);
        assert_eq!(stats.weapons_equipped, 2);
    }

    #[test]
    fn sidearm_mote_virtues_count_while_primary_is_displayed() {
        let mut selection = EquipmentSelection::new();
        let mut sidearm = EquippedWeapon::new(weapon("dagger", WeaponStats::default()));
        sidearm.motes = vec![Some(mote("mote-courage", &["1 Courage"]))];
        selection.sidearm = Some(sidearm);

        let stats = ConsolidatedStats::compute(&selection, WeaponDisplay::Primary);
        assert_eq!(stats.courage, 1);
        // The sidearm's combat stats stay out of the displayed totals.
        assert_eq!(stats.attack, 0);
    }

    #[test]
    fn pact_contributes_hp_defences_and_motes() {
        let mut selection = EquipmentSelection::new();
        let pact = Pact {
            alias: "pact".to_owned(),
            map_id: "pact-map".to_owned(),
            name: "pact".to_owned(),
            stats: PactStats {
                bonus_hp: Some("25".to_owned()),
                physical_defence: Some("3".to_owned()),
                bonus_virtue: Some(VirtueBonus {
                    virtue: Virtue::Spirit,
                    value: "2".to_owned(),
                }),
                ..PactStats::default()
            },
        };
        let mut equipped = EquippedPact::new(pact);
        equipped.motes = vec![None, Some(mote("mote-grace", &["2 Grace"]))];
        selection.pact = Some(equipped);

        let stats = ConsolidatedStats::compute(&selection, WeaponDisplay::Primary);
        assert!(stats.has_pact);
        assert_eq!(stats.bonus_hp, 25);
        assert_eq!(stats.physical_defence, 3);
        assert_eq!(stats.spirit, 2);
        assert_eq!(stats.grace, 2);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let mut selection = EquipmentSelection::new();
        selection.helm = Some(armor(
            "helm",
            ArmorStats {
                physical_defence: Some("10".to_owned()),
                ..ArmorStats::default()
            },
        ));
        let mut primary = EquippedWeapon::new(weapon("sword", WeaponStats::default()));
        primary.motes = vec![Some(mote("mote", &["2 Grace", "10 Attack Damage"]))];
        selection.primary = Some(primary);

        let first = ConsolidatedStats::compute(&selection, WeaponDisplay::Primary);
        let second = ConsolidatedStats::compute(&selection, WeaponDisplay::Primary);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_selection_is_all_zero() {
        let stats = ConsolidatedStats::compute(&EquipmentSelection::new(), WeaponDisplay::Primary);
        assert_eq!(stats, ConsolidatedStats::default());
    }
}

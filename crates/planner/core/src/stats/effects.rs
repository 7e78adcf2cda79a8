//! Mote effect text recognition.
//!
//! Effects arrive as free-text lines ("2 Grace", "10 Attack Damage",
//! "Heals nearby allies"). Each line feeds exactly one recognition rule,
//! first match wins. Lines that carry an extractable weapon number are
//! still kept verbatim in `other_effects` so the UI can display them;
//! only pure-virtue lines are consumed entirely. `other_effects` is
//! therefore NOT the complement of "recognized" - it is the display list
//! minus virtue lines.

use std::sync::LazyLock;

use regex::Regex;

use super::numeric::extract;

static VIRTUE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+)\s+(grace|spirit|courage)\s*$").expect("virtue line regex")
});

static DECIMAL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("decimal number regex"));

const CHARGED_DAMAGE: &str = "Fully-Charged Heavy Damage";
const ATTACK_DAMAGE: &str = "Attack Damage";
const SMITE_CHANCE: &str = "Smite Chance";

/// Weapon-facing numeric bonuses extracted from mote effects.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WeaponEffectBonus {
    pub attack_damage: i32,
    pub charged_attack_damage: i32,
    pub smite_chance_percent: f64,
}

/// Everything recognized in a set of effect strings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedEffects {
    pub grace: i32,
    pub spirit: i32,
    pub courage: i32,
    pub weapon: WeaponEffectBonus,
    /// Effect lines preserved verbatim for display.
    pub other_effects: Vec<String>,
}

impl ParsedEffects {
    /// Run every effect line through the recognition rules.
    pub fn parse<S: AsRef<str>>(effects: &[S]) -> Self {
        let mut parsed = Self::default();
        for effect in effects {
            parsed.absorb(effect.as_ref());
        }
        parsed
    }

    /// Apply one effect line; first matching rule wins.
    fn absorb(&mut self, effect: &str) {
        if let Some(captures) = VIRTUE_LINE.captures(effect) {
            let value: i32 = captures[1].parse().unwrap_or(0);
            match captures[2].to_ascii_lowercase().as_str() {
                "grace" => self.grace += value,
                "spirit" => self.spirit += value,
                _ => self.courage += value,
            }
            return;
        }

        if effect.contains(CHARGED_DAMAGE) {
            self.weapon.charged_attack_damage += extract(Some(effect));
        } else if effect.contains(ATTACK_DAMAGE) {
            // Flat attack bonuses carry into charged attacks too.
            let value = extract(Some(effect));
            self.weapon.attack_damage += value;
            self.weapon.charged_attack_damage += value;
        } else if effect.contains(SMITE_CHANCE) {
            if let Some(number) = DECIMAL_NUMBER.find(effect) {
                self.weapon.smite_chance_percent +=
                    number.as_str().parse::<f64>().unwrap_or(0.0);
            }
        }

        self.other_effects.push(effect.to_owned());
    }

    /// Fold another parse result into this one.
    pub fn merge(&mut self, other: ParsedEffects) {
        self.grace += other.grace;
        self.spirit += other.spirit;
        self.courage += other.courage;
        self.weapon.attack_damage += other.weapon.attack_damage;
        self.weapon.charged_attack_damage += other.weapon.charged_attack_damage;
        self.weapon.smite_chance_percent += other.weapon.smite_chance_percent;
        self.other_effects.extend(other.other_effects);
    }
}

//! Weapon profiles: base damage, critical properties and rider damage

use serde::{Deserialize, Serialize};

use crate::combat::dice::DiceDescriptor;
use crate::core::error::{Result, SimError};

/// Typed rider damage carried by a weapon (fire, divine, flat positive...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryDamage {
    pub name: String,
    pub damage: DiceDescriptor,
    /// Reduced by the target's defensive essence
    #[serde(default)]
    pub resistable: bool,
}

impl SecondaryDamage {
    pub fn new(name: impl Into<String>, damage: DiceDescriptor, resistable: bool) -> Self {
        Self {
            name: name.into(),
            damage,
            resistable,
        }
    }
}

/// Weapon used for every attack in the simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponProfile {
    pub name: String,
    pub damage: DiceDescriptor,
    /// Flat bonus added per damage roll
    #[serde(default)]
    pub damage_bonus: i64,
    /// Natural rolls at or above this may crit
    #[serde(default = "default_threat_range")]
    pub threat_range: u32,
    /// Damage rolls made on a critical hit
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: u32,
    /// Rider damage, in the order it is resolved
    #[serde(default)]
    pub other_damage: Vec<SecondaryDamage>,
}

fn default_threat_range() -> u32 {
    20
}

fn default_crit_multiplier() -> u32 {
    2
}

impl WeaponProfile {
    /// Dwarven waraxe build used by the bundled scenario
    pub fn dwaraxe() -> Self {
        Self {
            name: "Dwaraxe SS".to_string(),
            damage: DiceDescriptor::dice(1, 10),
            damage_bonus: 4 + 19,
            threat_range: 19,
            crit_multiplier: 3,
            other_damage: vec![
                SecondaryDamage::new("Positive", DiceDescriptor::Constant(4), true),
                SecondaryDamage::new("Divine", DiceDescriptor::dice(1, 4), true),
                SecondaryDamage::new("Fire", DiceDescriptor::dice(1, 12), false),
                SecondaryDamage::new("Cold", DiceDescriptor::dice(1, 12), false),
            ],
        }
    }

    /// Bare weapon with no rider damage, 20/x2
    pub fn simple(name: &str, damage: DiceDescriptor, damage_bonus: i64) -> Self {
        Self {
            name: name.to_string(),
            damage,
            damage_bonus,
            threat_range: default_threat_range(),
            crit_multiplier: default_crit_multiplier(),
            other_damage: Vec::new(),
        }
    }

    /// Names of rider damage components, in weapon order
    pub fn secondary_names(&self) -> impl Iterator<Item = &str> + Clone {
        self.other_damage.iter().map(|d| d.name.as_str())
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=20).contains(&self.threat_range) {
            return Err(SimError::InvalidConfig(format!(
                "weapon threat_range ({}) must be within 1..=20",
                self.threat_range
            )));
        }

        if self.crit_multiplier == 0 {
            return Err(SimError::InvalidConfig(
                "weapon crit_multiplier must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

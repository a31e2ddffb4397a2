//! Defending target profile

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::combat::constants::PERCENTILE;
use crate::core::error::{Result, SimError};

/// Target defenses. Every AC in `ac_list` is evaluated independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetProfile {
    pub ac_list: Vec<i32>,
    /// Flat reduction on resistable rider damage
    #[serde(default)]
    pub defensive_essence: i64,
    /// Percent; the attacker is assumed to have Blind Fight
    #[serde(default)]
    pub concealment: u32,
    #[serde(default)]
    pub epic_dodge: bool,
    #[serde(default)]
    pub crit_immunity: bool,
    /// Percent of weapon damage ignored
    #[serde(default)]
    pub physical_immunity: u32,
    /// Flat reduction on weapon damage
    #[serde(default)]
    pub physical_damage_reduction: i64,
}

impl Default for TargetProfile {
    fn default() -> Self {
        Self {
            ac_list: (20..=70).step_by(5).collect(),
            defensive_essence: 5,
            concealment: 50,
            epic_dodge: false,
            crit_immunity: false,
            physical_immunity: 0,
            physical_damage_reduction: 0,
        }
    }
}

impl TargetProfile {
    /// Concealment after Blind Fight, as a percentage (`c² / 100`)
    ///
    /// Not clamped: above 100 every attack is concealed.
    pub fn blind_fight_concealment(&self) -> f64 {
        f64::from(self.concealment).powi(2) / f64::from(PERCENTILE)
    }

    /// Whether a percentile draw lands inside Blind Fight concealment
    ///
    /// `draw < c² / 100`, evaluated without rounding.
    pub fn conceals(&self, percentile_draw: u32) -> bool {
        self.concealment > 0
            && u64::from(percentile_draw) * u64::from(PERCENTILE)
                < u64::from(self.concealment).pow(2)
    }

    pub fn validate(&self) -> Result<()> {
        if self.ac_list.is_empty() {
            return Err(SimError::InvalidConfig("target ac_list is empty".into()));
        }

        let unique: BTreeSet<_> = self.ac_list.iter().collect();
        if unique.len() != self.ac_list.len() {
            return Err(SimError::InvalidConfig(format!(
                "target ac_list contains duplicates: {:?}",
                self.ac_list
            )));
        }

        if self.physical_immunity > 100 {
            return Err(SimError::InvalidConfig(format!(
                "physical_immunity ({}) must be within 0..=100",
                self.physical_immunity
            )));
        }

        if self.defensive_essence < 0 || self.physical_damage_reduction < 0 {
            return Err(SimError::InvalidConfig(
                "defensive_essence and physical_damage_reduction must not be negative".into(),
            ));
        }

        Ok(())
    }
}

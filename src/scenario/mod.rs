//! Scenario: the complete, immutable input of one simulation run

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::combat::{CharacterProfile, TargetProfile, WeaponProfile};
use crate::core::config::SimulationConfig;
use crate::core::error::{Result, SimError};

pub use loader::{load_scenario, scenario_path};

/// Weapon, attacker, defender and run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub simulation: SimulationConfig,
    pub weapon: WeaponProfile,
    #[serde(default)]
    pub character: CharacterProfile,
    #[serde(default)]
    pub target: TargetProfile,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            weapon: WeaponProfile::dwaraxe(),
            character: CharacterProfile::default(),
            target: TargetProfile::default(),
        }
    }
}

impl Scenario {
    /// Parse and validate a scenario from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content).map_err(SimError::from_scenario_toml)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Check every section; the first failure wins
    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;
        self.weapon.validate()?;
        self.character.validate()?;
        self.target.validate()
    }
}

//! Attacking character profile

use serde::{Deserialize, Serialize};

use crate::combat::constants::{MAX_ATTACKS_PER_SOURCE, MAX_ATTACK_BONUS};
use crate::core::error::{Result, SimError};

/// Attacker statistics that shape the attack sequence and critical feats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterProfile {
    /// Attack bonus of the first attack
    pub ab: i32,
    /// Attacks per round before dual wielding and extra attacks
    pub base_apr: u32,
    #[serde(default)]
    pub dual_wielding: bool,
    /// Haste-like bonus attacks
    #[serde(default)]
    pub extra_attack: u32,
    #[serde(default)]
    pub overwhelming_critical: bool,
    #[serde(default)]
    pub thundering_rage: bool,
    /// Monks lose 3 AB per attack instead of 5
    #[serde(default)]
    pub is_monk: bool,
}

impl Default for CharacterProfile {
    fn default() -> Self {
        Self {
            ab: 48,
            base_apr: 4,
            dual_wielding: false,
            extra_attack: 1,
            overwhelming_critical: false,
            thundering_rage: false,
            is_monk: false,
        }
    }
}

impl CharacterProfile {
    pub fn validate(&self) -> Result<()> {
        if self.base_apr == 0 {
            return Err(SimError::InvalidConfig(
                "character base_apr must be at least 1".into(),
            ));
        }

        if self.base_apr > MAX_ATTACKS_PER_SOURCE || self.extra_attack > MAX_ATTACKS_PER_SOURCE {
            return Err(SimError::InvalidConfig(format!(
                "character base_apr ({}) and extra_attack ({}) must not exceed {}",
                self.base_apr, self.extra_attack, MAX_ATTACKS_PER_SOURCE
            )));
        }

        if !(-MAX_ATTACK_BONUS..=MAX_ATTACK_BONUS).contains(&self.ab) {
            return Err(SimError::InvalidConfig(format!(
                "character ab ({}) must be within ±{}",
                self.ab, MAX_ATTACK_BONUS
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_character() {
        let character = CharacterProfile::default();
        assert_eq!(character.ab, 48);
        assert_eq!(character.base_apr, 4);
        assert_eq!(character.extra_attack, 1);
        assert!(character.validate().is_ok());
    }

    #[test]
    fn test_zero_apr_rejected() {
        let character = CharacterProfile {
            base_apr: 0,
            ..CharacterProfile::default()
        };
        assert!(character.validate().is_err());
    }

    #[test]
    fn test_oversized_sequence_rejected() {
        for character in [
            CharacterProfile {
                base_apr: u32::MAX,
                ..CharacterProfile::default()
            },
            CharacterProfile {
                extra_attack: 11,
                ..CharacterProfile::default()
            },
            CharacterProfile {
                ab: i32::MIN,
                ..CharacterProfile::default()
            },
        ] {
            assert!(matches!(character.validate(), Err(SimError::InvalidConfig(_))));
        }

        let widest = CharacterProfile {
            ab: -1000,
            base_apr: 10,
            extra_attack: 10,
            dual_wielding: true,
            ..CharacterProfile::default()
        };
        assert!(widest.validate().is_ok());
    }

    #[test]
    fn test_flags_default_off_in_toml() {
        let character: CharacterProfile = toml::from_str("ab = 30\nbase_apr = 3").unwrap();
        assert_eq!(character.extra_attack, 0);
        assert!(!character.dual_wielding);
        assert!(!character.is_monk);
    }
}

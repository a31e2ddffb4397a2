//! Attack sequence within a round
//!
//! A round is laid out as base attacks, then haste-like extra attacks, then
//! the two off-hand attacks granted by dual wielding. Each slot has its own
//! attack bonus derived from the character's AB and the per-attack penalty.

use crate::combat::character::CharacterProfile;
use crate::combat::constants::{
    AB_PENALTY_PER_ATTACK, DUAL_WIELD_EXTRA_ATTACKS, DUAL_WIELD_EXTRA_ATTACK_BONUS,
    MONK_AB_PENALTY_PER_ATTACK,
};
use crate::core::error::{Result, SimError};

/// Total attacks resolved per round
pub fn total_attacks_per_round(character: &CharacterProfile) -> u32 {
    let mut apr = character.base_apr;

    if character.dual_wielding {
        apr += DUAL_WIELD_EXTRA_ATTACKS;
    }

    apr + character.extra_attack
}

/// AB lost per successive attack
pub fn ab_penalty(character: &CharacterProfile) -> i32 {
    if character.is_monk {
        MONK_AB_PENALTY_PER_ATTACK
    } else {
        AB_PENALTY_PER_ATTACK
    }
}

/// Attack bonus for the 1-based `attack_index` within a round
///
/// Querying past the end of the round is a driver bug and returns
/// `AttackIndexOutOfRange`.
pub fn attack_bonus(character: &CharacterProfile, attack_index: u32) -> Result<i32> {
    let penalty = ab_penalty(character);
    let total = total_attacks_per_round(character);
    let base_apr = character.base_apr;
    let extra = character.extra_attack;

    if attack_index == 0 {
        return Err(SimError::AttackIndexOutOfRange {
            index: attack_index,
            total,
        });
    }

    if attack_index <= base_apr {
        return Ok(character.ab - penalty * (attack_index - 1) as i32);
    }

    if extra > 0 && attack_index <= base_apr + extra {
        // Extra attacks restart the progression at full AB
        let extra_index = (attack_index - base_apr - 1) as i32;
        let mut ab = character.ab - penalty * extra_index;

        if character.dual_wielding {
            ab += DUAL_WIELD_EXTRA_ATTACK_BONUS;
        }

        return Ok(ab);
    }

    if character.dual_wielding && attack_index <= total {
        // Off-hand attacks: first at 0, second at one penalty step
        let dual_index = (attack_index + 1 - total) as i32;
        return Ok(character.ab - penalty * dual_index);
    }

    Err(SimError::AttackIndexOutOfRange {
        index: attack_index,
        total,
    })
}

/// Attack bonuses for every slot of a round, in order
pub fn round_attack_bonuses(character: &CharacterProfile) -> Result<Vec<i32>> {
    (1..=total_attacks_per_round(character))
        .map(|index| attack_bonus(character, index))
        .collect()
}

//! Damage resolution for a landed hit
//!
//! Weapon damage and each rider component are rolled separately because the
//! target mitigates them differently: physical immunity and damage
//! reduction apply to the weapon roll, defensive essence to resistable riders.

use rand::Rng;

use crate::combat::character::CharacterProfile;
use crate::combat::constants::{CRIT_FEAT_DIE_FACES, THUNDERING_RAGE_DICE};
use crate::combat::dice::roll_dice;
use crate::combat::target::TargetProfile;
use crate::combat::weapons::WeaponProfile;

/// One rolled rider damage component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolledSecondary<'w> {
    pub name: &'w str,
    pub amount: i64,
    pub resistable: bool,
}

/// Number of damage rolls for a hit
pub fn roll_multiplier(weapon: &WeaponProfile, is_critical: bool) -> u32 {
    if is_critical {
        weapon.crit_multiplier
    } else {
        1
    }
}

/// Base weapon damage: dice and flat bonus, both multiplied on a crit
pub fn weapon_damage(weapon: &WeaponProfile, is_critical: bool, rng: &mut impl Rng) -> i64 {
    let multiplier = roll_multiplier(weapon, is_critical);
    weapon.damage.roll(multiplier, rng) + weapon.damage_bonus * i64::from(multiplier)
}

/// Roll every rider component in weapon order
pub fn secondary_damages<'w>(
    weapon: &'w WeaponProfile,
    is_critical: bool,
    rng: &mut impl Rng,
) -> Vec<RolledSecondary<'w>> {
    let multiplier = roll_multiplier(weapon, is_critical);

    weapon
        .other_damage
        .iter()
        .map(|component| RolledSecondary {
            name: &component.name,
            amount: component.damage.roll(multiplier, rng),
            resistable: component.resistable,
        })
        .collect()
}

/// Add Overwhelming Critical and Thundering Rage dice on a critical hit
pub fn apply_critical_feats(
    character: &CharacterProfile,
    weapon: &WeaponProfile,
    base_damage: i64,
    is_critical: bool,
    rng: &mut impl Rng,
) -> i64 {
    if !is_critical {
        return base_damage;
    }

    let mut damage = base_damage;

    if character.overwhelming_critical {
        damage += roll_dice(u64::from(weapon.crit_multiplier), CRIT_FEAT_DIE_FACES, rng);
    }

    if character.thundering_rage {
        damage += roll_dice(THUNDERING_RAGE_DICE, CRIT_FEAT_DIE_FACES, rng);
    }

    damage
}

/// Physical immunity (percent, rounded down) then flat DR, never below zero
pub fn apply_target_mitigation(weapon_damage: i64, target: &TargetProfile) -> i64 {
    let mut damage = weapon_damage;

    if target.physical_immunity > 0 {
        damage -= (damage * i64::from(target.physical_immunity)).div_euclid(100);
    }

    if target.physical_damage_reduction > 0 {
        damage -= target.physical_damage_reduction;
    }

    damage.max(0)
}

/// Defensive essence on a rider component
///
/// `None` when resistance pushes the amount below zero: such a component
/// contributes nothing to any total.
pub fn apply_resistance(amount: i64, resistable: bool, target: &TargetProfile) -> Option<i64> {
    let mut adjusted = amount;

    if resistable && target.defensive_essence > 0 {
        adjusted -= target.defensive_essence;
    }

    (adjusted >= 0).then_some(adjusted)
}

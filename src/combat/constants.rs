//! Combat rule constants - all tunable values in one place

/// Attack bonus lost per successive attack in a round
pub const AB_PENALTY_PER_ATTACK: i32 = 5;
/// Reduced penalty for monks
pub const MONK_AB_PENALTY_PER_ATTACK: i32 = 3;

/// Extra attacks granted by dual wielding
pub const DUAL_WIELD_EXTRA_ATTACKS: u32 = 2;
/// AB bonus on haste-like extra attacks while dual wielding
pub const DUAL_WIELD_EXTRA_ATTACK_BONUS: i32 = 2;

/// A natural 20 always hits
pub const AUTO_HIT_ROLL: u32 = 20;
/// A natural 1 always misses
pub const AUTO_MISS_ROLL: u32 = 1;

/// Faces of the die rolled by critical-hit feats
pub const CRIT_FEAT_DIE_FACES: u32 = 6;
/// Dice rolled by Thundering Rage on a critical hit
pub const THUNDERING_RAGE_DICE: u64 = 2;

/// Upper bound of the concealment percentile draw
pub const PERCENTILE: u32 = 100;

/// Upper bound on `base_apr` and on `extra_attack`
pub const MAX_ATTACKS_PER_SOURCE: u32 = 10;
/// Largest attack bonus magnitude a character may declare
pub const MAX_ATTACK_BONUS: i32 = 1000;

//! Combat rules: dice, profiles, attack sequence and damage resolution
//!
//! Everything here is pure rules. The encounter loop in `simulation` drives
//! these functions and owns the random source.

pub mod character;
pub mod constants;
pub mod damage;
pub mod dice;
pub mod sequence;
pub mod target;
pub mod weapons;

pub use character::CharacterProfile;
pub use damage::{
    apply_critical_feats, apply_resistance, apply_target_mitigation, secondary_damages,
    weapon_damage, RolledSecondary,
};
pub use dice::{parse_dice, roll_d20, roll_dice, DiceDescriptor};
pub use sequence::{attack_bonus, round_attack_bonuses, total_attacks_per_round};
pub use target::TargetProfile;
pub use weapons::{SecondaryDamage, WeaponProfile};

//! Encounter loop: rounds × attacks × target ACs
//!
//! Each attack against one AC walks a fixed precedence:
//! concealment, to-hit, epic dodge, critical confirmation. Damage is only
//! rolled for hits and folded straight into that AC's report.

use derive_more::Display;
use rand::Rng;

use crate::combat::constants::{AUTO_HIT_ROLL, AUTO_MISS_ROLL, PERCENTILE};
use crate::combat::{
    apply_critical_feats, apply_resistance, apply_target_mitigation, roll_d20,
    round_attack_bonuses, secondary_damages, weapon_damage, CharacterProfile, TargetProfile,
    WeaponProfile,
};
use crate::core::error::Result;
use crate::report::{EncounterReport, TargetReport};

/// How a single attack against a single AC resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AttackOutcome {
    #[display(fmt = "concealed")]
    Concealed,
    #[display(fmt = "miss")]
    Miss,
    #[display(fmt = "epic dodge")]
    EpicDodged,
    #[display(fmt = "hit")]
    Hit,
    #[display(fmt = "critical hit")]
    CriticalHit,
}

impl AttackOutcome {
    pub fn is_hit(self) -> bool {
        matches!(self, AttackOutcome::Hit | AttackOutcome::CriticalHit)
    }
}

/// Immutable encounter setup shared by every round
#[derive(Debug, Clone)]
pub struct Encounter<'a> {
    weapon: &'a WeaponProfile,
    character: &'a CharacterProfile,
    target: &'a TargetProfile,
    /// AB of each attack slot, index 0 is the first attack
    attack_bonuses: Vec<i32>,
}

impl<'a> Encounter<'a> {
    /// Build the encounter, resolving the attack sequence up front
    pub fn new(
        weapon: &'a WeaponProfile,
        character: &'a CharacterProfile,
        target: &'a TargetProfile,
    ) -> Result<Self> {
        Ok(Self {
            weapon,
            character,
            target,
            attack_bonuses: round_attack_bonuses(character)?,
        })
    }

    pub fn attacks_per_round(&self) -> u32 {
        self.attack_bonuses.len() as u32
    }

    pub fn attack_bonuses(&self) -> &[i32] {
        &self.attack_bonuses
    }

    /// Report with a zeroed entry for every AC and rider name
    pub fn empty_report(&self, seed: u64) -> EncounterReport {
        EncounterReport::new(
            seed,
            self.attacks_per_round(),
            &self.target.ac_list,
            self.weapon.secondary_names(),
        )
    }

    /// Decide the outcome of one attack
    ///
    /// `dodge_available` is this AC's epic dodge for the current round and is
    /// consumed by the first candidate hit.
    pub fn resolve_attack(
        &self,
        attack_bonus: i32,
        ac: i32,
        dodge_available: &mut bool,
        rng: &mut impl Rng,
    ) -> AttackOutcome {
        let hit_roll = roll_d20(rng);

        if self.target.concealment > 0 && self.target.conceals(rng.gen_range(1..=PERCENTILE)) {
            return AttackOutcome::Concealed;
        }

        let lands = (attack_bonus + hit_roll as i32 >= ac || hit_roll == AUTO_HIT_ROLL)
            && hit_roll != AUTO_MISS_ROLL;
        if !lands {
            return AttackOutcome::Miss;
        }

        if self.target.epic_dodge && *dodge_available {
            *dodge_available = false;
            return AttackOutcome::EpicDodged;
        }

        let threatens = !self.target.crit_immunity && hit_roll >= self.weapon.threat_range;
        if threatens && attack_bonus + roll_d20(rng) as i32 >= ac {
            AttackOutcome::CriticalHit
        } else {
            AttackOutcome::Hit
        }
    }

    /// Roll and mitigate damage for a hit, adding it to `report`
    pub fn apply_hit(&self, report: &mut TargetReport, is_critical: bool, rng: &mut impl Rng) {
        let base = weapon_damage(self.weapon, is_critical, rng);
        let riders = secondary_damages(self.weapon, is_critical, rng);

        let with_feats = apply_critical_feats(self.character, self.weapon, base, is_critical, rng);
        report.add_weapon_damage(apply_target_mitigation(with_feats, self.target));

        for rider in riders {
            if let Some(amount) = apply_resistance(rider.amount, rider.resistable, self.target) {
                report.add_bonus_damage(rider.name, amount);
            }
        }
    }

    /// Resolve one attack against one AC and record it
    pub fn run_attack(
        &self,
        report: &mut TargetReport,
        attack_bonus: i32,
        ac: i32,
        dodge_available: &mut bool,
        rng: &mut impl Rng,
    ) -> AttackOutcome {
        let outcome = self.resolve_attack(attack_bonus, ac, dodge_available, rng);

        match outcome {
            AttackOutcome::Concealed => report.record_concealed(),
            AttackOutcome::Miss => report.record_miss(),
            AttackOutcome::EpicDodged => report.record_epic_dodge(),
            AttackOutcome::Hit | AttackOutcome::CriticalHit => {
                let is_critical = outcome == AttackOutcome::CriticalHit;
                self.apply_hit(report, is_critical, rng);
                report.record_hit(is_critical);
            }
        }

        tracing::trace!(ac, attack_bonus, %outcome, "attack resolved");
        outcome
    }

    /// Simulate `rounds` full rounds against every AC
    pub fn run_rounds(&self, rounds: u32, seed: u64, rng: &mut impl Rng) -> EncounterReport {
        let ac_list = &self.target.ac_list;
        let mut partials: Vec<TargetReport> = ac_list
            .iter()
            .map(|_| TargetReport::new(self.weapon.secondary_names()))
            .collect();
        let mut dodges = vec![true; ac_list.len()];

        for _ in 0..rounds {
            dodges.fill(true);

            for &attack_bonus in &self.attack_bonuses {
                for ((&ac, report), dodge) in
                    ac_list.iter().zip(partials.iter_mut()).zip(dodges.iter_mut())
                {
                    self.run_attack(report, attack_bonus, ac, dodge, rng);
                }
            }
        }

        EncounterReport {
            seed,
            rounds,
            attacks_per_round: self.attacks_per_round(),
            targets: ac_list.iter().copied().zip(partials).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::DiceDescriptor;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn open_target(ac_list: Vec<i32>) -> TargetProfile {
        TargetProfile {
            ac_list,
            defensive_essence: 0,
            concealment: 0,
            ..TargetProfile::default()
        }
    }

    #[test]
    fn test_attack_sequence_resolved_up_front() {
        let weapon = WeaponProfile::dwaraxe();
        let character = CharacterProfile::default();
        let target = TargetProfile::default();
        let encounter = Encounter::new(&weapon, &character, &target).unwrap();

        assert_eq!(encounter.attacks_per_round(), 5);
        assert_eq!(encounter.attack_bonuses(), &[48, 43, 38, 33, 48]);
    }

    #[test]
    fn test_natural_one_always_misses_and_twenty_always_hits() {
        let weapon = WeaponProfile::dwaraxe();
        let character = CharacterProfile::default();
        let target = open_target(vec![10, 1000]);
        let encounter = Encounter::new(&weapon, &character, &target).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let mut low_ac_misses = 0;
        let mut high_ac_hits = 0;
        for _ in 0..4000 {
            let mut dodge = true;
            if !encounter.resolve_attack(48, 10, &mut dodge, &mut rng).is_hit() {
                low_ac_misses += 1;
            }
            if encounter.resolve_attack(48, 1000, &mut dodge, &mut rng).is_hit() {
                high_ac_hits += 1;
            }
        }

        // Roughly 5% each way
        assert!(low_ac_misses > 100 && low_ac_misses < 320, "{}", low_ac_misses);
        assert!(high_ac_hits > 100 && high_ac_hits < 320, "{}", high_ac_hits);
    }

    #[test]
    fn test_epic_dodge_consumed_once() {
        let weapon = WeaponProfile::dwaraxe();
        let character = CharacterProfile::default();
        let target = TargetProfile {
            epic_dodge: true,
            ..open_target(vec![10])
        };
        let encounter = Encounter::new(&weapon, &character, &target).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let mut dodge = true;
        let mut outcome = AttackOutcome::Miss;
        while outcome == AttackOutcome::Miss {
            outcome = encounter.resolve_attack(48, 10, &mut dodge, &mut rng);
        }
        assert_eq!(outcome, AttackOutcome::EpicDodged);
        assert!(!dodge);

        for _ in 0..200 {
            assert_ne!(
                encounter.resolve_attack(48, 10, &mut dodge, &mut rng),
                AttackOutcome::EpicDodged
            );
        }
    }

    #[test]
    fn test_crit_immunity_blocks_criticals() {
        let weapon = WeaponProfile {
            threat_range: 2,
            ..WeaponProfile::dwaraxe()
        };
        let character = CharacterProfile::default();
        let target = TargetProfile {
            crit_immunity: true,
            ..open_target(vec![10])
        };
        let encounter = Encounter::new(&weapon, &character, &target).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for _ in 0..1000 {
            let mut dodge = true;
            assert_ne!(
                encounter.resolve_attack(48, 10, &mut dodge, &mut rng),
                AttackOutcome::CriticalHit
            );
        }
    }

    #[test]
    fn test_critical_hit_damage_range() {
        // threat 19-20, x3: crit damage is 3d10 + 3 * 23
        let weapon = WeaponProfile {
            other_damage: Vec::new(),
            ..WeaponProfile::dwaraxe()
        };
        let character = CharacterProfile::default();
        let target = open_target(vec![10]);
        let encounter = Encounter::new(&weapon, &character, &target).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(19);

        for _ in 0..200 {
            let mut report = TargetReport::new(weapon.secondary_names());
            encounter.apply_hit(&mut report, true, &mut rng);
            assert!((72..=99).contains(&report.total_weapon_damage));
        }
    }

    #[test]
    fn test_resisted_rider_excluded() {
        let weapon = WeaponProfile {
            other_damage: vec![crate::combat::SecondaryDamage::new(
                "Positive",
                DiceDescriptor::Constant(3),
                true,
            )],
            ..WeaponProfile::simple("Dagger", DiceDescriptor::dice(1, 4), 0)
        };
        let character = CharacterProfile::default();
        let target = TargetProfile {
            defensive_essence: 5,
            ..open_target(vec![10])
        };
        let encounter = Encounter::new(&weapon, &character, &target).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(23);

        let mut report = TargetReport::new(weapon.secondary_names());
        encounter.apply_hit(&mut report, false, &mut rng);
        assert_eq!(report.total_bonus_damage.get("Positive"), Some(&0));
        assert_eq!(report.total_damage, report.total_weapon_damage);
    }

    #[test]
    fn test_run_rounds_totals() {
        let weapon = WeaponProfile::dwaraxe();
        let character = CharacterProfile::default();
        let target = TargetProfile::default();
        let encounter = Encounter::new(&weapon, &character, &target).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        let report = encounter.run_rounds(40, 99, &mut rng);
        assert_eq!(report.rounds, 40);
        for (ac, totals) in &report.targets {
            assert_eq!(totals.total_attack, 200, "AC {}", ac);
            assert_eq!(totals.total_hit + totals.total_miss, totals.total_attack);
        }
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(AttackOutcome::EpicDodged.to_string(), "epic dodge");
        assert_eq!(AttackOutcome::CriticalHit.to_string(), "critical hit");
    }
}

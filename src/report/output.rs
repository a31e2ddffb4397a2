//! Aggregated simulation output and serialization

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Running totals for one target AC
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetReport {
    pub total_attack: u64,
    pub total_hit: u64,
    /// Includes concealed and epic-dodged attacks
    pub total_miss: u64,
    pub total_concealed: u64,
    pub total_epic_dodge: u64,
    pub total_crit: u64,
    pub total_damage: i64,
    pub total_weapon_damage: i64,
    pub total_bonus_damage: BTreeMap<String, i64>,
}

impl TargetReport {
    /// Empty report with every rider damage name present at zero
    pub fn new<'a>(bonus_names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            total_bonus_damage: bonus_names
                .into_iter()
                .map(|name| (name.to_string(), 0))
                .collect(),
            ..Self::default()
        }
    }

    pub(crate) fn record_concealed(&mut self) {
        self.total_attack += 1;
        self.total_miss += 1;
        self.total_concealed += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.total_attack += 1;
        self.total_miss += 1;
    }

    pub(crate) fn record_epic_dodge(&mut self) {
        self.total_attack += 1;
        self.total_miss += 1;
        self.total_epic_dodge += 1;
    }

    pub(crate) fn record_hit(&mut self, is_critical: bool) {
        self.total_attack += 1;
        self.total_hit += 1;
        if is_critical {
            self.total_crit += 1;
        }
    }

    pub(crate) fn add_weapon_damage(&mut self, amount: i64) {
        self.total_weapon_damage += amount;
        self.total_damage += amount;
    }

    pub(crate) fn add_bonus_damage(&mut self, name: &str, amount: i64) {
        *self.total_bonus_damage.entry(name.to_string()).or_insert(0) += amount;
        self.total_damage += amount;
    }

    /// Fold another partial report for the same AC into this one
    pub fn merge(&mut self, other: &TargetReport) {
        self.total_attack += other.total_attack;
        self.total_hit += other.total_hit;
        self.total_miss += other.total_miss;
        self.total_concealed += other.total_concealed;
        self.total_epic_dodge += other.total_epic_dodge;
        self.total_crit += other.total_crit;
        self.total_damage += other.total_damage;
        self.total_weapon_damage += other.total_weapon_damage;

        for (name, amount) in &other.total_bonus_damage {
            *self.total_bonus_damage.entry(name.clone()).or_insert(0) += amount;
        }
    }

    /// Sum of all rider damage
    pub fn bonus_damage_total(&self) -> i64 {
        self.total_bonus_damage.values().sum()
    }

    pub fn average_damage_per_attack(&self) -> f64 {
        ratio(self.total_damage as f64, self.total_attack as f64)
    }

    pub fn average_damage_per_round(&self, rounds: u32) -> f64 {
        ratio(self.total_damage as f64, f64::from(rounds))
    }

    pub fn hit_percentage(&self) -> f64 {
        percentage(self.total_hit as f64, self.total_attack as f64)
    }

    pub fn miss_percentage(&self) -> f64 {
        percentage(self.total_miss as f64, self.total_attack as f64)
    }

    pub fn concealed_share_of_misses(&self) -> f64 {
        percentage(self.total_concealed as f64, self.total_miss as f64)
    }

    pub fn epic_dodge_share_of_misses(&self) -> f64 {
        percentage(self.total_epic_dodge as f64, self.total_miss as f64)
    }

    pub fn crit_share_of_hits(&self) -> f64 {
        percentage(self.total_crit as f64, self.total_hit as f64)
    }

    pub fn weapon_damage_share(&self) -> f64 {
        percentage(self.total_weapon_damage as f64, self.total_damage as f64)
    }

    pub fn bonus_damage_share(&self) -> f64 {
        percentage(self.bonus_damage_total() as f64, self.total_damage as f64)
    }
}

fn ratio(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        value / total
    }
}

fn percentage(value: f64, total: f64) -> f64 {
    100.0 * ratio(value, total)
}

/// Complete simulation output, keyed by target AC
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterReport {
    /// Seed the run can be replayed with
    pub seed: u64,
    pub rounds: u32,
    pub attacks_per_round: u32,
    pub targets: BTreeMap<i32, TargetReport>,
}

impl EncounterReport {
    /// One empty target report per AC
    pub fn new<'a>(
        seed: u64,
        attacks_per_round: u32,
        ac_list: &[i32],
        bonus_names: impl IntoIterator<Item = &'a str> + Clone,
    ) -> Self {
        Self {
            seed,
            rounds: 0,
            attacks_per_round,
            targets: ac_list
                .iter()
                .map(|&ac| (ac, TargetReport::new(bonus_names.clone())))
                .collect(),
        }
    }

    pub fn target(&self, ac: i32) -> Option<&TargetReport> {
        self.targets.get(&ac)
    }

    /// Merge a report covering other rounds of the same encounter
    pub fn merge(mut self, other: EncounterReport) -> Self {
        self.rounds += other.rounds;

        for (ac, partial) in &other.targets {
            self.targets
                .entry(*ac)
                .or_default()
                .merge(partial);
        }

        self
    }

    /// `(ac, average damage per attack)` in ascending AC order
    pub fn damage_curve(&self) -> Vec<(i32, f64)> {
        self.targets
            .iter()
            .map(|(&ac, report)| (ac, report.average_damage_per_attack()))
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let best = self
            .damage_curve()
            .into_iter()
            .map(|(ac, avg)| format!("AC {}: {:.2}", ac, avg))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Simulated {} rounds at {} APR against {} ACs (seed {})\nAvg dmg per attack: {}",
            self.rounds,
            self.attacks_per_round,
            self.targets.len(),
            self.seed,
            best,
        )
    }
}

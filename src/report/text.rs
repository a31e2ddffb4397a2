//! Plain-text and CSV renderers for an encounter report

use crate::combat::{total_attacks_per_round, WeaponProfile};
use crate::report::output::{EncounterReport, TargetReport};
use crate::scenario::Scenario;

const TITLE_WIDTH: usize = 35;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Writes left-aligned `TITLE   value` lines
struct Lines(String);

impl Lines {
    fn row(&mut self, title: &str, value: impl std::fmt::Display) {
        self.0
            .push_str(&format!("{:<width$}{}\n", title, value, width = TITLE_WIDTH));
    }

    fn blank(&mut self) {
        self.0.push('\n');
    }
}

/// Full text report: the build header followed by one block per AC
pub fn render_text(scenario: &Scenario, report: &EncounterReport) -> String {
    let mut out = Lines(String::new());
    let weapon = &scenario.weapon;
    let character = &scenario.character;
    let target = &scenario.target;

    out.row("ROUNDS", report.rounds);
    out.row("SEED", report.seed);
    out.blank();
    out.row("WEAPON NAME", &weapon.name);
    out.row("WEAPON DAMAGE", weapon.damage);
    out.row("WEAPON DAMAGE BONUS", weapon.damage_bonus);
    out.row("WEAPON THREAT RANGE", weapon.threat_range);
    out.row("WEAPON CRITICAL HIT MULTIPLIER", weapon.crit_multiplier);
    out.row("WEAPON OTHER DAMAGE BONUSES", "");
    for rider in &weapon.other_damage {
        out.row(&format!("    * {}", rider.name.to_uppercase()), rider.damage);
    }
    out.blank();
    out.row("CHARACTER AB", character.ab);
    out.row("CHARACTER TOTAL APR", total_attacks_per_round(character));
    out.row("CHARACTER IS MONK", yes_no(character.is_monk));
    out.row(
        "CHARACTER OVERWHELMING CRITICAL",
        yes_no(character.overwhelming_critical),
    );
    out.row("CHARACTER THUNDERING RAGE", yes_no(character.thundering_rage));
    out.blank();
    out.row("TARGET DEFENSIVE ESSENCE", target.defensive_essence);
    out.row(
        "TARGET CONCEALMENT",
        format!(
            "{}% ({:.2}% w/ blind fight)",
            target.concealment,
            target.blind_fight_concealment()
        ),
    );
    out.row("TARGET EPIC DODGE", yes_no(target.epic_dodge));
    out.row("TARGET CRITICAL IMMUNITY", yes_no(target.crit_immunity));
    out.row("TARGET PHYSICAL IMMUNITY", format!("{}%", target.physical_immunity));
    out.row("TARGET PHYSICAL DAMAGE REDUCTION", target.physical_damage_reduction);

    out.0.push_str("\n-=[RESULTS]=-\n");
    for (ac, totals) in &report.targets {
        render_target(&mut out, weapon, *ac, totals, report.rounds);
    }

    out.0
}

fn render_target(
    out: &mut Lines,
    weapon: &WeaponProfile,
    ac: i32,
    totals: &TargetReport,
    rounds: u32,
) {
    out.blank();
    out.row("TARGET AC", ac);
    out.row("TOTAL ATTACK", totals.total_attack);
    out.row(
        "TOTAL HIT",
        format!(
            "{} ({:.2}% of total attacks)",
            totals.total_hit,
            totals.hit_percentage()
        ),
    );
    out.row(
        "TOTAL MISS",
        format!(
            "{} ({:.2}% of total attacks)",
            totals.total_miss,
            totals.miss_percentage()
        ),
    );
    out.row(
        "    * CONCEALED ATTACKS",
        format!(
            "{} ({:.2}% of total misses)",
            totals.total_concealed,
            totals.concealed_share_of_misses()
        ),
    );
    out.row(
        "    * EPIC DODGE",
        format!(
            "{} ({:.2}% of total misses)",
            totals.total_epic_dodge,
            totals.epic_dodge_share_of_misses()
        ),
    );
    out.row(
        "TOTAL CRITICAL HIT",
        format!(
            "{} ({:.2}% of total hits)",
            totals.total_crit,
            totals.crit_share_of_hits()
        ),
    );
    out.blank();
    out.row("TOTAL DAMAGE", totals.total_damage);
    out.row(
        "TOTAL WEAPON DAMAGE",
        format!(
            "{} ({:.2}% of total damage)",
            totals.total_weapon_damage,
            totals.weapon_damage_share()
        ),
    );
    out.row(
        "TOTAL OTHER DAMAGE",
        format!(
            "{} ({:.2}% of total damage)",
            totals.bonus_damage_total(),
            totals.bonus_damage_share()
        ),
    );
    // Weapon order, not map order
    for name in weapon.secondary_names() {
        let amount = totals.total_bonus_damage.get(name).copied().unwrap_or(0);
        out.row(&format!("    * {}", name.to_uppercase()), amount);
    }
    out.blank();
    out.row(
        "AVERAGE DAMAGE PER ATTACK",
        format!("{:.2}", totals.average_damage_per_attack()),
    );
    out.row(
        "AVERAGE DAMAGE PER ROUND",
        format!("{:.2}", totals.average_damage_per_round(rounds)),
    );
    out.0.push_str(&"=".repeat(50));
    out.blank();
}

/// `ac,avg_damage_per_attack` rows, ascending AC
pub fn render_csv(report: &EncounterReport) -> String {
    let mut out = String::from("ac,avg_damage_per_attack\n");
    for (ac, avg) in report.damage_curve() {
        out.push_str(&format!("{},{:.4}\n", ac, avg));
    }
    out
}

//! Monte Carlo encounter simulation
//!
//! Sequential runs follow the round → attack → AC order with one generator.
//! Parallel runs split the rounds into chunks; each chunk owns a ChaCha
//! stream and its own epic dodge state, and the partial reports are merged.

pub mod encounter;

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::core::error::Result;
use crate::report::EncounterReport;
use crate::scenario::Scenario;

pub use encounter::{AttackOutcome, Encounter};

/// Seed from the config, or a fresh one
fn resolve_seed(scenario: &Scenario) -> u64 {
    scenario.simulation.seed.unwrap_or_else(rand::random)
}

/// Run the scenario single-threaded
pub fn simulate(scenario: &Scenario) -> Result<EncounterReport> {
    scenario.validate()?;
    let start = Instant::now();

    let encounter = Encounter::new(&scenario.weapon, &scenario.character, &scenario.target)?;
    let seed = resolve_seed(scenario);
    let rounds = scenario.simulation.rounds;

    tracing::info!(
        rounds,
        apr = encounter.attacks_per_round(),
        targets = scenario.target.ac_list.len(),
        seed,
        "simulation started"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let report = encounter.run_rounds(rounds, seed, &mut rng);

    tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "simulation finished");
    Ok(report)
}

/// Run the scenario across the rayon pool in chunks of rounds
pub fn simulate_parallel(scenario: &Scenario) -> Result<EncounterReport> {
    scenario.validate()?;
    let start = Instant::now();

    let encounter = Encounter::new(&scenario.weapon, &scenario.character, &scenario.target)?;
    let seed = resolve_seed(scenario);
    let config = &scenario.simulation;
    let chunks = config.chunk_count();

    tracing::info!(
        rounds = config.rounds,
        chunks,
        apr = encounter.attacks_per_round(),
        targets = scenario.target.ac_list.len(),
        seed,
        "parallel simulation started"
    );

    let report = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let first_round = chunk * config.rounds_per_chunk;
            let rounds = config.rounds_per_chunk.min(config.rounds - first_round);

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(u64::from(chunk));

            tracing::debug!(chunk, rounds, "simulating chunk");
            encounter.run_rounds(rounds, seed, &mut rng)
        })
        .reduce(|| encounter.empty_report(seed), EncounterReport::merge);

    tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "simulation finished");
    Ok(report)
}

/// Run the scenario, honoring `simulation.parallel`
pub fn run(scenario: &Scenario) -> Result<EncounterReport> {
    if scenario.simulation.parallel {
        simulate_parallel(scenario)
    } else {
        simulate(scenario)
    }
}

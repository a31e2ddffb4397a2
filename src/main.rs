//! Dmgcalc - Entry Point
//!
//! Loads a scenario (or the built-in one), applies command-line overrides,
//! runs the Monte Carlo simulation and prints the report to stdout.

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use dmgcalc::core::error::Result;
use dmgcalc::report::{render_csv, render_text};
use dmgcalc::scenario::Scenario;
use dmgcalc::simulation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

/// Monte Carlo damage calculator
#[derive(Parser, Debug)]
#[command(name = "dmgcalc")]
#[command(about = "Simulate rounds of attacks against a list of target ACs")]
struct Args {
    /// Scenario file, or the name of one in data/scenarios/
    #[arg(long, short = 's')]
    scenario: Option<String>,

    /// Override the number of rounds
    #[arg(long, short = 'r')]
    rounds: Option<u32>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Spread rounds across all cores
    #[arg(long)]
    parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "dmgcalc=debug"
    } else {
        "dmgcalc=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut scenario = match &args.scenario {
        Some(name) => Scenario::load(name)?,
        None => Scenario::default(),
    };

    if let Some(rounds) = args.rounds {
        scenario.simulation = scenario.simulation.with_rounds(rounds);
    }
    if let Some(seed) = args.seed {
        scenario.simulation = scenario.simulation.with_seed(seed);
    }
    if args.parallel {
        scenario.simulation.parallel = true;
    }

    let report = simulation::run(&scenario)?;
    tracing::info!("{}", report.summary());

    match args.format {
        Format::Text => print!("{}", render_text(&scenario, &report)),
        Format::Json => println!("{}", report.to_json()?),
        Format::Csv => print!("{}", render_csv(&report)),
    }

    Ok(())
}

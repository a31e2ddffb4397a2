//! Dmgcalc - Monte Carlo damage calculator for weapon, character and target builds

pub mod combat;
pub mod core;
pub mod report;
pub mod scenario;
pub mod simulation;

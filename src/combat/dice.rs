//! Dice notation and rolling
//!
//! Descriptors are either a flat constant or `NdM` / `dM` notation. They are
//! resolved once when a profile is built, so the hot loop never re-parses.

use std::fmt;
use std::str::FromStr;

use nom::{
    character::complete::{char, u32 as number},
    combinator::{all_consuming, opt},
    sequence::separated_pair,
    IResult, Parser,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// A resolved dice descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDice", into = "RawDice")]
pub enum DiceDescriptor {
    /// Flat amount; behaves like `n` one-sided dice
    Constant(u32),
    /// `count` dice with `faces` sides each
    Dice { count: u32, faces: u32 },
}

/// Descriptor as written in a scenario file: `4` or `"1d10"`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDice {
    Constant(u32),
    Notation(String),
}

impl DiceDescriptor {
    pub fn dice(count: u32, faces: u32) -> Self {
        DiceDescriptor::Dice { count, faces }
    }

    /// `(count, faces)`; a constant `n` is `(n, 1)`
    pub fn count_and_faces(&self) -> (u32, u32) {
        match *self {
            DiceDescriptor::Constant(n) => (n, 1),
            DiceDescriptor::Dice { count, faces } => (count, faces),
        }
    }

    /// Lowest result for a given multiplier
    pub fn min(&self, multiplier: u32) -> i64 {
        let (count, _) = self.count_and_faces();
        i64::from(count) * i64::from(multiplier)
    }

    /// Highest result for a given multiplier
    pub fn max(&self, multiplier: u32) -> i64 {
        let (count, faces) = self.count_and_faces();
        i64::from(count) * i64::from(multiplier) * i64::from(faces)
    }

    /// Roll `count × multiplier` independent dice and sum them
    pub fn roll(&self, multiplier: u32, rng: &mut impl Rng) -> i64 {
        let (count, faces) = self.count_and_faces();
        roll_dice(u64::from(count) * u64::from(multiplier), faces, rng)
    }
}

impl fmt::Display for DiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiceDescriptor::Constant(n) => write!(f, "{}", n),
            DiceDescriptor::Dice { count, faces } => write!(f, "{}d{}", count, faces),
        }
    }
}

impl FromStr for DiceDescriptor {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        parse_dice(s)
    }
}

impl TryFrom<RawDice> for DiceDescriptor {
    type Error = SimError;

    fn try_from(raw: RawDice) -> Result<Self> {
        match raw {
            RawDice::Constant(n) => Ok(DiceDescriptor::Constant(n)),
            RawDice::Notation(s) => parse_dice(&s),
        }
    }
}

impl From<DiceDescriptor> for RawDice {
    fn from(descriptor: DiceDescriptor) -> Self {
        match descriptor {
            DiceDescriptor::Constant(n) => RawDice::Constant(n),
            dice => RawDice::Notation(dice.to_string()),
        }
    }
}

fn notation(input: &str) -> IResult<&str, (Option<u32>, u32)> {
    all_consuming(separated_pair(opt(number), char('d'), number)).parse(input)
}

/// Parse `NdM` or `dM` notation (count defaults to 1)
pub fn parse_dice(descriptor: &str) -> Result<DiceDescriptor> {
    let normalized = descriptor.trim().to_lowercase();

    let (_, (count, faces)) =
        notation(&normalized).map_err(|_| SimError::InvalidDiceFormat(descriptor.to_string()))?;
    let count = count.unwrap_or(1);

    // Neither can be rolled
    if count == 0 || faces == 0 {
        return Err(SimError::InvalidDiceFormat(descriptor.to_string()));
    }

    Ok(DiceDescriptor::Dice { count, faces })
}

/// Sum `count` uniform draws over `1..=faces`
pub fn roll_dice(count: u64, faces: u32, rng: &mut impl Rng) -> i64 {
    if faces <= 1 {
        return count as i64 * i64::from(faces);
    }

    (0..count).map(|_| i64::from(rng.gen_range(1..=faces))).sum()
}

/// Roll a single d20
pub fn roll_d20(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=20)
}

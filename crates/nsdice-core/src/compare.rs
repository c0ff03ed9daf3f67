//! Pairwise comparison of two dice.
//!
//! Rolling die `A` against die `B` has `A.sides() * B.sides()` equally likely
//! face pairings. `A` is *better* than `B` when it wins strictly more of those
//! pairings than `B` does; tied pairings count for neither. Equal win counts
//! mean neither die is better.

use std::cmp::Ordering;

use serde::Serialize;

use crate::die::Die;
use crate::error::CompareError;

/// Pairing counts for one die rolled against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FaceTally {
    /// Pairings where the first die shows the higher face.
    pub wins: u64,
    /// Pairings with equal faces.
    pub ties: u64,
    /// Pairings where the second die shows the higher face.
    pub losses: u64,
}

impl FaceTally {
    /// Total number of pairings.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// Which side, if either, won more pairings.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.wins.cmp(&self.losses) {
            Ordering::Greater => Outcome::FirstWins,
            Ordering::Less => Outcome::SecondWins,
            Ordering::Equal => Outcome::Tie,
        }
    }

    /// The same tally seen from the other die.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            wins: self.losses,
            ties: self.ties,
            losses: self.wins,
        }
    }
}

/// Ternary result of comparing an ordered pair of dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Tie,
}

/// Count wins, ties and losses of `this` against `opponent`.
#[must_use]
pub fn tally(this: &Die, opponent: &Die) -> FaceTally {
    let mut t = FaceTally::default();
    for &mine in this.faces() {
        for &theirs in opponent.faces() {
            match mine.cmp(&theirs) {
                Ordering::Greater => t.wins += 1,
                Ordering::Equal => t.ties += 1,
                Ordering::Less => t.losses += 1,
            }
        }
    }
    t
}

/// Returns `true` when `this` is statistically better than `opponent`.
///
/// Directional: a `false` result says nothing about whether `opponent` beats
/// `this`.
#[must_use]
pub fn beats(this: &Die, opponent: &Die) -> bool {
    let t = tally(this, opponent);
    t.wins > t.losses
}

/// Decide which die of the pair, if either, is statistically better.
#[must_use]
pub fn compare(first: &Die, second: &Die) -> Outcome {
    tally(first, second).outcome()
}

/// One die rolled against another, with the full tally and its verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matchup {
    pub first: Die,
    pub second: Die,
    pub tally: FaceTally,
    pub outcome: Outcome,
}

impl Matchup {
    /// Compare two dice with the same number of faces.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::SideMismatch`] when the side counts differ.
    pub fn new(first: Die, second: Die) -> Result<Self, CompareError> {
        if first.sides() != second.sides() {
            return Err(CompareError::SideMismatch {
                first: first.sides(),
                second: second.sides(),
            });
        }

        let tally = tally(&first, &second);
        Ok(Self {
            first,
            second,
            outcome: tally.outcome(),
            tally,
        })
    }

    /// Parse both dice from notation like `4400` or `10,4,0`, then compare.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Parse`] for bad notation and
    /// [`CompareError::SideMismatch`] when the side counts differ.
    pub fn parse(first: &str, second: &str) -> Result<Self, CompareError> {
        Self::new(first.parse()?, second.parse()?)
    }
}

impl std::fmt::Display for Matchup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            Outcome::FirstWins => write!(f, "{} > {}", self.first, self.second),
            Outcome::SecondWins => write!(f, "{} > {}", self.second, self.first),
            Outcome::Tie => write!(f, "{} = {}", self.first, self.second),
        }
    }
}

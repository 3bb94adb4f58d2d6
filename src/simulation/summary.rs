use crate::cards::ranking::Ranking;
use crate::cards::strength::Strength;
use colored::Colorize;
use std::cmp::Ordering;

/// categories below this share of trials are omitted from Display
const DISPLAY_THRESHOLD: f64 = 0.1;

/// Aggregate win/tie/category counters for one engine run.
///
/// Counters only grow during a run. Equity folds half of the ties into
/// the win share; the per-category distribution covers outright wins
/// only, so the category frequencies sum to the win percentage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    trials: usize,
    wins: usize,
    ties: usize,
    categories: [usize; Ranking::N],
}

impl Summary {
    pub fn empty() -> Self {
        Self::default()
    }

    /// score one showdown between hero and villain
    pub fn tally(&mut self, hero: Strength, villain: Strength) {
        self.trials += 1;
        match hero.cmp(&villain) {
            Ordering::Greater => {
                self.wins += 1;
                self.categories[hero.ranking().index()] += 1;
            }
            Ordering::Equal => self.ties += 1,
            Ordering::Less => {}
        }
    }

    /// combine per-worker tallies by integer sums
    pub fn merge(self, other: Self) -> Self {
        let mut categories = self.categories;
        for (i, n) in other.categories.iter().enumerate() {
            categories[i] += n;
        }
        Self {
            trials: self.trials + other.trials,
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            categories,
        }
    }

    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn ties(&self) -> usize {
        self.ties
    }

    /// win% + tie%/2, in [0, 100]
    pub fn equity(&self) -> f64 {
        match self.trials {
            0 => 0.,
            n => (self.wins as f64 + self.ties as f64 / 2.) / n as f64 * 100.,
        }
    }

    /// share of all trials won outright with this category, in [0, 100]
    pub fn frequency(&self, category: usize) -> f64 {
        match self.trials {
            0 => 0.,
            n => self.categories[category] as f64 / n as f64 * 100.,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} {:.2}%", "EQUITY".bold(), self.equity())?;
        for (i, name) in Ranking::names().iter().enumerate() {
            let pct = self.frequency(i);
            if pct >= DISPLAY_THRESHOLD {
                writeln!(
                    f,
                    "{:<16} {} {:.2}%",
                    name,
                    "#".repeat(pct as usize).green(),
                    pct
                )?;
            }
        }
        Ok(())
    }
}

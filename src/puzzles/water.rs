use std::fmt;
use std::sync::Arc;

use crate::solver::config::Configuration;

/// One state of the water-jug puzzle: a fixed target amount, a fixed set
/// of bucket capacities, and the current level in each bucket.
///
/// The capacities are shared behind an `Arc` since every configuration in
/// a solve uses the same set; only the levels vary. Invariant:
/// `levels[i] <= capacities[i]` for all `i`, maintained by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WaterConfig {
    amount: u32,
    capacities: Arc<Vec<u32>>,
    levels: Vec<u32>,
}

impl WaterConfig {
    /// Builds the initial configuration with every bucket empty.
    pub fn new(amount: u32, capacities: Vec<u32>) -> Self {
        let levels = vec![0; capacities.len()];
        Self {
            amount,
            capacities: Arc::new(capacities),
            levels,
        }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn capacities(&self) -> &[u32] {
        &self.capacities
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }
}

impl Configuration for WaterConfig {
    /// Three kinds of move per bucket: dump it, fill it to capacity, or
    /// pour it into another bucket until the source empties or the target
    /// fills. Candidates that would leave the state unchanged (dumping an
    /// empty bucket, filling a full one, a zero-unit pour) are skipped.
    fn neighbors(&self) -> Vec<Self> {
        let mut configs = Vec::new();

        for i in 0..self.levels.len() {
            if self.levels[i] > 0 {
                let mut dumped = self.clone();
                dumped.levels[i] = 0;
                configs.push(dumped);
            }

            if self.levels[i] < self.capacities[i] {
                let mut filled = self.clone();
                filled.levels[i] = self.capacities[i];
                configs.push(filled);
            }

            for j in 0..self.levels.len() {
                if i == j {
                    continue;
                }
                let transfer = self.levels[i].min(self.capacities[j] - self.levels[j]);
                if transfer == 0 {
                    continue;
                }
                let mut poured = self.clone();
                poured.levels[i] -= transfer;
                poured.levels[j] += transfer;
                configs.push(poured);
            }
        }

        configs
    }

    fn is_goal(&self) -> bool {
        self.levels.iter().any(|&level| level == self.amount)
    }
}

impl fmt::Display for WaterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.levels)
    }
}

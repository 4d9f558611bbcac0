use crate::error::GenalignError;
use serde::{Deserialize, Serialize};

/// How the next population is split between elite carry-over, fresh random
/// individuals and crossover offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPlan {
    pub num_most_fit: usize,
    pub num_random: usize,
    pub num_crossover: usize,
}

impl SelectionPlan {
    /// Floor each fraction of `population_size`, then hand any rounding
    /// slack to the offspring group (see [`SelectionPlan::reconcile_toward_crossover`]).
    pub fn from_fractions(
        population_size: usize,
        elite_fraction: f64,
        random_fraction: f64,
    ) -> Result<Self, GenalignError> {
        for (name, value) in [("elite", elite_fraction), ("random", random_fraction)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GenalignError::Configuration(format!(
                    "{} fraction must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }
        let crossover_fraction = (1.0 - elite_fraction - random_fraction).max(0.0);

        let size = population_size as f64;
        let plan = Self {
            num_most_fit: (size * elite_fraction).floor() as usize,
            num_random: (size * random_fraction).floor() as usize,
            num_crossover: (size * crossover_fraction).floor() as usize,
        };
        plan.reconcile_toward_crossover(population_size)
    }

    /// Raise `num_crossover` until the three counts sum to `population_size`.
    /// Elite and random counts are never adjusted.
    pub fn reconcile_toward_crossover(mut self, population_size: usize) -> Result<Self, GenalignError> {
        if self.total() > population_size {
            return Err(GenalignError::Configuration(format!(
                "Selection plan {:?} exceeds population size {}",
                self, population_size
            )));
        }
        self.num_crossover += population_size - self.total();
        Ok(self)
    }

    pub fn total(&self) -> usize {
        self.num_most_fit + self.num_random + self.num_crossover
    }
}

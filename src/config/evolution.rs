use super::traits::ConfigSection;
use crate::engines::generation::selection::SelectionPlan;
use crate::error::GenalignError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignConfig {
    pub num_generations: usize,
    pub population_size: usize,
    /// Chance of a gap-shift mutation per gene per crossover.
    pub mutation_rate: f64,
    /// Fraction of the population carried forward unmutated.
    pub percent_strongest_to_next_gen: f64,
    /// Fraction of the population rebuilt from the raw sequences.
    pub percent_pop_random: f64,
    /// Probability of taking a gene from the first parent.
    pub percent_gene_swap: f64,
    pub length_policy: LengthPolicy,
    /// Number of ascending scores listed in each generation report.
    pub report_top: usize,
    pub seed: Option<u64>,
}

/// What crossover does when a gap-shift mutation changes a gene's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Drop the mutation and keep the inherited gene.
    #[default]
    RetainParentGene,
    /// Keep the mutated gene and fail the offspring's length check.
    Strict,
}

impl AlignConfig {
    /// Fraction of the population produced by crossover.
    pub fn percent_crossover(&self) -> f64 {
        1.0 - self.percent_strongest_to_next_gen - self.percent_pop_random
    }

    pub fn selection_plan(&self) -> Result<SelectionPlan, GenalignError> {
        SelectionPlan::from_fractions(
            self.population_size,
            self.percent_strongest_to_next_gen,
            self.percent_pop_random,
        )
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            num_generations: 100,
            population_size: 100,
            mutation_rate: 0.1,
            percent_strongest_to_next_gen: 0.2,
            percent_pop_random: 0.1,
            percent_gene_swap: 0.5,
            length_policy: LengthPolicy::default(),
            report_top: 10,
            seed: None,
        }
    }
}

fn check_probability(name: &str, value: f64) -> Result<(), GenalignError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GenalignError::Configuration(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )));
    }
    Ok(())
}

impl ConfigSection for AlignConfig {
    fn validate(&self) -> Result<(), GenalignError> {
        if self.num_generations == 0 {
            return Err(GenalignError::Configuration(
                "Number of generations must be positive".to_string(),
            ));
        }
        if self.population_size == 0 {
            return Err(GenalignError::Configuration(
                "Population size must be positive".to_string(),
            ));
        }
        if self.report_top == 0 {
            return Err(GenalignError::Configuration(
                "report_top must be positive".to_string(),
            ));
        }
        check_probability("mutation_rate", self.mutation_rate)?;
        check_probability("percent_gene_swap", self.percent_gene_swap)?;
        check_probability(
            "percent_strongest_to_next_gen",
            self.percent_strongest_to_next_gen,
        )?;
        check_probability("percent_pop_random", self.percent_pop_random)?;
        if self.percent_crossover() < -f64::EPSILON {
            return Err(GenalignError::Configuration(format!(
                "Elite and random fractions sum to {} (must not exceed 1)",
                self.percent_strongest_to_next_gen + self.percent_pop_random
            )));
        }

        let plan = self.selection_plan()?;
        if plan.num_crossover > 0 && plan.num_most_fit < 2 {
            return Err(GenalignError::Configuration(format!(
                "Crossover needs at least 2 elite parents, plan keeps {} of {}",
                plan.num_most_fit, self.population_size
            )));
        }
        Ok(())
    }
}

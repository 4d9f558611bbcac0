use crate::config::{AlignConfig, ConfigSection};
use crate::engines::evaluation::compute_fitness;
use crate::engines::generation::{
    hall_of_fame::HallOfFame,
    operators::{crossover_counted, random_individual, target_alignment_length},
    selection::SelectionPlan,
};
use crate::error::{GenalignError, Result};
use crate::types::{Individual, Sequence};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Scores reported after each generation is ranked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub generation: usize,
    /// Lowest scores of this generation, ascending.
    pub top_scores: Vec<usize>,
    /// Best score seen in any generation so far.
    pub best_fitness: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub best_fitness: usize,
    pub best_generation: usize,
    pub generations: usize,
    pub population_size: usize,
    pub alignment_length: usize,
    pub elapsed_secs: f64,
    /// Length-changing mutations dropped by `LengthPolicy::RetainParentGene`.
    pub discarded_mutations: usize,
    pub alignment: Individual,
}

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, report: &GenerationReport);
}

impl<T: ProgressCallback + ?Sized> ProgressCallback for &mut T {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation)
    }

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        (**self).on_generation_complete(report)
    }
}

/// Generational loop: rank, record the best, then rebuild the population
/// from elites, fresh random individuals and elite crossover offspring.
pub struct EvolutionEngine<R: Rng = StdRng> {
    config: AlignConfig,
    plan: SelectionPlan,
    sequences: Vec<Sequence>,
    target_len: usize,
    hall_of_fame: HallOfFame,
    discarded_mutations: usize,
    rng: R,
}

impl EvolutionEngine<StdRng> {
    /// Seeded from `config.seed` when set, from OS entropy otherwise.
    pub fn new(config: AlignConfig, sequences: Vec<Sequence>) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, sequences, rng)
    }
}

impl<R: Rng> EvolutionEngine<R> {
    pub fn with_rng(config: AlignConfig, sequences: Vec<Sequence>, rng: R) -> Result<Self> {
        config.validate()?;
        let target_len = target_alignment_length(&sequences)?;
        let plan = config.selection_plan()?;
        log::debug!(
            "Aligning {} sequences to length {} with plan {:?}",
            sequences.len(),
            target_len,
            plan
        );

        Ok(Self {
            config,
            plan,
            sequences,
            target_len,
            hall_of_fame: HallOfFame::new(),
            discarded_mutations: 0,
            rng,
        })
    }

    /// Run every configured generation and return the best alignment seen.
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> Result<RunSummary> {
        let start = Instant::now();
        self.hall_of_fame = HallOfFame::new();
        self.discarded_mutations = 0;

        let mut population = self.initialize_population()?;

        for generation in 0..self.config.num_generations {
            callback.on_generation_start(generation);

            let ranked = rank_population(population);
            let (leader, leader_fitness) = &ranked[0];
            if self.hall_of_fame.try_add(leader, *leader_fitness, generation) {
                log::debug!("Generation {}: new best score {}", generation, leader_fitness);
            }

            let report = GenerationReport {
                generation,
                top_scores: ranked
                    .iter()
                    .take(self.config.report_top)
                    .map(|(_, f)| *f)
                    .collect(),
                best_fitness: self.hall_of_fame.best_fitness().unwrap_or(*leader_fitness),
            };
            callback.on_generation_complete(&report);

            // Check termination
            if generation == self.config.num_generations - 1 {
                break;
            }

            population = self.create_next_generation(&ranked)?;
        }

        let elapsed = start.elapsed();
        let best = self
            .hall_of_fame
            .best()
            .cloned()
            .ok_or_else(|| GenalignError::Generation("no generation was evaluated".to_string()))?;
        log::info!(
            "Finished {} generations in {:.3}s, best score {}",
            self.config.num_generations,
            elapsed.as_secs_f64(),
            best.fitness
        );

        Ok(RunSummary {
            best_fitness: best.fitness,
            best_generation: best.generation,
            generations: self.config.num_generations,
            population_size: self.config.population_size,
            alignment_length: self.target_len,
            elapsed_secs: elapsed.as_secs_f64(),
            discarded_mutations: self.discarded_mutations,
            alignment: best.individual,
        })
    }

    pub fn initialize_population(&mut self) -> Result<Vec<Individual>> {
        self.fresh_individuals(self.config.population_size)
    }

    fn fresh_individuals(&mut self, count: usize) -> Result<Vec<Individual>> {
        (0..count)
            .map(|_| random_individual(&self.sequences, self.target_len, &mut self.rng))
            .collect()
    }

    /// Build the next population from a ranked one (best first).
    pub fn create_next_generation(
        &mut self,
        ranked: &[(Individual, usize)],
    ) -> Result<Vec<Individual>> {
        let elite: Vec<&Individual> = ranked
            .iter()
            .take(self.plan.num_most_fit)
            .map(|(ind, _)| ind)
            .collect();

        let mut next_generation: Vec<Individual> =
            Vec::with_capacity(self.config.population_size);
        next_generation.extend(elite.iter().map(|ind| (*ind).clone()));
        next_generation.extend(self.fresh_individuals(self.plan.num_random)?);

        for _ in 0..self.plan.num_crossover {
            let (a, b) = select_parents(&elite, &mut self.rng)?;
            let offspring = crossover_counted(
                a,
                b,
                self.config.percent_gene_swap,
                self.config.mutation_rate,
                self.config.length_policy,
                &mut self.rng,
            )?;
            if self.discarded_mutations == 0 && offspring.discarded_mutations > 0 {
                log::warn!(
                    "Gap-shift mutation changed a gene's length; keeping the inherited gene \
                     (length_policy = retain_parent_gene)"
                );
            }
            self.discarded_mutations += offspring.discarded_mutations;
            next_generation.push(offspring.individual);
        }

        if next_generation.len() != self.config.population_size {
            return Err(GenalignError::Generation(format!(
                "Next generation has {} individuals, expected {}",
                next_generation.len(),
                self.config.population_size
            )));
        }
        Ok(next_generation)
    }

    pub fn selection_plan(&self) -> SelectionPlan {
        self.plan
    }
}

/// Score every individual and sort ascending; equal scores keep population order.
pub fn rank_population(population: Vec<Individual>) -> Vec<(Individual, usize)> {
    let mut ranked: Vec<(Individual, usize)> = population
        .into_iter()
        .map(|ind| {
            let fitness = compute_fitness(&ind);
            (ind, fitness)
        })
        .collect();
    ranked.sort_by_key(|(_, fitness)| *fitness);
    ranked
}

/// Two distinct elites, drawn uniformly.
pub fn select_parents<'a, R: Rng>(
    elite: &[&'a Individual],
    rng: &mut R,
) -> Result<(&'a Individual, &'a Individual)> {
    if elite.len() < 2 {
        return Err(GenalignError::Generation(format!(
            "Crossover needs two distinct elite parents, elite group has {}",
            elite.len()
        )));
    }
    let picks = index::sample(rng, elite.len(), 2);
    Ok((elite[picks.index(0)], elite[picks.index(1)]))
}

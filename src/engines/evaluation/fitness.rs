//! Adjacent-pairs fitness.
//!
//! Each column is scored by comparing gene `j` with gene `j + 1` only, not
//! every pair of genes. Reordering the genes of an individual can therefore
//! change its score. Lower is better; zero means every adjacent pair agrees
//! in every column.

use crate::types::{Individual, Sequence};

/// Count column mismatches between consecutive genes.
///
/// Genes are expected to share one length; columns past the shortest gene
/// are not scored.
pub fn adjacent_pairs_fitness(genes: &[Sequence]) -> usize {
    let length = genes.iter().map(Sequence::len).min().unwrap_or(0);

    (0..length)
        .map(|column| {
            genes
                .windows(2)
                .filter(|pair| pair[0].residues()[column] != pair[1].residues()[column])
                .count()
        })
        .sum()
}

pub fn compute_fitness(individual: &Individual) -> usize {
    adjacent_pairs_fitness(individual.genes())
}

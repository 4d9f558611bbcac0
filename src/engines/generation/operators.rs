use crate::config::LengthPolicy;
use crate::error::{GenalignError, Result};
use crate::types::{Individual, Sequence, GAP};
use rand::Rng;

/// Insert one gap at a uniformly chosen index in `[0, len]`.
pub fn insert_gap<R: Rng>(gene: &Sequence, rng: &mut R) -> Sequence {
    let mut residues = gene.residues().to_vec();
    let index = rng.gen_range(0..=residues.len());
    residues.insert(index, GAP);
    gene.with_residues(residues)
}

/// Pad `sequence` with randomly placed gaps until it is `target_len` long.
/// A sequence already at (or past) the target is copied verbatim.
pub fn pad_to_length<R: Rng>(sequence: &Sequence, target_len: usize, rng: &mut R) -> Sequence {
    let mut residues = sequence.residues().to_vec();
    while residues.len() < target_len {
        let index = rng.gen_range(0..=residues.len());
        residues.insert(index, GAP);
    }
    sequence.with_residues(residues)
}

/// Build one individual by padding every input sequence to `target_len`.
pub fn random_individual<R: Rng>(
    sequences: &[Sequence],
    target_len: usize,
    rng: &mut R,
) -> Result<Individual> {
    if let Some(longest) = sequences.iter().find(|s| s.len() > target_len) {
        return Err(GenalignError::Generation(format!(
            "Sequence '{}' has length {}, longer than target {}",
            longest.title(),
            longest.len(),
            target_len
        )));
    }
    let genes = sequences
        .iter()
        .map(|s| pad_to_length(s, target_len, rng))
        .collect();
    Individual::new(genes)
}

/// Longest input length, the alignment length every individual is built to.
pub fn target_alignment_length(sequences: &[Sequence]) -> Result<usize> {
    if sequences.is_empty() {
        return Err(GenalignError::EmptyInput(
            "no sequences to align".to_string(),
        ));
    }
    let target = sequences.iter().map(Sequence::len).max().unwrap_or(0);
    if target == 0 {
        return Err(GenalignError::EmptyInput(
            "all sequences are empty, target alignment length is 0".to_string(),
        ));
    }
    Ok(target)
}

/// Build `size` independent individuals at the longest input length.
pub fn random_population<R: Rng>(
    sequences: &[Sequence],
    size: usize,
    rng: &mut R,
) -> Result<Vec<Individual>> {
    let target_len = target_alignment_length(sequences)?;
    (0..size)
        .map(|_| random_individual(sequences, target_len, rng))
        .collect()
}

/// Move one gap: remove a randomly chosen existing gap, then insert a gap at
/// a fresh random position.
///
/// A gene with no gaps only receives the insertion and comes back one
/// symbol longer.
pub fn gap_shift_mutation<R: Rng>(gene: &Sequence, rng: &mut R) -> Sequence {
    let gaps = gene.gap_positions();
    if gaps.is_empty() {
        return insert_gap(gene, rng);
    }

    let mut residues = gene.residues().to_vec();
    residues.remove(gaps[rng.gen_range(0..gaps.len())]);
    insert_gap(&gene.with_residues(residues), rng)
}

/// A crossover result and how many of its mutations were discarded under
/// [`LengthPolicy::RetainParentGene`].
#[derive(Debug, Clone)]
pub struct Offspring {
    pub individual: Individual,
    pub discarded_mutations: usize,
}

/// [`crossover_counted`] without the discard count.
pub fn crossover<R: Rng>(
    parent_a: &Individual,
    parent_b: &Individual,
    percent_gene_swap: f64,
    mutation_rate: f64,
    policy: LengthPolicy,
    rng: &mut R,
) -> Result<Individual> {
    crossover_counted(parent_a, parent_b, percent_gene_swap, mutation_rate, policy, rng)
        .map(|offspring| offspring.individual)
}

/// Gene-wise recombination of two parents, with per-gene gap-shift mutation.
///
/// Gene `k` comes from `parent_a` when a uniform draw is `<= percent_gene_swap`,
/// otherwise from `parent_b`. Each resulting gene is then mutated when a
/// second draw is `<= mutation_rate`. A mutation that changes the gene's
/// length is handled by `policy`; the offspring is always checked to be
/// rectangular before it is returned.
pub fn crossover_counted<R: Rng>(
    parent_a: &Individual,
    parent_b: &Individual,
    percent_gene_swap: f64,
    mutation_rate: f64,
    policy: LengthPolicy,
    rng: &mut R,
) -> Result<Offspring> {
    if parent_a.num_genes() != parent_b.num_genes() {
        return Err(GenalignError::Generation(format!(
            "Parents carry {} and {} genes",
            parent_a.num_genes(),
            parent_b.num_genes()
        )));
    }
    let length = parent_a.alignment_length();
    if parent_b.alignment_length() != length {
        return Err(GenalignError::RaggedIndividual {
            expected: length,
            found: parent_b.alignment_length(),
            title: parent_b
                .gene(0)
                .map(|g| g.title().to_string())
                .unwrap_or_default(),
        });
    }

    let genes: Vec<Sequence> = parent_a
        .genes()
        .iter()
        .zip(parent_b.genes())
        .map(|(a, b)| {
            if rng.gen::<f64>() <= percent_gene_swap {
                a.clone()
            } else {
                b.clone()
            }
        })
        .collect();

    let mut discarded_mutations = 0;
    let genes = genes
        .into_iter()
        .map(|gene| {
            if rng.gen::<f64>() > mutation_rate {
                return gene;
            }
            let mutated = gap_shift_mutation(&gene, rng);
            match policy {
                LengthPolicy::RetainParentGene if mutated.len() != gene.len() => {
                    log::debug!(
                        "Discarding length-changing mutation on '{}' ({} -> {})",
                        gene.title(),
                        gene.len(),
                        mutated.len()
                    );
                    discarded_mutations += 1;
                    gene
                }
                _ => mutated,
            }
        })
        .collect();

    Ok(Offspring {
        individual: Individual::new(genes)?,
        discarded_mutations,
    })
}

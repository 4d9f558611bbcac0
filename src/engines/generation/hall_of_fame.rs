use crate::types::Individual;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BestAlignment {
    pub individual: Individual,
    pub fitness: usize,
    pub generation: usize,
}

/// The lowest-scoring individual seen across all generations.
///
/// Only a strictly better score replaces the record, so ties keep the
/// earlier individual and the recorded score never goes up.
#[derive(Debug, Default)]
pub struct HallOfFame {
    best: Option<BestAlignment>,
}

impl HallOfFame {
    pub fn new() -> Self {
        Self { best: None }
    }

    /// Returns true when the candidate became the new record.
    pub fn try_add(&mut self, individual: &Individual, fitness: usize, generation: usize) -> bool {
        let improves = self.best.as_ref().map_or(true, |b| fitness < b.fitness);
        if improves {
            self.best = Some(BestAlignment {
                individual: individual.clone(),
                fitness,
                generation,
            });
        }
        improves
    }

    pub fn best(&self) -> Option<&BestAlignment> {
        self.best.as_ref()
    }

    pub fn best_fitness(&self) -> Option<usize> {
        self.best.as_ref().map(|b| b.fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sequence;

    fn single(residues: &[u8]) -> Individual {
        Individual::new(vec![Sequence::new(">a", residues.to_vec())]).unwrap()
    }

    #[test]
    fn test_first_candidate_is_accepted() {
        let mut hof = HallOfFame::new();
        assert!(hof.best().is_none());
        assert!(hof.try_add(&single(b"AC"), 5, 0));
        assert_eq!(hof.best_fitness(), Some(5));
    }

    #[test]
    fn test_ties_keep_earlier_record() {
        let mut hof = HallOfFame::new();
        hof.try_add(&single(b"AC"), 5, 0);
        assert!(!hof.try_add(&single(b"GT"), 5, 1));
        let best = hof.best().unwrap();
        assert_eq!(best.generation, 0);
        assert_eq!(best.individual, single(b"AC"));
    }

    #[test]
    fn test_never_regresses() {
        let mut hof = HallOfFame::new();
        hof.try_add(&single(b"AC"), 5, 0);
        assert!(hof.try_add(&single(b"GT"), 3, 1));
        assert!(!hof.try_add(&single(b"TT"), 9, 2));
        assert_eq!(hof.best_fitness(), Some(3));
    }
}

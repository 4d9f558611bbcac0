use crate::error::{GenalignError, Result};
use serde::{Deserialize, Serialize};

/// Gap symbol inserted between residues.
pub const GAP: u8 = b'-';

/// A named run of symbols over {A, C, G, T, -}.
///
/// Sequences are never edited in place: operators that insert or remove
/// gaps return a new `Sequence` carrying the same title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    title: String,
    #[serde(with = "residue_text")]
    residues: Vec<u8>,
}

/// Residues read and written as plain text rather than a byte array.
mod residue_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(residues: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(residues))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        String::deserialize(deserializer).map(String::into_bytes)
    }
}

impl Sequence {
    pub fn new(title: impl Into<String>, residues: impl Into<Vec<u8>>) -> Self {
        Self {
            title: title.into(),
            residues: residues.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Same title, different symbols.
    pub fn with_residues(&self, residues: Vec<u8>) -> Self {
        Self {
            title: self.title.clone(),
            residues,
        }
    }

    /// Positions of every gap symbol, ascending.
    pub fn gap_positions(&self) -> Vec<usize> {
        self.residues
            .iter()
            .enumerate()
            .filter(|(_, &b)| b == GAP)
            .map(|(i, _)| i)
            .collect()
    }

    /// The symbols with all gaps removed.
    pub fn ungapped(&self) -> Vec<u8> {
        self.residues.iter().copied().filter(|&b| b != GAP).collect()
    }

    pub fn as_str_lossy(&self) -> String {
        String::from_utf8_lossy(&self.residues).into_owned()
    }
}

/// One candidate alignment: a gapped gene per input sequence, in input order.
///
/// Construction checks that every gene has the same length, so an
/// `Individual` is always rectangular.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Sequence>", into = "Vec<Sequence>")]
pub struct Individual {
    genes: Vec<Sequence>,
}

impl Individual {
    pub fn new(genes: Vec<Sequence>) -> Result<Self> {
        if let Some(first) = genes.first() {
            let expected = first.len();
            if let Some(bad) = genes.iter().find(|g| g.len() != expected) {
                return Err(GenalignError::RaggedIndividual {
                    expected,
                    found: bad.len(),
                    title: bad.title().to_string(),
                });
            }
        }
        Ok(Self { genes })
    }

    pub fn genes(&self) -> &[Sequence] {
        &self.genes
    }

    pub fn gene(&self, index: usize) -> Option<&Sequence> {
        self.genes.get(index)
    }

    pub fn num_genes(&self) -> usize {
        self.genes.len()
    }

    /// Shared length of every gene (0 for an individual with no genes).
    pub fn alignment_length(&self) -> usize {
        self.genes.first().map(Sequence::len).unwrap_or(0)
    }
}

impl TryFrom<Vec<Sequence>> for Individual {
    type Error = GenalignError;

    fn try_from(genes: Vec<Sequence>) -> Result<Self> {
        Self::new(genes)
    }
}

impl From<Individual> for Vec<Sequence> {
    fn from(individual: Individual) -> Self {
        individual.genes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ungapped_preserves_order() {
        let seq = Sequence::new(">s1", b"-A-CG--T".to_vec());
        assert_eq!(seq.ungapped(), b"ACGT".to_vec());
        assert_eq!(seq.gap_positions(), vec![0, 2, 5, 6]);
    }

    #[test]
    fn test_individual_rejects_ragged_genes() {
        let genes = vec![
            Sequence::new(">a", b"ACGT".to_vec()),
            Sequence::new(">b", b"ACG".to_vec()),
        ];
        match Individual::new(genes) {
            Err(GenalignError::RaggedIndividual { expected, found, title }) => {
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
                assert_eq!(title, ">b");
            }
            other => panic!("expected ragged error, got {:?}", other),
        }
    }

    #[test]
    fn test_serializes_residues_as_text() {
        let seq = Sequence::new(">a", b"AC-T".to_vec());
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, r#"{"title":">a","residues":"AC-T"}"#);
        let back: Sequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }

    #[test]
    fn test_deserialize_rejects_ragged() {
        let json = r#"[{"title":">a","residues":"ACGT"},{"title":">b","residues":"AC"}]"#;
        assert!(serde_json::from_str::<Individual>(json).is_err());
    }

    #[test]
    fn test_alignment_length() {
        let ind = Individual::new(vec![
            Sequence::new(">a", b"AC-T".to_vec()),
            Sequence::new(">b", b"A-GT".to_vec()),
        ])
        .unwrap();
        assert_eq!(ind.alignment_length(), 4);
        assert_eq!(ind.num_genes(), 2);
    }
}

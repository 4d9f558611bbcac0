use crate::types::{Sequence, GAP};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-record nucleotide tally. Gaps are counted apart from other symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NucleotideCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
    pub gaps: usize,
    pub other: usize,
}

impl NucleotideCounts {
    /// Count symbols exactly as written; lowercase is `other`.
    pub fn tally(residues: &[u8]) -> Self {
        residues.iter().fold(Self::default(), |mut counts, &b| {
            match b {
                b'A' => counts.a += 1,
                b'C' => counts.c += 1,
                b'G' => counts.g += 1,
                b'T' => counts.t += 1,
                GAP => counts.gaps += 1,
                _ => counts.other += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t + self.gaps + self.other
    }

    /// Fraction of A/C/G/T that are G or C; `None` without any nucleotides.
    pub fn gc_fraction(&self) -> Option<f64> {
        let acgt = self.a + self.c + self.g + self.t;
        (acgt > 0).then(|| (self.g + self.c) as f64 / acgt as f64)
    }
}

impl fmt::Display for NucleotideCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "A: {}", self.a)?;
        writeln!(f, "C: {}", self.c)?;
        writeln!(f, "G: {}", self.g)?;
        write!(f, "T: {}", self.t)?;
        if self.gaps > 0 {
            write!(f, "\n-: {}", self.gaps)?;
        }
        if self.other > 0 {
            write!(f, "\nother: {}", self.other)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionReport {
    pub title: String,
    pub counts: NucleotideCounts,
}

pub fn composition_report(records: &[Sequence]) -> Vec<CompositionReport> {
    records
        .iter()
        .map(|r| CompositionReport {
            title: r.title().to_string(),
            counts: NucleotideCounts::tally(r.residues()),
        })
        .collect()
}

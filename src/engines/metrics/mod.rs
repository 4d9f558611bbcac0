pub mod composition;

pub use composition::{composition_report, CompositionReport, NucleotideCounts};

mod fasta;

pub use fasta::{compile_patterns, filter_by_title, FastaConnector};

use genalign::data::connectors::{compile_patterns, filter_by_title, FastaConnector};
use genalign::engines::evaluation::compute_fitness;
use genalign::engines::metrics::composition_report;
use genalign::{GenalignError, Individual, Sequence};

#[test]
fn test_load_five_sequences() {
    let records = FastaConnector::load("tests/data/five_sequences.fasta").unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].title(), ">seq1 sample isolate A");
    assert_eq!(records[0].residues(), b"ACGTTGCAAGTCCGTA");
    let lengths: Vec<usize> = records.iter().map(Sequence::len).collect();
    assert_eq!(lengths, vec![16, 15, 14, 13, 16]);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = FastaConnector::load("tests/data/does_not_exist.fasta");
    assert!(matches!(result, Err(GenalignError::Io(_))));
}

#[test]
fn test_empty_file_is_rejected() {
    let result = FastaConnector::load("tests/data/empty.fasta");
    assert!(matches!(result, Err(GenalignError::EmptyInput(_))));
}

#[test]
fn test_score_aligned_file() {
    let records = FastaConnector::load("tests/data/aligned_three.fasta").unwrap();
    let individual = Individual::new(records).unwrap();
    assert_eq!(compute_fitness(&individual), 3);
}

#[test]
fn test_ragged_file_cannot_be_scored() {
    let records = FastaConnector::load("tests/data/ragged.fasta").unwrap();
    assert!(matches!(
        Individual::new(records),
        Err(GenalignError::RaggedIndividual { .. })
    ));
}

#[test]
fn test_write_then_load_alignment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.fasta");
    let individual = Individual::new(vec![
        Sequence::new(">a", b"AC-GT".to_vec()),
        Sequence::new(">b", b"-ACGT".to_vec()),
    ])
    .unwrap();

    FastaConnector::write_alignment(&path, &individual).unwrap();
    let reloaded = FastaConnector::load(&path).unwrap();
    assert_eq!(reloaded, individual.genes().to_vec());
}

#[test]
fn test_composition_of_filtered_records() {
    let records = FastaConnector::load("tests/data/five_sequences.fasta").unwrap();
    let patterns = compile_patterns(&["isolate [AE]$"]).unwrap();
    let kept = filter_by_title(records, &patterns);
    assert_eq!(kept.len(), 2);

    let reports = composition_report(&kept);
    assert_eq!(reports[0].title, ">seq1 sample isolate A");
    let counts = reports[0].counts;
    assert_eq!(counts.a + counts.c + counts.g + counts.t, 16);
    assert_eq!(counts.a, 4);
    assert_eq!(counts.g, 4);
    assert_eq!(counts.gaps, 0);
    assert_eq!(counts.gc_fraction(), Some(0.5));
}

#[test]
fn test_bad_pattern_is_reported() {
    assert!(matches!(
        compile_patterns(&["("]),
        Err(GenalignError::Pattern(_))
    ));
}

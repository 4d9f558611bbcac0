use crate::error::{GenalignError, Result};
use crate::types::{Individual, Sequence};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub struct FastaConnector;

impl FastaConnector {
    /// Load every record of a FASTA file, in file order. A file without any
    /// record is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Sequence>> {
        let file = File::open(path.as_ref())?;
        let records = Self::parse(BufReader::new(file))?;
        if records.is_empty() {
            return Err(GenalignError::EmptyInput(format!(
                "no sequences found in FASTA file {}",
                path.as_ref().display()
            )));
        }
        log::info!(
            "Loaded {} sequences from {}",
            records.len(),
            path.as_ref().display()
        );
        Ok(records)
    }

    /// Parse FASTA text.
    ///
    /// A `>` line opens a record and is kept verbatim as its title; the
    /// following lines are concatenated, line endings stripped, until the
    /// next title. Blank lines are skipped. Sequence data before the first
    /// title is an error.
    pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Sequence>> {
        let mut records = Vec::new();
        let mut current: Option<(String, Vec<u8>)> = None;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches(['\r', '\n']);

            if line.starts_with('>') {
                if let Some((title, residues)) = current.take() {
                    records.push(Sequence::new(title, residues));
                }
                current = Some((line.to_string(), Vec::new()));
            } else if line.trim().is_empty() {
                continue;
            } else {
                match current.as_mut() {
                    Some((_, residues)) => residues.extend_from_slice(line.trim().as_bytes()),
                    None => {
                        return Err(GenalignError::Parse {
                            line: idx + 1,
                            message: "sequence data before any '>' title line".to_string(),
                        })
                    }
                }
            }
        }

        if let Some((title, residues)) = current {
            records.push(Sequence::new(title, residues));
        }

        Ok(records)
    }

    /// Write one record per gene: title line, then the gapped sequence.
    pub fn write_alignment<P: AsRef<Path>>(path: P, individual: &Individual) -> Result<()> {
        let mut out = BufWriter::new(File::create(path.as_ref())?);
        Self::write_records(&mut out, individual.genes())?;
        out.flush()?;
        log::info!("Wrote alignment to {}", path.as_ref().display());
        Ok(())
    }

    pub fn write_records<W: Write>(out: &mut W, records: &[Sequence]) -> Result<()> {
        for record in records {
            if record.title().starts_with('>') {
                writeln!(out, "{}", record.title())?;
            } else {
                writeln!(out, ">{}", record.title())?;
            }
            out.write_all(record.residues())?;
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Keep records whose title matches every pattern. No patterns keeps all.
pub fn filter_by_title(records: Vec<Sequence>, patterns: &[Regex]) -> Vec<Sequence> {
    records
        .into_iter()
        .filter(|r| patterns.iter().all(|p| p.is_match(r.title())))
        .collect()
}

/// Compile title patterns, surfacing the first invalid one.
pub fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p.as_ref()).map_err(GenalignError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_multiline_records() {
        let text = ">seq one\nACG\nTT\n\n>seq two\r\nGG\r\n";
        let records = FastaConnector::parse(Cursor::new(text)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title(), ">seq one");
        assert_eq!(records[0].residues(), b"ACGTT");
        assert_eq!(records[1].title(), ">seq two");
        assert_eq!(records[1].residues(), b"GG");
    }

    #[test]
    fn test_data_before_title_is_error() {
        let text = "ACGT\n>late title\nAC\n";
        match FastaConnector::parse(Cursor::new(text)) {
            Err(GenalignError::Parse { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_text_has_no_records() {
        assert!(FastaConnector::parse(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_title_without_sequence() {
        let records = FastaConnector::parse(Cursor::new(">empty\n>full\nAC\n")).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_empty());
    }

    #[test]
    fn test_filter_requires_all_patterns() {
        let records = vec![
            Sequence::new(">AL-UAB-GX12/2021 complete genome", b"A".to_vec()),
            Sequence::new(">AL-UAB-GX12/2021 partial", b"C".to_vec()),
            Sequence::new(">NY-1/2020 complete genome", b"G".to_vec()),
        ];
        let patterns = compile_patterns(&["AL-UAB-GX[0-9]+/2021", "complete genome"]).unwrap();
        let kept = filter_by_title(records, &patterns);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].residues(), b"A");
    }

    #[test]
    fn test_write_records_adds_missing_marker() {
        let mut out = Vec::new();
        let records = vec![
            Sequence::new(">a", b"AC-T".to_vec()),
            Sequence::new("b", b"A-GT".to_vec()),
        ];
        FastaConnector::write_records(&mut out, &records).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ">a\nAC-T\n>b\nA-GT\n");
    }
}

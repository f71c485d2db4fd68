use std::fs::File;
use std::io::{stdin, BufRead, BufReader, Cursor};
use std::path::Path;

use anyhow::{anyhow, Result};
use paste::paste;

use dd_structure::SEPARATOR;

/// One record of a FASTA-like input: optional `>` header, a sequence line
/// and an optional structure line (dot-bracket or hybrid notation).
/// Only the first whitespace separated token of a line is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: Option<String>,
    pub sequence: String,
    pub structure: Option<String>,
}

impl FastaRecord {
    /// The structure line, or an open chain shaped like the sequence.
    pub fn structure_or_open_chain(&self) -> String {
        match &self.structure {
            Some(s) => s.clone(),
            None => self.sequence.chars()
                .map(|c| if c == SEPARATOR { SEPARATOR } else { '.' })
                .collect(),
        }
    }
}

#[derive(Clone, Copy)]
enum RecordMode {
    Lenient,
    Strict,
}

fn first_token(line: &str) -> String {
    line.split_whitespace().next().unwrap_or(line).to_string()
}

fn parse_record<R: BufRead>(reader: R, mode: RecordMode) -> Result<FastaRecord> {
    let mut header = None;
    let mut sequence = None;
    let mut structure = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            if sequence.is_some() {
                break;
            }
            continue;
        }
        if line.starts_with('>') {
            if sequence.is_some() {
                break;
            }
            header = Some(line.to_string());
        } else if sequence.is_none() {
            sequence = Some(first_token(line));
        } else {
            structure = Some(first_token(line));
            break;
        }
    }

    let sequence = sequence.ok_or_else(|| anyhow!("Missing sequence line"))?;
    if structure.is_none() && matches!(mode, RecordMode::Strict) {
        return Err(anyhow!("Missing structure line"));
    }
    Ok(FastaRecord { header, sequence, structure })
}

/// Reads a single record, the structure line may be missing.
pub fn read_fasta_like<R: BufRead>(reader: R) -> Result<FastaRecord> {
    parse_record(reader, RecordMode::Lenient)
}

/// Reads a single record that has to come with a structure line.
pub fn read_duplex<R: BufRead>(reader: R) -> Result<FastaRecord> {
    parse_record(reader, RecordMode::Strict)
}

/// Generates `_string`, `_file`, `_stdin` and `_input` adapters
/// for a reader function `fn base<R: BufRead>(R) -> $ret`.
/// The `_input` variant reads stdin for "-" and a file otherwise.
macro_rules! define_input_variants {
    ($base:ident, $ret:ty) => {
        paste! {
            pub fn [<$base _string>](s: &str) -> $ret {
                $base(Cursor::new(s))
            }

            pub fn [<$base _file>]<P: AsRef<Path>>(path: P) -> $ret {
                let reader = BufReader::new(File::open(path)?);
                $base(reader)
            }

            pub fn [<$base _stdin>]() -> $ret {
                $base(BufReader::new(stdin()))
            }

            pub fn [<$base _input>](s: &str) -> $ret {
                if s == "-" {
                    [<$base _stdin>]()
                } else {
                    [<$base _file>](s)
                }
            }
        }
    };
}

type RecordResult = Result<FastaRecord>;

define_input_variants!(read_fasta_like, RecordResult);
define_input_variants!(read_duplex, RecordResult);

/// A position ruler to print under a molecule of length `len`:
/// ',' at every fifth position, the tens written so that they end
/// at every tenth position.
pub fn ruler(len: usize) -> String {
    let mut marks: Vec<char> = (1..=len)
        .map(|p| if p % 10 == 5 { ',' } else { '.' })
        .collect();
    for p in (10..=len).step_by(10) {
        let tens = (p / 10).to_string();
        for (k, c) in tens.chars().rev().enumerate() {
            marks[p - 1 - k] = c;
        }
    }
    marks.into_iter().collect()
}

/// One ruler per molecule, joined like the molecules themselves.
pub fn molecule_ruler(lengths: (usize, usize), two_molecules: bool) -> String {
    if two_molecules {
        format!("{}{}{}", ruler(lengths.0), SEPARATOR, ruler(lengths.1))
    } else {
        ruler(lengths.0)
    }
}

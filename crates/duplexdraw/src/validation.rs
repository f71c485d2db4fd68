
use log::debug;

use dd_structure::HybridNotation;
use dd_structure::MoleculeCount;
use dd_structure::PairTable;
use dd_structure::Sequence;
use dd_structure::Structure;
use dd_structure::StructureError;
use dd_structure::SEPARATOR;
use dd_structure::split;
use dd_annotate::check_coordinates;

use crate::error::MoleculeCountError;
use crate::error::OffsetError;
use crate::error::ValidationError;

/// Parses a molecule offset: a signed integer other than 0.
pub fn validate_offset(s: &str) -> Result<i64, OffsetError> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(OffsetError::NotAnInteger(s.to_string()));
    }
    match s.parse::<i64>() {
        Ok(0) => Err(OffsetError::Zero),
        Ok(n) => Ok(n),
        Err(_) => Err(OffsetError::NotAnInteger(s.to_string())),
    }
}

/// One or two non-empty molecules over the IUPAC alphabet, joined by '&'.
pub fn validate_sequence(s: &str) -> Result<Sequence, ValidationError> {
    Ok(Sequence::try_from(s)?)
}

/// Characters of a molecule set as written, separator included.
fn text_len(lengths: (usize, usize), count: MoleculeCount) -> usize {
    match count {
        MoleculeCount::One => lengths.0,
        MoleculeCount::Two => lengths.0 + 1 + lengths.1,
    }
}

/// Global length first, then the length of each molecule.
fn check_lengths(
    structure: ((usize, usize), MoleculeCount),
    sequence: &Sequence,
) -> Result<(), StructureError> {
    let ((st_lengths, st_count), seq_lengths) = (structure, sequence.lengths());
    let st_len = text_len(st_lengths, st_count);
    let seq_len = text_len(seq_lengths, sequence.count());
    if st_len != seq_len {
        return Err(StructureError::LengthMismatch { structure: st_len, sequence: seq_len });
    }

    if st_count == MoleculeCount::Two || sequence.count() == MoleculeCount::Two {
        let molecules = [(1, st_lengths.0, seq_lengths.0), (2, st_lengths.1, seq_lengths.1)];
        for (molecule, st, seq) in molecules {
            if st != seq {
                return Err(StructureError::MoleculeLengthMismatch {
                    molecule,
                    structure: st,
                    sequence: seq,
                });
            }
        }
    }
    Ok(())
}

/// Parses plain dot-bracket or hybrid notation into a canonical structure
/// that fits `sequence` and has balanced brackets of every type.
///
/// Plain structures are checked for length before their characters.
pub fn validate_structure(
    s: &str,
    sequence: &Sequence,
    offsets: (i64, i64),
) -> Result<Structure, ValidationError> {
    if s.is_empty() {
        return Err(StructureError::Empty.into());
    }

    let structure = match HybridNotation::parse(s) {
        Some(hybrid) => {
            debug!("Identified hybrid input: {}", hybrid);
            let structure = hybrid.decode(sequence, offsets)?;
            check_lengths((structure.lengths(), structure.count()), sequence)?;
            structure
        }
        None => {
            let (first, second) = split(s);
            let count = if s.contains(SEPARATOR) { MoleculeCount::Two } else { MoleculeCount::One };
            check_lengths(((first.chars().count(), second.chars().count()), count), sequence)?;
            Structure::try_from(s)?
        }
    };

    PairTable::try_from(&structure)?;
    Ok(structure)
}

/// Number of molecules; sequence and structure have to agree.
pub fn molecule_count(sequence: &Sequence, structure: &Structure) -> Result<MoleculeCount, MoleculeCountError> {
    match (sequence.count(), structure.count()) {
        (s, t) if s == t => Ok(s),
        (sequence, structure) => Err(MoleculeCountError { sequence, structure }),
    }
}

/// A sequence with a structure that fits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub sequence: Sequence,
    pub structure: Structure,
    pub molecules: MoleculeCount,
}

pub fn validate_input(
    sequence: &str,
    structure: &str,
    offsets: (i64, i64),
) -> Result<ValidatedInput, ValidationError> {
    let sequence = validate_sequence(sequence)?;
    let structure = validate_structure(structure, &sequence, offsets)?;
    check_coordinates(offsets, sequence.lengths())?;
    let molecules = molecule_count(&sequence, &structure)?;
    Ok(ValidatedInput { sequence, structure, molecules })
}


use std::fmt;
use std::ops::Deref;

use crate::SEPARATOR;
use crate::Molecules;
use crate::split;
use crate::surplus_separator;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    Empty,
    InvalidChar(char, usize),
    EmptyMolecule(usize),
    Separator(usize),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::Empty => {
                write!(f, "No sequence given")
            }
            SequenceError::InvalidChar(c, i) => {
                write!(f, "Unsupported nucleotide '{}' at position {}", c, i)
            }
            SequenceError::EmptyMolecule(m) => {
                write!(f, "Sequence of molecule {} is empty", m)
            }
            SequenceError::Separator(i) => {
                write!(f, "Unexpected strand separation character at position {}", i)
            }
        }
    }
}

impl std::error::Error for SequenceError {}


/// Standard bases plus the IUPAC ambiguity codes.
#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq)]
pub enum Base { A, C, G, U, T, R, Y, S, W, K, M, B, D, H, V, N }

impl TryFrom<char> for Base {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'U' => Ok(Base::U),
            'T' => Ok(Base::T),
            'R' => Ok(Base::R),
            'Y' => Ok(Base::Y),
            'S' => Ok(Base::S),
            'W' => Ok(Base::W),
            'K' => Ok(Base::K),
            'M' => Ok(Base::M),
            'B' => Ok(Base::B),
            'D' => Ok(Base::D),
            'H' => Ok(Base::H),
            'V' => Ok(Base::V),
            'N' => Ok(Base::N),
            SEPARATOR => Err(SequenceError::Separator(0)),
            _ => Err(SequenceError::InvalidChar(c, 0)),
        }
    }
}

impl From<Base> for char {
    fn from(b: Base) -> Self {
        match b {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
            Base::T => 'T',
            Base::R => 'R',
            Base::Y => 'Y',
            Base::S => 'S',
            Base::W => 'W',
            Base::K => 'K',
            Base::M => 'M',
            Base::B => 'B',
            Base::D => 'D',
            Base::H => 'H',
            Base::V => 'V',
            Base::N => 'N',
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}


/// The nucleotides of a single molecule.
#[derive(Clone, Hash, Debug, Eq, PartialEq)]
pub struct NucleotideVec(pub Vec<Base>);

impl Deref for NucleotideVec {
    type Target = [Base];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for NucleotideVec {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match Base::try_from(c) {
                Ok(b) => vec.push(b),
                Err(SequenceError::InvalidChar(c, _)) => {
                    return Err(SequenceError::InvalidChar(c, i));
                }
                Err(SequenceError::Separator(_)) => {
                    return Err(SequenceError::Separator(i));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(NucleotideVec(vec))
    }
}

impl fmt::Display for NucleotideVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}


/// One or two molecules worth of nucleotides, e.g. `ACGU&GGCA`.
pub type Sequence = Molecules<NucleotideVec>;

fn molecule_from_str(s: &str, start: usize, molecule: usize) -> Result<NucleotideVec, SequenceError> {
    if s.is_empty() {
        return Err(SequenceError::EmptyMolecule(molecule));
    }
    NucleotideVec::try_from(s).map_err(|e| match e {
        SequenceError::InvalidChar(c, i) => SequenceError::InvalidChar(c, start + i),
        SequenceError::Separator(i) => SequenceError::Separator(start + i),
        e => e,
    })
}

impl TryFrom<&str> for Sequence {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Err(SequenceError::Empty);
        }
        if let Some(i) = surplus_separator(s) {
            return Err(SequenceError::Separator(i));
        }
        let (first, second) = split(s);
        let first_mol = molecule_from_str(first, 0, 1)?;
        let second_mol = if s.contains(SEPARATOR) {
            Some(molecule_from_str(second, first.chars().count() + 1, 2)?)
        } else {
            None
        };
        Ok(Molecules { first: first_mol, second: second_mol })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_char() {
        assert_eq!(Base::try_from('a').unwrap(), Base::A);
        assert_eq!(Base::try_from('U').unwrap(), Base::U);
        assert_eq!(Base::try_from('t').unwrap(), Base::T);
        assert_eq!(Base::try_from('n').unwrap(), Base::N);
        assert_eq!(Base::try_from('Y').unwrap(), Base::Y);
    }

    #[test]
    fn test_base_from_invalid_char() {
        assert!(matches!(Base::try_from('X'), Err(SequenceError::InvalidChar('X', _))));
        assert!(matches!(Base::try_from('&'), Err(SequenceError::Separator(_))));
    }

    #[test]
    fn test_nucleotide_vec_uppercases() {
        let seq = NucleotideVec::try_from("acgUN").unwrap();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.to_string(), "ACGUN");
    }

    #[test]
    fn test_nucleotide_vec_reports_position() {
        let err = NucleotideVec::try_from("ACGXU").unwrap_err();
        assert_eq!(format!("{}", err), "Unsupported nucleotide 'X' at position 3");
    }

    #[test]
    fn test_sequence_single_molecule() {
        let seq = Sequence::try_from("ACGAUCAGAG").unwrap();
        assert_eq!(seq.first.len(), 10);
        assert!(seq.second.is_none());
        assert_eq!(seq.to_string(), "ACGAUCAGAG");
    }

    #[test]
    fn test_sequence_two_molecules() {
        let seq = Sequence::try_from("ACGA&ggcauu").unwrap();
        assert_eq!(seq.first.len(), 4);
        assert_eq!(seq.second.as_ref().map(|s| s.len()), Some(6));
        assert_eq!(seq.to_string(), "ACGA&GGCAUU");
    }

    #[test]
    fn test_sequence_errors() {
        assert_eq!(Sequence::try_from(""), Err(SequenceError::Empty));
        assert_eq!(Sequence::try_from("ACG&"), Err(SequenceError::EmptyMolecule(2)));
        assert_eq!(Sequence::try_from("&ACG"), Err(SequenceError::EmptyMolecule(1)));
        assert_eq!(Sequence::try_from("AC&G&U"), Err(SequenceError::Separator(4)));
        assert_eq!(Sequence::try_from("AC&GZ"), Err(SequenceError::InvalidChar('Z', 4)));
    }
}


use std::fmt;

use crate::Bracket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    Empty,
    InvalidToken(String, String, usize),   // token, source, position
    EmptyMolecule(usize),                  // 1-based molecule index
    Separator(usize),                      // position of a surplus '&'
    UnmatchedOpen(Bracket, usize),         // opening bracket at this position was never closed
    UnmatchedClose(Bracket, usize),        // closing bracket at this position has no partner
    LengthMismatch { structure: usize, sequence: usize },
    MoleculeLengthMismatch { molecule: usize, structure: usize, sequence: usize },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::Empty => {
                write!(f, "No structure given")
            }
            StructureError::InvalidToken(tok, src, i) => {
                write!(f, "Invalid {} in {} at position {}", tok, src, i)
            }
            StructureError::EmptyMolecule(m) => {
                write!(f, "Structure of molecule {} is empty", m)
            }
            StructureError::Separator(i) => {
                write!(f, "Unexpected second strand separator at position {}", i)
            }
            StructureError::UnmatchedOpen(b, i) => {
                write!(f, "Too many opening {} brackets: unmatched '{}' at position {}",
                    b, b.open(), i)
            }
            StructureError::UnmatchedClose(b, i) => {
                write!(f, "Too many closing {} brackets: unmatched '{}' at position {}",
                    b, b.close(), i)
            }
            StructureError::LengthMismatch { structure, sequence } => {
                write!(f, "Structure length ({}) and sequence length ({}) do not match",
                    structure, sequence)
            }
            StructureError::MoleculeLengthMismatch { molecule, structure, sequence } => {
                write!(f, "Structure length ({}) and sequence length ({}) of molecule {} do not match",
                    structure, sequence, molecule)
            }
        }
    }
}

impl std::error::Error for StructureError {}


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HybridError {
    NotHybrid(String),
    MismatchedInteractionCount { first: usize, second: usize },
    EndOutOfBounds { molecule: usize, sequence_end: i64, interaction_end: i64 },
    StartOutOfBounds { molecule: usize, sequence_start: i64, interaction_start: i64 },
    SingleMolecule,
}

impl fmt::Display for HybridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotHybrid(s) =>
                write!(f, "Not a hybrid input: {s} (expected e.g. 1|||&5|||)"),
            Self::MismatchedInteractionCount { first, second } =>
                write!(f, "Hybrid input has no matching amount of base pairs: \
                    {first} vs {second} '|' (both molecules need the same number)"),
            Self::EndOutOfBounds { molecule, sequence_end, interaction_end } =>
                write!(f, "Hybrid input of molecule {molecule} is not within the bounds of the sequence: \
                    end sequence {sequence_end}, end interaction {interaction_end}"),
            Self::StartOutOfBounds { molecule, sequence_start, interaction_start } =>
                write!(f, "Hybrid input of molecule {molecule} is not within the bounds of the sequence: \
                    start sequence {sequence_start}, start interaction {interaction_start}"),
            Self::SingleMolecule =>
                write!(f, "Hybrid input requires two molecules in the sequence"),
        }
    }
}

impl std::error::Error for HybridError {}

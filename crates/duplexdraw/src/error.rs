
use std::fmt;
use std::error::Error;

use dd_structure::HybridError;
use dd_structure::MoleculeCount;
use dd_structure::SequenceError;
use dd_structure::StructureError;
use dd_annotate::CoordinateOverflow;
use dd_annotate::NoIntermolecularPairs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetError {
    NotAnInteger(String),
    Zero,
    /// Accepted on its own, but the molecule runs past the coordinate range.
    OutOfRange(CoordinateOverflow),
}

impl fmt::Display for OffsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger(s) => write!(f, "The given index input is not valid: {s}"),
            Self::Zero => write!(f, "Index 0 is not valid, use either <=-1 or >=1"),
            Self::OutOfRange(e) => write!(f, "{}", e),
        }
    }
}

impl Error for OffsetError {}

impl From<CoordinateOverflow> for OffsetError {
    fn from(e: CoordinateOverflow) -> Self { Self::OutOfRange(e) }
}


/// Sequence and structure disagree on the number of molecules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoleculeCountError {
    pub sequence: MoleculeCount,
    pub structure: MoleculeCount,
}

impl fmt::Display for MoleculeCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence has {} molecule(s) but structure has {}", self.sequence, self.structure)
    }
}

impl Error for MoleculeCountError {}


/// Everything that rejects an input before it reaches the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Sequence(SequenceError),
    Structure(StructureError),
    Hybrid(HybridError),
    Offset(OffsetError),
    MoleculeCount(MoleculeCountError),
    NoIntermolecularPairs(NoIntermolecularPairs),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(e) => write!(f, "{}", e),
            Self::Structure(e) => write!(f, "{}", e),
            Self::Hybrid(e) => write!(f, "{}", e),
            Self::Offset(e) => write!(f, "{}", e),
            Self::MoleculeCount(e) => write!(f, "{}", e),
            Self::NoIntermolecularPairs(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sequence(e) => Some(e),
            Self::Structure(e) => Some(e),
            Self::Hybrid(e) => Some(e),
            Self::Offset(e) => Some(e),
            Self::MoleculeCount(e) => Some(e),
            Self::NoIntermolecularPairs(e) => Some(e),
        }
    }
}

impl From<SequenceError> for ValidationError {
    fn from(e: SequenceError) -> Self { Self::Sequence(e) }
}

impl From<StructureError> for ValidationError {
    fn from(e: StructureError) -> Self { Self::Structure(e) }
}

impl From<HybridError> for ValidationError {
    fn from(e: HybridError) -> Self { Self::Hybrid(e) }
}

impl From<OffsetError> for ValidationError {
    fn from(e: OffsetError) -> Self { Self::Offset(e) }
}

impl From<CoordinateOverflow> for ValidationError {
    fn from(e: CoordinateOverflow) -> Self { Self::Offset(e.into()) }
}

impl From<MoleculeCountError> for ValidationError {
    fn from(e: MoleculeCountError) -> Self { Self::MoleculeCount(e) }
}

impl From<NoIntermolecularPairs> for ValidationError {
    fn from(e: NoIntermolecularPairs) -> Self { Self::NoIntermolecularPairs(e) }
}

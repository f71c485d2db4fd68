
//! Compact notation for two-molecule interactions.
//!
//! A hybrid descriptor like `-3|.||` anchors a run of interacting (`|`) and
//! unpaired (`.`) positions at a coordinate of the molecule's own numbering.
//! Two descriptors joined by `&` describe an interaction, e.g. `6|||..&3|||..`,
//! and decode into a full dot-bracket structure of both molecules.

use std::fmt;

use log::debug;
use nohash_hasher::IntMap;

use crate::SEPARATOR;
use crate::Bracket;
use crate::DotBracket;
use crate::DotBracketVec;
use crate::HybridError;
use crate::Sequence;
use crate::Structure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contact {
    Unpaired,    // '.'
    Interacting, // '|'
}

impl From<Contact> for char {
    fn from(c: Contact) -> Self {
        match c {
            Contact::Unpaired => '.',
            Contact::Interacting => '|',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HybridDescriptor {
    pub start: i64,
    pub run: Vec<Contact>,
}

impl HybridDescriptor {
    /// Parses `<signed integer><run of '.' and '|'>`; `None` if `s` is not of that form.
    pub fn parse(s: &str) -> Option<Self> {
        let split = s.find(['.', '|'])?;
        let (number, run) = s.split_at(split);
        let digits = number.strip_prefix('-').unwrap_or(number);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let start = number.parse::<i64>().ok()?;
        let run = run.chars()
            .map(|c| match c {
                '.' => Some(Contact::Unpaired),
                '|' => Some(Contact::Interacting),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;
        Some(HybridDescriptor { start, run })
    }

    pub fn interactions(&self) -> usize {
        self.run.iter().filter(|&&c| c == Contact::Interacting).count()
    }

    /// First coordinate after the run, `None` if it leaves the `i64` range.
    pub fn end(&self) -> Option<i64> {
        span_end(self.start, self.run.len())
    }

    /// Full-length molecule structure: the run where it covers a coordinate, '.' elsewhere.
    /// Both spans have been checked to end within the `i64` range.
    fn expand(&self, offset: i64, sequence_end: i64, paired: DotBracket) -> DotBracketVec {
        let covered: IntMap<i64, Contact> = self.run.iter()
            .enumerate()
            .map(|(k, &c)| (self.start + k as i64, c))
            .collect();

        DotBracketVec((offset..sequence_end)
            .map(|pos| match covered.get(&pos) {
                Some(Contact::Interacting) => paired,
                _ => DotBracket::Unpaired,
            })
            .collect())
    }
}

fn span_end(start: i64, length: usize) -> Option<i64> {
    start.checked_add(i64::try_from(length).ok()?)
}

impl fmt::Display for HybridDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        for c in &self.run {
            write!(f, "{}", char::from(*c))?;
        }
        Ok(())
    }
}

/// Two hybrid descriptors, one per molecule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HybridNotation {
    pub first: HybridDescriptor,
    pub second: HybridDescriptor,
}

impl HybridNotation {
    /// Detects hybrid notation; anything else (plain dot-bracket included) is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let (first, second) = s.split_once(SEPARATOR)?;
        Some(HybridNotation {
            first: HybridDescriptor::parse(first)?,
            second: HybridDescriptor::parse(second)?,
        })
    }

    /// Both molecules must interact with the same number of positions, and
    /// each descriptor must lie within `[offset, offset + length)` of its molecule.
    pub fn check(&self, sequence: &Sequence, offsets: (i64, i64)) -> Result<(), HybridError> {
        self.sequence_ends(sequence, offsets).map(|_| ())
    }

    /// Runs the checks and returns the first coordinate after each molecule.
    fn sequence_ends(&self, sequence: &Sequence, offsets: (i64, i64)) -> Result<(i64, i64), HybridError> {
        let (first, second) = (self.first.interactions(), self.second.interactions());
        if first != second {
            return Err(HybridError::MismatchedInteractionCount { first, second });
        }
        let Some(second_seq) = &sequence.second else {
            return Err(HybridError::SingleMolecule);
        };

        let molecules = [
            (1, &self.first, offsets.0, sequence.first.len()),
            (2, &self.second, offsets.1, second_seq.len()),
        ];
        let mut ends = [0; 2];
        for (k, (molecule, desc, offset, length)) in molecules.into_iter().enumerate() {
            // Spans past i64::MAX are reported with the end saturated.
            ends[k] = match (span_end(offset, length), desc.end()) {
                (Some(s), Some(i)) if s >= i => s,
                (s, i) => {
                    return Err(HybridError::EndOutOfBounds {
                        molecule,
                        sequence_end: s.unwrap_or(i64::MAX),
                        interaction_end: i.unwrap_or(i64::MAX),
                    });
                }
            };
            if offset > desc.start {
                return Err(HybridError::StartOutOfBounds {
                    molecule,
                    sequence_start: offset,
                    interaction_start: desc.start,
                });
            }
        }
        Ok((ends[0], ends[1]))
    }

    /// Expands into a canonical two-molecule structure. Interacting positions
    /// open round brackets in the first molecule and close them in the second.
    pub fn decode(&self, sequence: &Sequence, offsets: (i64, i64)) -> Result<Structure, HybridError> {
        let ends = self.sequence_ends(sequence, offsets)?;
        let structure = Structure::pair(
            self.first.expand(offsets.0, ends.0, DotBracket::Open(Bracket::Round)),
            self.second.expand(offsets.1, ends.1, DotBracket::Close(Bracket::Round)),
        );
        debug!("Decoded hybrid input {} into {}", self, structure);
        Ok(structure)
    }
}

/// Parses `text` as hybrid notation and decodes it against `sequence`.
pub fn decode_hybrid(text: &str, sequence: &Sequence, offsets: (i64, i64)) -> Result<Structure, HybridError> {
    HybridNotation::parse(text)
        .ok_or_else(|| HybridError::NotHybrid(text.to_string()))?
        .decode(sequence, offsets)
}

impl fmt::Display for HybridNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.first, SEPARATOR, self.second)
    }
}

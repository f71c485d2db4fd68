
use std::ops::Deref;
use std::convert::TryFrom;

use crate::StructureError;
use crate::Structure;
use crate::{Bracket, DotBracket, DotBracketVec, BRACKETS};

/// Partner index for every position of a dot-bracket string, pseudoknots included.
///
/// Every bracket type is matched on its own stack, so `([)]` is fine while
/// `(]` is not. Separator positions count as unpaired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable(pub Vec<Option<usize>>);

impl PairTable {
    /// All base pairs `(i, j)` with `i < j`, ordered by `i`.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        self.iter()
            .enumerate()
            .filter_map(|(i, &p)| match p {
                Some(j) if j > i => Some((i, j)),
                _ => None,
            })
            .collect()
    }
}

impl Deref for PairTable {
    type Target = [Option<usize>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn stack_index(b: Bracket) -> usize {
    match b {
        Bracket::Round => 0,
        Bracket::Angle => 1,
        Bracket::Square => 2,
        Bracket::Curly => 3,
    }
}

impl TryFrom<&DotBracketVec> for PairTable {
    type Error = StructureError;

    fn try_from(db: &DotBracketVec) -> Result<Self, Self::Error> {
        let mut stacks: [Vec<usize>; 4] = Default::default();
        let mut table = vec![None; db.len()];

        for (i, dot) in db.iter().enumerate() {
            match *dot {
                DotBracket::Open(b) => stacks[stack_index(b)].push(i),
                DotBracket::Close(b) => {
                    let j = stacks[stack_index(b)].pop()
                        .ok_or(StructureError::UnmatchedClose(b, i))?;
                    table[i] = Some(j);
                    table[j] = Some(i);
                }
                DotBracket::Unpaired | DotBracket::Break => {}
            }
        }

        // Report the leftmost opening bracket that was never closed.
        let unclosed = BRACKETS.iter()
            .filter_map(|&b| stacks[stack_index(b)].first().map(|&i| (i, b)))
            .min();
        if let Some((i, b)) = unclosed {
            return Err(StructureError::UnmatchedOpen(b, i));
        }

        Ok(PairTable(table))
    }
}

impl TryFrom<&str> for PairTable {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PairTable::try_from(&DotBracketVec::try_from(s)?)
    }
}

impl TryFrom<&Structure> for PairTable {
    type Error = StructureError;

    /// Pairs across the joined molecules; indices include the separator position.
    fn try_from(st: &Structure) -> Result<Self, Self::Error> {
        let mut joined = st.first.0.clone();
        if let Some(second) = &st.second {
            joined.push(DotBracket::Break);
            joined.extend_from_slice(second);
        }
        PairTable::try_from(&DotBracketVec(joined))
    }
}

/// Succeeds iff every bracket type is balanced and never closes before it opens.
pub fn validate_brackets(s: &str) -> Result<(), StructureError> {
    PairTable::try_from(s).map(|_| ())
}

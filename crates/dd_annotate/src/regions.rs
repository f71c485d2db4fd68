
use std::fmt;
use std::str::FromStr;
use std::ops::RangeInclusive;

use log::debug;
use serde::Serialize;

use dd_structure::DotBracket;
use dd_structure::intermolecular_positions;

use crate::FILLER_NODES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoIntermolecularPairs {
    pub molecule: usize,
}

impl fmt::Display for NoIntermolecularPairs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Molecule {} has no intermolecular base pairs to highlight", self.molecule)
    }
}

impl std::error::Error for NoIntermolecularPairs {}


/// What to mark in a two-molecule drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlighting {
    Nothing,
    /// Every nucleotide of an intermolecular base pair.
    Basepairs,
    /// Every nucleotide from the first to the last intermolecular base pair.
    #[default]
    Region,
}

impl FromStr for Highlighting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nothing" => Ok(Highlighting::Nothing),
            "basepairs" => Ok(Highlighting::Basepairs),
            "region" => Ok(Highlighting::Region),
            _ => Err(format!("The given highlighting input ({}) is not accepted \
                [nothing, basepairs, region]", s)),
        }
    }
}


/// An inclusive range of 1-based renderer nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    pub fn nodes(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    fn shifted(self, by: usize) -> Region {
        Region { start: self.start + by, end: self.end + by }
    }
}

/// The span from the first to the last intermolecular position of one
/// molecule (1-based, local), intramolecular positions in between included.
pub fn molecule_region(db: &[DotBracket]) -> Option<Region> {
    let positions = intermolecular_positions(db);
    let (first, last) = (positions.first()?, positions.last()?);
    Some(Region { start: first + 1, end: last + 1 })
}

/// Highlighted regions of both molecules in renderer node space.
///
/// The second region is shifted past the first molecule and the filler
/// nodes the renderer puts between the molecules.
pub fn locate_regions(
    first: &[DotBracket],
    second: &[DotBracket],
) -> Result<(Region, Region), NoIntermolecularPairs> {
    let r1 = molecule_region(first).ok_or(NoIntermolecularPairs { molecule: 1 })?;
    let r2 = molecule_region(second).ok_or(NoIntermolecularPairs { molecule: 2 })?;
    let r2 = r2.shifted(first.len() + FILLER_NODES);
    debug!("Intermolecular regions: {}-{} and {}-{}", r1.start, r1.end, r2.start, r2.end);
    Ok((r1, r2))
}

/// Endpoints of all base pairs crossing from the first molecule into the second.
///
/// `links` are the renderer's base pairs as 1-based node indices; the first
/// molecule occupies nodes `1..=split`.
pub fn locate_pairs(split: usize, links: &[(usize, usize)]) -> Vec<usize> {
    links.iter()
        .map(|&(i, j)| (i.min(j), i.max(j)))
        .filter(|&(i, j)| i <= split && j > split)
        .flat_map(|(i, j)| [i, j])
        .collect()
}

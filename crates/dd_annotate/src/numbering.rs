//! Nucleotide coordinates under the "no zero" convention: counting goes
//! `..., -2, -1, 1, 2, ...`, so a molecule starting at `-2` with 4 nucleotides
//! is numbered `-2, -1, 1, 2`.

use std::fmt;

use serde::Serialize;

use dd_structure::MoleculeCount;

use crate::FILLER_NODES;

/// A molecule whose coordinates do not fit into an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateOverflow {
    pub molecule: usize,
    pub offset: i64,
    pub length: usize,
}

impl fmt::Display for CoordinateOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} of molecule {} is out of range for {} nucleotides",
            self.offset, self.molecule, self.length)
    }
}

impl std::error::Error for CoordinateOverflow {}

/// First coordinate after a molecule, `None` if it leaves the `i64` range.
pub fn coordinate_end(offset: i64, length: usize) -> Option<i64> {
    offset.checked_add(i64::try_from(length).ok()?)
}

/// Coordinates of one molecule, starting at `offset`.
///
/// The run `offset..offset+length` loses its 0 (if any) and is extended by
/// one at the end instead, so the length is always preserved.
pub fn molecule_numbering(offset: i64, length: usize) -> Option<Vec<i64>> {
    let end = coordinate_end(offset, length)?;
    let mut run: Vec<i64> = (offset..end).collect();
    if let Some(zero) = run.iter().position(|&n| n == 0) {
        run.remove(zero);
        run.push(end);
    }
    Some(run)
}

/// Both molecules have coordinates within the `i64` range.
pub fn check_coordinates(offsets: (i64, i64), lengths: (usize, usize)) -> Result<(), CoordinateOverflow> {
    for (molecule, offset, length) in [(1, offsets.0, lengths.0), (2, offsets.1, lengths.1)] {
        if coordinate_end(offset, length).is_none() {
            return Err(CoordinateOverflow { molecule, offset, length });
        }
    }
    Ok(())
}

/// Coordinates of all nucleotides, first molecule then second, without gap.
pub fn numbering(offsets: (i64, i64), lengths: (usize, usize)) -> Result<Vec<i64>, CoordinateOverflow> {
    let mut labels = Vec::with_capacity(lengths.0 + lengths.1);
    for (molecule, offset, length) in [(1, offsets.0, lengths.0), (2, offsets.1, lengths.1)] {
        let run = molecule_numbering(offset, length)
            .ok_or(CoordinateOverflow { molecule, offset, length })?;
        labels.extend(run);
    }
    Ok(labels)
}

/// A decadal marker at a 1-based node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tick {
    pub position: usize,
    /// `None` if the tick falls on a filler node.
    pub label: Option<i64>,
}

impl Tick {
    /// Ticks on filler nodes are suppressed rather than mislabeled.
    pub fn is_visible(&self) -> bool {
        self.label.is_some()
    }
}

/// Tick labels for every 10th renderer node.
///
/// `labels` is the output of [`numbering`]. With two molecules the renderer
/// counts two filler nodes between them, so ticks are taken from the padded
/// label sequence.
pub fn tick_labels(labels: &[i64], first_length: usize, count: MoleculeCount) -> Vec<Tick> {
    let split = first_length.min(labels.len());
    let mut padded: Vec<Option<i64>> = labels[..split].iter().copied().map(Some).collect();
    if count == MoleculeCount::Two {
        padded.extend(std::iter::repeat_n(None, FILLER_NODES));
    }
    padded.extend(labels[split..].iter().copied().map(Some));

    (10..=padded.len())
        .step_by(10)
        .map(|position| Tick { position, label: padded[position - 1] })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::rng;

    #[test]
    fn test_positive_offset() {
        assert_eq!(molecule_numbering(1, 5), Some(vec![1, 2, 3, 4, 5]));
        assert_eq!(molecule_numbering(666, 3), Some(vec![666, 667, 668]));
    }

    #[test]
    fn test_negative_offset_skips_zero() {
        assert_eq!(molecule_numbering(-2, 4), Some(vec![-2, -1, 1, 2]));
        assert_eq!(molecule_numbering(-1, 1), Some(vec![-1]));
        assert_eq!(molecule_numbering(-3, 2), Some(vec![-3, -2]));
        assert_eq!(molecule_numbering(-1, 2), Some(vec![-1, 1]));
    }

    #[test]
    fn test_empty_molecule() {
        assert_eq!(molecule_numbering(5, 0), Some(vec![]));
        assert_eq!(numbering((1, 1), (3, 0)), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_numbering_two_molecules() {
        assert_eq!(numbering((-2, 100), (3, 2)), Ok(vec![-2, -1, 1, 100, 101]));
        assert_eq!(numbering((1, -1), (2, 3)), Ok(vec![1, 2, -1, 1, 2]));
    }

    #[test]
    fn test_numbering_never_zero() {
        let mut rng = rng();
        for _ in 0..1000 {
            let offsets = (rng.random_range(-200..200i64), rng.random_range(-200..200i64));
            let lengths = (rng.random_range(0..300usize), rng.random_range(0..300usize));
            let labels = numbering(offsets, lengths).unwrap();
            assert_eq!(labels.len(), lengths.0 + lengths.1);
            assert!(!labels.contains(&0), "{:?} {:?}", offsets, lengths);
        }
    }

    #[test]
    fn test_ticks_single_molecule() {
        let labels = numbering((-4, 1), (25, 0)).unwrap();
        let ticks = tick_labels(&labels, 25, MoleculeCount::One);
        assert_eq!(ticks, vec![
            Tick { position: 10, label: Some(6) },
            Tick { position: 20, label: Some(16) },
        ]);
    }

    #[test]
    fn test_ticks_two_molecules() {
        // Nodes 1..=9 molecule one, 10 and 11 fillers, 12.. molecule two.
        let labels = numbering((1, 101), (9, 20)).unwrap();
        let ticks = tick_labels(&labels, 9, MoleculeCount::Two);
        assert_eq!(ticks.len(), 3);
        assert_eq!(ticks[0], Tick { position: 10, label: None });
        assert!(!ticks[0].is_visible());
        assert_eq!(ticks[1], Tick { position: 20, label: Some(109) });
        assert_eq!(ticks[2], Tick { position: 30, label: Some(119) });
    }

    #[test]
    fn test_ticks_short() {
        let labels = numbering((1, 1), (9, 0)).unwrap();
        assert!(tick_labels(&labels, 9, MoleculeCount::One).is_empty());
        let labels = numbering((1, 1), (10, 0)).unwrap();
        assert_eq!(tick_labels(&labels, 10, MoleculeCount::One).len(), 1);
    }

    #[test]
    fn test_coordinates_at_the_end_of_the_range() {
        assert_eq!(molecule_numbering(i64::MAX, 4), None);
        assert_eq!(molecule_numbering(i64::MAX - 3, 3), Some(vec![i64::MAX - 3, i64::MAX - 2, i64::MAX - 1]));
        assert_eq!(numbering((1, i64::MAX), (4, 1)),
            Err(CoordinateOverflow { molecule: 2, offset: i64::MAX, length: 1 }));
        assert_eq!(check_coordinates((i64::MAX, 1), (4, 0)),
            Err(CoordinateOverflow { molecule: 1, offset: i64::MAX, length: 4 }));
        assert!(check_coordinates((i64::MAX, 1), (0, 4)).is_ok());
        assert!(check_coordinates((i64::MIN, -1), (100, 100)).is_ok());
        assert_eq!(numbering((i64::MIN, 1), (2, 0)), Ok(vec![i64::MIN, i64::MIN + 1]));
    }
}

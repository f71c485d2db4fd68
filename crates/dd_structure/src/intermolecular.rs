
use crate::Bracket;
use crate::DotBracket;

/// Positions of round brackets whose partner must lie in the other molecule.
///
/// Runs the round-bracket stack over a single molecule without failing on
/// imbalance: closing brackets found on an empty stack and opening brackets
/// still stacked at the end are both intermolecular. Returned ascending.
pub fn intermolecular_positions(db: &[DotBracket]) -> Vec<usize> {
    let mut stack: Vec<usize> = Vec::new();
    let mut unmatched_close: Vec<usize> = Vec::new();

    for (i, dot) in db.iter().enumerate() {
        match dot {
            DotBracket::Open(Bracket::Round) => stack.push(i),
            DotBracket::Close(Bracket::Round) => {
                if stack.pop().is_none() {
                    unmatched_close.push(i);
                }
            }
            _ => (),
        }
    }

    let mut positions = unmatched_close;
    positions.extend(stack);
    positions.sort_unstable();
    positions
}

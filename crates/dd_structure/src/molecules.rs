
use std::fmt;
use std::ops::Deref;

use crate::SEPARATOR;

/// Splits at the first separator. The second part is empty if there is none.
pub fn split(text: &str) -> (&str, &str) {
    text.split_once(SEPARATOR).unwrap_or((text, ""))
}

/// Character position of a second separator, if any.
pub(crate) fn surplus_separator(text: &str) -> Option<usize> {
    text.chars()
        .enumerate()
        .filter(|&(_, c)| c == SEPARATOR)
        .nth(1)
        .map(|(i, _)| i)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoleculeCount {
    One,
    Two,
}

impl fmt::Display for MoleculeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoleculeCount::One => write!(f, "1"),
            MoleculeCount::Two => write!(f, "2"),
        }
    }
}

/// A single molecule or an interacting pair of molecules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Molecules<T> {
    pub first: T,
    pub second: Option<T>,
}

impl<T> Molecules<T> {
    pub fn single(first: T) -> Self {
        Molecules { first, second: None }
    }

    pub fn pair(first: T, second: T) -> Self {
        Molecules { first, second: Some(second) }
    }

    pub fn count(&self) -> MoleculeCount {
        match self.second {
            None => MoleculeCount::One,
            Some(_) => MoleculeCount::Two,
        }
    }

    /// Iterates molecules in order, first then (optionally) second.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.first).chain(self.second.iter())
    }
}

impl<T, E> Molecules<T>
where
    T: Deref<Target = [E]>,
{
    /// Per-molecule lengths; the second is 0 if absent.
    pub fn lengths(&self) -> (usize, usize) {
        (self.first.len(), self.second.as_ref().map_or(0, |s| s.len()))
    }

    /// Number of positions across all molecules, separator excluded.
    pub fn len(&self) -> usize {
        let (l1, l2) = self.lengths();
        l1 + l2
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: fmt::Display> fmt::Display for Molecules<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        if let Some(second) = &self.second {
            write!(f, "{}{}", SEPARATOR, second)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(split("ACG&UU"), ("ACG", "UU"));
        assert_eq!(split("ACG"), ("ACG", ""));
        assert_eq!(split("ACG&"), ("ACG", ""));
        assert_eq!(split(""), ("", ""));
    }

    #[test]
    fn test_surplus_separator() {
        assert_eq!(surplus_separator("A&C"), None);
        assert_eq!(surplus_separator("A&C&G"), Some(3));
    }

    #[test]
    fn test_molecule_count_and_display() {
        let one = Molecules::single(String::from("(.)"));
        assert_eq!(one.count(), MoleculeCount::One);
        assert_eq!(one.to_string(), "(.)");
        assert_eq!(one.count().to_string(), "1");

        let two = Molecules::pair(String::from("(("), String::from("))"));
        assert_eq!(two.count(), MoleculeCount::Two);
        assert_eq!(two.to_string(), "((&))");
        assert_eq!(two.iter().count(), 2);
    }

    #[test]
    fn test_lengths() {
        let two = Molecules::pair(vec![1, 2, 3], vec![4]);
        assert_eq!(two.lengths(), (3, 1));
        assert_eq!(two.len(), 4);
        let one = Molecules::single(vec![1, 2]);
        assert_eq!(one.lengths(), (2, 0));
        assert!(!one.is_empty());
        assert!(Molecules::single(Vec::<u8>::new()).is_empty());
    }
}

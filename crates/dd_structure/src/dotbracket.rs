
use std::fmt;
use std::ops::Deref;
use std::ops::DerefMut;
use std::convert::TryFrom;

use crate::SEPARATOR;
use crate::Molecules;
use crate::StructureError;
use crate::split;
use crate::surplus_separator;

/// Independent bracket alphabets. Different types may cross (pseudoknots).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bracket {
    Round,  // ()
    Angle,  // <>
    Square, // []
    Curly,  // {}
}

pub const BRACKETS: [Bracket; 4] = [Bracket::Round, Bracket::Angle, Bracket::Square, Bracket::Curly];

impl Bracket {
    pub fn open(&self) -> char {
        match self {
            Bracket::Round => '(',
            Bracket::Angle => '<',
            Bracket::Square => '[',
            Bracket::Curly => '{',
        }
    }

    pub fn close(&self) -> char {
        match self {
            Bracket::Round => ')',
            Bracket::Angle => '>',
            Bracket::Square => ']',
            Bracket::Curly => '}',
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Bracket::Round => "round",
            Bracket::Angle => "angle",
            Bracket::Square => "square",
            Bracket::Curly => "curly",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotBracket {
    Unpaired,       // '.'
    Open(Bracket),  // '(' '<' '[' '{'
    Close(Bracket), // ')' '>' ']' '}'
    Break,          // '&'
}

impl TryFrom<char> for DotBracket {
    type Error = StructureError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(DotBracket::Unpaired),
            '(' => Ok(DotBracket::Open(Bracket::Round)),
            ')' => Ok(DotBracket::Close(Bracket::Round)),
            '<' => Ok(DotBracket::Open(Bracket::Angle)),
            '>' => Ok(DotBracket::Close(Bracket::Angle)),
            '[' => Ok(DotBracket::Open(Bracket::Square)),
            ']' => Ok(DotBracket::Close(Bracket::Square)),
            '{' => Ok(DotBracket::Open(Bracket::Curly)),
            '}' => Ok(DotBracket::Close(Bracket::Curly)),
            SEPARATOR => Ok(DotBracket::Break),
            _ => Err(StructureError::InvalidToken(format!("character '{}'", c), "dot-bracket".into(), 0)),
        }
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Open(b) => b.open(),
            DotBracket::Close(b) => b.close(),
            DotBracket::Unpaired => '.',
            DotBracket::Break => SEPARATOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl Deref for DotBracketVec {
    type Target = [DotBracket];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DotBracketVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl TryFrom<&str> for DotBracketVec {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match DotBracket::try_from(c) {
                Ok(db) => vec.push(db),
                Err(StructureError::InvalidToken(tok, src, _)) => {
                    return Err(StructureError::InvalidToken(tok, src, i));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(DotBracketVec(vec))
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for db in &self.0 {
            write!(f, "{}", char::from(*db))?;
        }
        Ok(())
    }
}


/// One or two molecules worth of dot-bracket, e.g. `((..&..))`.
pub type Structure = Molecules<DotBracketVec>;

fn molecule_from_str(s: &str, start: usize, molecule: usize) -> Result<DotBracketVec, StructureError> {
    if s.is_empty() {
        return Err(StructureError::EmptyMolecule(molecule));
    }
    DotBracketVec::try_from(s).map_err(|e| match e {
        StructureError::InvalidToken(tok, src, i) => StructureError::InvalidToken(tok, src, start + i),
        e => e,
    })
}

impl TryFrom<&str> for Structure {
    type Error = StructureError;

    /// Checks the alphabet and the molecule layout, not the bracket balance.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Err(StructureError::Empty);
        }
        if let Some(i) = surplus_separator(s) {
            return Err(StructureError::Separator(i));
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

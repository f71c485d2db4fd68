
use std::str::FromStr;

use serde::Serialize;

pub const FIRST_MOLECULE_COLOR: &str = "lightsalmon";
pub const SECOND_MOLECULE_COLOR: &str = "lightgreen";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Coloring {
    /// Leave node colors to the renderer.
    #[default]
    Default,
    /// One fill color per molecule.
    Distinct,
}

impl FromStr for Coloring {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Coloring::Default),
            "distinct" => Ok(Coloring::Distinct),
            _ => Err(format!("The given coloring input is not accepted: {} \
                (accept only default or distinct)", s)),
        }
    }
}

impl Coloring {
    /// Fill colors in node order, or `None` for the renderer's own scheme.
    pub fn node_colors(&self, lengths: (usize, usize)) -> Option<Vec<&'static str>> {
        match self {
            Coloring::Default => None,
            Coloring::Distinct => Some(molecule_colors(lengths)),
        }
    }
}

pub fn molecule_colors(lengths: (usize, usize)) -> Vec<&'static str> {
    let mut colors = vec![FIRST_MOLECULE_COLOR; lengths.0];
    colors.extend(std::iter::repeat_n(SECOND_MOLECULE_COLOR, lengths.1));
    colors
}

mod error;
mod nucleotides;
mod molecules;
mod dotbracket;
mod pair_table;
mod intermolecular;
mod hybrid;

pub use error::*;
pub use nucleotides::*;
pub use molecules::*;
pub use dotbracket::*;
pub use pair_table::*;
pub use intermolecular::*;
pub use hybrid::*;

/// Joins the two molecules of an interaction, in sequences and structures alike.
pub const SEPARATOR: char = '&';

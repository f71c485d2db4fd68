
/// Coordinates of nucleotides and decadal tick labels.
pub mod numbering;

/// Intermolecular regions and base pairs for highlighting.
mod regions;

/// Per-molecule node colors.
mod coloring;

/// Everything at the boundary to the external renderer.
mod render;

pub use numbering::*;
pub use regions::*;
pub use coloring::*;
pub use render::*;

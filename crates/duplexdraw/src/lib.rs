//! # duplexdraw
//!
//! Validates RNA secondary structure input (plain dot-bracket, pseudoknots,
//! or hybrid notation for two interacting molecules) and annotates it for an
//! external renderer.
//!
//! This crate re-exports the main functionality from its submodules.

pub mod error;
pub mod validation;
pub mod pipeline;
pub mod input_parsers;
pub mod render_parsers;

pub mod structure {
    pub use ::dd_structure::*;
}

pub mod annotate {
    pub use ::dd_annotate::*;
}

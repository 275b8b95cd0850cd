//! Codon decoding: the genetic-code table and translation routines.
//!
//! ## Key Types
//!
//! - `Codon`: exactly three bases
//! - `CodonProduct`: what a codon maps to (residue or stop)
//! - `AminoAcid`: the twenty residues, with one-letter codes
//! - `Peptide`: an ordered residue run, rendered as a string
//!
//! Everything here is pure and deterministic; the engine in
//! [`crate::core`] calls in, never the other way around.

pub mod table;
pub mod translate;

pub use table::{AminoAcid, Codon, CodonProduct};
pub use translate::{open_frames, translate, Peptide};

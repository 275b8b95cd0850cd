//! Translation routines over base sequences.
//!
//! Pure functions, no shared state: safe to call repeatedly on partial
//! sequences while a game is in progress.

use serde::{Deserialize, Serialize};

use super::table::{AminoAcid, Codon, CodonProduct};
use crate::core::Base;

/// An ordered run of residues. Renders as the one-letter string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Peptide(Vec<AminoAcid>);

impl Peptide {
    /// The residues, in order.
    #[must_use]
    pub fn residues(&self) -> &[AminoAcid] {
        &self.0
    }

    /// Number of residues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-residue peptide (e.g. an immediate terminator).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Peptide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for residue in &self.0 {
            write!(f, "{residue}")?;
        }
        Ok(())
    }
}

impl FromIterator<AminoAcid> for Peptide {
    fn from_iter<I: IntoIterator<Item = AminoAcid>>(iter: I) -> Self {
        Peptide(iter.into_iter().collect())
    }
}

/// Decode a sequence from offset 0.
///
/// Reads consecutive non-overlapping codons, appending each residue until
/// the first terminator; the terminator itself and everything after it are
/// ignored, as is a trailing 1-2 base remainder. Returns `None` (not an
/// empty peptide) when the input holds no complete codon, so callers can
/// tell "too short" from "terminated immediately".
///
/// ```
/// use rna_relay::codon::translate;
/// use rna_relay::core::parse_sequence;
///
/// let seq = parse_sequence("AUGUUUUAG").unwrap();
/// assert_eq!(translate(&seq).unwrap().to_string(), "MF");
///
/// assert!(translate(&parse_sequence("AU").unwrap()).is_none());
/// ```
#[must_use]
pub fn translate(sequence: &[Base]) -> Option<Peptide> {
    if sequence.len() < 3 {
        return None;
    }

    let mut residues = Vec::with_capacity(sequence.len() / 3);
    for chunk in sequence.chunks_exact(3) {
        match Codon([chunk[0], chunk[1], chunk[2]]).product() {
            CodonProduct::Stop => break,
            CodonProduct::Residue(residue) => residues.push(residue),
        }
    }

    Some(Peptide(residues))
}

/// Find every terminated open reading frame.
///
/// A candidate begins at any offset (any alignment) whose codon is the
/// start marker and is decoded forward in consecutive codons. Candidates
/// that run out of input before a terminator are discarded. Frames are
/// returned in ascending start-offset order; overlapping candidates are
/// evaluated independently, so frames may nest.
///
/// ```
/// use rna_relay::codon::open_frames;
/// use rna_relay::core::parse_sequence;
///
/// let seq = parse_sequence("AUGAUGUAA").unwrap();
/// let frames: Vec<String> = open_frames(&seq).iter().map(|p| p.to_string()).collect();
/// assert_eq!(frames, vec!["MM", "M"]);
/// ```
#[must_use]
pub fn open_frames(sequence: &[Base]) -> Vec<Peptide> {
    let mut frames = Vec::new();
    if sequence.len() < 3 {
        return frames;
    }

    for start in 0..=sequence.len() - 3 {
        if !codon_at(sequence, start).is_start() {
            continue;
        }
        if let Some(frame) = read_frame(sequence, start) {
            frames.push(frame);
        }
    }

    frames
}

/// Decode forward from `start`; `Some` only if a terminator is reached.
fn read_frame(sequence: &[Base], start: usize) -> Option<Peptide> {
    let mut residues = Vec::new();
    let mut offset = start;

    while offset + 3 <= sequence.len() {
        match codon_at(sequence, offset).product() {
            CodonProduct::Stop => return Some(Peptide(residues)),
            CodonProduct::Residue(residue) => residues.push(residue),
        }
        offset += 3;
    }

    None
}

fn codon_at(sequence: &[Base], offset: usize) -> Codon {
    Codon([sequence[offset], sequence[offset + 1], sequence[offset + 2]])
}

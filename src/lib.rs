//! # rna-relay
//!
//! A turn-based RNA sequence-building game engine with codon decoding.
//!
//! Players take turns pressing one of the four base keys (A, C, G, U);
//! every accepted press appends to a shared sequence and to per-player
//! sequences, which decode on demand into peptides and open reading
//! frames.
//!
//! ## Design Principles
//!
//! 1. **Typed Alphabet**: raw input crosses into [`core::Base`] exactly
//!    once, at the adapter boundary. Past it, an out-of-alphabet symbol is
//!    unrepresentable.
//!
//! 2. **Functional State**: [`core::GameState::submit`] returns a fresh
//!    state and never mutates its receiver. Sequences are persistent
//!    vectors (`im-rs`), so the copy is O(1)-ish and a caller can never
//!    observe a half-applied turn.
//!
//! 3. **Pure Decoder**: the `codon` module holds no state and depends on
//!    nothing but the alphabet; the engine calls into it, never the
//!    reverse.
//!
//! ## Modules
//!
//! - `core`: bases, players, game state, input history, configuration
//! - `codon`: the genetic-code table and translation routines

pub mod codon;
pub mod core;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Base, GameBuilder, GameConfig, GameState, InvalidBase, Phase, Player, PlayerId,
    Roster,
};

pub use crate::codon::{open_frames, translate, AminoAcid, Codon, CodonProduct, Peptide};

//! Accepted-input history.
//!
//! Every accepted submission is recorded as an `ActionRecord`. The history
//! is append-only and exists for replay and debugging: folding the recorded
//! bases through a fresh state reproduces the final state exactly.

use serde::{Deserialize, Serialize};

use super::base::Base;
use super::player::PlayerId;

/// One accepted input with ordering metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who submitted the base.
    pub player: PlayerId,

    /// The base submitted.
    pub base: Base,

    /// Full-cycle count at the time of the call (starts at 1).
    pub round: u32,

    /// Index of the base in the shared sequence.
    pub seq: u32,
}

impl ActionRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(player: PlayerId, base: Base, round: u32, seq: u32) -> Self {
        Self {
            player,
            base,
            round,
            seq,
        }
    }
}

//! Game state and the turn engine.
//!
//! ## GameState
//!
//! The complete session state:
//! - roster of players with their selections and transcripts
//! - turn pointer (always a valid roster index)
//! - shared append-only base sequence
//! - accumulation phase (warm-up vs steady)
//! - accepted-input history
//!
//! `submit` is the sole mutating operation, expressed functionally: it
//! returns a fresh `GameState` and never touches the receiver, so a caller
//! can never observe a partial update. Cloning is cheap: every sequence is
//! a persistent `im` vector.
//!
//! ## Accumulation policy (staggered first round)
//!
//! During warm-up, the base submitted on turn `j` lands in the transcripts
//! of players `0..=j`: a player's transcript starts accumulating once the
//! warm-up reaches their roster position. The pointer wrapping once flips
//! the phase to steady, permanently. From then on every transcript tracks
//! the shared sequence, so the first steady call also fills each later
//! player's warm-up deficit and all transcripts stay equal afterwards.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::action::ActionRecord;
use super::base::{Base, InvalidBase};
use super::config::GameConfig;
use super::player::{PlayerId, Roster};
use crate::codon::{open_frames, translate, Peptide};

/// Accumulation phase marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// First full cycle: players join the accumulation one by one.
    #[default]
    Warmup,
    /// Every transcript tracks the shared sequence.
    Steady,
}

/// Complete session state.
///
/// ```
/// use rna_relay::core::{Base, GameBuilder, PlayerId};
///
/// let state = GameBuilder::new().roster_size(3).build();
/// let state = state.submit(Base::A).submit(Base::U).submit(Base::G);
///
/// assert_eq!(state.sequence().len(), 3);
/// assert_eq!(state.active_player(), PlayerId::new(0)); // wrapped around
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    roster: Roster,
    pointer: PlayerId,
    sequence: Vector<Base>,
    phase: Phase,
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Create the initial state: empty sequences, pointer at player 0,
    /// warm-up phase.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let GameConfig { roster_size, names } = config;
        assert_eq!(names.len(), roster_size, "Name count must match roster size");

        Self {
            roster: Roster::new(names),
            pointer: PlayerId::new(0),
            sequence: Vector::new(),
            phase: Phase::Warmup,
            history: Vector::new(),
        }
    }

    /// Submit one base for the active player and return the updated state.
    ///
    /// Appends to the active player's selections and to the shared
    /// sequence, applies the accumulation policy to the transcripts,
    /// records the input, and advances the pointer by one (mod roster
    /// size).
    #[must_use]
    pub fn submit(&self, base: Base) -> GameState {
        let mut next = self.clone();
        next.apply(base);
        next
    }

    /// Boundary entry for input adapters: validate a raw key against the
    /// alphabet (case-insensitively), then submit it.
    ///
    /// `Err` carries the rejected character; the receiving state is
    /// untouched either way.
    pub fn submit_key(&self, key: char) -> Result<GameState, InvalidBase> {
        match Base::from_char(key) {
            Some(base) => Ok(self.submit(base)),
            None => {
                trace!(key = %key, "ignoring key outside the base alphabet");
                Err(InvalidBase(key))
            }
        }
    }

    /// Fold a whole input sequence through a fresh state.
    ///
    /// Replaying identical input always yields an identical final state.
    #[must_use]
    pub fn replay(config: GameConfig, inputs: impl IntoIterator<Item = Base>) -> GameState {
        inputs
            .into_iter()
            .fold(GameState::new(config), |state, base| state.submit(base))
    }

    fn apply(&mut self, base: Base) {
        let player = self.pointer;
        let seq = self.sequence.len() as u32;
        let round = (self.history.len() / self.roster.len()) as u32 + 1;

        self.roster.get_mut(player).push_selection(base);
        self.sequence.push_back(base);

        match self.phase {
            Phase::Warmup => {
                // players at or before the pointer have joined the round
                for joined in PlayerId::all(player.index() + 1) {
                    self.roster.get_mut(joined).push_transcript(base);
                }
                if player.index() + 1 == self.roster.len() {
                    self.phase = Phase::Steady;
                    debug!(round, "warm-up complete");
                }
            }
            Phase::Steady => {
                // transcripts converge to the shared sequence; the first
                // steady call fills each later player's warm-up deficit
                let shared = self.sequence.clone();
                for member in self.roster.iter_mut() {
                    member.sync_transcript(&shared);
                }
            }
        }

        self.history.push_back(ActionRecord::new(player, base, round, seq));
        self.pointer = PlayerId::new(((player.index() + 1) % self.roster.len()) as u8);

        debug!(%player, %base, seq, "base accepted");
    }

    // === Read surface for the rendering boundary ===

    /// The roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Whose turn is next.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.pointer
    }

    /// The shared combined sequence.
    #[must_use]
    pub fn sequence(&self) -> &Vector<Base> {
        &self.sequence
    }

    /// The shared sequence as a display string, e.g. `"AUG"`.
    #[must_use]
    pub fn sequence_string(&self) -> String {
        self.sequence.iter().map(|b| b.to_char()).collect()
    }

    /// Current accumulation phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// History of accepted inputs, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Number of accepted inputs so far.
    #[must_use]
    pub fn turns_taken(&self) -> usize {
        self.history.len()
    }

    // === Decoder views ===

    /// Translate the shared sequence.
    #[must_use]
    pub fn shared_peptide(&self) -> Option<Peptide> {
        translate(&to_bases(&self.sequence))
    }

    /// Open reading frames of the shared sequence.
    #[must_use]
    pub fn shared_frames(&self) -> Vec<Peptide> {
        open_frames(&to_bases(&self.sequence))
    }

    /// Translate a player's transcript.
    #[must_use]
    pub fn player_peptide(&self, player: PlayerId) -> Option<Peptide> {
        translate(&to_bases(self.roster[player].transcript()))
    }

    /// Open reading frames of a player's transcript.
    #[must_use]
    pub fn player_frames(&self, player: PlayerId) -> Vec<Peptide> {
        open_frames(&to_bases(self.roster[player].transcript()))
    }
}

fn to_bases(sequence: &Vector<Base>) -> Vec<Base> {
    sequence.iter().copied().collect()
}

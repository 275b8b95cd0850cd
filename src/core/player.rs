//! Players and the fixed roster.
//!
//! ## PlayerId
//!
//! Type-safe 0-based player identifier supporting 1-255 players.
//!
//! ## Player
//!
//! A roster member: stable id, display name, and two ordered base sequences.
//! `selections` holds the bases the player personally chose on their turns;
//! `transcript` holds the bases attributed to the player by the accumulation
//! policy. Both are persistent vectors so the whole state clones cheaply.
//!
//! ## Roster
//!
//! Fixed-size ordered collection of players, indexable by `PlayerId`.
//! Players are created once at game initialization and never destroyed.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::base::Base;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `count` players.
    pub fn all(count: usize) -> impl Iterator<Item = PlayerId> {
        (0..count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A roster member and its accumulated sequences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    selections: Vector<Base>,
    transcript: Vector<Base>,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            selections: Vector::new(),
            transcript: Vector::new(),
        }
    }

    /// This player's id.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bases this player personally selected, in turn order.
    #[must_use]
    pub fn selections(&self) -> &Vector<Base> {
        &self.selections
    }

    /// Bases attributed to this player by the accumulation policy.
    #[must_use]
    pub fn transcript(&self) -> &Vector<Base> {
        &self.transcript
    }

    pub(crate) fn push_selection(&mut self, base: Base) {
        self.selections.push_back(base);
    }

    pub(crate) fn push_transcript(&mut self, base: Base) {
        self.transcript.push_back(base);
    }

    /// Replace the transcript wholesale. O(1) with persistent vectors.
    pub(crate) fn sync_transcript(&mut self, shared: &Vector<Base>) {
        self.transcript = shared.clone();
    }
}

/// Fixed-size ordered roster of players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster from display names, one player per name.
    pub(crate) fn new(names: Vec<String>) -> Self {
        assert!(!names.is_empty(), "Must have at least 1 player");
        assert!(names.len() <= 255, "At most 255 players supported");

        let players = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(PlayerId(i as u8), name))
            .collect();

        Self { players }
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false: a roster holds at least one player.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get a player by id.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &Player {
        &self.players[player.index()]
    }

    pub(crate) fn get_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player.index()]
    }

    /// Iterate over players in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

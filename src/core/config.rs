//! Game configuration.
//!
//! Games configure the engine at startup with a roster size and display
//! names. `GameBuilder` is the usual entry point; defaults reproduce a
//! three-player session named "Player 1".."Player 3".

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (1-255).
    pub roster_size: usize,

    /// Display names, one per player.
    pub names: Vec<String>,
}

impl GameConfig {
    /// Create a configuration with default display names.
    pub fn new(roster_size: usize) -> Self {
        assert!(roster_size > 0, "Must have at least 1 player");
        assert!(roster_size <= 255, "At most 255 players supported");

        let names = (1..=roster_size).map(|i| format!("Player {i}")).collect();
        Self { roster_size, names }
    }
}

/// Builder for a new game.
///
/// ```
/// use rna_relay::core::GameBuilder;
///
/// let state = GameBuilder::new()
///     .roster_size(3)
///     .names(["Ada", "Rosalind", "Gregor"])
///     .build();
///
/// assert_eq!(state.roster().len(), 3);
/// assert_eq!(state.roster().iter().next().unwrap().name(), "Ada");
/// ```
pub struct GameBuilder {
    roster_size: usize,
    names: Vec<String>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            roster_size: 3,
            names: Vec::new(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of players.
    pub fn roster_size(mut self, count: usize) -> Self {
        assert!(count > 0, "Must have at least 1 player");
        assert!(count <= 255, "At most 255 players supported");
        self.roster_size = count;
        self
    }

    /// Set display names. When provided, the count must match the roster
    /// size at build time.
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Build the initial game state: empty sequences, pointer at player 0,
    /// warm-up phase.
    pub fn build(self) -> GameState {
        let config = self.into_config();
        GameState::new(config)
    }

    /// Build just the configuration, for use with [`GameState::replay`].
    pub fn into_config(self) -> GameConfig {
        let mut config = GameConfig::new(self.roster_size);
        if !self.names.is_empty() {
            assert_eq!(
                self.names.len(),
                self.roster_size,
                "Name count must match roster size"
            );
            config.names = self.names;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_names() {
        let config = GameConfig::new(3);

        assert_eq!(config.roster_size, 3);
        assert_eq!(config.names, vec!["Player 1", "Player 2", "Player 3"]);
    }

    #[test]
    fn test_builder_defaults() {
        let state = GameBuilder::new().build();

        assert_eq!(state.roster().len(), 3);
        assert_eq!(state.roster().iter().nth(1).unwrap().name(), "Player 2");
    }

    #[test]
    fn test_builder_custom_names() {
        let state = GameBuilder::new()
            .roster_size(2)
            .names(["Crick", "Watson"])
            .build();

        let names: Vec<_> = state.roster().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, vec!["Crick", "Watson"]);
    }

    #[test]
    #[should_panic(expected = "Name count must match roster size")]
    fn test_builder_name_count_mismatch() {
        GameBuilder::new().roster_size(3).names(["Solo"]).build();
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_builder_zero_players() {
        GameBuilder::new().roster_size(0);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new(2);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}

//! This module holds the settings a game is built from.

use crate::dice::DEFAULT_SIDES;

/// The score a player has to reach to win a regular game.
pub const DEFAULT_TARGET_SCORE: u32 = 100;

/// The number of players in a game when none is asked for.
pub const DEFAULT_PLAYERS: u32 = 4;

/// This struct holds everything needed to set up a game of Knock Out!.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// The number of players taking part, each getting a sequential id from one.
    pub players: u32,
    /// The seed for both the dice and the knock out numbers. Without one, the game is seeded from
    /// the operating system.
    pub seed: Option<u64>,
    /// The number of faces on each die.
    pub sides: u32,
    /// The score that wins the game as soon as a player reaches it.
    pub target_score: u32,
}

impl GameConfig {
    /// Creates a regular configuration for the given number of players.
    #[must_use]
    pub const fn with_players(players: u32) -> Self {
        Self {
            players,
            seed: None,
            sides: DEFAULT_SIDES,
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_players(DEFAULT_PLAYERS)
    }
}

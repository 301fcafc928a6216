//! This module contains the error type returned when a game, a die or a player is built from an
//! invalid configuration.
//!
//! Once a game has been built, every operation on it is total, so these errors can only show up at
//! construction time.

use crate::player::KNOCK_OUT_RANGE;

/// This enum holds the different ways in which the configuration of a game can be rejected.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GameError {
    /// This variant is used when a player is given a knock out number outside of the allowed
    /// range.
    #[error(
        "knock out number {0} is outside of {start}..={end}",
        start = KNOCK_OUT_RANGE.start(),
        end = KNOCK_OUT_RANGE.end()
    )]
    KnockOutNumberOutOfRange(u32),
    /// This variant is used when a game is requested with no players at all.
    #[error("a game needs at least one player")]
    NoPlayers,
    /// This variant is used when the roster handed to the game does not number its players
    /// sequentially from one.
    #[error("player at position {position} has id {found}, expected {expected}")]
    NonSequentialIds {
        /// The id the player at that position should have had.
        expected: u32,
        /// The id the player at that position actually had.
        found: u32,
        /// The zero-based position of the offending player in turn order.
        position: usize,
    },
    /// This variant is used when a die is requested with no sides.
    #[error("a die needs at least one side")]
    ZeroSides,
    /// This variant is used when the score needed to win is zero.
    #[error("the target score must be greater than zero")]
    ZeroTargetScore,
}

#[cfg(test)]
mod tests {
    use super::GameError;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            GameError::KnockOutNumberOutOfRange(12).to_string(),
            "knock out number 12 is outside of 6..=9"
        );
        assert_eq!(
            GameError::NonSequentialIds {
                expected: 2,
                found: 5,
                position: 1,
            }
            .to_string(),
            "player at position 1 has id 5, expected 2"
        );
        assert_eq!(
            GameError::NoPlayers.to_string(),
            "a game needs at least one player"
        );
    }
}

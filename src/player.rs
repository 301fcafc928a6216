//! This module contains the player of a game of Knock Out!, along with the range its knock out
//! number is drawn from.

use std::ops::RangeInclusive;

use fastrand::Rng;

use crate::error::GameError;

/// The inclusive range a knock out number is picked from.
pub const KNOCK_OUT_RANGE: RangeInclusive<u32> = 6..=9;

/// This struct holds a player's identity and their progress through a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    /// The sequential id of the player, starting at one. It also gives the player's place in turn
    /// order.
    id: u32,
    /// The roll sum that knocks the player out of the game.
    knock_out_number: u32,
    /// Whether the player has been knocked out. Once set, it never goes back.
    knocked_out: bool,
    /// The running sum of the player's rolls.
    score: u32,
}

impl Player {
    /// Adds a roll to the player's score. A knocked out player keeps the score they had.
    pub const fn add_to_score(&mut self, points: u32) {
        if !self.knocked_out {
            self.score = self.score.saturating_add(points);
        }
    }

    /// Returns the player's id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns whether the player has been knocked out.
    #[must_use]
    pub const fn is_knocked_out(&self) -> bool {
        self.knocked_out
    }

    /// Knocks the player out of the game. Doing it twice changes nothing.
    pub const fn knock_out(&mut self) {
        self.knocked_out = true;
    }

    /// Returns the player's knock out number.
    #[must_use]
    pub const fn knock_out_number(&self) -> u32 {
        self.knock_out_number
    }

    /// Creates a new player with a knock out number picked uniformly from `KNOCK_OUT_RANGE`.
    #[must_use]
    pub fn new(id: u32, rng: &mut Rng) -> Self {
        Self {
            id,
            knock_out_number: rng.u32(KNOCK_OUT_RANGE),
            knocked_out: false,
            score: 0,
        }
    }

    /// Returns the player's score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Creates a new player with the given knock out number.
    ///
    /// # Errors
    ///
    /// Returns `GameError::KnockOutNumberOutOfRange` if the number is not within
    /// `KNOCK_OUT_RANGE`.
    pub fn with_knock_out_number(id: u32, knock_out_number: u32) -> Result<Self, GameError> {
        if !KNOCK_OUT_RANGE.contains(&knock_out_number) {
            return Err(GameError::KnockOutNumberOutOfRange(knock_out_number));
        }

        Ok(Self {
            id,
            knock_out_number,
            knocked_out: false,
            score: 0,
        })
    }
}

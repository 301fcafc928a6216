//! The library components of Knock Out!, a dice game in which every player tries to reach a
//! hundred points before rolling their own knock out number.
//!
//! The engine lives in knock_out.rs and is built on the dice and the source of randomness they
//! draw from. The terminal front end started by `init()` lives in game.rs.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod config;
mod dice;
mod error;
mod game;
mod input;
mod knock_out;
mod messages;
mod player;
mod random;
#[cfg(test)]
mod test_support;

pub use config::{GameConfig, DEFAULT_PLAYERS, DEFAULT_TARGET_SCORE};
pub use dice::{Dice, DEFAULT_SIDES};
pub use error::GameError;
pub use game::init;
pub use knock_out::{Event, GameState, KnockOut, Outcome};
pub use player::{Player, KNOCK_OUT_RANGE};
pub use random::{OneThroughTen, RandomSource, SOURCE_RANGE};

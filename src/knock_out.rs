//! This module contains the game engine itself, which owns the dice and the players and runs the
//! turn loop until either someone wins or everyone has been knocked out.
//!
//! A game is played in rounds. On each round every player still in the game, in turn order,
//! throws both dice once. Rolling one's own knock out number ends that player's game; any other
//! roll is added to their score, and the first player to reach the target score wins on the spot.

use std::fmt;
use std::rc::Rc;

use fastrand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::dice::Dice;
use crate::error::GameError;
use crate::player::Player;
use crate::random::{OneThroughTen, RandomSource};

/// This enum holds the notifications a game emits as it is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// This variant is emitted when a player rolls their own knock out number.
    KnockedOut {
        /// The id of the player who is out.
        player: u32,
    },
    /// This variant is emitted when a player reaches the target score. It is always the last
    /// notification of a game.
    Won {
        /// The id of the winning player.
        player: u32,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::KnockedOut { player } => write!(f, "player {player} is out"),
            Self::Won { player } => write!(f, "player {player} has won"),
        }
    }
}

/// This enum holds the two ways a game can end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every player was knocked out before anyone reached the target score.
    AllKnockedOut {
        /// The number of rounds played.
        rounds: u32,
    },
    /// A player reached the target score.
    Won {
        /// The id of the winning player.
        player: u32,
        /// The number of rounds played, counting the one the game was won on.
        rounds: u32,
    },
}

impl Outcome {
    /// Returns the number of rounds the game lasted.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        match *self {
            Self::AllKnockedOut { rounds } | Self::Won { rounds, .. } => rounds,
        }
    }

    /// Returns the id of the winner, if there was one.
    #[must_use]
    pub const fn winner(&self) -> Option<u32> {
        match *self {
            Self::AllKnockedOut { .. } => None,
            Self::Won { player, .. } => Some(player),
        }
    }
}

/// This enum holds the state of a game over its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// The game has reached a terminal state and will not change anymore.
    Finished(Outcome),
    /// At least one round has been played and the game has not ended yet.
    InProgress,
    /// No round has been played yet.
    NotStarted,
}

/// This struct is a game of Knock Out!.
#[derive(Debug)]
pub struct KnockOut {
    /// The die thrown twice on every turn.
    dice: Dice,
    /// Every notification emitted so far, in the order it was emitted.
    events: Vec<Event>,
    /// The players, in turn order. The roster never changes after construction.
    players: Vec<Player>,
    /// The number of rounds started so far.
    rounds: u32,
    /// Where the game stands.
    state: GameState,
    /// The score that wins the game.
    target_score: u32,
}

impl KnockOut {
    /// Returns the die the game is played with.
    #[must_use]
    pub const fn dice(&self) -> &Dice {
        &self.dice
    }

    /// This function records a notification and hands it to the caller's callback.
    fn emit<F: FnMut(&Event)>(events: &mut Vec<Event>, on_event: &mut F, event: Event) {
        on_event(&event);
        events.push(event);
    }

    /// Returns every notification emitted so far.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Creates a game out of an already built die and roster. The players must be numbered
    /// sequentially from one, in turn order.
    ///
    /// # Errors
    ///
    /// Returns a `GameError` if the roster is empty or not sequentially numbered, or if the
    /// target score is zero.
    pub fn from_parts(
        dice: Dice,
        players: Vec<Player>,
        target_score: u32,
    ) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if target_score == 0 {
            return Err(GameError::ZeroTargetScore);
        }
        for (position, (player, expected)) in players.iter().zip(1..).enumerate() {
            if player.id() != expected {
                return Err(GameError::NonSequentialIds {
                    expected,
                    found: player.id(),
                    position,
                });
            }
        }

        debug!(
            players = players.len(),
            sides = dice.sides(),
            target_score,
            "new game"
        );

        Ok(Self {
            dice,
            events: Vec::new(),
            players,
            rounds: 0,
            state: GameState::NotStarted,
            target_score,
        })
    }

    /// Creates a regular game for `number_of_players` players: a six-sided die over a fresh
    /// `OneThroughTen`, a target score of 100 and a random knock out number for every player.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoPlayers` if `number_of_players` is zero.
    pub fn new(number_of_players: u32) -> Result<Self, GameError> {
        Self::with_config(&GameConfig::with_players(number_of_players))
    }

    /// Plays the game to the end and returns how it ended. On a game that has already ended this
    /// does nothing.
    pub fn play(&mut self) -> Outcome {
        self.play_with(|_| {})
    }

    /// Plays a single round. Returns the outcome if the game is over by the end of it, and does
    /// nothing but return the outcome on a game that has already ended.
    pub fn play_round(&mut self) -> Option<Outcome> {
        self.round(&mut |_: &Event| {})
    }

    /// Plays the game to the end like `play()`, handing every notification to `on_event` as soon
    /// as it is emitted.
    pub fn play_with<F: FnMut(&Event)>(&mut self, mut on_event: F) -> Outcome {
        loop {
            if let Some(outcome) = self.round(&mut on_event) {
                return outcome;
            }
        }
    }

    /// Returns the players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// This function plays one round, stopping as soon as a player wins. Once every player is out
    /// at the end of a round the game is over, since no one is left to roll.
    fn round<F: FnMut(&Event)>(&mut self, on_event: &mut F) -> Option<Outcome> {
        if let GameState::Finished(outcome) = self.state {
            return Some(outcome);
        }

        self.state = GameState::InProgress;
        self.rounds += 1;
        let round = self.rounds;

        for player in &mut self.players {
            if player.is_knocked_out() {
                continue;
            }

            let total = self.dice.roll() + self.dice.roll();
            debug!(player = player.id(), round, total, "rolled");

            if total == player.knock_out_number() {
                player.knock_out();
                info!(player = player.id(), round, "knocked out");
                Self::emit(&mut self.events, on_event, Event::KnockedOut {
                    player: player.id(),
                });
                continue;
            }

            player.add_to_score(total);
            if player.score() >= self.target_score {
                let outcome = Outcome::Won {
                    player: player.id(),
                    rounds: round,
                };
                info!(player = player.id(), round, score = player.score(), "won");
                Self::emit(&mut self.events, on_event, Event::Won {
                    player: player.id(),
                });
                self.state = GameState::Finished(outcome);
                return Some(outcome);
            }
        }

        if self.players.iter().all(Player::is_knocked_out) {
            let outcome = Outcome::AllKnockedOut { rounds: round };
            info!(round, "every player is out");
            self.state = GameState::Finished(outcome);
            return Some(outcome);
        }

        None
    }

    /// Returns the number of rounds played so far.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns where the game stands.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the score that wins the game.
    #[must_use]
    pub const fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Creates a game from a full configuration. With a seed in the configuration, both the knock
    /// out numbers and every roll are reproducible.
    ///
    /// # Errors
    ///
    /// Returns a `GameError` if the configuration asks for no players, no sides or a zero target
    /// score.
    pub fn with_config(config: &GameConfig) -> Result<Self, GameError> {
        let mut rng = config.seed.map_or_else(Rng::new, Rng::with_seed);
        let players = (1..=config.players)
            .map(|id| Player::new(id, &mut rng))
            .collect();
        let source: Rc<dyn RandomSource> = Rc::new(OneThroughTen::with_seed(rng.u64(..)));
        let dice = Dice::new(config.sides, source)?;

        Self::from_parts(dice, players, config.target_score)
    }
}

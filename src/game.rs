//! The game module contains the terminal front end of the game, tying together the command-line
//! interface, the logging setup, the prompts and the engine.
//!
//! It contains the `init()` function to start the game loop, as well as the welcome message and the
//! logging initialization.

use anyhow::Result;
use clap::{value_parser, Parser};
use console::{style, Term};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use crate::config::{GameConfig, DEFAULT_TARGET_SCORE};
use crate::dice::DEFAULT_SIDES;
use crate::input::{play_again, take_player_count};
use crate::knock_out::KnockOut;
use crate::messages::{event_line, outcome_line, scoreboard};

/// This struct holds the command-line arguments of the game, parsed with clap's derive API.
#[derive(Parser)]
#[command(name = "knockout", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// A log level among "off", "error", "warn", "info", "debug" and "trace".
    ///
    /// Logs go to the standard error, so that they do not get mixed up with the game's output. At
    /// "debug", every single roll is logged.
    #[arg(short, long, default_value = "warn")]
    #[arg(env = "KNOCKOUT_LOG_LEVEL", value_name = "LEVEL")]
    log_level: LevelFilter,
    /// The number of players taking part in the game.
    ///
    /// When left out, the number is asked for before every game, and you get asked whether you
    /// want to play another game once one ends.
    #[arg(short, long, value_parser = value_parser!(u32).range(1..))]
    #[arg(env = "KNOCKOUT_PLAYERS", value_name = "COUNT")]
    players: Option<u32>,
    /// The seed for the knock out numbers and the dice, to replay the exact same game.
    #[arg(short, long)]
    #[arg(env = "KNOCKOUT_SEED", value_name = "SEED")]
    seed: Option<u64>,
    /// The number of faces on each die.
    #[arg(long, default_value_t = DEFAULT_SIDES, value_parser = value_parser!(u32).range(1..))]
    sides: u32,
    /// The score a player needs to reach to win.
    #[arg(short, long, default_value_t = DEFAULT_TARGET_SCORE)]
    #[arg(value_parser = value_parser!(u32).range(1..))]
    target_score: u32,
}

impl Cli {
    /// This function builds the configuration for the game numbered `game` (from zero) in this
    /// session. A seed given on the command line is offset by the game number, so that replaying
    /// in the same session does not deal the exact same game twice.
    fn config(&self, players: u32, game: u64) -> GameConfig {
        GameConfig {
            players,
            seed: self.seed.map(|seed| seed.wrapping_add(game)),
            sides: self.sides,
            target_score: self.target_score,
        }
    }
}

/// Initializes the logging and the terminal and runs games until the user is done. This is a
/// `main()` function of sorts though it is still called from main.rs.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error
/// - dialoguer::Error
/// - knockout::GameError
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let term = Term::stdout();
    init_message(&term)?;

    let mut game_number = 0;
    loop {
        let players = match cli.players {
            Some(players) => players,
            None => take_player_count(&term)?,
        };
        let config = cli.config(players, game_number);
        info!(?config, game_number, "starting game");

        let mut game = KnockOut::with_config(&config)?;
        run_game(&term, &mut game)?;

        // a fixed player count means a single, non-interactive game
        if cli.players.is_some() || !play_again(&term)? {
            break Ok(());
        }

        game_number += 1;
        if term.is_term() {
            term.clear_screen()?;
        }
    }
}

/// This function sets up a compact `tracing` subscriber writing to the standard error, filtered
/// to `level` and above.
fn init_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// This function writes the message shown when the program starts, clearing the screen and
/// setting the title of the console window first when running in a terminal.
fn init_message(term: &Term) -> Result<()> {
    const MSG: &str = "Welcome to Knock Out!";
    let msg = style(MSG).bold();

    if term.is_term() {
        term.clear_screen()?;
        term.set_title("knockout");
    }

    term.write_line(&format!("{msg}"))?;
    Ok(())
}

/// This function plays a game round by round, writing out the notifications of each round as soon
/// as it is over, and then the final scores.
fn run_game(term: &Term, game: &mut KnockOut) -> Result<()> {
    let mut written = 0;

    let outcome = loop {
        let outcome = game.play_round();

        for event in game.events().iter().skip(written) {
            term.write_line(&event_line(*event))?;
        }
        written = game.events().len();

        if let Some(outcome) = outcome {
            break outcome;
        }
    };
    debug!(?outcome, "game over");

    term.write_line("")?;
    term.write_line(&outcome_line(&outcome))?;
    for line in scoreboard(game) {
        term.write_line(&line)?;
    }

    Ok(())
}

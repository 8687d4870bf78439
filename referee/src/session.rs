use std::io::{BufRead, Write};

use tictac::{Coordinate, Game, Player, Settings, TurnOutcome, MIN_BOARD_SIZE, MIN_WIN_LENGTH};
use tracing::{debug, info, warn};

use crate::console::Console;
use crate::Config;

/// Greets the players, settles the board size and win length, and plays one
/// game to its end.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> anyhow::Result<TurnOutcome> {
    console.say("Welcome")?;
    let settings = choose_settings(console, config)?;
    info!(
        size = settings.size(),
        win_length = settings.win_length(),
        "Starting game"
    );
    play_game(console, settings)
}

/// Takes the preset values from `config` where they are valid, and asks for
/// the rest.
pub fn choose_settings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> anyhow::Result<Settings> {
    let size = match config.size.map(Settings::check_size) {
        Some(Ok(size)) => size,
        Some(Err(err)) => {
            warn!("Ignoring the preset board size: {}", err);
            ask_size(console)?
        }
        None => ask_size(console)?,
    };
    match config.win_length.map(|win_length| Settings::new(size, win_length)) {
        Some(Ok(settings)) => Ok(settings),
        Some(Err(err)) => {
            warn!("Ignoring the preset win length: {}", err);
            ask_win_length(console, size)
        }
        None => ask_win_length(console, size),
    }
}

fn ask_size<R: BufRead, W: Write>(console: &mut Console<R, W>) -> anyhow::Result<usize> {
    console.ask(
        &format!("Select field size NxN (begin from {}): ", MIN_BOARD_SIZE),
        "Size must be a number",
        |answer| {
            let size = usize::try_from(answer)
                .map_err(|_| format!("Size must be >= {}", MIN_BOARD_SIZE))?;
            Settings::check_size(size).map_err(|err| err.to_string())
        },
    )
}

fn ask_win_length<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    size: usize,
) -> anyhow::Result<Settings> {
    console.ask(
        &format!("Select win size from {} to {}: ", MIN_WIN_LENGTH, size),
        "Win size must be a number",
        |answer| {
            let win_length = usize::try_from(answer)
                .map_err(|_| format!("Win size must be from {} to {}", MIN_WIN_LENGTH, size))?;
            Settings::new(size, win_length).map_err(|err| err.to_string())
        },
    )
}

/// Asks for one axis of the next move. Only indices on the board are accepted.
fn ask_index<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    player: Player,
    axis: &str,
    size: usize,
) -> anyhow::Result<usize> {
    console.ask(
        &format!("Select next step for '{}' {}: ", player, axis),
        "Coordinates must be a number",
        |answer| {
            usize::try_from(answer)
                .ok()
                .filter(|&index| index < size)
                .ok_or_else(|| format!("Coordinate must be in 0 - {}", size - 1))
        },
    )
}

/// Runs the turn loop until somebody wins or the board is full.
///
/// Returns an error only on I/O failure, never because of a bad move; those
/// are reported to the player, who is asked again.
pub fn play_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: Settings,
) -> anyhow::Result<TurnOutcome> {
    let mut game = Game::new(settings);
    let size = game.settings().size();
    loop {
        console.say("=".repeat(10))?;
        console.say(format!("Step: {}", game.step()))?;
        console.say(game.board())?;

        let player = game.current_player();
        let (coord, outcome) = loop {
            let column = ask_index(console, player, "column", size)?;
            let row = ask_index(console, player, "row", size)?;
            let coord = Coordinate::new(row, column);
            match game.execute_turn(coord) {
                Ok(outcome) => break (coord, outcome),
                Err(err) => {
                    debug!(%player, %coord, "Illegal move: {}", err);
                    console.say(err)?;
                }
            }
        };
        debug!(%player, %coord, step = game.step() - 1, "Move applied");

        match outcome {
            TurnOutcome::Normal => {}
            TurnOutcome::Won { player, step } => {
                info!(winner = %player, step, "Game won");
                console.say(game.board())?;
                console.say("Congratulation!")?;
                console.say(format!("Player '{}' WIN on step {}", player, step))?;
                return Ok(outcome);
            }
            TurnOutcome::Draw { step } => {
                info!(step, "Tie");
                console.say(game.board())?;
                console.say("All wins! The board is full, it's a draw.")?;
                return Ok(outcome);
            }
        }
    }
}

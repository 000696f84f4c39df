//! Core game state and the turn loop.

use std::{
    io::{BufRead, Write},
    process::ExitCode,
};

use color_eyre::eyre::{bail, Result};
use log::{debug, error, info};

use crate::{
    grid::Grid,
    movement::{self, Blocked, MoveCheck},
    observers::Registry,
    types::{Direction, Position, EXIT_POSITION, FLOOR, PLAYER, START},
};

/// Prompt printed below the grid before every read.
pub const PROMPT: &str = "Enter movement (w/a/s/d): ";

/// Message printed once the player reaches the exit.
pub const CONGRATULATIONS: &str = "Congratulations! You reached the exit.";

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// The player has not reached the exit yet.
    Running,
    /// The player reached the exit; no further turns are played.
    Finished,
}

/// Report of a single turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// The command did not name a direction; nothing changed.
    Ignored,
    /// The step was refused; nothing changed.
    Blocked(Blocked),
    /// The player moved to the contained position.
    Moved(Position),
    /// The player moved onto the exit at the contained position and the game is over.
    Won(Position),
}

/// How a call to [`Game::run`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The player reached the exit.
    ReachedExit,
    /// Input ended before the player reached the exit.
    InputClosed,
    /// Input could not be read.
    InputFailed,
}

impl Outcome {
    /// Returns the process exit status for this outcome.
    ///
    /// Running out of input is a clean shutdown, so only a read failure maps to a failure status.
    #[must_use]
    pub const fn exit_code(self) -> ExitCode {
        match self {
            Self::ReachedExit | Self::InputClosed => ExitCode::SUCCESS,
            Self::InputFailed => ExitCode::FAILURE,
        }
    }
}

/// Game state container.
///
/// This structure owns everything a game needs: the grid, where the player and the exit are, the
/// listeners to notify on every move and whether the game is still running. It is handed by
/// reference to the turn loop; there is no global state.
#[derive(Clone, Debug)]
pub struct Game {
    /// Playing field, mutated in place on every successful move.
    grid: Grid,
    /// Current position of the player.
    player: Position,
    /// Position of the exit. It never changes once the game is built.
    exit: Position,
    /// Listeners notified after every successful move.
    observers: Registry,
    /// Whether turns are still being played.
    state: State,
    /// Number of successful moves so far.
    moves: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the player on the start cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: Grid::initialize(),
            player: START,
            exit: EXIT_POSITION,
            observers: Registry::new(),
            state: State::Running,
            moves: 0,
        }
    }

    /// Returns the playing field.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the current position of the player.
    #[must_use]
    pub const fn player(&self) -> Position {
        self.player
    }

    /// Returns the position of the exit.
    #[must_use]
    pub const fn exit(&self) -> Position {
        self.exit
    }

    /// Returns whether the game is still running.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Returns the number of successful moves so far.
    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Plays a single turn for the given command character.
    ///
    /// A command that is missing or does not name a direction is ignored, as is a step that leaves
    /// the grid or hits an obstacle. A legal step moves the player, prints one line per registered
    /// listener and, if it lands on the exit, prints the congratulations message and finishes the
    /// game.
    ///
    /// # Errors
    ///
    /// This function returns an error if the game is already finished, or if writing to `output`
    /// fails.
    pub fn turn<W: Write>(&mut self, command: Option<char>, output: &mut W) -> Result<Turn> {
        if self.state == State::Finished {
            bail!("the game is already finished");
        }

        let Some(direction) = command.and_then(Direction::from_command) else {
            debug!("ignoring command {command:?}");
            return Ok(Turn::Ignored);
        };

        let target = match movement::validate(&self.grid, self.player, direction) {
            MoveCheck::Legal(target) => target,
            MoveCheck::Blocked(reason) => {
                debug!("step {direction:?} from {} refused: {reason:?}", self.player);
                return Ok(Turn::Blocked(reason));
            }
        };

        self.grid.set_cell(self.player, FLOOR)?;
        self.grid.set_cell(target, PLAYER)?;
        self.player = target;
        self.moves += 1;
        debug!("player moved {direction:?} to {target}");

        self.observers.notify_all(target, output)?;

        if target == self.exit {
            self.state = State::Finished;
            info!("exit reached after {} moves", self.moves);
            writeln!(output, "{CONGRATULATIONS}")?;
            return Ok(Turn::Won(target));
        }

        Ok(Turn::Moved(target))
    }

    /// Runs the turn loop until the exit is reached or input runs out.
    ///
    /// Each iteration draws the grid, prints the prompt, reads one line and plays a turn with its
    /// first character. The grid is not drawn again once the exit is reached. When input ends or
    /// cannot be read, a newline is printed after the dangling prompt and the loop stops.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`] when writing to `output` fails
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<Outcome> {
        let mut line = String::new();

        while self.state == State::Running {
            write!(output, "{}{PROMPT}", self.grid)?;
            output.flush()?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => {
                    writeln!(output)?;
                    info!("input closed after {} moves", self.moves);
                    return Ok(Outcome::InputClosed);
                }
                Ok(_) => {}
                Err(err) => {
                    writeln!(output)?;
                    error!("failed to read input: {err}");
                    return Ok(Outcome::InputFailed);
                }
            }

            let _ = self.turn(line.chars().next(), output)?;
        }

        Ok(Outcome::ReachedExit)
    }
}

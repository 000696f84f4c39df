//! This crate contains the game logic for gridwalk, a terminal game where the player steers across a
//! small grid around obstacles until they reach the exit.
//!
//! The [`Game`] owns the [`Grid`], the player and exit positions and the [`ObserverRegistry`]
//! notified after every move. [`Game::run`] drives the turn loop over any pair of buffered reader
//! and writer, which the binary wires to the process's standard streams.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod cli;
mod game;
mod grid;
mod logging;
mod movement;
mod observers;
mod types;

pub use crate::{
    cli::Cli,
    game::{Game, Outcome, State, Turn, CONGRATULATIONS, PROMPT},
    grid::Grid,
    logging::init as init_logging,
    movement::{candidate, validate, Blocked, MoveCheck},
    observers::{Broadcaster, Registry as ObserverRegistry},
    types::{
        Direction, Position, EXIT, EXIT_POSITION, FLOOR, HEIGHT, OBSTACLE, OBSTACLES, PLAYER,
        START, WIDTH,
    },
};

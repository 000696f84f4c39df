//! This crate contains the source code for the binary for the game gridwalk.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::{io, process::ExitCode};

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use gridwalk::{init_logging, Cli, Game};
use log::info;

fn main() -> Result<ExitCode> {
    install()?;

    let cli = Cli::parse();
    init_logging(cli.level_filter())?;
    info!("gridwalk starting up");

    let outcome = Game::new().run(&mut io::stdin().lock(), &mut io::stdout().lock())?;
    info!("game ended: {outcome:?}");

    Ok(outcome.exit_code())
}

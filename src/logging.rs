//! Diagnostic logging setup.

use color_eyre::eyre::Result;
use log::LevelFilter;

/// Installs the global logger.
///
/// Diagnostics go to standard error so they never mix with the grid on standard output. Directives
/// in `RUST_LOG` are honored, with `level` taking over the global default.
///
/// # Errors
///
/// This function returns an error if a global logger has already been installed.
pub fn init(level: LevelFilter) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .try_init()?;

    Ok(())
}

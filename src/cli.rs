//! Command line interface.

use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Command line arguments of the game.
///
/// The game itself takes no configuration; these flags only control how much diagnostic output is
/// written to standard error.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Increase diagnostic verbosity; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Silence diagnostics entirely
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Returns the most verbose log level to emit.
    ///
    /// Warnings are shown by default and each `-v` unlocks one more level, up to `trace`.
    #[must_use]
    pub const fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_level() {
        let cli = Cli::try_parse_from(["gridwalk"]).expect("no arguments should parse");

        assert_eq!(cli.level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_verbose_levels() {
        for (args, level) in [
            (vec!["gridwalk", "-v"], LevelFilter::Info),
            (vec!["gridwalk", "-vv"], LevelFilter::Debug),
            (vec!["gridwalk", "--verbose", "-vv"], LevelFilter::Trace),
            (vec!["gridwalk", "-vvvvv"], LevelFilter::Trace),
        ] {
            let cli = Cli::try_parse_from(args.iter().copied())
                .expect("verbosity flags should parse");
            assert_eq!(cli.level_filter(), level, "unexpected level for {args:?}");
        }
    }

    #[test]
    fn test_quiet() {
        let cli = Cli::try_parse_from(["gridwalk", "--quiet"]).expect("quiet flag should parse");

        assert_eq!(cli.level_filter(), LevelFilter::Off);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["gridwalk", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["gridwalk", "level.txt"]).is_err());
    }
}

//! Command-line interface for carrental.
//!
//! This module provides the CLI structure for the `carrental` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{CarsCommand, ConfigCommand, HistoryCommand, StatusCommand};

/// carrental - Keep track of cars, customers and rentals
///
/// Starts the interactive console when no command is given. The other
/// commands read the record files without changing them.
#[derive(Debug, Parser)]
#[command(name = "carrental")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the record files (overrides the configuration)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive console (default)
    Run,

    /// Show record files and counts
    Status(StatusCommand),

    /// List the car catalog
    Cars(CarsCommand),

    /// Show the rental log
    History(HistoryCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "carrental");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(parse(&["carrental", "-q"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["carrental"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["carrental", "-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["carrental", "-vv"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_no_command_runs_console() {
        assert!(parse(&["carrental"]).command.is_none());
        assert!(matches!(parse(&["carrental", "run"]).command, Some(Command::Run)));
    }

    #[test]
    fn test_parse_status_json() {
        let cli = parse(&["carrental", "status", "--json"]);
        assert!(matches!(
            cli.command,
            Some(Command::Status(StatusCommand { json: true }))
        ));
    }

    #[test]
    fn test_parse_cars() {
        let cli = parse(&["carrental", "cars", "--available"]);
        assert!(matches!(
            cli.command,
            Some(Command::Cars(CarsCommand {
                available: true,
                json: false
            }))
        ));
    }

    #[test]
    fn test_parse_history_user() {
        let cli = parse(&["carrental", "history", "--user", "rohan"]);
        match cli.command {
            Some(Command::History(cmd)) => assert_eq!(cmd.user.as_deref(), Some("rohan")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = parse(&["carrental", "config", "validate", "--file", "/tmp/c.toml"]);
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Validate { file: Some(_) }))
        ));
    }

    #[test]
    fn test_global_options_after_command() {
        let cli = parse(&["carrental", "cars", "-d", "/srv/rental", "-c", "/custom.toml"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/rental")));
        assert_eq!(cli.config, Some(PathBuf::from("/custom.toml")));
    }

    #[test]
    fn test_unknown_command_fails() {
        assert!(Cli::try_parse_from(["carrental", "daemon"]).is_err());
    }
}

//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Car listing arguments.
#[derive(Debug, Args)]
pub struct CarsCommand {
    /// Only show cars that can be rented now
    #[arg(short, long)]
    pub available: bool,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Rental log arguments.
#[derive(Debug, Args)]
pub struct HistoryCommand {
    /// Only show rentals of this username
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

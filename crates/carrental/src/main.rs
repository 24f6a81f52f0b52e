//! `carrental` - CLI for the car rental record keeper
//!
//! Runs the interactive console by default and offers a few read-only
//! commands for inspecting the record files.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use carrental::cli::{CarsCommand, Cli, Command, ConfigCommand, HistoryCommand};
use carrental::console::{display, Session, TerminalPrompter};
use carrental::{init_logging, Config, Service};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let Cli {
        config: config_path,
        data_dir,
        command,
        ..
    } = cli;

    match command.unwrap_or(Command::Run) {
        Command::Config(config_cmd) => handle_config(config_path, config_cmd),
        Command::Run => {
            let (config, service) = open_service(config_path, data_dir)?;
            handle_run(&service, &config)
        }
        Command::Status(status_cmd) => {
            let (_, service) = open_service(config_path, data_dir)?;
            handle_status(&service, status_cmd.json)
        }
        Command::Cars(cars_cmd) => {
            let (_, service) = open_service(config_path, data_dir)?;
            handle_cars(&service, &cars_cmd)
        }
        Command::History(history_cmd) => {
            let (_, service) = open_service(config_path, data_dir)?;
            handle_history(&service, &history_cmd)
        }
    }
}

/// Load configuration, apply the `--data-dir` override and open the stores.
fn open_service(
    config_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> Result<(Config, Service)> {
    let mut config = Config::load_from(config_path).context("failed to load configuration")?;
    if let Some(data_dir) = data_dir {
        config.storage.data_dir = Some(data_dir);
    }
    let service = Service::open(&config).context("failed to open the data directory")?;
    Ok((config, service))
}

fn handle_run(service: &Service, config: &Config) -> Result<()> {
    let prompter = TerminalPrompter::new(
        io::stdin().lock(),
        io::stdout().lock(),
        config.console.clear_screen,
    );
    Session::new(service, prompter)
        .run()
        .context("console session failed")
}

fn handle_status(service: &Service, json: bool) -> Result<()> {
    let stats = service.stats()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("carrental status");
        println!("----------------");
        println!("Data directory: {}", stats.data_dir.display());
        println!("Users:          {}", stats.users);
        println!("Cars:           {}", stats.cars);
        println!("Available cars: {}", stats.available_cars);
        println!("Rentals:        {}", stats.rentals);
        println!("Registrations:  {}", stats.registrations);
    }
    Ok(())
}

fn handle_cars(service: &Service, cmd: &CarsCommand) -> Result<()> {
    let cars = if cmd.available {
        service.list_available_cars()?
    } else {
        service.list_cars()?
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&cars)?);
    } else if cars.is_empty() {
        println!("No cars found.");
    } else {
        print!("{}", display::car_table(&cars));
    }
    Ok(())
}

fn handle_history(service: &Service, cmd: &HistoryCommand) -> Result<()> {
    let rentals = service.rental_history(cmd.user.as_deref())?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&rentals)?);
    } else if rentals.is_empty() {
        println!("No rentals recorded.");
    } else {
        print!("{}", display::rental_table(&rentals));
    }
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config =
                Config::load_from(config_path).context("failed to load configuration")?;
            if json {
                let mut shown = config.clone();
                shown.admin.password = "********".to_string();
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data directory:     {}", config.data_dir().display());
                println!("  Users file:         {}", config.storage.users_file);
                println!("  Cars file:          {}", config.storage.cars_file);
                println!("  Rentals file:       {}", config.storage.rentals_file);
                println!("  Counter file:       {}", config.storage.counter_file);
                match config.max_users() {
                    Some(max) => println!("  Max users:          {max}"),
                    None => println!("  Max users:          unlimited"),
                }
                println!();
                println!("[Admin]");
                println!("  Username:           {}", config.admin.username);
                println!();
                println!("[Rental]");
                println!("  ID prefix:          {}", config.rental.id_prefix);
                println!();
                println!("[Console]");
                println!("  Clear screen:       {}", config.console.clear_screen);
            }
        }
        ConfigCommand::Path => {
            let path = config_path.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => bail!("configuration error: {e}"),
            }
        }
    }
    Ok(())
}

//! Configuration management for carrental.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::auth::AdminCredentials;
use crate::error::{Error, Result};
use crate::models::rental::RENTAL_ID_WIDTH;
use crate::pricing::RENTAL_ID_DIGITS;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "carrental";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CARRENTAL_`, nested with `__`)
/// 2. TOML config file at `~/.config/carrental/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Built-in administrator login.
    pub admin: AdminCredentials,
    /// Rental configuration.
    pub rental: RentalConfig,
    /// Console configuration.
    pub console: ConsoleConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the record files.
    /// Defaults to `~/.local/share/carrental`
    pub data_dir: Option<PathBuf>,
    /// File name of the user records.
    pub users_file: String,
    /// File name of the car records.
    pub cars_file: String,
    /// File name of the rental records.
    pub rentals_file: String,
    /// File name of the registration counter.
    pub counter_file: String,
    /// Maximum number of stored users.
    /// Set to 0 for unlimited.
    pub max_users: usize,
}

/// Rental-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentalConfig {
    /// Text placed before the random digits of every rental ID.
    pub id_prefix: String,
}

/// Console-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Clear the terminal between screens.
    pub clear_screen: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None, // Will be resolved to default at runtime
            users_file: "registered_users.bin".to_string(),
            cars_file: "cars.bin".to_string(),
            rentals_file: "rentals.bin".to_string(),
            counter_file: "highest_recorded_number.txt".to_string(),
            max_users: 100,
        }
    }
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            id_prefix: "CR".to_string(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `CARRENTAL_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("CARRENTAL_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.admin.username.is_empty() || self.admin.password.is_empty() {
            return Err(Error::ConfigValidation {
                message: "admin username and password must not be empty".to_string(),
            });
        }

        let files = self.record_file_names();
        for (i, name) in files.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "storage file names must not be empty".to_string(),
                });
            }
            if files[..i].contains(name) {
                return Err(Error::ConfigValidation {
                    message: format!("storage file name '{name}' is used more than once"),
                });
            }
        }

        if self.rental.id_prefix.len() + RENTAL_ID_DIGITS > RENTAL_ID_WIDTH {
            return Err(Error::ConfigValidation {
                message: format!(
                    "rental id_prefix '{}' is too long (at most {} bytes)",
                    self.rental.id_prefix,
                    RENTAL_ID_WIDTH - RENTAL_ID_DIGITS
                ),
            });
        }

        Ok(())
    }

    fn record_file_names(&self) -> [&str; 4] {
        [
            &self.storage.users_file,
            &self.storage.cars_file,
            &self.storage.rentals_file,
            &self.storage.counter_file,
        ]
    }

    /// Get the data directory, resolving defaults if not set.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Path of the user record file.
    #[must_use]
    pub fn users_path(&self) -> PathBuf {
        self.data_dir().join(&self.storage.users_file)
    }

    /// Path of the car record file.
    #[must_use]
    pub fn cars_path(&self) -> PathBuf {
        self.data_dir().join(&self.storage.cars_file)
    }

    /// Path of the rental record file.
    #[must_use]
    pub fn rentals_path(&self) -> PathBuf {
        self.data_dir().join(&self.storage.rentals_file)
    }

    /// Path of the registration counter file.
    #[must_use]
    pub fn counter_path(&self) -> PathBuf {
        self.data_dir().join(&self.storage.counter_file)
    }

    /// Maximum number of stored users, or `None` when unlimited.
    #[must_use]
    pub fn max_users(&self) -> Option<usize> {
        match self.storage.max_users {
            0 => None,
            n => Some(n),
        }
    }
}

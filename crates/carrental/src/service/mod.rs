//! Domain operations over the record stores.
//!
//! [`Service`] owns one store per entity plus the registration counter and
//! the configured admin login. Every operation loads what it needs from disk,
//! applies its change and persists before returning; nothing is cached
//! between calls.
//!
//! Renting a car touches two files (the car's availability flag, then the
//! rental log) with no rollback between them. A failure after the first write
//! leaves the car marked unavailable without a rental record; this is logged.

mod cars;
mod rentals;
mod users;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::auth::{AdminCredentials, CredentialCheck, PlainText};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Car, Rental, User};
use crate::store::{FileStatus, RecordStore, SequenceCounter};

pub use rentals::RentalQuote;
pub use users::Registration;

/// The command layer: registration, login, catalog, users and rentals.
#[derive(Debug)]
pub struct Service<C = PlainText> {
    data_dir: PathBuf,
    users: RecordStore<User>,
    cars: RecordStore<Car>,
    rentals: RecordStore<Rental>,
    counter: SequenceCounter,
    admin: AdminCredentials,
    rental_id_prefix: String,
    max_users: Option<usize>,
    credentials: C,
}

impl Service<PlainText> {
    /// Open the stores described by `config` with plain-text passwords.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(config: &Config) -> Result<Self> {
        Self::with_credentials(config, PlainText)
    }
}

impl<C: CredentialCheck> Service<C> {
    /// Open the stores described by `config`, comparing passwords with
    /// `credentials`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn with_credentials(config: &Config, credentials: C) -> Result<Self> {
        let data_dir = config.data_dir();
        fs::create_dir_all(&data_dir).map_err(|source| Error::DirectoryCreate {
            path: data_dir.clone(),
            source,
        })?;

        let service = Self {
            users: RecordStore::open(config.users_path())?,
            cars: RecordStore::open(config.cars_path())?,
            rentals: RecordStore::open(config.rentals_path())?,
            counter: SequenceCounter::new(config.counter_path()),
            admin: config.admin.clone(),
            rental_id_prefix: config.rental.id_prefix.clone(),
            max_users: config.max_users(),
            credentials,
            data_dir,
        };

        info!("Using data directory {}", service.data_dir.display());
        Ok(service)
    }

    /// Directory holding the record files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Summarize what is on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if a record file cannot be inspected or read.
    pub fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats {
            data_dir: self.data_dir.clone(),
            users: self.users.status()?,
            cars: self.cars.status()?,
            available_cars: self.list_available_cars()?.len(),
            rentals: self.rentals.status()?,
            registrations: self.counter.load(),
        })
    }
}

/// Record counts and file states for the `status` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Directory holding the record files.
    pub data_dir: PathBuf,
    /// State of the user file.
    pub users: FileStatus,
    /// State of the car file.
    pub cars: FileStatus,
    /// Cars currently available to rent.
    pub available_cars: usize,
    /// State of the rental file.
    pub rentals: FileStatus,
    /// Registrations performed so far.
    pub registrations: u64,
}

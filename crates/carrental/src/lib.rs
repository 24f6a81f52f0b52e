//! `carrental` - A console car rental record keeper
//!
//! Users, cars and rentals live in flat files of fixed-size binary records.
//! This library provides the record store, the entity layouts, rental
//! pricing, the command layer built on them and the interactive console.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod models;
pub mod pricing;
pub mod service;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use models::{Car, Rental, User};
pub use service::{Service, StoreStats};

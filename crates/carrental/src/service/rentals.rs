//! Renting cars and reading the rental log.

use std::collections::HashSet;

use chrono::Local;
use serde::Serialize;
use tracing::{error, info};

use crate::auth::CredentialCheck;
use crate::error::{Error, Result};
use crate::models::rental::TIMESTAMP_FORMAT;
use crate::models::{Car, Rental};
use crate::pricing::{calculate_rental_days, generate_unique_rental_id, rental_cost};

use super::Service;

/// How many random rental IDs to draw before giving up on finding a free one.
const MAX_ID_ATTEMPTS: usize = 64;

/// A priced rental that has not been committed yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalQuote {
    /// 1-based position of the car in the availability list.
    pub selection: usize,
    /// The car being rented.
    pub car: Car,
    /// Pickup date, `YYYY-MM-DD`.
    pub pickup_date: String,
    /// Return date, `YYYY-MM-DD`.
    pub return_date: String,
    /// Whole rental days.
    pub days: i64,
    /// Daily rate times days.
    pub total_cost: f64,
}

impl<C: CredentialCheck> Service<C> {
    /// Price renting the `selection`-th available car (1-based) between two
    /// `YYYY-MM-DD` dates. Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns a validation error when no car is available or the selection
    /// is 0 or out of range, a date error for bad dates, or a store error.
    pub fn quote_rental(
        &self,
        selection: usize,
        pickup_date: &str,
        return_date: &str,
    ) -> Result<RentalQuote> {
        let available = self.list_available_cars()?;
        if available.is_empty() {
            return Err(Error::validation("No cars are available for rent."));
        }
        if selection == 0 || selection > available.len() {
            return Err(Error::validation(format!(
                "Invalid selection. Choose a car between 1 and {}.",
                available.len()
            )));
        }

        let days = calculate_rental_days(pickup_date, return_date)?;
        let car = available
            .into_iter()
            .nth(selection - 1)
            .ok_or_else(|| Error::internal("available car vanished during selection"))?;

        Ok(RentalQuote {
            selection,
            total_cost: rental_cost(car.daily_rate, days),
            car,
            pickup_date: pickup_date.to_string(),
            return_date: return_date.to_string(),
            days,
        })
    }

    /// Commit a quoted rental for `username`.
    ///
    /// Marks the car unavailable (first available car with the quoted model
    /// name), then appends the rental with a fresh ID and the current local
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the car is no longer available, or a
    /// store error. If the rental cannot be appended after the car was
    /// marked unavailable, the car stays unavailable.
    pub fn confirm_rental(&self, username: &str, quote: &RentalQuote) -> Result<Rental> {
        let rental_id = self.next_rental_id()?;
        let (_, car) = self.cars.update_in_place(
            |c| c.model == quote.car.model && c.available,
            |c| c.available = false,
        )?;

        let rental = Rental {
            total_cost: rental_cost(car.daily_rate, quote.days),
            car,
            username: username.to_string(),
            pickup_date: quote.pickup_date.clone(),
            return_date: quote.return_date.clone(),
            selected_index: i32::try_from(quote.selection).unwrap_or(i32::MAX),
            rental_id,
            created_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
        .fit();

        if let Err(e) = self.rentals.append(&rental) {
            error!(
                "Car '{}' was marked unavailable but rental {} could not be recorded: {}",
                rental.car.model, rental.rental_id, e
            );
            return Err(e);
        }

        info!(
            "Rental {} recorded: '{}' to '{}' for {} day(s)",
            rental.rental_id, rental.car.model, rental.username, quote.days
        );
        Ok(rental)
    }

    /// Quote and confirm in one step.
    ///
    /// # Errors
    ///
    /// See [`quote_rental`](Self::quote_rental) and
    /// [`confirm_rental`](Self::confirm_rental).
    pub fn rent_car(
        &self,
        username: &str,
        selection: usize,
        pickup_date: &str,
        return_date: &str,
    ) -> Result<Rental> {
        let quote = self.quote_rental(selection, pickup_date, return_date)?;
        self.confirm_rental(username, &quote)
    }

    /// The rental log, optionally only the rentals of `username`.
    ///
    /// # Errors
    ///
    /// Returns a store error if the rental file cannot be read.
    pub fn rental_history(&self, username: Option<&str>) -> Result<Vec<Rental>> {
        let mut rentals = Vec::new();
        for rental in self.rentals.scan()? {
            let rental = rental?;
            if username.map_or(true, |name| rental.username == name) {
                rentals.push(rental);
            }
        }
        Ok(rentals)
    }

    fn next_rental_id(&self) -> Result<String> {
        let taken = self
            .rentals
            .scan()?
            .map(|r| r.map(|r| r.rental_id))
            .collect::<Result<HashSet<_>>>()?;

        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_unique_rental_id(&self.rental_id_prefix);
            if !taken.contains(&id) {
                return Ok(id);
            }
        }
        Err(Error::internal("could not draw an unused rental ID"))
    }
}

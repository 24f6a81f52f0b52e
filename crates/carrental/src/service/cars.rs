//! Car catalog management.

use tracing::info;

use crate::auth::CredentialCheck;
use crate::error::{Error, Result};
use crate::models::{Car, CarField, CarUpdate};

use super::Service;

impl<C: CredentialCheck> Service<C> {
    /// Add a car to the catalog.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty model name or a negative rate,
    /// or a store error if the car file cannot be written.
    pub fn add_car(&self, car: Car) -> Result<()> {
        let car = car.fit();
        if car.model.trim().is_empty() {
            return Err(Error::validation("Model name must not be empty"));
        }
        if !car.daily_rate.is_finite() || car.daily_rate < 0.0 {
            return Err(Error::validation("Rental rate must be a non-negative number"));
        }

        self.cars.append(&car)?;
        info!("Added car '{}'", car.model);
        Ok(())
    }

    /// All cars in file order.
    ///
    /// # Errors
    ///
    /// Returns a store error if the car file cannot be read.
    pub fn list_cars(&self) -> Result<Vec<Car>> {
        self.cars.load_all()
    }

    /// Cars that can be rented right now, in file order.
    ///
    /// # Errors
    ///
    /// Returns a store error if the car file cannot be read.
    pub fn list_available_cars(&self) -> Result<Vec<Car>> {
        let mut available = Vec::new();
        for car in self.cars.scan()? {
            let car = car?;
            if car.available {
                available.push(car);
            }
        }
        Ok(available)
    }

    /// Change one field of the first car whose model name is `model`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `value` does not parse for `field`,
    /// [`Error::NotFound`] if no car has that model name, or a store error.
    pub fn update_car(&self, model: &str, field: CarField, value: &str) -> Result<Car> {
        let update = CarUpdate::parse(field, value)?;
        let (_, car) = self
            .cars
            .update_in_place(|c| c.model == model, |c| update.apply(c))?;
        info!("Updated {} of car '{}'", field, model);
        Ok(car)
    }

    /// Remove the car at 0-based `index` in [`list_cars`](Self::list_cars)
    /// order, provided it is still the car named `expected_model`.
    ///
    /// The model name is captured when the car is picked from a listing, so a
    /// catalog that changed in between cannot cause the wrong car to go.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if there is no car at `index` or it has a
    /// different model name, or a store error.
    pub fn remove_car(&self, index: usize, expected_model: &str) -> Result<Car> {
        let car = match self.cars.scan()?.nth(index).transpose()? {
            Some(car) if car.model == expected_model => car,
            _ => return Err(Error::NotFound { entity: "car" }),
        };

        if !self.cars.delete_by_index(index)? {
            return Err(Error::NotFound { entity: "car" });
        }
        info!("Removed car '{}'", car.model);
        Ok(car)
    }
}

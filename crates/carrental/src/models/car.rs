//! Catalog cars.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::store::codec::truncate;
use crate::store::{FieldReader, FieldWriter, FixedRecord};

/// Width of the model name field in bytes.
pub const MODEL_WIDTH: usize = 30;
/// Width of the company field in bytes.
pub const COMPANY_WIDTH: usize = 30;
/// Width of the color field in bytes.
pub const COLOR_WIDTH: usize = 20;

/// A rentable car.
///
/// `available` is false while the car is out on a rental. The model name is
/// used as the lookup key but is not required to be unique; lookups take the
/// first match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    /// Model name.
    pub model: String,
    /// Manufacturer.
    pub company: String,
    /// Model year.
    pub year: i32,
    /// Rental price per day.
    pub daily_rate: f64,
    /// Passenger capacity.
    pub capacity: i32,
    /// Fuel efficiency (km per litre).
    pub fuel_efficiency: f64,
    /// Body color.
    pub color: String,
    /// Whether the car can be rented.
    pub available: bool,
}

impl Car {
    /// Create an available car, truncating text fields to their stored width.
    #[must_use]
    pub fn new(
        model: &str,
        company: &str,
        year: i32,
        daily_rate: f64,
        capacity: i32,
        fuel_efficiency: f64,
        color: &str,
    ) -> Self {
        Self {
            model: model.to_string(),
            company: company.to_string(),
            year,
            daily_rate,
            capacity,
            fuel_efficiency,
            color: color.to_string(),
            available: true,
        }
        .fit()
    }

    /// Truncate text fields to what the record file can hold.
    #[must_use]
    pub fn fit(mut self) -> Self {
        self.model = truncate(&self.model, MODEL_WIDTH).to_string();
        self.company = truncate(&self.company, COMPANY_WIDTH).to_string();
        self.color = truncate(&self.color, COLOR_WIDTH).to_string();
        self
    }
}

impl FixedRecord for Car {
    const KIND: &'static str = "car";
    const SIZE: usize = MODEL_WIDTH + COMPANY_WIDTH + 4 + 8 + 4 + 8 + COLOR_WIDTH + 1;

    fn encode(&self, out: &mut FieldWriter<'_>) {
        out.text(&self.model, MODEL_WIDTH);
        out.text(&self.company, COMPANY_WIDTH);
        out.i32(self.year);
        out.f64(self.daily_rate);
        out.i32(self.capacity);
        out.f64(self.fuel_efficiency);
        out.text(&self.color, COLOR_WIDTH);
        out.bool(self.available);
    }

    fn decode(input: &mut FieldReader<'_>) -> Self {
        Self {
            model: input.text(MODEL_WIDTH),
            company: input.text(COMPANY_WIDTH),
            year: input.i32(),
            daily_rate: input.f64(),
            capacity: input.i32(),
            fuel_efficiency: input.f64(),
            color: input.text(COLOR_WIDTH),
            available: input.bool(),
        }
    }
}

/// A car field that an administrator can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarField {
    /// Model name.
    Model,
    /// Manufacturer.
    Company,
    /// Model year.
    Year,
    /// Rental price per day.
    DailyRate,
    /// Passenger capacity.
    Capacity,
    /// Fuel efficiency.
    FuelEfficiency,
    /// Body color.
    Color,
    /// Availability flag.
    Availability,
}

impl CarField {
    /// Every field, in menu order.
    pub const ALL: [Self; 8] = [
        Self::Model,
        Self::Company,
        Self::Year,
        Self::DailyRate,
        Self::Capacity,
        Self::FuelEfficiency,
        Self::Color,
        Self::Availability,
    ];

    /// Map a 1-based menu choice to a field.
    #[must_use]
    pub fn from_menu(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }
}

impl std::fmt::Display for CarField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Model => write!(f, "Model Name"),
            Self::Company => write!(f, "Company"),
            Self::Year => write!(f, "Year"),
            Self::DailyRate => write!(f, "Rental Rate"),
            Self::Capacity => write!(f, "Capacity"),
            Self::FuelEfficiency => write!(f, "Fuel Efficiency"),
            Self::Color => write!(f, "Color"),
            Self::Availability => write!(f, "Availability"),
        }
    }
}

/// A parsed new value for one car field.
#[derive(Debug, Clone, PartialEq)]
pub enum CarUpdate {
    /// New model name.
    Model(String),
    /// New manufacturer.
    Company(String),
    /// New model year.
    Year(i32),
    /// New rental price per day.
    DailyRate(f64),
    /// New passenger capacity.
    Capacity(i32),
    /// New fuel efficiency.
    FuelEfficiency(f64),
    /// New color.
    Color(String),
    /// New availability flag.
    Availability(bool),
}

impl CarUpdate {
    /// Parse raw text for `field`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the text is not a valid value for the
    /// field.
    pub fn parse(field: CarField, value: &str) -> Result<Self> {
        let value = value.trim();
        Ok(match field {
            CarField::Model => Self::Model(non_empty(field, value)?),
            CarField::Company => Self::Company(non_empty(field, value)?),
            CarField::Color => Self::Color(non_empty(field, value)?),
            CarField::Year => Self::Year(parse_number(field, value)?),
            CarField::Capacity => {
                let capacity: i32 = parse_number(field, value)?;
                if capacity <= 0 {
                    return Err(Error::validation("Capacity must be at least 1"));
                }
                Self::Capacity(capacity)
            }
            CarField::DailyRate => Self::DailyRate(parse_amount(field, value)?),
            CarField::FuelEfficiency => Self::FuelEfficiency(parse_amount(field, value)?),
            CarField::Availability => Self::Availability(parse_flag(value)?),
        })
    }

    /// Write the new value into `car`.
    pub fn apply(&self, car: &mut Car) {
        match self {
            Self::Model(v) => car.model = truncate(v, MODEL_WIDTH).to_string(),
            Self::Company(v) => car.company = truncate(v, COMPANY_WIDTH).to_string(),
            Self::Year(v) => car.year = *v,
            Self::DailyRate(v) => car.daily_rate = *v,
            Self::Capacity(v) => car.capacity = *v,
            Self::FuelEfficiency(v) => car.fuel_efficiency = *v,
            Self::Color(v) => car.color = truncate(v, COLOR_WIDTH).to_string(),
            Self::Availability(v) => car.available = *v,
        }
    }
}

fn non_empty(field: CarField, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(Error::validation(format!("{field} must not be empty")));
    }
    Ok(value.to_string())
}

fn parse_number(field: CarField, value: &str) -> Result<i32> {
    value
        .parse()
        .map_err(|_| Error::validation(format!("{field} must be a whole number, got '{value}'")))
}

fn parse_amount(field: CarField, value: &str) -> Result<f64> {
    let amount: f64 = value
        .parse()
        .map_err(|_| Error::validation(format!("{field} must be a number, got '{value}'")))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(amount)
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" | "available" => Ok(true),
        "n" | "no" | "false" | "0" | "unavailable" => Ok(false),
        _ => Err(Error::validation(format!(
            "Availability must be yes or no, got '{value}'"
        ))),
    }
}

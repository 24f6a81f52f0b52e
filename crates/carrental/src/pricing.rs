//! Rental day counting, cost, and rental ID generation.

use chrono::NaiveDate;
use rand::Rng;

use crate::error::{Error, Result};

/// Lowest random suffix of a rental ID.
pub const RENTAL_ID_MIN: u32 = 10_000;
/// Highest random suffix of a rental ID.
pub const RENTAL_ID_MAX: u32 = 99_999;

/// Digits appended after the prefix of every rental ID.
pub const RENTAL_ID_DIGITS: usize = 5;

/// Parse a `YYYY-MM-DD` date.
///
/// The input must be exactly ten characters with hyphens at positions 4 and
/// 7, and must name a real calendar day.
///
/// # Errors
///
/// Returns [`Error::Date`] if the input is malformed.
pub fn parse_rental_date(input: &str) -> Result<NaiveDate> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(Error::date(input, "expected format YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| Error::date(input, format!("not a calendar date ({e})")))
}

/// Whole days from `pickup` to `return_date`.
///
/// Zero is a valid same-day rental.
///
/// # Errors
///
/// Returns [`Error::Date`] if either date is malformed or the return date is
/// before the pickup date.
pub fn calculate_rental_days(pickup: &str, return_date: &str) -> Result<i64> {
    let start = parse_rental_date(pickup)?;
    let end = parse_rental_date(return_date)?;

    let days = end.signed_duration_since(start).num_days();
    if days < 0 {
        return Err(Error::date(
            return_date,
            format!("return date is before pickup date {pickup}"),
        ));
    }
    Ok(days)
}

/// Total price of a rental.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rental_cost(daily_rate: f64, days: i64) -> f64 {
    daily_rate * days as f64
}

/// Draw a rental ID: `prefix` followed by a random five-digit number.
///
/// Uniqueness is only probabilistic; callers that need a guarantee must check
/// against existing rentals.
#[must_use]
pub fn generate_unique_rental_id(prefix: &str) -> String {
    generate_rental_id_with(&mut rand::thread_rng(), prefix)
}

/// Draw a rental ID from the given random source.
#[must_use]
pub fn generate_rental_id_with<R: Rng + ?Sized>(rng: &mut R, prefix: &str) -> String {
    let number = rng.gen_range(RENTAL_ID_MIN..=RENTAL_ID_MAX);
    format!("{prefix}{number}")
}

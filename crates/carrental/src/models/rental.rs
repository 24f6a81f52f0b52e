//! Rental log entries.

use serde::Serialize;

use crate::store::codec::truncate;
use crate::store::{FieldReader, FieldWriter, FixedRecord};

use super::car::Car;
use super::user::USERNAME_WIDTH;

/// Width of a `YYYY-MM-DD` date field in bytes.
pub const DATE_WIDTH: usize = 10;
/// Width of the rental ID field in bytes.
pub const RENTAL_ID_WIDTH: usize = 16;
/// Width of the creation timestamp field in bytes.
pub const TIMESTAMP_WIDTH: usize = 32;

/// `chrono` format used for [`Rental::created_at`].
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// One completed rental.
///
/// Holds a full copy of the car as it was when rented and the renter's
/// username, so history stays readable after either record changes or is
/// removed. Rentals are only ever appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rental {
    /// Snapshot of the rented car.
    pub car: Car,
    /// Username of the renter.
    pub username: String,
    /// Pickup date, `YYYY-MM-DD`.
    pub pickup_date: String,
    /// Return date, `YYYY-MM-DD`.
    pub return_date: String,
    /// Daily rate times rental days.
    pub total_cost: f64,
    /// 1-based position of the car in the availability list it was picked from.
    pub selected_index: i32,
    /// Short unique token identifying this rental.
    pub rental_id: String,
    /// Local time the rental was confirmed.
    pub created_at: String,
}

impl Rental {
    /// Truncate text fields to what the record file can hold.
    #[must_use]
    pub fn fit(mut self) -> Self {
        self.car = self.car.fit();
        self.username = truncate(&self.username, USERNAME_WIDTH).to_string();
        self.pickup_date = truncate(&self.pickup_date, DATE_WIDTH).to_string();
        self.return_date = truncate(&self.return_date, DATE_WIDTH).to_string();
        self.rental_id = truncate(&self.rental_id, RENTAL_ID_WIDTH).to_string();
        self.created_at = truncate(&self.created_at, TIMESTAMP_WIDTH).to_string();
        self
    }
}

impl FixedRecord for Rental {
    const KIND: &'static str = "rental";
    const SIZE: usize = Car::SIZE
        + USERNAME_WIDTH
        + DATE_WIDTH
        + DATE_WIDTH
        + 8
        + 4
        + RENTAL_ID_WIDTH
        + TIMESTAMP_WIDTH;

    fn encode(&self, out: &mut FieldWriter<'_>) {
        self.car.encode(out);
        out.text(&self.username, USERNAME_WIDTH);
        out.text(&self.pickup_date, DATE_WIDTH);
        out.text(&self.return_date, DATE_WIDTH);
        out.f64(self.total_cost);
        out.i32(self.selected_index);
        out.text(&self.rental_id, RENTAL_ID_WIDTH);
        out.text(&self.created_at, TIMESTAMP_WIDTH);
    }

    fn decode(input: &mut FieldReader<'_>) -> Self {
        Self {
            car: Car::decode(input),
            username: input.text(USERNAME_WIDTH),
            pickup_date: input.text(DATE_WIDTH),
            return_date: input.text(DATE_WIDTH),
            total_cost: input.f64(),
            selected_index: input.i32(),
            rental_id: input.text(RENTAL_ID_WIDTH),
            created_at: input.text(TIMESTAMP_WIDTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::codec::{decode_record, encode_record};

    fn sample() -> Rental {
        let mut car = Car::new("Swift", "Suzuki", 2019, 30.0, 4, 18.5, "Blue");
        car.available = false;
        Rental {
            car,
            username: "rohan".to_string(),
            pickup_date: "2024-01-01".to_string(),
            return_date: "2024-01-05".to_string(),
            total_cost: 120.0,
            selected_index: 2,
            rental_id: "CR48213".to_string(),
            created_at: "Mon Jan  1 09:30:00 2024".to_string(),
        }
    }

    #[test]
    fn test_record_size() {
        assert_eq!(Rental::SIZE, 205);
        assert_eq!(encode_record(&sample()).len(), Rental::SIZE);
    }

    #[test]
    fn test_car_snapshot_leads_the_record() {
        let rental = sample();
        let buf = encode_record(&rental);
        assert_eq!(&buf[..Car::SIZE], encode_record(&rental.car).as_slice());
    }

    #[test]
    fn test_round_trip() {
        let rental = sample();
        let decoded: Rental = decode_record(&encode_record(&rental));
        assert_eq!(decoded, rental);
    }

    #[test]
    fn test_fit_truncates() {
        let mut rental = sample();
        rental.rental_id = "X".repeat(40);
        let rental = rental.fit();
        assert_eq!(rental.rental_id.len(), RENTAL_ID_WIDTH);
    }
}

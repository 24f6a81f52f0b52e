//! Plain-text tables for cars, users and rentals.

use std::fmt::Write;

use crate::models::{Car, Rental, User};
use crate::service::RentalQuote;

/// Numbered car listing, one car per line.
#[must_use]
pub fn car_table(cars: &[Car]) -> String {
    let mut out = format!(
        "{:>3}  {:<20} {:<14} {:>4} {:>10} {:>5} {:>8} {:<10} {}\n",
        "#", "Model", "Company", "Year", "Rate/day", "Seats", "km/l", "Color", "Status"
    );
    for (i, car) in cars.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<20} {:<14} {:>4} {:>10.2} {:>5} {:>8.1} {:<10} {}",
            i + 1,
            car.model,
            car.company,
            car.year,
            car.daily_rate,
            car.capacity,
            car.fuel_efficiency,
            car.color,
            if car.available { "available" } else { "rented" }
        );
    }
    out
}

/// Numbered user listing. Passwords are never shown.
#[must_use]
pub fn user_table(users: &[User]) -> String {
    let mut out = format!(
        "{:>3}  {:<20} {:<20} {:<11} {:<20} {}\n",
        "#", "Username", "Full Name", "Contact", "Email", "Address"
    );
    for (i, user) in users.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<20} {:<20} {:<11} {:<20} {}",
            i + 1,
            user.username,
            user.fullname,
            user.phone,
            user.email,
            user.address
        );
    }
    out
}

/// Rental log listing.
#[must_use]
pub fn rental_table(rentals: &[Rental]) -> String {
    let mut out = format!(
        "{:<16} {:<20} {:<20} {:<10} {:<10} {:>10}  {}\n",
        "Rental ID", "User", "Car", "Pickup", "Return", "Cost", "Booked"
    );
    for rental in rentals {
        let _ = writeln!(
            out,
            "{:<16} {:<20} {:<20} {:<10} {:<10} {:>10.2}  {}",
            rental.rental_id,
            rental.username,
            rental.car.model,
            rental.pickup_date,
            rental.return_date,
            rental.total_cost,
            rental.created_at
        );
    }
    out
}

/// Every field of one user, for review before saving.
#[must_use]
pub fn user_details(user: &User) -> String {
    format!(
        "Full Name: {}\nAddress: {}\nContact: {}\nEmail: {}\nUsername: {}",
        user.fullname, user.address, user.phone, user.email, user.username
    )
}

/// Summary of a quote, shown before the rental is confirmed.
#[must_use]
pub fn quote_summary(quote: &RentalQuote) -> String {
    format!(
        "{} {} ({})\nFrom {} to {}: {} day(s) at {:.2} per day\nTotal cost: {:.2}",
        quote.car.company,
        quote.car.model,
        quote.car.year,
        quote.pickup_date,
        quote.return_date,
        quote.days,
        quote.car.daily_rate,
        quote.total_cost
    )
}

//! Entity schemas stored by carrental.
//!
//! Each entity is a fixed-layout record: text fields have a byte width and
//! values longer than that are truncated when the entity is built.

pub mod car;
pub mod rental;
pub mod user;

pub use car::{Car, CarField, CarUpdate};
pub use rental::Rental;
pub use user::{User, UserField};

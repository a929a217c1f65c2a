pub mod accounts;
pub mod models;
pub mod reservations;

#[cfg(test)]
mod testing;

pub use accounts::{AccountError, AccountManager};
pub use models::{AccountCreated, AvailabilityRow, RequestAnswer, RequestOutcome, ReservationReceipt};
pub use reservations::{BookingError, ReservationManager};

pub mod availability;
pub mod credentials;
pub mod models;
pub mod notify;
pub mod repository;

pub use availability::DateRange;
pub use models::{NewUser, Reservation, User};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("The start date must not be after the end date.")]
    InvalidDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Credential processing failed: {0}")]
    CredentialError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

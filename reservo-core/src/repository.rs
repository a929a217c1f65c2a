use async_trait::async_trait;

use crate::models::{Reservation, User};

pub type RepoError = Box<dyn std::error::Error + Send + Sync>;
pub type RepoResult<T> = Result<T, RepoError>;

/// Repository trait for the `users` record set
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Exact, case-sensitive lookup.
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Insert `user` unless a record with the same email exists.
    ///
    /// The existence check and the insert run as one unit of work. Returns
    /// `false` without writing when the email is taken.
    async fn insert_if_email_free(&self, user: &User) -> RepoResult<bool>;
}

/// Repository trait for the `reservations` record set
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Every reservation for one (item, location) pair, in insertion order.
    async fn list_for(&self, item: &str, location: &str) -> RepoResult<Vec<Reservation>>;

    /// Insert `reservation` unless it overlaps an existing one for the same
    /// (item, location), deciding with [`crate::availability::is_available`].
    ///
    /// Check and insert run in one transaction. Returns `false` without writing
    /// on conflict.
    async fn insert_if_available(&self, reservation: &Reservation) -> RepoResult<bool>;
}

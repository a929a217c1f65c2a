//! In-memory repositories and notifiers for manager tests.

use async_trait::async_trait;
use reservo_core::availability;
use reservo_core::models::{Reservation, User};
use reservo_core::notify::RequestNotifier;
use reservo_core::repository::{RepoResult, ReservationRepository, UserRepository};
use reservo_shared::models::events::ReservationRequested;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_if_email_free(&self, user: &User) -> RepoResult<bool> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Ok(false);
        }
        users.push(user.clone());
        Ok(true)
    }
}

#[derive(Default)]
pub struct MemoryReservationRepository {
    reservations: Mutex<Vec<Reservation>>,
}

impl MemoryReservationRepository {
    pub fn all(&self) -> Vec<Reservation> {
        self.reservations.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReservationRepository for MemoryReservationRepository {
    async fn list_for(&self, item: &str, location: &str) -> RepoResult<Vec<Reservation>> {
        let reservations = self.reservations.lock().unwrap();
        Ok(reservations
            .iter()
            .filter(|r| r.item == item && r.location == location)
            .cloned()
            .collect())
    }

    async fn insert_if_available(&self, reservation: &Reservation) -> RepoResult<bool> {
        let period = availability::DateRange::new(reservation.start_date, reservation.end_date)?;
        let mut reservations = self.reservations.lock().unwrap();

        let same_pair = reservations
            .iter()
            .filter(|r| r.item == reservation.item && r.location == reservation.location);
        if !availability::is_available(same_pair, &period) {
            return Ok(false);
        }

        reservations.push(reservation.clone());
        Ok(true)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<ReservationRequested>>,
}

#[async_trait]
impl RequestNotifier for RecordingNotifier {
    async fn dispatch(
        &self,
        request: &ReservationRequested,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.sent.lock().unwrap().push(request.clone());
        Ok(())
    }
}

use std::sync::Arc;

use reservo_booking::{AccountManager, ReservationManager};
use reservo_catalog::Catalog;
use reservo_core::notify::RequestNotifier;
use reservo_shared::Masked;
use reservo_store::{DbClient, StoreReservationRepository, StoreUserRepository};

use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub accounts: Arc<AccountManager>,
    pub reservations: Arc<ReservationManager>,
}

impl AppState {
    pub fn new(db: &DbClient, catalog: Catalog, notifier: Arc<dyn RequestNotifier>) -> Self {
        let users = Arc::new(StoreUserRepository::new(db.pool.clone()));
        let reservations = Arc::new(StoreReservationRepository::new(db.pool.clone()));

        Self {
            catalog: Arc::new(catalog),
            accounts: Arc::new(AccountManager::new(users)),
            reservations: Arc::new(ReservationManager::new(reservations, notifier)),
        }
    }

    /// Re-run login from submitted form fields; there is no session to consult.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &Masked<String>,
    ) -> Result<Option<String>, AppError> {
        Ok(self.accounts.login(email, password).await?)
    }
}

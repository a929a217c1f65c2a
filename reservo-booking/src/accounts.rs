use std::sync::Arc;

use reservo_core::credentials;
use reservo_core::models::{NewUser, User};
use reservo_core::repository::{RepoError, UserRepository};
use reservo_shared::Masked;
use tokio::task::spawn_blocking;
use tracing::info;

use crate::models::AccountCreated;

/// Creates accounts and checks credentials against the `users` record set.
pub struct AccountManager {
    users: Arc<dyn UserRepository>,
}

impl AccountManager {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Register a new account. The email must not be in use yet (exact match).
    #[tracing::instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn create_user(&self, new_user: NewUser) -> Result<AccountCreated, AccountError> {
        let NewUser { name, email, password } = new_user;

        if name.trim().is_empty() || email.trim().is_empty() || password.expose().is_empty() {
            return Err(AccountError::MissingFields);
        }

        // Skip the hashing cost for an obvious duplicate; the insert re-checks.
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AccountError::EmailTaken { email });
        }

        let password_hash = spawn_blocking(move || credentials::hash_password(password.expose()))
            .await??;

        let user = User { name, email, password_hash };
        if !self.users.insert_if_email_free(&user).await? {
            return Err(AccountError::EmailTaken { email: user.email });
        }

        info!("Created account for {}", user.name);
        Ok(AccountCreated { name: user.name })
    }

    /// The account's display name when `email` exists and `password` matches.
    ///
    /// An unknown email and a wrong password both yield `None`.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(
        &self,
        email: &str,
        password: &Masked<String>,
    ) -> Result<Option<String>, AccountError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Ok(None);
        };

        let candidate = password.expose().clone();
        let stored = user.password_hash.clone();
        let matched = spawn_blocking(move || credentials::verify_password(&candidate, &stored))
            .await??;

        Ok(matched.then_some(user.name))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("User creation failed. The email {email} is already taken.")]
    EmailTaken { email: String },

    #[error("User creation failed. Name, email and password are all required.")]
    MissingFields,

    #[error(transparent)]
    Credentials(#[from] reservo_core::CoreError),

    #[error("Account store failure: {0}")]
    Store(#[from] RepoError),

    #[error("Password task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

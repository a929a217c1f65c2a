use async_trait::async_trait;
use reservo_core::models::User;
use reservo_core::repository::{RepoResult, UserRepository};
use sqlx::SqlitePool;

pub struct StoreUserRepository {
    pool: SqlitePool,
}

impl StoreUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    name: String,
    email: String,
    password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            name: row.name,
            email: row.email,
            password_hash: row.password,
        }
    }
}

#[async_trait]
impl UserRepository for StoreUserRepository {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT name, email, password FROM users WHERE email = ? LIMIT 1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn insert_if_email_free(&self, user: &User) -> RepoResult<bool> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let taken: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = ? LIMIT 1")
            .bind(&user.email)
            .fetch_optional(&mut *tx)
            .await?;

        if taken.is_some() {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::DatabaseConfig;
    use crate::DbClient;
    use std::sync::Arc;

    async fn repository() -> StoreUserRepository {
        let db = DbClient::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        StoreUserRepository::new(db.pool)
    }

    fn user(name: &str, email: &str) -> User {
        User {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = repository().await;

        assert!(repo.insert_if_email_free(&user("Alice", "a@x.com")).await.unwrap());

        let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.name, "Alice");
        assert_eq!(found.password_hash, "$argon2id$stub");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_not_written() {
        let repo = repository().await;

        assert!(repo.insert_if_email_free(&user("Alice", "a@x.com")).await.unwrap());
        assert!(!repo.insert_if_email_free(&user("Mallory", "a@x.com")).await.unwrap());

        let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.name, "Alice");
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let repo = repository().await;
        repo.insert_if_email_free(&user("Alice", "a@x.com")).await.unwrap();

        assert!(repo.find_by_email("A@X.COM").await.unwrap().is_none());
        assert!(repo.insert_if_email_free(&user("Other", "A@X.COM")).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_contended_signups_resolve_to_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("reservations.db").display());
        let db = DbClient::new(&DatabaseConfig { url, max_connections: 5 }).await.unwrap();
        db.migrate().await.unwrap();
        let repo = Arc::new(StoreUserRepository::new(db.pool.clone()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.insert_if_email_free(&user(&format!("User{i}"), "a@x.com"))
                        .await
                        .map_err(|e| e.to_string())
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(true) => created += 1,
                Ok(false) => {}
                Err(e) => panic!("contended signup failed: {e}"),
            }
        }

        assert_eq!(created, 1);
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = 'a@x.com'")
            .fetch_one(&db.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
        db.close().await;
    }
}

use async_trait::async_trait;
use chrono::NaiveDate;
use reservo_core::availability;
use reservo_core::models::Reservation;
use reservo_core::repository::{RepoResult, ReservationRepository};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::debug;

pub struct StoreReservationRepository {
    pool: SqlitePool,
}

impl StoreReservationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ReservationRow {
    user: String,
    item: String,
    location: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Reservation {
            user: row.user,
            item: row.item,
            location: row.location,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}

const SELECT_FOR_PAIR: &str = r#"
    SELECT "user", item, location, start_date, end_date
    FROM reservations
    WHERE item = ? AND location = ?
    ORDER BY rowid
"#;

async fn fetch_for_pair(
    tx: &mut Transaction<'_, Sqlite>,
    item: &str,
    location: &str,
) -> Result<Vec<Reservation>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ReservationRow>(SELECT_FOR_PAIR)
        .bind(item)
        .bind(location)
        .fetch_all(&mut **tx)
        .await?;

    Ok(rows.into_iter().map(Reservation::from).collect())
}

#[async_trait]
impl ReservationRepository for StoreReservationRepository {
    async fn list_for(&self, item: &str, location: &str) -> RepoResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(SELECT_FOR_PAIR)
            .bind(item)
            .bind(location)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn insert_if_available(&self, reservation: &Reservation) -> RepoResult<bool> {
        let period = reservation_period(reservation)?;
        // IMMEDIATE takes the write lock up front so a concurrent writer waits on
        // busy_timeout and then reads the committed row instead of failing the upgrade.
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let existing = fetch_for_pair(&mut tx, &reservation.item, &reservation.location).await?;
        if !availability::is_available(&existing, &period) {
            debug!(
                "Rejecting {} at {} {}: {} existing bookings checked",
                reservation.item,
                reservation.location,
                period,
                existing.len()
            );
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            r#"INSERT INTO reservations ("user", item, location, start_date, end_date) VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(&reservation.user)
        .bind(&reservation.item)
        .bind(&reservation.location)
        .bind(reservation.start_date)
        .bind(reservation.end_date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}

fn reservation_period(reservation: &Reservation) -> RepoResult<availability::DateRange> {
    Ok(availability::DateRange::new(
        reservation.start_date,
        reservation.end_date,
    )?)
}

//! SQLite booking repository implementation.
//!
//! Follows the same patterns as `SqliteUserRepository`: raw queries, a
//! private Row struct, split reader/writer pool usage.

use farmgate_core::repository::booking::BookingRepository;
use farmgate_types::booking::{Booking, NewBooking};
use farmgate_types::error::RepositoryError;
use sqlx::Row;

use super::parse_datetime;
use super::pool::DatabasePool;

/// SQLite-backed implementation of `BookingRepository`.
pub struct SqliteBookingRepository {
    pool: DatabasePool,
}

impl SqliteBookingRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain Booking.
struct BookingRow {
    id: i64,
    user_id: Option<i64>,
    name: Option<String>,
    age: Option<i64>,
    address: Option<String>,
    farm_size: Option<f64>,
    equipment: Option<String>,
    service_date: Option<String>,
    status: String,
    created_at: String,
}

impl BookingRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("userId")?,
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            address: row.try_get("address")?,
            farm_size: row.try_get("farmSize")?,
            equipment: row.try_get("equipment")?,
            service_date: row.try_get("serviceDate")?,
            status: row.try_get("status")?,
            created_at: row.try_get("createdAt")?,
        })
    }

    fn into_booking(self) -> Result<Booking, RepositoryError> {
        Ok(Booking {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            age: self.age,
            address: self.address,
            farm_size: self.farm_size,
            equipment: self.equipment,
            service_date: self.service_date,
            status: self.status,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl BookingRepository for SqliteBookingRepository {
    async fn create(&self, booking: &NewBooking) -> Result<i64, RepositoryError> {
        // status and createdAt take their column defaults. userId is bound
        // as-is: the store never checks that the user exists.
        let result = sqlx::query(
            "INSERT INTO bookings (userId, name, age, address, farmSize, equipment, serviceDate)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(booking.user_id)
        .bind(&booking.name)
        .bind(booking.age)
        .bind(&booking.address)
        .bind(booking.farm_size)
        .bind(&booking.equipment)
        .bind(&booking.service_date)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<Booking>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM bookings WHERE userId = ? ORDER BY createdAt DESC")
            .bind(user_id)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut bookings = Vec::with_capacity(rows.len());
        for row in &rows {
            let booking_row =
                BookingRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            bookings.push(booking_row.into_booking()?);
        }

        Ok(bookings)
    }
}

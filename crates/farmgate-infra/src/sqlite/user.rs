//! SQLite user repository implementation.
//!
//! Implements `UserRepository` from `farmgate-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct, string timestamps
//! parsed into `DateTime<Utc>`.

use farmgate_core::repository::user::UserRepository;
use farmgate_types::error::RepositoryError;
use farmgate_types::user::{UpsertUser, User};
use sqlx::Row;

use super::parse_datetime;
use super::pool::DatabasePool;

/// SQLite-backed implementation of `UserRepository`.
pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain User.
struct UserRow {
    id: i64,
    telegram_id: Option<String>,
    name: String,
    phone: String,
    location: Option<String>,
    registered_at: String,
    updated_at: String,
}

impl UserRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            telegram_id: row.try_get("telegramId")?,
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            location: row.try_get("location")?,
            registered_at: row.try_get("registeredAt")?,
            updated_at: row.try_get("updatedAt")?,
        })
    }

    fn into_user(self) -> Result<User, RepositoryError> {
        Ok(User {
            id: self.id,
            telegram_id: self.telegram_id,
            name: self.name,
            phone: self.phone,
            location: self.location,
            registered_at: parse_datetime(&self.registered_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

impl UserRepository for SqliteUserRepository {
    async fn upsert(&self, user: &UpsertUser) -> Result<i64, RepositoryError> {
        // Full-row replace keyed on the UNIQUE telegramId. The replacement
        // insert takes the column defaults for registeredAt and updatedAt.
        let result = sqlx::query(
            "INSERT OR REPLACE INTO users (telegramId, name, phone, location)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&user.telegram_id)
        .bind(&user.name)
        .bind(&user.phone)
        .bind(&user.location)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn get_by_telegram_id(&self, telegram_id: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE telegramId = ?")
            .bind(telegram_id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let user_row =
                    UserRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(user_row.into_user()?))
            }
            None => Ok(None),
        }
    }
}

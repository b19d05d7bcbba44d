//! Idempotent schema initialization.
//!
//! The three tables are created with `CREATE TABLE IF NOT EXISTS`, so every
//! process start can run this against an existing database file without
//! touching stored rows. `DatabasePool::new` runs it on the writer pool
//! before the reader pool opens; a failure there is fatal to startup.
//!
//! Column names are camelCase to stay readable against database files
//! written by earlier deployments of this service.

use sqlx::SqlitePool;

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    telegramId TEXT UNIQUE,
    name TEXT NOT NULL,
    phone TEXT NOT NULL,
    location TEXT,
    registeredAt DATETIME DEFAULT CURRENT_TIMESTAMP,
    updatedAt DATETIME DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_BOOKINGS: &str = "CREATE TABLE IF NOT EXISTS bookings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    userId INTEGER,
    name TEXT,
    age INTEGER,
    address TEXT,
    farmSize REAL,
    equipment TEXT,
    serviceDate DATE,
    status TEXT DEFAULT 'pending',
    createdAt DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (userId) REFERENCES users(id)
)";

const CREATE_GUIDES: &str = "CREATE TABLE IF NOT EXISTS processingGuides (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    userId INTEGER,
    question TEXT,
    response TEXT,
    type TEXT,
    createdAt DATETIME DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (userId) REFERENCES users(id)
)";

/// Ensure the `users`, `bookings`, and `processingGuides` tables exist.
///
/// Safe to run on every start. The FOREIGN KEY clauses are declarative
/// only: the pool keeps the `foreign_keys` pragma off, so bookings and
/// guides may reference users that were never registered.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for stmt in [CREATE_USERS, CREATE_BOOKINGS, CREATE_GUIDES] {
        sqlx::query(stmt).execute(pool).await?;
    }
    tracing::debug!("database schema ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    // Single connection: every new connection to :memory: is a fresh,
    // empty database. Foreign keys stay off to match `DatabasePool`, so
    // bookings/guides may reference users that were never registered.
    async fn mem_pool() -> SqlitePool {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(false);
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_init_creates_all_tables() {
        let pool = mem_pool().await;
        init_schema(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        assert!(names.contains(&"users"), "users table missing");
        assert!(names.contains(&"bookings"), "bookings table missing");
        assert!(
            names.contains(&"processingGuides"),
            "processingGuides table missing"
        );
    }

    #[tokio::test]
    async fn test_init_is_idempotent_and_preserves_data() {
        let pool = mem_pool().await;
        init_schema(&pool).await.unwrap();

        sqlx::query("INSERT INTO users (telegramId, name, phone) VALUES ('u1', 'Ann', '555')")
            .execute(&pool)
            .await
            .unwrap();

        // Second run against a populated store: no error, no data loss.
        init_schema(&pool).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    async fn test_status_defaults_to_pending() {
        let pool = mem_pool().await;
        init_schema(&pool).await.unwrap();

        sqlx::query("INSERT INTO bookings (userId) VALUES (1)")
            .execute(&pool)
            .await
            .unwrap();

        let status: (String,) = sqlx::query_as("SELECT status FROM bookings WHERE id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(status.0, "pending");
    }
}

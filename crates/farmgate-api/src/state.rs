//! Application state wiring repositories to the HTTP layer.
//!
//! AppState pins the repository traits to the concrete SQLite
//! implementations and hands them out behind Arcs. The pool is constructed
//! once here and injected into every repository -- there is no module-level
//! database handle.

use std::path::PathBuf;
use std::sync::Arc;

use farmgate_infra::sqlite::booking::SqliteBookingRepository;
use farmgate_infra::sqlite::guide::SqliteGuideRepository;
use farmgate_infra::sqlite::pool::{DatabasePool, default_data_dir};
use farmgate_infra::sqlite::user::SqliteUserRepository;

/// Shared application state holding the repositories.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<SqliteUserRepository>,
    pub bookings: Arc<SqliteBookingRepository>,
    pub guides: Arc<SqliteGuideRepository>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: resolve the data directory, open
    /// the database, ensure the schema. A failure here is fatal -- the
    /// process must not begin serving without the tables.
    pub async fn init(data_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        tokio::fs::create_dir_all(&data_dir).await?;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("farmgate.db").display()
        );
        Self::with_database_url(&db_url).await
    }

    /// Wire state against an explicit database URL. Tests use this with a
    /// throwaway database file per test.
    pub async fn with_database_url(db_url: &str) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(db_url).await?;

        Ok(Self {
            users: Arc::new(SqliteUserRepository::new(db_pool.clone())),
            bookings: Arc::new(SqliteBookingRepository::new(db_pool.clone())),
            guides: Arc::new(SqliteGuideRepository::new(db_pool.clone())),
            db_pool,
        })
    }
}

//! SQLite storage layer.
//!
//! Repository implementations backed by SQLite with WAL mode and split
//! read/write connection pools.

use chrono::{DateTime, NaiveDateTime, Utc};
use farmgate_types::error::RepositoryError;

pub mod booking;
pub mod guide;
pub mod pool;
pub mod schema;
pub mod user;

/// Parse a timestamp written by `DEFAULT CURRENT_TIMESTAMP`
/// ("YYYY-MM-DD HH:MM:SS", UTC), with RFC 3339 as a fallback.
pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc)))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime '{s}': {e}")))
}

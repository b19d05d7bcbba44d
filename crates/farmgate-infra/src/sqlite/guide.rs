//! SQLite processing guide repository implementation.
//!
//! The question/response log. Same shape as the booking repository:
//! append-only inserts, per-user listing ordered most recent first.

use farmgate_core::repository::guide::GuideRepository;
use farmgate_types::error::RepositoryError;
use farmgate_types::guide::{NewGuide, ProcessingGuide};
use sqlx::Row;

use super::parse_datetime;
use super::pool::DatabasePool;

/// SQLite-backed implementation of `GuideRepository`.
pub struct SqliteGuideRepository {
    pool: DatabasePool,
}

impl SqliteGuideRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain ProcessingGuide.
struct GuideRow {
    id: i64,
    user_id: Option<i64>,
    question: Option<String>,
    response: Option<String>,
    kind: Option<String>,
    created_at: String,
}

impl GuideRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("userId")?,
            question: row.try_get("question")?,
            response: row.try_get("response")?,
            kind: row.try_get("type")?,
            created_at: row.try_get("createdAt")?,
        })
    }

    fn into_guide(self) -> Result<ProcessingGuide, RepositoryError> {
        Ok(ProcessingGuide {
            id: self.id,
            user_id: self.user_id,
            question: self.question,
            response: self.response,
            kind: self.kind,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl GuideRepository for SqliteGuideRepository {
    async fn create(&self, guide: &NewGuide) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO processingGuides (userId, question, response, type)
             VALUES (?, ?, ?, ?)",
        )
        .bind(guide.user_id)
        .bind(&guide.question)
        .bind(&guide.response)
        .bind(&guide.kind)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<ProcessingGuide>, RepositoryError> {
        let rows =
            sqlx::query("SELECT * FROM processingGuides WHERE userId = ? ORDER BY createdAt DESC")
                .bind(user_id)
                .fetch_all(&self.pool.reader)
                .await
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut guides = Vec::with_capacity(rows.len());
        for row in &rows {
            let guide_row =
                GuideRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            guides.push(guide_row.into_guide()?);
        }

        Ok(guides)
    }
}

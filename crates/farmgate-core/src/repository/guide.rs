//! Processing guide repository trait definition.

use farmgate_types::error::RepositoryError;
use farmgate_types::guide::{NewGuide, ProcessingGuide};

/// Repository trait for the question/response log.
///
/// Same append-only shape as the booking repository.
pub trait GuideRepository: Send + Sync {
    /// Append a question/response entry. Returns the new entry id.
    fn create(
        &self,
        guide: &NewGuide,
    ) -> impl std::future::Future<Output = Result<i64, RepositoryError>> + Send;

    /// All entries for a user, most recent first. Empty when none.
    fn list_for_user(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<ProcessingGuide>, RepositoryError>> + Send;
}

//! User repository trait definition.

use farmgate_types::error::RepositoryError;
use farmgate_types::user::{UpsertUser, User};

/// Repository trait for user persistence.
///
/// Implementations live in farmgate-infra (e.g., SqliteUserRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait UserRepository: Send + Sync {
    /// Insert or fully replace the user row keyed on the unique
    /// `telegram_id`. Attributes not present in the payload are cleared.
    /// Returns the surrogate id of the resulting row.
    fn upsert(
        &self,
        user: &UpsertUser,
    ) -> impl std::future::Future<Output = Result<i64, RepositoryError>> + Send;

    /// Get the user for a chat-platform id. `None` when never registered.
    fn get_by_telegram_id(
        &self,
        telegram_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;
}

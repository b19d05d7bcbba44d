//! Shared helpers for handler tests.

use crate::state::AppState;

/// State backed by a throwaway database file, isolated per test.
pub async fn test_state() -> AppState {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let url = format!("sqlite://{}?mode=rwc", db_path.display());
    // Leak tempdir so it lives for the test
    std::mem::forget(dir);
    AppState::with_database_url(&url).await.unwrap()
}

use thiserror::Error;

/// Errors from repository operations (used by trait definitions in farmgate-core).
///
/// Absence is not an error: lookups return `Option`/empty collections, and
/// this type covers only failures of the store itself.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),
}

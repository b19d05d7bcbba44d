//! Infrastructure layer for farmgate.
//!
//! Contains the SQLite implementations of the repository traits defined in
//! `farmgate-core`, the split read/write connection pool, and the idempotent
//! schema initializer.

pub mod sqlite;

//! Shared domain types for farmgate.
//!
//! This crate contains the three persisted entities -- User, Booking,
//! ProcessingGuide -- their write payloads, and the repository error type.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod booking;
pub mod error;
pub mod guide;
pub mod user;

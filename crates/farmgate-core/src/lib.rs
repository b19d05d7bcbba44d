//! Storage ports for farmgate.
//!
//! Defines the repository traits the infrastructure layer implements. The
//! HTTP layer only ever talks to the store through these traits.

pub mod repository;

//! Booking repository trait definition.

use farmgate_types::booking::{Booking, NewBooking};
use farmgate_types::error::RepositoryError;

/// Repository trait for booking persistence.
///
/// Bookings are append-only here: created once with status "pending",
/// listed per user, never updated or deleted.
pub trait BookingRepository: Send + Sync {
    /// Insert a new booking. The store fills in `status` and `created_at`;
    /// the referenced user is not checked for existence.
    fn create(
        &self,
        booking: &NewBooking,
    ) -> impl std::future::Future<Output = Result<i64, RepositoryError>> + Send;

    /// All bookings for a user, most recent first. Empty when none.
    fn list_for_user(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Booking>, RepositoryError>> + Send;
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mechanization service booking.
///
/// `user_id` is a logical reference to a [`crate::user::User`] row; the
/// store does not enforce that the user exists. All data columns are
/// nullable -- a booking stores exactly what the client sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub address: Option<String>,
    pub farm_size: Option<f64>,
    pub equipment: Option<String>,
    /// Calendar date as supplied by the client, stored verbatim.
    pub service_date: Option<String>,
    /// Inert lifecycle label. Defaults to "pending"; nothing transitions it.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Write payload for a new booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub address: Option<String>,
    pub farm_size: Option<f64>,
    pub equipment: Option<String>,
    pub service_date: Option<String>,
}
